/// Shared data structures for the project catalog
///
/// These records are loaded once from the bundled catalog and are only
/// ever borrowed afterwards by the view layer.

use serde::{Deserialize, Deserializer};

/// The fragment an embedded video URL carries in place of the watch query
const EMBED_FRAGMENT: &str = "embed/";
/// Replacement used when turning an embed URL into a watch URL
const WATCH_FRAGMENT: &str = "watch?v=";

/// A technology used by a project, shown as a tag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tech {
    /// Short glyph shown before the name (e.g. an emoji)
    pub icon: String,
    /// Display name (e.g. "Rust")
    pub name: String,
}

/// A single portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique lookup key carried in the `name` query parameter
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Long-form text; line breaks are preserved when rendered
    pub overview: String,
    /// Ordered image references, relative to the asset root (may be empty)
    #[serde(default)]
    pub images: Vec<String>,
    /// Ordered technology tags; duplicates are allowed
    #[serde(default)]
    pub techs: Vec<Tech>,
    #[serde(default, deserialize_with = "non_blank")]
    pub app_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub repository_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub video_url: Option<String>,
}

impl Project {
    /// Outbound target for the video row.
    ///
    /// Only the first `embed/` fragment is rewritten; the rest of the URL is
    /// passed through untouched.
    pub fn video_link(&self) -> Option<String> {
        self.video_url
            .as_deref()
            .map(|url| url.replacen(EMBED_FRAGMENT, WATCH_FRAGMENT, 1))
    }

    /// Accessible label for the slide at `index`
    pub fn image_alt(&self, index: usize) -> String {
        format!("{} image {}", self.title, index + 1)
    }
}

/// Treat `null`, `""` and whitespace-only strings as an absent URL
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_json(extra: &str) -> String {
        format!(
            r#"{{
                "slug": "mira",
                "title": "Mira",
                "category": "Web App",
                "description": "Study planner",
                "overview": "Line one\nLine two"{extra}
            }}"#
        )
    }

    #[test]
    fn test_missing_optional_fields_are_absent() {
        let project: Project = serde_json::from_str(&project_json("")).unwrap();

        assert!(project.images.is_empty());
        assert!(project.techs.is_empty());
        assert_eq!(project.app_url, None);
        assert_eq!(project.repository_url, None);
        assert_eq!(project.video_url, None);
    }

    #[test]
    fn test_blank_urls_are_absent() {
        let json = project_json(r#", "appUrl": "", "repositoryUrl": "   ", "videoUrl": null"#);
        let project: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(project.app_url, None);
        assert_eq!(project.repository_url, None);
        assert_eq!(project.video_url, None);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = project_json(
            r#", "appUrl": "https://mira.app", "repositoryUrl": "https://github.com/m/mira",
               "techs": [{"icon": "🦀", "name": "Rust"}, {"icon": "🦀", "name": "Rust"}]"#,
        );
        let project: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(project.app_url.as_deref(), Some("https://mira.app"));
        assert_eq!(project.repository_url.as_deref(), Some("https://github.com/m/mira"));
        // Duplicates survive
        assert_eq!(project.techs.len(), 2);
        assert_eq!(project.techs[0], project.techs[1]);
    }

    #[test]
    fn test_video_link_rewrites_embed() {
        let json = project_json(r#", "videoUrl": "https://example.com/embed/abc123""#);
        let project: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(
            project.video_link().as_deref(),
            Some("https://example.com/watch?v=abc123")
        );
    }

    #[test]
    fn test_video_link_rewrites_first_occurrence_only() {
        let json = project_json(r#", "videoUrl": "https://yt.com/embed/embed/x""#);
        let project: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(
            project.video_link().as_deref(),
            Some("https://yt.com/watch?v=embed/x")
        );
    }

    #[test]
    fn test_video_link_without_fragment_is_unchanged() {
        let json = project_json(r#", "videoUrl": "https://vimeo.com/42""#);
        let project: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(project.video_link().as_deref(), Some("https://vimeo.com/42"));
    }

    #[test]
    fn test_image_alt_is_one_based() {
        let project: Project = serde_json::from_str(&project_json("")).unwrap();
        assert_eq!(project.image_alt(0), "Mira image 1");
        assert_eq!(project.image_alt(2), "Mira image 3");
    }
}

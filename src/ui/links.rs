/// Outbound link rows for a project
///
/// Rows exist only for URLs the project actually has. Every row opens in
/// the system browser, which gets the bare URL: no opener, no referrer.
use iced::widget::{button, column, container, text, Column};
use iced::{Element, Length};
use log::{error, info};

use crate::state::data::Project;
use crate::ui::page::{BOLD, MUTED};
use crate::Message;

/// Caption shown under the video row instead of the URL
const VIDEO_CAPTION: &str = "Watch on YouTube";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    LiveDemo,
    SourceCode,
    VideoDemo,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::LiveDemo => "Live Demo",
            LinkKind::SourceCode => "Source Code",
            LinkKind::VideoDemo => "Video Demo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub kind: LinkKind,
    /// Where the row points; already rewritten for video rows
    pub href: String,
    pub caption: String,
}

impl LinkRow {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// The "Project Links" panel. May hold zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkPanel {
    rows: Vec<LinkRow>,
}

impl LinkPanel {
    pub fn for_project(project: &Project) -> Self {
        let mut rows = Vec::with_capacity(3);

        if let Some(url) = &project.app_url {
            rows.push(LinkRow {
                kind: LinkKind::LiveDemo,
                href: url.clone(),
                caption: url.clone(),
            });
        }
        if let Some(url) = &project.repository_url {
            rows.push(LinkRow {
                kind: LinkKind::SourceCode,
                href: url.clone(),
                caption: url.clone(),
            });
        }
        if let Some(href) = project.video_link() {
            rows.push(LinkRow {
                kind: LinkKind::VideoDemo,
                href,
                caption: VIDEO_CAPTION.to_string(),
            });
        }

        LinkPanel { rows }
    }

    pub fn rows(&self) -> &[LinkRow] {
        &self.rows
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.rows.iter().map(LinkRow::label).collect()
    }

    /// Consume the panel into its widget tree; a panel with no rows still
    /// renders as an empty column inside its card.
    pub fn into_view<'a>(self) -> Element<'a, Message> {
        Column::with_children(self.rows.into_iter().map(row_view))
            .spacing(16)
            .width(Length::Fill)
            .into()
    }
}

fn row_view<'a>(row: LinkRow) -> Element<'a, Message> {
    let body = column![
        text(row.label()).font(BOLD),
        text(row.caption).size(13).color(MUTED),
    ]
    .spacing(4);

    button(container(body).width(Length::Fill).padding(8))
        .on_press(Message::OpenLink(row.href))
        .style(button::secondary)
        .width(Length::Fill)
        .into()
}

/// Hand a link to the system browser in a fresh, detached process
pub fn open_external(href: &str) {
    match open::that_detached(href) {
        Ok(()) => info!("event=link_open module=links status=ok href={href}"),
        Err(err) => error!("event=link_open module=links status=error href={href} error={err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(app: Option<&str>, repo: Option<&str>, video: Option<&str>) -> Project {
        Project {
            slug: "mira".to_string(),
            title: "Mira".to_string(),
            category: "Web".to_string(),
            description: String::new(),
            overview: String::new(),
            images: Vec::new(),
            techs: Vec::new(),
            app_url: app.map(str::to_string),
            repository_url: repo.map(str::to_string),
            video_url: video.map(str::to_string),
        }
    }

    #[test]
    fn test_all_rows_in_fixed_order() {
        let panel = LinkPanel::for_project(&project(
            Some("https://mira.app"),
            Some("https://github.com/m/mira"),
            Some("https://youtube.com/embed/xyz"),
        ));

        assert_eq!(panel.labels(), ["Live Demo", "Source Code", "Video Demo"]);
        assert_eq!(panel.rows()[0].href, "https://mira.app");
        assert_eq!(panel.rows()[0].caption, "https://mira.app");
        assert_eq!(panel.rows()[1].href, "https://github.com/m/mira");
    }

    #[test]
    fn test_only_repository() {
        let panel = LinkPanel::for_project(&project(None, Some("https://github.com/m/mira"), None));

        assert_eq!(panel.labels(), ["Source Code"]);
        assert_eq!(panel.rows()[0].kind, LinkKind::SourceCode);
    }

    #[test]
    fn test_no_links_empty_panel() {
        let panel = LinkPanel::for_project(&project(None, None, None));
        assert!(panel.rows().is_empty());
    }

    #[test]
    fn test_every_subset() {
        let app = "https://a.dev";
        let repo = "https://r.dev";
        let video = "https://v.dev/embed/1";

        for mask in 0u8..8 {
            let has_app = mask & 1 != 0;
            let has_repo = mask & 2 != 0;
            let has_video = mask & 4 != 0;
            let panel = LinkPanel::for_project(&project(
                has_app.then_some(app),
                has_repo.then_some(repo),
                has_video.then_some(video),
            ));

            let mut expected = Vec::new();
            if has_app {
                expected.push("Live Demo");
            }
            if has_repo {
                expected.push("Source Code");
            }
            if has_video {
                expected.push("Video Demo");
            }
            assert_eq!(panel.labels(), expected, "mask {mask:03b}");
        }
    }

    #[test]
    fn test_video_row_target_is_rewritten() {
        let panel =
            LinkPanel::for_project(&project(None, None, Some("https://example.com/embed/abc123")));

        let row = &panel.rows()[0];
        assert_eq!(row.label(), "Video Demo");
        assert_eq!(row.href, "https://example.com/watch?v=abc123");
        assert_eq!(row.caption, "Watch on YouTube");
    }
}

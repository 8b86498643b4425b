/// Page locations and the navigation parameter they carry
///
/// A location is a root-relative path with an optional query string,
/// for example `/project?name=mira`. Full URLs are accepted too; only the
/// path and query are used.

use log::warn;
use url::{form_urlencoded, Url};

/// Base that root-relative locations are resolved against
const BASE: &str = "folio://local/";
/// Path of the project detail page
const PROJECT_PATH: &str = "/project";
/// Query parameter holding the project slug
const NAME_PARAM: &str = "name";

/// A page the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The project listing root (`/`)
    Home,
    /// The project detail page; `name` is the raw navigation parameter
    Project { name: Option<String> },
}

impl Route {
    /// Parse a location typed in the address bar or passed on the command line.
    /// Unknown paths fall back to the listing root.
    pub fn parse(location: &str) -> Route {
        let url = match Url::parse(BASE).and_then(|base| base.join(location.trim())) {
            Ok(url) => url,
            Err(err) => {
                warn!("event=route_parse status=invalid location={location:?} error={err}");
                return Route::Home;
            }
        };

        match url.path().trim_end_matches('/') {
            "" => Route::Home,
            PROJECT_PATH => Route::Project {
                name: url
                    .query_pairs()
                    .find(|(key, _)| key == NAME_PARAM)
                    .map(|(_, value)| value.into_owned()),
            },
            other => {
                warn!("event=route_parse status=unknown_path path={other:?}");
                Route::Home
            }
        }
    }

    /// Location of the detail page for `slug`
    pub fn project_location(slug: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(slug.as_bytes()).collect();
        format!("{PROJECT_PATH}?{NAME_PARAM}={encoded}")
    }

    /// Canonical location string for this route
    pub fn to_location(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Project { name: Some(name) } => Self::project_location(name),
            Route::Project { name: None } => PROJECT_PATH.to_string(),
        }
    }

    /// The navigation parameter, if this route carries one
    pub fn name(&self) -> Option<&str> {
        match self {
            Route::Project { name } => name.as_deref(),
            Route::Home => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> Route {
        Route::Project { name: Some(name.to_string()) }
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("  /  "), Route::Home);
    }

    #[test]
    fn test_project_with_name() {
        assert_eq!(Route::parse("/project?name=mira"), project("mira"));
        assert_eq!(Route::parse("/project/?name=mira"), project("mira"));
        assert_eq!(Route::parse("project?name=mira"), project("mira"));
    }

    #[test]
    fn test_project_without_name() {
        assert_eq!(Route::parse("/project"), Route::Project { name: None });
        assert_eq!(Route::parse("/project?other=1"), Route::Project { name: None });
    }

    #[test]
    fn test_first_name_wins_and_is_decoded() {
        assert_eq!(Route::parse("/project?name=a&name=b"), project("a"));
        assert_eq!(Route::parse("/project?name=my%20app"), project("my app"));
        assert_eq!(Route::parse("/project?name=my+app"), project("my app"));
    }

    #[test]
    fn test_empty_name_is_present() {
        assert_eq!(Route::parse("/project?name="), project(""));
    }

    #[test]
    fn test_full_url_uses_path_and_query() {
        assert_eq!(
            Route::parse("https://micah.dev/project?name=mira#top"),
            project("mira")
        );
    }

    #[test]
    fn test_unknown_path_falls_back_home() {
        assert_eq!(Route::parse("/blog/post"), Route::Home);
    }

    #[test]
    fn test_project_location_encodes_slug() {
        assert_eq!(Route::project_location("mira"), "/project?name=mira");
        assert_eq!(Route::project_location("a b&c"), "/project?name=a+b%26c");
        assert_eq!(Route::parse(&Route::project_location("a b&c")), project("a b&c"));
    }

    #[test]
    fn test_to_location() {
        assert_eq!(Route::Home.to_location(), "/");
        assert_eq!(Route::Project { name: None }.to_location(), "/project");
        assert_eq!(project("mira").to_location(), "/project?name=mira");
    }
}

use log::info;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use thiserror::Error;

use super::data::Project;

/// Catalog bundled into the binary at build time
const BUNDLED_CATALOG: &str = include_str!("../../assets/projects.json");

static BUILTIN: OnceCell<Catalog> = OnceCell::new();

/// Reasons a catalog can be rejected at load time
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("slug `{0}` is not lowercase kebab-case")]
    InvalidSlug(String),
    #[error("slug `{0}` is used by more than one project")]
    DuplicateSlug(String),
}

/// The Catalog is the immutable table of every known project.
/// It is built once at startup and only read afterwards.
pub struct Catalog {
    projects: Vec<Project>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed or duplicate slugs
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(projects.len());

        for (index, project) in projects.iter().enumerate() {
            if !is_valid_slug(&project.slug) {
                return Err(CatalogError::InvalidSlug(project.slug.clone()));
            }
            if by_slug.insert(project.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()));
            }
        }

        Ok(Catalog { projects, by_slug })
    }

    /// Parse a JSON array of projects and validate it
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// Look up a project by slug.
    /// Pure: the same slug always yields the same answer for the catalog's lifetime.
    pub fn resolve(&self, slug: &str) -> Option<&Project> {
        self.by_slug.get(slug).map(|&index| &self.projects[index])
    }

    /// All projects in catalog file order
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("projects", &self.projects.len())
            .finish()
    }
}

/// The process-wide catalog shipped with the application.
///
/// Parsed and validated on first use; every later call returns the same
/// shared value.
pub fn builtin() -> Result<&'static Catalog, CatalogError> {
    BUILTIN.get_or_try_init(|| {
        let catalog = Catalog::from_json(BUNDLED_CATALOG)?;
        info!("event=catalog_loaded module=catalog status=ok projects={}", catalog.len());
        Ok(catalog)
    })
}

/// Slugs are lowercase kebab-case: `[a-z0-9-]`, no leading, trailing or doubled dash
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

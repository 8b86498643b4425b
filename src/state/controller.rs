/// View state for the project detail page
///
/// The controller turns successive observations of the `name` navigation
/// parameter into one of three states. Resolution is a synchronous catalog
/// lookup, so every transition completes within a single `update` pass.

use log::{debug, info};

use super::catalog::Catalog;
use super::data::Project;

/// What the detail page currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'c> {
    /// Parameter not known yet; render the skeleton
    Pending,
    /// Parameter resolved to a catalog entry
    Found(&'c Project),
    /// No entry for the parameter, or no parameter at all once settled
    NotFound,
}

/// Drives the detail page state machine for one mounted page
#[derive(Debug)]
pub struct ViewController<'c> {
    catalog: &'c Catalog,
    /// Last non-absent parameter value that was resolved
    observed: Option<String>,
    state: ViewState<'c>,
}

impl<'c> ViewController<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        ViewController {
            catalog,
            observed: None,
            state: ViewState::Pending,
        }
    }

    pub fn state(&self) -> ViewState<'c> {
        self.state
    }

    /// Record an observation of the navigation parameter.
    ///
    /// Returns `true` when the visible state changed. An absent parameter
    /// never moves the controller on its own, and a value equal to the one
    /// already resolved is a no-op.
    pub fn observe(&mut self, name: Option<&str>) -> bool {
        let Some(slug) = name else {
            debug!("event=observe module=controller param=absent state={}", self.label());
            return false;
        };

        if self.observed.as_deref() == Some(slug) {
            return false;
        }

        let next = match self.catalog.resolve(slug) {
            Some(project) => ViewState::Found(project),
            None => ViewState::NotFound,
        };
        self.observed = Some(slug.to_string());
        self.transition(next)
    }

    /// The runtime has finished delivering the navigation.
    ///
    /// A page that is still waiting for a parameter at this point will never
    /// get one, so it becomes `NotFound`.
    pub fn settle(&mut self) -> bool {
        if self.state == ViewState::Pending && self.observed.is_none() {
            return self.transition(ViewState::NotFound);
        }
        false
    }

    fn transition(&mut self, next: ViewState<'c>) -> bool {
        if next == self.state {
            return false;
        }
        let from = self.label();
        self.state = next;
        info!(
            "event=view_transition module=controller from={} to={} param={:?}",
            from,
            self.label(),
            self.observed.as_deref().unwrap_or("")
        );
        true
    }

    fn label(&self) -> &'static str {
        match self.state {
            ViewState::Pending => "pending",
            ViewState::Found(_) => "found",
            ViewState::NotFound => "not_found",
        }
    }
}

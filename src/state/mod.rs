/// State management module
///
/// This module handles everything that is not drawing:
/// - The project records (data.rs)
/// - The bundled, read-only catalog and slug lookup (catalog.rs)
/// - Locations and the `name` navigation parameter (route.rs)
/// - The detail page state machine (controller.rs)

pub mod catalog;
pub mod controller;
pub mod data;
pub mod route;

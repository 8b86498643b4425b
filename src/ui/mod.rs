/// Widget trees for every page
///
/// - Single-slide image viewer (carousel.rs)
/// - Outbound link rows (links.rs)
/// - Page layouts and shared styling (page.rs)

pub mod carousel;
pub mod links;
pub mod page;

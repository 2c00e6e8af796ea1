// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - SearchPage: image search with paginated gallery and lightbox

pub mod search;

// Re-export page components
pub use search::SearchPage;

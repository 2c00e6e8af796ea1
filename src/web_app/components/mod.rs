// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, notification toasts)
// - search.rs: The search form
// - gallery.rs: Photo cards, gallery grid, load-more button, lightbox

pub mod common;
pub mod gallery;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use gallery::*;
pub use search::*;

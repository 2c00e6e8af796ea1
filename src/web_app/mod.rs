// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains all the components and logic for the full-stack
// image search gallery built with the Leptos framework.
//
// Architecture:
// - model/: Shared data types (Pixabay wire format, cards, notifications)
// - controller/: Search session, pagination and lightbox state (no DOM)
// - server_fns/: Server function declarations (both client and server)
// - api/: Pixabay HTTP client and configuration (native only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

pub mod controller;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Pixabay client and configuration (native only, also used by the probe CLI)
#[cfg(feature = "api-tools")]
pub mod api;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;

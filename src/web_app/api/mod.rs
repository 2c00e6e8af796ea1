// web_app/api/mod.rs - Pixabay access for the server and the probe CLI
//
// - config.rs: credentials and endpoint read from the environment
// - pixabay.rs: request building and the HTTP call
// - client.rs: process-wide client used by server functions

pub mod client;
pub mod config;
pub mod pixabay;

pub use config::{ConfigError, PixabayConfig};
pub use pixabay::{PixabayClient, PixabayError};

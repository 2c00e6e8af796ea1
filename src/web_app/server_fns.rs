// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// The Pixabay key lives on the server only; the browser sees hits, not the key.

use leptos::prelude::*;
use crate::web_app::controller::SearchError;
use crate::web_app::model::SearchResponse;

/// Fetch one page of Pixabay hits for `query`
#[server(FetchImages, "/api")]
pub async fn fetch_images(query: String, page: u32) -> Result<SearchResponse, ServerFnError> {
    use crate::web_app::api::client;

    tracing::info!("Image search request: query='{}', page={}", query, page);

    let client = client::get_client()
        .ok_or_else(|| ServerFnError::new("Pixabay client not available"))?;

    let result = client.search(&query, page).await;

    match &result {
        Ok(res) => tracing::info!("Image search successful: {} hits of {}", res.hits.len(), res.total_hits),
        Err(e) => tracing::error!("Image search failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Image search failed: {}", e)))
}

impl From<ServerFnError> for SearchError {
    fn from(e: ServerFnError) -> Self {
        SearchError::Transport(e.to_string())
    }
}

/// Browser-side source backed by the `fetch_images` server function
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnSource;

impl crate::web_app::controller::ImageSource for ServerFnSource {
    async fn fetch(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError> {
        Ok(fetch_images(query.to_string(), page).await?)
    }
}

// web_app/api/pixabay.rs - Pixabay search client
//
// One GET per page. No retries, no timeout beyond reqwest's defaults, no
// caching: every failure is surfaced to the caller as a `PixabayError`.

use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::config::PixabayConfig;
use crate::web_app::controller::{ImageSource, SearchError};
use crate::web_app::model::{SearchResponse, IMAGE_TYPE, ORIENTATION, PER_PAGE, SAFE_SEARCH};

#[derive(Debug, Error)]
pub enum PixabayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Pixabay returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<PixabayError> for SearchError {
    fn from(e: PixabayError) -> Self {
        SearchError::Transport(e.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct PixabayClient {
    http: Client,
    config: PixabayConfig,
}

impl PixabayClient {
    pub fn new(config: PixabayConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: PixabayConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &PixabayConfig {
        &self.config
    }

    /// Full request URL for `query` at 1-based `page`
    ///
    /// Query parameters are URL-encoded by the serializer.
    pub fn request_url(&self, query: &str, page: u32) -> Url {
        let mut url = self.config.base_url.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key)
            .append_pair("q", query)
            .append_pair("image_type", IMAGE_TYPE)
            .append_pair("orientation", ORIENTATION)
            .append_pair("safesearch", if SAFE_SEARCH { "true" } else { "false" })
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &PER_PAGE.to_string());
        url
    }

    /// Fetch one page of hits
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchResponse, PixabayError> {
        let url = self.request_url(query, page);
        tracing::info!(query, page, "requesting Pixabay page");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Pixabay request rejected");
            return Err(PixabayError::Status {
                status: status.as_u16(),
                body: truncate(&body, 200),
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        tracing::info!(
            query,
            page,
            total_hits = parsed.total_hits,
            hits = parsed.hits.len(),
            "Pixabay page received"
        );
        Ok(parsed)
    }
}

impl ImageSource for PixabayClient {
    async fn fetch(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError> {
        Ok(self.search(query, page).await?)
    }
}

fn truncate(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

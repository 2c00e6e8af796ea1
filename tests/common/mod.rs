// common/mod.rs - Shared test utilities
//
// This module provides:
// 1. An in-memory ImageSource that replays scripted responses
// 2. mockito helpers standing in for the Pixabay endpoint
// 3. Client construction pointed at the mock server

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use pixabay_gallery::web_app::controller::{ImageSource, SearchError};
use pixabay_gallery::web_app::model::SearchResponse;

/// Replays queued results in order and records every (query, page) asked for
#[derive(Default)]
pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<SearchResponse, SearchError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, result: Result<SearchResponse, SearchError>) -> Self {
        self.results.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageSource for ScriptedSource {
    async fn fetch(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SearchError::Transport("no scripted response".to_string())))
    }
}

#[cfg(feature = "api-tools")]
pub mod mock_api {
    use mockito::{Matcher, Mock, Server, ServerGuard};
    use pixabay_gallery::web_app::api::{PixabayClient, PixabayConfig};

    pub const TEST_KEY: &str = "test-key";
    pub const API_PATH: &str = "/api/";

    /// Sets up a mock HTTP server standing in for Pixabay
    pub async fn setup_mock_server() -> ServerGuard {
        Server::new_async().await
    }

    /// Client pointed at the mock server's /api/ path
    pub fn client_for(server: &ServerGuard) -> PixabayClient {
        let base = format!("{}{}", server.url(), API_PATH);
        PixabayClient::new(PixabayConfig::new(TEST_KEY, &base).expect("valid mock url"))
    }

    /// Matcher for every parameter the gallery sends
    pub fn search_params(query: &str, page: u32) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), TEST_KEY.into()),
            Matcher::UrlEncoded("q".into(), query.into()),
            Matcher::UrlEncoded("image_type".into(), "photo".into()),
            Matcher::UrlEncoded("orientation".into(), "horizontal".into()),
            Matcher::UrlEncoded("safesearch".into(), "true".into()),
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("per_page".into(), "40".into()),
        ])
    }

    /// Creates a mock search endpoint returning a JSON body
    pub async fn create_search_mock(server: &mut Server, query: &str, page: u32, body: &str) -> Mock {
        server
            .mock("GET", API_PATH)
            .match_query(search_params(query, page))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Creates a mock endpoint that returns an error status
    pub async fn create_error_mock(server: &mut Server, status: usize, body: &str) -> Mock {
        server
            .mock("GET", API_PATH)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }
}

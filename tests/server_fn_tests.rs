// tests/server_fn_tests.rs
// Test suite for Leptos server functions
//
// Run with: cargo test --test server_fn_tests --features ssr

mod common;

use common::mock_api::{client_for, create_search_mock, setup_mock_server};
use pixabay_gallery::fixtures;
use pixabay_gallery::web_app::api::client;
use pixabay_gallery::web_app::server_fns::fetch_images;

#[tokio::test]
async fn test_fetch_images_uses_configured_client() -> anyhow::Result<()> {
    let mut server = setup_mock_server().await;
    let mock = create_search_mock(&mut server, "mountains", 1, &fixtures::response_json(80, 40)).await;
    client::set_test_client(client_for(&server));

    let response = fetch_images("mountains".to_string(), 1)
        .await
        .map_err(|e| anyhow::anyhow!("fetch_images failed: {}", e))?;

    mock.assert_async().await;
    assert_eq!(response.total_hits, 80);
    assert_eq!(response.hits.len(), 40);

    // Unmatched upstream request surfaces as a server function error
    let err = fetch_images("mountains".to_string(), 7).await.unwrap_err();
    assert!(err.to_string().contains("Image search failed"));

    Ok(())
}

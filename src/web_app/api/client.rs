// web_app/api/client.rs - Process-wide Pixabay client
//
// The server binary installs one client at startup; server functions look it
// up here. Tests install an override pointing at a mock server.

use std::sync::Mutex;
use std::sync::OnceLock;

use super::pixabay::PixabayClient;

static CLIENT: OnceLock<PixabayClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<PixabayClient>> = Mutex::new(None);

/// Initialize the global Pixabay client
pub fn init_client(client: PixabayClient) {
    tracing::info!(base_url = %client.config().base_url, "Initializing global Pixabay client");
    if CLIENT.set(client).is_err() {
        tracing::warn!("Pixabay client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: PixabayClient) {
    let mut guard = TEST_CLIENT_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
    *guard = Some(client);
}

/// Get the global Pixabay client
pub fn get_client() -> Option<PixabayClient> {
    // Check for test override first
    {
        let guard = TEST_CLIENT_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global Pixabay client is empty!");
    }
    client
}

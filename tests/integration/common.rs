// Common utilities for integration tests

use builtwith_client::prelude::*;
use mockito::ServerGuard;

pub const TEST_KEY: &str = "test-key";

/// Configuration pointing at the mock server
pub fn mock_config(server: &ServerGuard) -> Config {
    setup_logger();
    Config::with_api_key(TEST_KEY).with_base_url(server.url())
}

pub fn lists_client(server: &ServerGuard) -> ListsClient {
    ListsClient::new(mock_config(server)).expect("failed to build lists client")
}

pub fn keywords_client(server: &ServerGuard) -> KeywordsClient {
    KeywordsClient::new(mock_config(server)).expect("failed to build keywords client")
}

/// Lists API page body with one result per domain
pub fn page_body(next_offset: &str, domains: &[&str]) -> String {
    let results: Vec<Value> = domains
        .iter()
        .map(|d| serde_json::json!({"D": d, "LOS": [d], "FD": 1609459200, "LD": 1704067200}))
        .collect();
    serde_json::json!({"NextOffset": next_offset, "Results": results}).to_string()
}

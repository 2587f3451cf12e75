/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ces-sdk tests

#![allow(dead_code)]

use ces_sdk::{CesClient, ClientConfig, Uuid};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "your_key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> CesClient {
    CesClient::with_config(TEST_API_KEY, ClientConfig::with_base_url(server.uri()))
        .expect("client init")
}

/// Fixed identifier for assertions
pub fn test_id(n: u8) -> Uuid {
    Uuid::from_bytes([n; 16])
}

pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

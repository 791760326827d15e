//! Helpers shared by the integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::MockServer;
// self
use aorta_client::{api::ApiClient, config::ApiConfig};
#[cfg(feature = "blocking")] use aorta_client::blocking::BlockingApiClient;

pub const ACCESS_TOKEN: &str = "opaque-access-token";
pub const BEARER: &str = "Bearer opaque-access-token";

pub fn config_for(server: &MockServer) -> ApiConfig {
	ApiConfig::new(&server.base_url()).expect("Mock server base URL should be a valid config.")
}

pub fn client_for(server: &MockServer) -> ApiClient {
	ApiClient::new(config_for(server))
}

#[cfg(feature = "blocking")]
pub fn blocking_client_for(server: &MockServer) -> BlockingApiClient {
	BlockingApiClient::new(config_for(server))
}

/// Client pointed at a local port nothing listens on.
pub fn unreachable_client() -> ApiClient {
	ApiClient::new(
		ApiConfig::new("http://127.0.0.1:1").expect("Loopback base URL should be a valid config."),
	)
}

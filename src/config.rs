//! API location and endpoint URL construction.
//!
//! [`ApiConfig`] holds the validated base URL every call is issued against. Endpoint URLs are
//! built by appending a fixed path to the base, so a base that carries a path prefix (for
//! example a reverse proxy mount point) keeps that prefix.

// self
use crate::{_prelude::*, error::ConfigError, obs::CallKind};

/// Default API host used when no base URL is configured.
pub const BASE_URL: &str = "https://example-api.com";

/// Path of the access token introspection endpoint.
pub const INTROSPECT_PATH: &str = "/internal/auth/v1/accesstoken/introspect";
/// Path of the password-grant access token endpoint.
pub const REQUEST_TOKEN_PATH: &str = "/internal/auth/v1/request-access-token";
/// Path of the verifiable credential search endpoint.
pub const SEARCH_CREDENTIALS_PATH: &str = "/internal/vcr/v2/issuer/vc/search";

/// Validated client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// Base URL all endpoint paths are appended to.
	pub base_url: Url,
}
impl ApiConfig {
	/// Parses and validates `base_url`.
	pub fn new(base_url: &str) -> Result<Self, ConfigError> {
		let base_url =
			Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Self::with_base_url(base_url)
	}

	/// Wraps an already parsed base URL after checking its scheme, query, and fragment.
	pub fn with_base_url(base_url: Url) -> Result<Self, ConfigError> {
		match base_url.scheme() {
			"http" | "https" => (),
			other => return Err(ConfigError::UnsupportedScheme { scheme: other.to_owned() }),
		}

		if base_url.query().is_some() || base_url.fragment().is_some() {
			return Err(ConfigError::BaseUrlHasQueryOrFragment { url: base_url.to_string() });
		}

		Ok(Self { base_url })
	}

	/// Builds the absolute endpoint URL for `call`.
	pub fn endpoint(&self, call: CallKind) -> Result<Url, ConfigError> {
		let base = self.base_url.as_str().trim_end_matches('/');

		Url::parse(&format!("{base}{}", endpoint_path(call)))
			.map_err(|source| ConfigError::InvalidEndpoint { call, source })
	}
}
impl Default for ApiConfig {
	fn default() -> Self {
		Self { base_url: Url::parse(BASE_URL).expect("BASE_URL must be a valid URL.") }
	}
}
impl FromStr for ApiConfig {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

/// Returns the fixed path served for `call`.
pub const fn endpoint_path(call: CallKind) -> &'static str {
	match call {
		CallKind::Introspect => INTROSPECT_PATH,
		CallKind::RequestToken => REQUEST_TOKEN_PATH,
		CallKind::SearchCredentials => SEARCH_CREDENTIALS_PATH,
	}
}

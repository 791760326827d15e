//! Async API client and the operations it exposes.

mod introspect;
mod request_token;
mod search_credentials;

pub use introspect::*;
pub use request_token::*;
pub use search_credentials::*;

// self
use crate::{
	_prelude::*,
	config::ApiConfig,
	http::{CallRequest, ReqwestHttpClient},
	obs::{self, CallOutcome, CallSpan},
};

/// Decoded JSON body returned verbatim by every operation.
pub type ApiResult = serde_json::Value;

/// Issues API calls against a single base URL.
///
/// The client holds no per-call state; every operation builds its request, sends it once, and
/// returns the decoded body or an [`Error`]. Cloning is cheap and shares reqwest's connection
/// pool.
#[derive(Clone, Default)]
pub struct ApiClient {
	/// HTTP client wrapper used for every outbound request.
	pub http_client: ReqwestHttpClient,
	/// Base URL and endpoint layout.
	pub config: ApiConfig,
}
impl ApiClient {
	/// Creates a client for `config` with a default reqwest transport.
	pub fn new(config: ApiConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}

	/// Creates a client that reuses a caller-provided transport.
	pub fn with_http_client(config: ApiConfig, http_client: impl Into<ReqwestHttpClient>) -> Self {
		Self { http_client: http_client.into(), config }
	}

	async fn dispatch(&self, request: CallRequest) -> Result<ApiResult> {
		let kind = request.kind;
		let span = CallSpan::new(kind);

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = span.instrument(self.http_client.execute(request)).await;

		obs::finish_call(kind, &span, &result);

		result
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient").field("base_url", &self.config.base_url.as_str()).finish()
	}
}

//! Blocking API client for callers without an async runtime.
//!
//! [`BlockingApiClient`] builds exactly the same requests as [`ApiClient`](crate::api::ApiClient)
//! and applies the same response policy, but each call blocks the calling thread for one HTTP
//! round trip. Do not call it from inside an async runtime.

// self
use crate::{
	_prelude::*,
	api::{self, ApiResult},
	auth::PasswordCredentials,
	config::ApiConfig,
	http::{BlockingHttpClient, CallRequest},
	obs::{self, CallOutcome, CallSpan},
	vcr::SearchFilter,
};

/// Blocking counterpart of [`ApiClient`](crate::api::ApiClient).
#[derive(Clone, Default)]
pub struct BlockingApiClient {
	/// Blocking HTTP client used for every outbound request.
	pub http_client: BlockingHttpClient,
	/// Base URL and endpoint layout.
	pub config: ApiConfig,
}
impl BlockingApiClient {
	/// Creates a client for `config` with a default blocking reqwest transport.
	pub fn new(config: ApiConfig) -> Self {
		Self::with_http_client(config, BlockingHttpClient::default())
	}

	/// Creates a client that reuses a caller-provided blocking transport.
	pub fn with_http_client(config: ApiConfig, http_client: impl Into<BlockingHttpClient>) -> Self {
		Self { http_client: http_client.into(), config }
	}

	/// Blocking version of [`ApiClient::introspect`](crate::api::ApiClient::introspect).
	pub fn introspect(&self, access_token: &str) -> Result<ApiResult> {
		self.dispatch(api::introspect_request(&self.config, access_token)?)
	}

	/// Blocking version of [`ApiClient::request_token`](crate::api::ApiClient::request_token).
	pub fn request_token(&self, credentials: &PasswordCredentials) -> Result<ApiResult> {
		self.dispatch(api::request_token_request(&self.config, credentials)?)
	}

	/// Blocking version of
	/// [`ApiClient::search_credentials`](crate::api::ApiClient::search_credentials).
	pub fn search_credentials(
		&self,
		access_token: &str,
		filter: &SearchFilter,
	) -> Result<ApiResult> {
		self.dispatch(api::search_credentials_request(&self.config, access_token, filter)?)
	}

	fn dispatch(&self, request: CallRequest) -> Result<ApiResult> {
		let kind = request.kind;
		let span = CallSpan::new(kind);

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = {
			let _guard = span.clone().entered();

			self.http_client.execute(request)
		};

		obs::finish_call(kind, &span, &result);

		result
	}
}
impl Debug for BlockingApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BlockingApiClient")
			.field("base_url", &self.config.base_url.as_str())
			.finish()
	}
}

/// Introspects `access_token` against [`BASE_URL`](crate::config::BASE_URL).
pub fn introspect(access_token: &str) -> Result<ApiResult> {
	BlockingApiClient::default().introspect(access_token)
}

/// Requests an access token from [`BASE_URL`](crate::config::BASE_URL).
pub fn request_token(
	client_id: &str,
	client_secret: &str,
	username: &str,
	password: &str,
) -> Result<ApiResult> {
	let credentials = PasswordCredentials::new(client_id, client_secret, username, password);

	BlockingApiClient::default().request_token(&credentials)
}

/// Searches credentials on [`BASE_URL`](crate::config::BASE_URL).
///
/// Empty `subject_id` or `credential_type` values are treated as absent.
pub fn search_credentials(
	access_token: &str,
	issuer_id: &str,
	subject_id: Option<&str>,
	credential_type: Option<&str>,
) -> Result<ApiResult> {
	let filter = SearchFilter::from_parts(issuer_id, subject_id, credential_type);

	BlockingApiClient::default().search_credentials(access_token, &filter)
}

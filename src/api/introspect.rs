//! Access token introspection.

// self
use crate::{
	_prelude::*,
	api::{ApiClient, ApiResult},
	config::ApiConfig,
	http::{CallBody, CallRequest},
	obs::CallKind,
};

impl ApiClient {
	/// Asks the introspection endpoint whether `access_token` is valid.
	///
	/// The token is sent as-is; an empty or malformed token is rejected by the API, not here.
	pub async fn introspect(&self, access_token: &str) -> Result<ApiResult> {
		self.dispatch(introspect_request(&self.config, access_token)?).await
	}
}

/// Introspects `access_token` against [`BASE_URL`](crate::config::BASE_URL).
pub async fn introspect(access_token: &str) -> Result<ApiResult> {
	ApiClient::default().introspect(access_token).await
}

pub(crate) fn introspect_request(config: &ApiConfig, access_token: &str) -> Result<CallRequest> {
	Ok(CallRequest {
		kind: CallKind::Introspect,
		url: config.endpoint(CallKind::Introspect)?,
		bearer: Some(access_token.to_owned()),
		body: CallBody::Empty,
	})
}

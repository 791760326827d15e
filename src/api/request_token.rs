//! Password-grant access token requests.

// self
use crate::{
	_prelude::*,
	api::{ApiClient, ApiResult},
	auth::PasswordCredentials,
	config::ApiConfig,
	http::{CallBody, CallRequest},
	obs::CallKind,
};

impl ApiClient {
	/// Exchanges client + user credentials for an access token.
	///
	/// The response is returned verbatim; nothing checks that it actually contains a token.
	pub async fn request_token(&self, credentials: &PasswordCredentials) -> Result<ApiResult> {
		self.dispatch(request_token_request(&self.config, credentials)?).await
	}

	/// Same as [`ApiClient::request_token`] with the four credential parts passed separately.
	pub async fn request_token_with(
		&self,
		client_id: &str,
		client_secret: &str,
		username: &str,
		password: &str,
	) -> Result<ApiResult> {
		let credentials = PasswordCredentials::new(client_id, client_secret, username, password);

		self.request_token(&credentials).await
	}
}

/// Requests an access token from [`BASE_URL`](crate::config::BASE_URL).
pub async fn request_token(
	client_id: &str,
	client_secret: &str,
	username: &str,
	password: &str,
) -> Result<ApiResult> {
	ApiClient::default().request_token_with(client_id, client_secret, username, password).await
}

pub(crate) fn request_token_request(
	config: &ApiConfig,
	credentials: &PasswordCredentials,
) -> Result<CallRequest> {
	let fields = credentials
		.form_fields()
		.into_iter()
		.map(|(key, value)| (key, value.to_owned()))
		.collect();

	Ok(CallRequest {
		kind: CallKind::RequestToken,
		url: config.endpoint(CallKind::RequestToken)?,
		bearer: None,
		body: CallBody::Form(fields),
	})
}

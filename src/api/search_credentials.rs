//! Verifiable credential search.

// self
use crate::{
	_prelude::*,
	api::{ApiClient, ApiResult},
	config::ApiConfig,
	http::{CallBody, CallRequest},
	obs::CallKind,
	vcr::SearchFilter,
};

impl ApiClient {
	/// Searches the credentials issued by `filter.issuer_id`, narrowed by the optional parts of
	/// the filter.
	pub async fn search_credentials(
		&self,
		access_token: &str,
		filter: &SearchFilter,
	) -> Result<ApiResult> {
		self.dispatch(search_credentials_request(&self.config, access_token, filter)?).await
	}

	/// Searches by loose filter parts; empty `subject_id` or `credential_type` values are
	/// treated as absent.
	pub async fn search_credentials_by(
		&self,
		access_token: &str,
		issuer_id: &str,
		subject_id: Option<&str>,
		credential_type: Option<&str>,
	) -> Result<ApiResult> {
		let filter = SearchFilter::from_parts(issuer_id, subject_id, credential_type);

		self.search_credentials(access_token, &filter).await
	}
}

/// Searches credentials on [`BASE_URL`](crate::config::BASE_URL).
///
/// Empty `subject_id` or `credential_type` values are treated as absent.
pub async fn search_credentials(
	access_token: &str,
	issuer_id: &str,
	subject_id: Option<&str>,
	credential_type: Option<&str>,
) -> Result<ApiResult> {
	ApiClient::default()
		.search_credentials_by(access_token, issuer_id, subject_id, credential_type)
		.await
}

pub(crate) fn search_credentials_request(
	config: &ApiConfig,
	access_token: &str,
	filter: &SearchFilter,
) -> Result<CallRequest> {
	Ok(CallRequest {
		kind: CallKind::SearchCredentials,
		url: config.endpoint(CallKind::SearchCredentials)?,
		bearer: Some(access_token.to_owned()),
		body: CallBody::Json(filter.to_body()),
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_carries_bearer_and_json_filter() {
		let filter = SearchFilter::from_parts("issuer-1", Some(""), Some("diploma"));
		let request = search_credentials_request(&ApiConfig::default(), "tok", &filter)
			.expect("Search request should build.");

		assert_eq!(request.bearer.as_deref(), Some("tok"));
		assert_eq!(
			request.body,
			CallBody::Json(serde_json::json!({ "issuer_id": "issuer-1", "type": "diploma" })),
		);
	}
}

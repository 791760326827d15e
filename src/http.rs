//! Transport primitives for API calls.
//!
//! Every operation is described as a [`CallRequest`] (endpoint, optional bearer token, body)
//! and executed by [`ReqwestHttpClient`] or, with the `blocking` feature,
//! [`BlockingHttpClient`]. Both transports share the same response policy: status 200 is
//! decoded as JSON, any other status becomes a [`RemoteCallError`] carrying the raw text.

// crates.io
use reqwest::StatusCode;
// self
use crate::{
	_prelude::*,
	api::ApiResult,
	error::{ConfigError, DecodeError, RemoteCallError, TransportError},
	obs::CallKind,
};

/// Body attached to an outbound call.
#[derive(Clone, Debug, PartialEq)]
pub enum CallBody {
	/// No body.
	Empty,
	/// `application/x-www-form-urlencoded` fields, in wire order.
	Form(Vec<(&'static str, String)>),
	/// `application/json` document.
	Json(serde_json::Value),
}

/// Fully described POST request for one API operation.
#[derive(Clone, PartialEq)]
pub struct CallRequest {
	/// Operation the request belongs to.
	pub kind: CallKind,
	/// Absolute endpoint URL.
	pub url: Url,
	/// Token sent as `Authorization: Bearer <token>`, if any.
	pub bearer: Option<String>,
	/// Request body.
	pub body: CallBody,
}
impl Debug for CallRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CallRequest")
			.field("kind", &self.kind)
			.field("url", &self.url.as_str())
			.field("bearer_set", &self.bearer.is_some())
			.finish_non_exhaustive()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Sends `request` and applies the shared response policy.
	pub async fn execute(&self, request: CallRequest) -> Result<ApiResult> {
		let CallRequest { kind, url, bearer, body } = request;
		let mut builder = self.0.post(url);

		if let Some(token) = bearer {
			builder = builder.bearer_auth(token);
		}

		builder = match body {
			CallBody::Empty => builder,
			CallBody::Form(fields) => builder.form(&fields),
			CallBody::Json(document) => builder.json(&document),
		};

		let response = builder.send().await.map_err(map_reqwest_error)?;
		let status = response.status();

		if status != StatusCode::OK {
			let text = response.text().await.map_err(map_reqwest_error)?;

			return Err(reject(kind, status, text));
		}

		let bytes = response.bytes().await.map_err(map_reqwest_error)?;

		decode_body(kind, &bytes)
	}
}
impl From<ReqwestClient> for ReqwestHttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self(client)
	}
}

/// Blocking counterpart of [`ReqwestHttpClient`].
///
/// Must not be used from within an async runtime; reqwest's blocking client panics there.
#[cfg(feature = "blocking")]
#[derive(Clone, Default)]
pub struct BlockingHttpClient(pub reqwest::blocking::Client);
#[cfg(feature = "blocking")]
impl BlockingHttpClient {
	/// Wraps an existing blocking reqwest client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self(client)
	}

	/// Sends `request` on the calling thread and applies the shared response policy.
	pub fn execute(&self, request: CallRequest) -> Result<ApiResult> {
		let CallRequest { kind, url, bearer, body } = request;
		let mut builder = self.0.post(url);

		if let Some(token) = bearer {
			builder = builder.bearer_auth(token);
		}

		builder = match body {
			CallBody::Empty => builder,
			CallBody::Form(fields) => builder.form(&fields),
			CallBody::Json(document) => builder.json(&document),
		};

		let response = builder.send().map_err(map_reqwest_error)?;
		let status = response.status();

		if status != StatusCode::OK {
			let text = response.text().map_err(map_reqwest_error)?;

			return Err(reject(kind, status, text));
		}

		let bytes = response.bytes().map_err(map_reqwest_error)?;

		decode_body(kind, &bytes)
	}
}
#[cfg(feature = "blocking")]
impl From<reqwest::blocking::Client> for BlockingHttpClient {
	fn from(client: reqwest::blocking::Client) -> Self {
		Self(client)
	}
}

/// Decodes a 200 response body into an [`ApiResult`]; the body must hold exactly one document.
pub(crate) fn decode_body(kind: CallKind, bytes: &[u8]) -> Result<ApiResult> {
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);
	let value = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|e| DecodeError::from((kind, e)))?;

	deserializer
		.end()
		.map_err(|source| DecodeError { call: kind, path: ".".into(), source })?;

	Ok(value)
}

fn reject(kind: CallKind, status: StatusCode, body: String) -> Error {
	RemoteCallError { call: kind, status: status.as_u16(), body }.into()
}

fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}

	TransportError::from(err).into()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn decode_body_returns_document_verbatim() {
		let value = decode_body(CallKind::Introspect, br#"{"active":true,"scope":["a","b"]}"#)
			.expect("Valid JSON should decode.");

		assert_eq!(value, serde_json::json!({ "active": true, "scope": ["a", "b"] }));
	}

	#[test]
	fn decode_body_reports_malformed_json() {
		let err = decode_body(CallKind::RequestToken, b"<html>oops</html>")
			.expect_err("HTML should not decode.");

		assert!(matches!(err, Error::Decode(DecodeError { call: CallKind::RequestToken, .. })));
		assert_eq!(err.to_string(), "Access token request returned malformed JSON.");
	}

	#[test]
	fn decode_body_rejects_trailing_text() {
		let err = decode_body(CallKind::Introspect, br#"{"active":true} <html>garbage</html>"#)
			.expect_err("Trailing text after the document should not decode.");

		assert!(matches!(err, Error::Decode(DecodeError { call: CallKind::Introspect, .. })));
		assert_eq!(err.status(), None);

		let err = decode_body(CallKind::SearchCredentials, br#"{"a":1} garbage"#)
			.expect_err("Trailing text after the document should not decode.");

		assert!(matches!(err, Error::Decode(_)));
		assert!(decode_body(CallKind::SearchCredentials, b"{\"a\":1}\n").is_ok());
	}

	#[test]
	fn reject_keeps_status_and_text() {
		let err = reject(
			CallKind::SearchCredentials,
			StatusCode::FORBIDDEN,
			"{\"error\":\"forbidden\"}".into(),
		);

		match err {
			Error::RemoteCall(RemoteCallError { call, status, body }) => {
				assert_eq!(call, CallKind::SearchCredentials);
				assert_eq!(status, 403);
				assert_eq!(body, "{\"error\":\"forbidden\"}");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn call_request_debug_hides_bearer() {
		let request = CallRequest {
			kind: CallKind::Introspect,
			url: Url::parse("https://example-api.com/x").expect("URL should parse."),
			bearer: Some("tok-123".into()),
			body: CallBody::Empty,
		};

		assert!(!format!("{request:?}").contains("tok-123"));
	}
}

//! Client-level error types shared across calls, transports, and configuration.

// self
use crate::{_prelude::*, obs::CallKind};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS) before a complete response was read.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The API answered with a status other than 200.
	#[error(transparent)]
	RemoteCall(#[from] RemoteCallError),
	/// The API answered 200 but the body was not valid JSON.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
impl Error {
	/// HTTP status reported by the API, when a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::RemoteCall(e) => Some(e.status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than `http` or `https`.
	#[error("Base URL must use http or https, got `{scheme}`.")]
	UnsupportedScheme {
		/// Scheme that was supplied.
		scheme: String,
	},
	/// Base URL carries a query or fragment, which endpoint paths cannot be appended to.
	#[error("Base URL must not carry a query or fragment: {url}.")]
	BaseUrlHasQueryOrFragment {
		/// Base URL that failed validation.
		url: String,
	},
	/// Endpoint URL could not be assembled from the base URL.
	#[error("Endpoint URL for {call} is invalid.")]
	InvalidEndpoint {
		/// Call whose endpoint failed to build.
		call: CallKind,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client or request could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Response received with a status other than 200.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{} failed with status code {status}: {body}.", .call.operation())]
pub struct RemoteCallError {
	/// Call that was rejected.
	pub call: CallKind,
	/// HTTP status code returned by the API.
	pub status: u16,
	/// Raw response text.
	pub body: String,
}

/// Successful response whose body could not be decoded as JSON.
#[derive(Debug, ThisError)]
#[error("{} returned malformed JSON.", .call.operation())]
pub struct DecodeError {
	/// Call whose response failed to decode.
	pub call: CallKind,
	/// JSON path where decoding stopped (`.` for the document root).
	pub path: String,
	/// Underlying parsing failure.
	#[source]
	pub source: serde_json::Error,
}
impl From<(CallKind, serde_path_to_error::Error<serde_json::Error>)> for DecodeError {
	fn from((call, e): (CallKind, serde_path_to_error::Error<serde_json::Error>)) -> Self {
		let path = e.path().to_string();

		Self { call, path, source: e.into_inner() }
	}
}

//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `aorta_client.call` with the `call` (operation)
//!   and `status` (HTTP status, once known) fields.
//! - Enable `metrics` to increment the `aorta_client_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// API operations issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Access token introspection.
	Introspect,
	/// Password-grant access token request.
	RequestToken,
	/// Verifiable credential search by issuer.
	SearchCredentials,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Introspect => "introspect",
			CallKind::RequestToken => "request_token",
			CallKind::SearchCredentials => "search_credentials",
		}
	}

	/// Human-readable operation name used in error messages.
	pub const fn operation(self) -> &'static str {
		match self {
			CallKind::Introspect => "Introspection",
			CallKind::RequestToken => "Access token request",
			CallKind::SearchCredentials => "Verifiable credential search",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records the final outcome of a call on its span and the metrics recorder.
pub(crate) fn finish_call<T>(kind: CallKind, span: &CallSpan, result: &Result<T>) {
	match result {
		Ok(_) => {
			span.record_status(200);
			record_call_outcome(kind, CallOutcome::Success);
		},
		Err(e) => {
			// Decode failures only happen on 200 responses.
			let status = if matches!(e, Error::Decode(_)) { Some(200) } else { e.status() };

			if let Some(status) = status {
				span.record_status(status);
			}

			record_call_outcome(kind, CallOutcome::Failure);
		},
	}
}

//! Verifiable credential registry search filters.

// self
use crate::_prelude::*;

/// Search criteria sent to the issuer credential search endpoint.
///
/// `issuer_id` is always sent. `subject_id` and `credential_type` are only sent when present;
/// the constructors treat an empty string as absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFilter {
	/// Issuer whose credentials are searched.
	pub issuer_id: String,
	/// Optional credential subject.
	pub subject_id: Option<String>,
	/// Optional credential type, sent as `type`.
	pub credential_type: Option<String>,
}
impl SearchFilter {
	/// Creates a filter matching every credential of `issuer_id`.
	pub fn new(issuer_id: impl Into<String>) -> Self {
		Self { issuer_id: issuer_id.into(), subject_id: None, credential_type: None }
	}

	/// Restricts the search to a subject. An empty value clears the restriction.
	pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
		self.subject_id = non_empty(subject_id.into());

		self
	}

	/// Restricts the search to a credential type. An empty value clears the restriction.
	pub fn with_type(mut self, credential_type: impl Into<String>) -> Self {
		self.credential_type = non_empty(credential_type.into());

		self
	}

	/// Builds a filter from optional borrowed parts.
	pub fn from_parts(
		issuer_id: impl Into<String>,
		subject_id: Option<&str>,
		credential_type: Option<&str>,
	) -> Self {
		let mut filter = Self::new(issuer_id);

		if let Some(subject_id) = subject_id {
			filter = filter.with_subject(subject_id);
		}
		if let Some(credential_type) = credential_type {
			filter = filter.with_type(credential_type);
		}

		filter
	}

	/// JSON request body for this filter.
	pub fn to_body(&self) -> serde_json::Value {
		let mut body = serde_json::Map::new();

		body.insert("issuer_id".into(), self.issuer_id.clone().into());

		if let Some(subject_id) = &self.subject_id {
			body.insert("subject_id".into(), subject_id.clone().into());
		}
		if let Some(credential_type) = &self.credential_type {
			body.insert("type".into(), credential_type.clone().into());
		}

		body.into()
	}
}

fn non_empty(value: String) -> Option<String> {
	if value.is_empty() { None } else { Some(value) }
}

//! Client + user credentials exchanged through the password grant.

// self
use crate::{_prelude::*, auth::Secret};

/// Grant type sent with every access token request.
pub const PASSWORD_GRANT_TYPE: &str = "password";

/// Inputs of a password-grant access token request.
///
/// Values are consumed by a single request and never stored by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordCredentials {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: Secret,
	/// Resource owner username.
	pub username: String,
	/// Resource owner password.
	pub password: Secret,
}
impl PasswordCredentials {
	/// Bundles client and user credentials.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
		username: impl Into<String>,
		password: impl Into<Secret>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			username: username.into(),
			password: password.into(),
		}
	}

	/// Form fields sent to the token endpoint, in wire order.
	pub fn form_fields(&self) -> [(&'static str, &str); 5] {
		[
			("client_id", self.client_id.as_str()),
			("client_secret", self.client_secret.expose()),
			("grant_type", PASSWORD_GRANT_TYPE),
			("username", self.username.as_str()),
			("password", self.password.expose()),
		]
	}
}

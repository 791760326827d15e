//! Credential inputs for the token endpoints.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;

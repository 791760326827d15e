//! Thin async and blocking client for the Aorta proxy API: access token introspection,
//! password-grant token requests, and verifiable credential search.
//!
//! Each operation sends exactly one POST request and returns the decoded JSON body when the API
//! answers 200. Any other status surfaces as [`error::RemoteCallError`]; network failures surface
//! as [`error::TransportError`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
#[cfg(feature = "blocking")] pub mod blocking;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod vcr;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		str::FromStr,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};

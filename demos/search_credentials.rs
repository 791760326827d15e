//! Demonstrates the three API calls end to end against a local mock of the proxy: request a
//! token with the password grant, introspect it, then search the issuer's credentials.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use aorta_client::{
	api::ApiClient,
	auth::PasswordCredentials,
	config::{ApiConfig, INTROSPECT_PATH, REQUEST_TOKEN_PATH, SEARCH_CREDENTIALS_PATH},
	vcr::SearchFilter,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(REQUEST_TOKEN_PATH);
			then.status(200).json_body(json!({ "access_token": "demo-access", "expires_in": 900 }));
		})
		.await;
	let introspect_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(INTROSPECT_PATH).header("authorization", "Bearer demo-access");
			then.status(200).json_body(json!({ "active": true, "sub": "demo-user" }));
		})
		.await;
	let search_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SEARCH_CREDENTIALS_PATH);
			then.status(200)
				.json_body(json!({ "verifiableCredentials": [{ "id": "urn:uuid:demo-vc" }] }));
		})
		.await;
	let client = ApiClient::new(ApiConfig::new(&server.base_url())?);
	let credentials = PasswordCredentials::new("demo-client", "demo-secret", "demo-user", "hunter2");
	let token = client.request_token(&credentials).await?;
	let access_token = token["access_token"].as_str().unwrap_or_default();
	let introspection = client.introspect(access_token).await?;
	let filter = SearchFilter::new("did:web:issuer.example").with_type("DiplomaCredential");
	let credentials_found = client.search_credentials(access_token, &filter).await?;

	println!("Token: {token}.");
	println!("Introspection: {introspection}.");
	println!("Credentials: {credentials_found}.");

	token_mock.assert_async().await;
	introspect_mock.assert_async().await;
	search_mock.assert_async().await;

	Ok(())
}

mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use aorta_client::{
	config::INTROSPECT_PATH,
	error::{Error, RemoteCallError},
	obs::CallKind,
};
use common::{ACCESS_TOKEN, BEARER};

#[tokio::test]
async fn introspect_returns_body_verbatim() {
	let server = MockServer::start_async().await;
	let body = json!({
		"active": true,
		"sub": "alice",
		"scope": "vcr:search",
		"exp": 1_900_000_000,
		"nested": { "roles": ["issuer", "holder"] },
	});
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(INTROSPECT_PATH).header("authorization", BEARER);
			then.status(200).header("content-type", "application/json").json_body(body.clone());
		})
		.await;
	let client = common::client_for(&server);
	let result =
		client.introspect(ACCESS_TOKEN).await.expect("Introspection should succeed on HTTP 200.");

	assert_eq!(result, body);

	mock.assert_async().await;
}

#[tokio::test]
async fn introspect_is_not_cached() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(INTROSPECT_PATH);
			then.status(200).json_body(json!({ "active": false }));
		})
		.await;
	let client = common::client_for(&server);
	let first = client.introspect(ACCESS_TOKEN).await.expect("First call should succeed.");
	let second = client.introspect(ACCESS_TOKEN).await.expect("Second call should succeed.");

	assert_eq!(first, second);

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn introspect_surfaces_server_errors() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(INTROSPECT_PATH);
			then.status(500).body("internal error");
		})
		.await;
	let client = common::client_for(&server);
	let err = client
		.introspect(ACCESS_TOKEN)
		.await
		.expect_err("HTTP 500 should surface as a remote call error.");
	let message = err.to_string();

	assert!(message.contains("500"), "Message should carry the status: {message}.");
	assert!(message.contains("internal error"), "Message should carry the body: {message}.");

	match err {
		Error::RemoteCall(RemoteCallError { call, status, body }) => {
			assert_eq!(call, CallKind::Introspect);
			assert_eq!(status, 500);
			assert_eq!(body, "internal error");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn introspect_rejects_every_non_200_status() {
	for code in [201_u16, 204, 400, 401, 403, 404, 429, 503] {
		let server = MockServer::start_async().await;

		server
			.mock_async(|when, then| {
				when.method(POST).path(INTROSPECT_PATH);
				then.status(code).body("{}");
			})
			.await;

		let err = common::client_for(&server)
			.introspect(ACCESS_TOKEN)
			.await
			.expect_err("Only HTTP 200 counts as success.");

		assert_eq!(err.status(), Some(code));
		assert!(matches!(err, Error::RemoteCall(_)));
	}
}

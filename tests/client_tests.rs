// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the REST client and the concrete caches
//!
//! These tests run against a local mock HTTP server, validating the error
//! taxonomy of the client and the end-to-end behavior of the contracts and
//! token-balances caches.

use std::time::Duration;

use mirrorscan::{
    ClientError, ContractsCache, ContractsResponse, EntityId, ErrorKind, MirrorClient, PageLimit,
    RefreshPolicy, TokenBalancesCache,
};
use mockito::Matcher;

const CONTRACTS_BODY: &str = r#"{
    "contracts": [
        {
            "contract_id": "0.0.5001",
            "evm_address": "0x0000000000000000000000000000000000001389",
            "memo": "first",
            "deleted": false
        },
        {
            "contract_id": "0.0.5002",
            "memo": "second",
            "deleted": false
        }
    ],
    "links": { "next": null }
}"#;

fn balances_body(account: &str, balance: u64) -> String {
    format!(
        r#"{{
            "timestamp": "1633032000.000000000",
            "balances": [ {{ "account": "{account}", "balance": {balance} }} ],
            "links": {{ "next": null }}
        }}"#
    )
}

fn client_for(server: &mockito::Server) -> MirrorClient {
    MirrorClient::builder(&server.url())
        .expect("mock server URL is valid")
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client construction")
}

#[tokio::test]
async fn get_decodes_typed_payload() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/contracts")
        .match_query(Matcher::UrlEncoded("limit".into(), "100".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CONTRACTS_BODY)
        .create_async()
        .await;

    let client = client_for(&server);
    let response: ContractsResponse = client
        .get("api/v1/contracts", &[("limit", "100".to_string())])
        .await?;

    assert_eq!(response.contracts.len(), 2);
    assert_eq!(
        response.contracts[0].contract_id,
        Some(EntityId::from_num(5001))
    );
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn non_success_status_maps_to_response_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/contracts")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"_status":{"messages":[{"message":"Not found"}]}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get::<ContractsResponse>("api/v1/contracts", &[])
        .await
        .expect_err("404 must fail");

    assert_eq!(err.kind(), ErrorKind::Response);
    assert!(matches!(err, ClientError::Response { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/contracts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get::<ContractsResponse>("api/v1/contracts", &[])
        .await
        .expect_err("bad body must fail");

    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn unreachable_host_maps_to_transport_error() {
    // Port 1 is reserved; connections are refused immediately.
    let client = MirrorClient::builder("http://127.0.0.1:1/")
        .unwrap()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client
        .get::<ContractsResponse>("api/v1/contracts", &[])
        .await
        .expect_err("connection must fail");

    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn contracts_cache_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/contracts")
        .match_query(Matcher::UrlEncoded("limit".into(), "100".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CONTRACTS_BODY)
        .create_async()
        .await;

    let cache = ContractsCache::new(client_for(&server), PageLimit::MAX, RefreshPolicy::disabled());
    assert!(cache.state().is_empty());

    cache.reload().await;

    let state = cache.state();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    let page = state.value.expect("value cached");
    assert_eq!(page.contracts.len(), 2);
    assert_eq!(page.contracts[1].memo.as_deref(), Some("second"));
    mock.assert_async().await;
}

#[tokio::test]
async fn token_balances_cache_queries_token_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/tokens/0.0.100/balances")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "100".into()),
            Matcher::UrlEncoded("order".into(), "asc".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(balances_body("0.0.2001", 750))
        .create_async()
        .await;

    let cache = TokenBalancesCache::with_policy(
        client_for(&server),
        EntityId::from_num(100),
        PageLimit::MAX,
        RefreshPolicy::disabled(),
    );

    cache.reload().await;

    let page = cache.value().expect("value cached");
    assert_eq!(page.balances.len(), 1);
    assert_eq!(page.balances[0].balance, 750);
    mock.assert_async().await;
}

/// Changing the token identifier clears the cached value immediately, before
/// any load for the new token has completed.
#[tokio::test]
async fn set_token_id_invalidates_cached_value() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/tokens/0.0.100/balances")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(balances_body("0.0.2001", 750))
        .create_async()
        .await;
    server
        .mock("GET", "/api/v1/tokens/0.0.200/balances")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(balances_body("0.0.3001", 42))
        .create_async()
        .await;

    let cache = TokenBalancesCache::with_policy(
        client_for(&server),
        EntityId::from_num(100),
        PageLimit::MAX,
        RefreshPolicy::disabled(),
    );

    cache.reload().await;
    assert!(cache.value().is_some());

    cache.set_token_id(EntityId::from_num(200));
    assert_eq!(cache.token_id(), EntityId::from_num(200));
    assert!(
        cache.state().is_empty(),
        "old token's balances must not be shown for the new token"
    );
    assert_eq!(cache.error(), None);

    cache.reload().await;
    let page = cache.value().expect("fresh value for the new token");
    assert_eq!(page.balances[0].account, Some(EntityId::from_num(3001)));
    assert_eq!(page.balances[0].balance, 42);
}

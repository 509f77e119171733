//! Integration tests for the rule service client.
//!
//! These tests pin the pagination protocol (request counts included),
//! the permissive response decoding, and the error taxonomy against a
//! wiremock server.

use qodo_rules::rules::{FetchError, RulesClient, PAGE_SIZE};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rules_page(count: usize) -> serde_json::Value {
    let rules: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "name": format!("rule-{}", i),
                "category": "style",
                "description": "keep it tidy",
                "severity": "warning",
            })
        })
        .collect();
    json!({ "rules": rules })
}

#[tokio::test]
async fn single_short_page_fetches_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rules"))
        .and(query_param("scopes", "/acme/widgets/"))
        .and(query_param("state", "active"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "50"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rules_page(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = RulesClient::new(server.uri(), "test-key").unwrap();
    let rules = client.fetch_all("/acme/widgets/").await.unwrap();

    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].name, "rule-0");
}

#[tokio::test]
async fn full_pages_paginate_until_short_page() {
    let server = MockServer::start().await;

    for (page, count) in [("1", PAGE_SIZE), ("2", PAGE_SIZE), ("3", 10)] {
        Mock::given(method("GET"))
            .and(path("/rules"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(rules_page(count)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = RulesClient::new(server.uri(), "test-key").unwrap();
    let rules = client.fetch_all("/acme/widgets/").await.unwrap();

    // Exactly 3 requests (the mocks verify their counts on drop).
    assert_eq!(rules.len(), 110);
}

#[tokio::test]
async fn trailing_empty_page_stops_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rules"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rules_page(PAGE_SIZE)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rules"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rules_page(0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = RulesClient::new(server.uri(), "test-key").unwrap();
    let rules = client.fetch_all("/acme/widgets/").await.unwrap();

    assert_eq!(rules.len(), 50);
}

#[tokio::test]
async fn missing_rules_array_is_an_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RulesClient::new(server.uri(), "test-key").unwrap();
    let rules = client.fetch_all("/acme/widgets/").await.unwrap();

    assert!(rules.is_empty());
}

#[tokio::test]
async fn unauthorized_halts_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rules"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = RulesClient::new(server.uri(), "bad-key").unwrap();
    let err = client.fetch_all("/acme/widgets/").await.unwrap_err();

    assert_eq!(err, FetchError::AuthFailed);
}

#[tokio::test]
async fn server_error_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rules"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = RulesClient::new(server.uri(), "test-key").unwrap();
    let err = client.fetch_all("/acme/widgets/").await.unwrap_err();

    assert_eq!(err, FetchError::Api { status: 500 });
}

#[tokio::test]
async fn malformed_body_is_unexpected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RulesClient::new(server.uri(), "test-key").unwrap();
    let err = client.fetch_all("/acme/widgets/").await.unwrap_err();

    assert!(matches!(err, FetchError::Unexpected(_)));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Nothing listens here.
    let base = "http://127.0.0.1:1";

    let client = RulesClient::new(base, "test-key").unwrap();
    let err = client.fetch_all("/acme/widgets/").await.unwrap_err();

    assert_eq!(
        err,
        FetchError::Network {
            base: base.to_string()
        }
    );
}

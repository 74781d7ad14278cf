// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end reconciliation tests against a mocked NS1 API.
//!
//! These tests drive the real `Ns1Client` over HTTP, so they verify request
//! paths, headers and bodies as NS1 would see them.

use ns1_backend::config::BackendConfig;
use ns1_backend::errors::BackendError;
use ns1_backend::notify::{LogNotifier, RequestContext};
use ns1_backend::ns1::Ns1Client;
use ns1_backend::reconciler::{ZoneAction, ZoneReconciler};
use ns1_backend::zone::Zone;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ZONE_PATH: &str = "/v1/zones/example.com";

fn config_for(endpoint: &str, extra: &str) -> BackendConfig {
    let yaml = format!(
        "api_endpoint: {endpoint}\napi_token: test-key\nmasters:\n  - host: 192.0.2.10\n    port: 5354\n  - host: 192.0.2.99\n    port: 53\n{extra}"
    );
    BackendConfig::from_yaml_str(&yaml).unwrap()
}

fn reconciler_for(config: &BackendConfig) -> ZoneReconciler<Ns1Client, LogNotifier> {
    let client = Ns1Client::new(&config.provider).unwrap();
    ZoneReconciler::new(config, client, LogNotifier).unwrap()
}

fn ctx() -> RequestContext {
    RequestContext::new("it-1")
}

fn zone() -> Zone {
    Zone::new("example.com.", "zone-1")
}

#[tokio::test]
async fn create_sends_secondary_document_for_first_master() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(ZONE_PATH))
        .and(header("X-NSONE-Key", "test-key"))
        .and(body_json(json!({
            "zone": "example.com",
            "secondary": {
                "enabled": true,
                "primary_ip": "192.0.2.10",
                "primary_port": 5354
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), "");
    let action = reconciler_for(&config)
        .create_zone(&ctx(), &zone())
        .await
        .unwrap();

    assert_eq!(action, ZoneAction::Created);
}

#[tokio::test]
async fn create_with_tsig_includes_tsig_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(ZONE_PATH))
        .and(body_json(json!({
            "zone": "example.com",
            "secondary": {
                "enabled": true,
                "primary_ip": "192.0.2.10",
                "primary_port": 5354,
                "tsig": {
                    "enabled": true,
                    "hash": "hmac-sha256",
                    "name": "transfer-key",
                    "key": "c2VjcmV0LWtleQ=="
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(
        &server.uri(),
        "tsig_key:\n  name: transfer-key\n  algorithm: hmac-sha256\n  secret: c2VjcmV0LWtleQ==\n",
    );
    reconciler_for(&config)
        .create_zone(&ctx(), &zone())
        .await
        .unwrap();
}

#[tokio::test]
async fn create_existing_zone_does_not_put() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"zone": "example.com"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), "");
    let action = reconciler_for(&config)
        .create_zone(&ctx(), &zone())
        .await
        .unwrap();

    assert_eq!(action, ZoneAction::AlreadyPresent);
}

#[tokio::test]
async fn failed_create_removes_half_created_zone() {
    let server = MockServer::start().await;
    // First probe: absent. Re-probe after the failed PUT: present.
    Mock::given(method("GET"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), "");
    let err = reconciler_for(&config)
        .create_zone(&ctx(), &zone())
        .await
        .unwrap_err();

    // The failed rollback does not replace the PUT error
    match err {
        BackendError::Create { zone, source } => {
            assert_eq!(zone, "example.com");
            assert_eq!(source.status().map(|s| s.as_u16()), Some(500));
            assert!(source.to_string().contains("PUT"));
        }
        other => panic!("expected create error, got {other}"),
    }
}

#[tokio::test]
async fn replace_existing_zone_deletes_then_puts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), "replace_existing_zones: true\n");
    let action = reconciler_for(&config)
        .create_zone(&ctx(), &zone())
        .await
        .unwrap();

    assert_eq!(action, ZoneAction::Replaced);
}

#[tokio::test]
async fn delete_existing_zone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(ZONE_PATH))
        .and(header("X-NSONE-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), "");
    let action = reconciler_for(&config)
        .delete_zone(&ctx(), &zone())
        .await
        .unwrap();

    assert_eq!(action, ZoneAction::Deleted);
}

#[tokio::test]
async fn delete_absent_zone_sends_no_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ZONE_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), "");
    let action = reconciler_for(&config)
        .delete_zone(&ctx(), &zone())
        .await
        .unwrap();

    assert_eq!(action, ZoneAction::AlreadyAbsent);
}

#[tokio::test]
async fn delete_rejected_by_provider_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), "");
    let err = reconciler_for(&config)
        .delete_zone(&ctx(), &zone())
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Delete { .. }));
    assert!(err.to_string().contains("forbidden"));
}

#[tokio::test]
async fn unreachable_provider_is_probe_error_not_absent() {
    // Nothing listens on port 1
    let config = config_for("http://127.0.0.1:1", "");
    let reconciler = reconciler_for(&config);

    let err = reconciler.delete_zone(&ctx(), &zone()).await.unwrap_err();
    assert!(matches!(err, BackendError::Probe { .. }));

    let err = reconciler.create_zone(&ctx(), &zone()).await.unwrap_err();
    assert!(matches!(err, BackendError::Probe { .. }));
}

use htaccess_hub::client::{ClientError, Console, HttpRuleTransport, RuleStoreClient};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rule_json(id: i64, title: &str, description: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": description,
        "code": "RewriteEngine On",
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    })
}

fn store(server: &MockServer, token: Option<&str>) -> RuleStoreClient<HttpRuleTransport> {
    let transport = HttpRuleTransport::new(&server.uri(), token.map(str::to_string)).unwrap();
    RuleStoreClient::new(Arc::new(transport))
}

#[tokio::test]
async fn test_list_parses_rules() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            rule_json(1, "Force HTTPS", None),
            rule_json(2, "Gzip", Some("Compression")),
        ])))
        .mount(&server)
        .await;

    let rules = store(&server, None).list().await.unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].id, 1);
    assert_eq!(rules[1].description.as_deref(), Some("Compression"));
}

#[tokio::test]
async fn test_list_malformed_body_is_store_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = store(&server, None).list().await;

    assert!(matches!(result, Err(ClientError::StoreUnavailable(_))));
}

#[tokio::test]
async fn test_list_server_error_is_store_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rules"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = store(&server, None).list().await;

    assert!(matches!(result, Err(ClientError::StoreUnavailable(_))));
}

#[tokio::test]
async fn test_console_survives_unreachable_store() {
    let url = closed_port_url().await;

    let transport = HttpRuleTransport::new(&url, None).unwrap();
    let mut console = Console::new(Arc::new(transport));

    assert!(console.load_rules().await.is_empty());
    assert!(!console.store_available());
}

#[tokio::test]
async fn test_create_sends_trimmed_body_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rules"))
        .and(header("authorization", "Bearer secret"))
        .and(body_json(json!({"title": "Force HTTPS", "code": "RewriteEngine On"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let id = store(&server, Some("secret"))
        .create(" Force HTTPS ", "RewriteEngine On", None)
        .await
        .unwrap();

    assert_eq!(id, 12);
}

#[tokio::test]
async fn test_create_blank_title_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let result = store(&server, None).create("", "x", None).await;

    assert!(matches!(result, Err(ClientError::Validation(_))));
}

#[tokio::test]
async fn test_update_unknown_id_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/rules"))
        .and(body_json(json!({"id": 99, "title": "t", "code": "c"})))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "not_found", "message": "Rule not found", "details": {"id": 99}}
        })))
        .mount(&server)
        .await;

    let result = store(&server, None).update(99, "t", "c", None).await;

    match result {
        Err(ClientError::Rejected { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Rule not found");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_sends_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rules"))
        .and(body_json(json!({"id": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    store(&server, None).delete(5).await.unwrap();
}

#[tokio::test]
async fn test_rejection_without_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = store(&server, None).delete(5).await;

    match result {
        Err(ClientError::Rejected { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

/// Base URL of a local port with nothing listening on it.
async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

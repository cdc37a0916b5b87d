mod common;

use htaccess_hub::application::services::StatusService;
use htaccess_hub::client::{HttpRuleTransport, RuleStoreClient, StatusClient};
use htaccess_hub::domain::classify::BadgeKind;
use htaccess_hub::domain::prober::StatusProber;
use htaccess_hub::routes;
use std::sync::Arc;

/// Serves the full router on an ephemeral port and returns its base URL.
async fn spawn_service(prober: common::ScriptedProber) -> String {
    let state = common::create_test_state(prober, None);
    let app = routes::router(state, false);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_remote_domain_check_scenario() {
    let base = spawn_service(common::example_prober()).await;
    let service = StatusService::new(Arc::new(StatusClient::new(&base).unwrap()));

    let check = service.check_domain("www.example.com").await;

    assert_eq!(check.host, "example.com");
    let urls: Vec<&str> = check.rows.iter().map(|r| r.result.url.as_str()).collect();
    assert_eq!(urls, check.variants.iter().map(String::as_str).collect::<Vec<_>>());

    let kinds: Vec<BadgeKind> = check
        .rows
        .iter()
        .map(|r| r.classification.badge_kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            BadgeKind::Redirect,
            BadgeKind::Ok,
            BadgeKind::Error,
            BadgeKind::Error
        ]
    );

    assert_eq!(check.rows[0].result.url, "https://www.example.com");
    let redirect = &check.rows[0].classification;
    assert_eq!(redirect.primary_label, "301");
    let secondary = redirect.secondary_badge.as_ref().unwrap();
    assert_eq!(secondary.label, "200");
    assert_eq!(secondary.tooltip, "https://final.example");
}

#[tokio::test]
async fn test_status_client_encodes_query_urls() {
    let prober = common::ScriptedProber::new().respond("https://a.example/?x=1&y=2", 200, None);
    let base = spawn_service(prober).await;

    let result = StatusClient::new(&base)
        .unwrap()
        .probe("https://a.example/?x=1&y=2")
        .await;

    assert_eq!(result.status, Some(200));
    assert!(!result.failed);
}

#[tokio::test]
async fn test_status_client_unreachable_service() {
    let base = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let result = StatusClient::new(&base)
        .unwrap()
        .probe("https://example.com")
        .await;

    assert!(result.failed);
    assert_eq!(result.url, "https://example.com");
}

#[tokio::test]
async fn test_rule_client_round_trip_against_service() {
    let base = spawn_service(common::ScriptedProber::new()).await;
    let transport = HttpRuleTransport::new(&base, None).unwrap();
    let client = RuleStoreClient::new(Arc::new(transport));

    let id = client
        .create("Force HTTPS", "RewriteEngine On", Some("Redirect http"))
        .await
        .unwrap();

    let rules = client.list().await.unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id, id);

    client
        .update(id, "Force HTTPS v2", "RewriteEngine On", None)
        .await
        .unwrap();
    let rules = client.list().await.unwrap();
    assert_eq!(rules[0].title, "Force HTTPS v2");
    assert!(rules[0].description.is_none());

    client.delete(id).await.unwrap();
    assert!(client.list().await.unwrap().is_empty());
}

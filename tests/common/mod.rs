#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::Arc;
use htaccess_hub::application::services::AuthService;
use htaccess_hub::domain::entities::ProbeResult;
use htaccess_hub::domain::prober::StatusProber;
use htaccess_hub::domain::repositories::RuleRepository;
use htaccess_hub::infrastructure::persistence::MemoryRuleRepository;
use htaccess_hub::routes;
use htaccess_hub::state::AppState;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Answers from a fixed table; unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct ScriptedProber {
    answers: HashMap<String, ProbeResult>,
}

impl ScriptedProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, location: Option<&str>) -> Self {
        self.answers.insert(
            url.to_string(),
            ProbeResult::responded(url, status, location.map(str::to_string)),
        );
        self
    }
}

#[async_trait]
impl StatusProber for ScriptedProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        self.answers
            .get(url)
            .cloned()
            .unwrap_or_else(|| ProbeResult::failed(url))
    }
}

pub fn create_test_state(prober: ScriptedProber, admin_token: Option<&str>) -> AppState {
    let rules: Arc<dyn RuleRepository> = Arc::new(MemoryRuleRepository::new());
    AppState::new(rules, Arc::new(prober), AuthService::new(admin_token))
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(routes::router(state, false)).unwrap()
}

/// Scenario used across tests: https answers 200, the www variant
/// redirects, everything else is unreachable.
pub fn example_prober() -> ScriptedProber {
    ScriptedProber::new()
        .respond("https://example.com", 200, None)
        .respond("https://www.example.com", 301, Some("https://final.example"))
}

//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, RuleService, StatusService};
use crate::domain::prober::StatusProber;
use crate::domain::repositories::RuleRepository;

pub type SharedRuleService = Arc<RuleService<dyn RuleRepository>>;
pub type SharedStatusService = Arc<StatusService<dyn StatusProber>>;

/// Owned state threaded through the router; there are no module-level
/// singletons.
#[derive(Clone)]
pub struct AppState {
    pub rule_service: SharedRuleService,
    pub status_service: SharedStatusService,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires services around a rule store and a prober.
    pub fn new(
        rules: Arc<dyn RuleRepository>,
        prober: Arc<dyn StatusProber>,
        auth_service: AuthService,
    ) -> Self {
        Self {
            rule_service: Arc::new(RuleService::new(rules)),
            status_service: Arc::new(StatusService::new(prober)),
            auth_service: Arc::new(auth_service),
        }
    }
}

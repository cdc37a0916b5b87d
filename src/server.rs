//! HTTP server initialization and runtime setup.
//!
//! Handles rule store selection, database connection, prober setup and the
//! Axum server lifecycle.

use crate::application::services::AuthService;
use crate::config::{Config, RuleStoreKind};
use crate::domain::prober::StatusProber;
use crate::domain::repositories::RuleRepository;
use crate::infrastructure::http::ReqwestProber;
use crate::infrastructure::persistence::{MemoryRuleRepository, PgRuleRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Number of connection attempts made before giving up on the database.
const DB_CONNECT_ATTEMPTS: usize = 5;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Rule store (PostgreSQL with migrations, or in-memory)
/// - Status prober (reqwest, redirects disabled)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let rules = init_rule_store(&config).await?;

    let prober: Arc<dyn StatusProber> = Arc::new(
        ReqwestProber::new(config.probe_timeout(), &config.probe_user_agent)
            .context("Failed to build HTTP client for status probes")?,
    );

    let auth = AuthService::new(config.admin_token.as_deref());
    if let Some(fp) = auth.fingerprint() {
        tracing::info!("Rule mutations require ADMIN_TOKEN (sha256 {}…)", fp);
    } else {
        tracing::warn!("ADMIN_TOKEN not set: rule mutations are open to anyone");
    }

    let state = AppState::new(rules, prober, auth);
    let app = app_router(state, true);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn init_rule_store(config: &Config) -> Result<Arc<dyn RuleRepository>> {
    match (config.rule_store, &config.database_url) {
        (RuleStoreKind::Postgres, Some(url)) => {
            let pool = connect_with_retry(config, url).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(PgRuleRepository::new(Arc::new(pool))))
        }
        (RuleStoreKind::Postgres, None) => {
            anyhow::bail!("DATABASE_URL is required when RULE_STORE=postgres")
        }
        (RuleStoreKind::Memory, _) => {
            tracing::warn!("Using in-memory rule store; rules are lost on restart");
            Ok(Arc::new(MemoryRuleRepository::new()))
        }
    }
}

async fn connect_with_retry(config: &Config, url: &str) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(200)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(DB_CONNECT_ATTEMPTS - 1);

    Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options.connect(url).await.inspect_err(|e| {
                tracing::warn!(error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

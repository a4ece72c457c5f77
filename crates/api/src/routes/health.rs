//! `GET /health`: database and upload-storage readiness.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// The server always answers 200; `status` is `degraded` when either the
/// database or the upload directory is unusable.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether admin image uploads can currently be written.
    pub uploads_writable: bool,
}

impl HealthReport {
    fn new(db_healthy: bool, uploads_writable: bool) -> Self {
        Self {
            status: if db_healthy && uploads_writable { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            uploads_writable,
        }
    }
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match folio_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };
    let uploads_writable = state.images.is_writable().await;

    Json(HealthReport::new(db_healthy, uploads_writable))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

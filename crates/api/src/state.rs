use std::sync::Arc;

use crate::config::ServerConfig;
use crate::upload::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup and cloned per request; this is cheap
/// (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image upload storage.
    pub images: Arc<ImageStore>,
}

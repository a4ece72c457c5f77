//! Route definitions for the public site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /            -> index
/// POST   /contact     -> contact
/// POST   /subscribe   -> subscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::index))
        .route("/contact", post(public::contact))
        .route("/subscribe", post(public::subscribe))
}

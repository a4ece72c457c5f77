//! Route definitions for the admin area.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{client, contact, dashboard, project, subscriber};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /                          -> dashboard
///
/// GET    /projects                  -> project::list
/// GET    /projects/add              -> project::add_form
/// POST   /projects/add              -> project::create
/// GET    /projects/{id}/edit        -> project::edit_form
/// POST   /projects/{id}/edit        -> project::update
/// POST   /projects/{id}/delete      -> project::delete
///
/// (same shape for /clients)
///
/// GET    /contacts                  -> contact::list
/// POST   /contacts/{id}/delete      -> contact::delete
/// GET    /subscribers               -> subscriber::list
/// POST   /subscribers/{id}/delete   -> subscriber::delete
/// ```
pub fn router() -> Router<AppState> {
    let project_routes = Router::new()
        .route("/", get(project::list))
        .route("/add", get(project::add_form).post(project::create))
        .route("/{id}/edit", get(project::edit_form).post(project::update))
        .route("/{id}/delete", post(project::delete));

    let client_routes = Router::new()
        .route("/", get(client::list))
        .route("/add", get(client::add_form).post(client::create))
        .route("/{id}/edit", get(client::edit_form).post(client::update))
        .route("/{id}/delete", post(client::delete));

    Router::new()
        .route("/", get(dashboard::dashboard))
        .nest("/projects", project_routes)
        .nest("/clients", client_routes)
        .route("/contacts", get(contact::list))
        .route("/contacts/{id}/delete", post(contact::delete))
        .route("/subscribers", get(subscriber::list))
        .route("/subscribers/{id}/delete", post(subscriber::delete))
}

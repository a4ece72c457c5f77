pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   landing page (GET)
/// /contact                            contact form (POST, redirects)
/// /subscribe                          newsletter signup (POST, JSON)
///
/// /admin                              dashboard counts (GET)
/// /admin/projects                     list (GET)
/// /admin/projects/add                 form, create (GET, POST)
/// /admin/projects/{id}/edit           form, update (GET, POST)
/// /admin/projects/{id}/delete         delete (POST)
/// /admin/clients                      list (GET)
/// /admin/clients/add                  form, create (GET, POST)
/// /admin/clients/{id}/edit            form, update (GET, POST)
/// /admin/clients/{id}/delete          delete (POST)
/// /admin/contacts                     list (GET)
/// /admin/contacts/{id}/delete         delete (POST)
/// /admin/subscribers                  list (GET)
/// /admin/subscribers/{id}/delete      delete (POST)
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}

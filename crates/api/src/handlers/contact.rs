//! Handlers for the `/admin/contacts` resource.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::contact::Contact;
use folio_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::flash;
use crate::response::DataResponse;
use crate::state::AppState;

const LIST_PATH: &str = "/admin/contacts";

/// GET /admin/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Contact>>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: contacts }))
}

/// POST /admin/contacts/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    match ContactRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(id, "Contact deleted");
            Ok(flash::success(LIST_PATH, "contact_deleted"))
        }
        Ok(false) => Err(AppError::not_found("Contact", id)),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to delete contact");
            Ok(flash::error(LIST_PATH, "contact_delete_failed"))
        }
    }
}

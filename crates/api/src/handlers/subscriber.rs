//! Handlers for the `/admin/subscribers` resource.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::subscriber::Subscriber;
use folio_db::repositories::SubscriberRepo;

use crate::error::{AppError, AppResult};
use crate::flash;
use crate::response::DataResponse;
use crate::state::AppState;

const LIST_PATH: &str = "/admin/subscribers";

/// GET /admin/subscribers
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Subscriber>>>> {
    let subscribers = SubscriberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: subscribers }))
}

/// POST /admin/subscribers/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    match SubscriberRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(id, "Subscriber deleted");
            Ok(flash::success(LIST_PATH, "subscriber_deleted"))
        }
        Ok(false) => Err(AppError::not_found("Subscriber", id)),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to delete subscriber");
            Ok(flash::error(LIST_PATH, "subscriber_delete_failed"))
        }
    }
}

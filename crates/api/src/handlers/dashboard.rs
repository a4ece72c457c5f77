//! Handler for the admin dashboard.

use axum::extract::State;
use axum::Json;
use folio_db::models::dashboard::ContentCounts;
use folio_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin
///
/// Current row count of every content table, computed per request.
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DataResponse<ContentCounts>>> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}

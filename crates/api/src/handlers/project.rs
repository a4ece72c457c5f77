//! Handlers for the `/admin/projects` resource.
//!
//! Writes are form posts: they answer with a flash redirect, and only an
//! unknown id escapes as an HTTP error (404).

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use folio_core::content::{self, MAX_NAME_LENGTH};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::ProjectRepo;

use super::{discard_image, remove_replaced_image, store_image};
use crate::error::{AppError, AppResult};
use crate::flash;
use crate::forms::{ProjectForm, TypedMultipart};
use crate::response::{DataResponse, FormDescriptor, FormField};
use crate::state::AppState;

const ENTITY: &str = "Project";
const LIST_PATH: &str = "/admin/projects";
const ADD_PATH: &str = "/admin/projects/add";

fn edit_path(id: DbId) -> String {
    format!("/admin/projects/{id}/edit")
}

fn validate_new(form: &ProjectForm) -> Result<(String, String), CoreError> {
    let name = content::require("name", form.name.as_deref(), Some(MAX_NAME_LENGTH))?;
    let description = content::require("description", form.description.as_deref(), None)?;
    Ok((name, description))
}

fn validate_changes(form: &ProjectForm) -> Result<(Option<String>, Option<String>), CoreError> {
    let name = content::optional("name", form.name.as_deref(), Some(MAX_NAME_LENGTH))?;
    let description = content::optional("description", form.description.as_deref(), None)?;
    Ok((name, description))
}

/// GET /admin/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /admin/projects/add
pub async fn add_form(State(state): State<AppState>) -> Json<DataResponse<FormDescriptor>> {
    Json(DataResponse {
        data: FormDescriptor {
            fields: vec![
                FormField::required("name", Some(MAX_NAME_LENGTH)),
                FormField::required("description", None),
            ],
            image_extensions: state.images.policy().allowed_extensions().to_vec(),
            max_upload_bytes: state.config.max_content_length,
        },
    })
}

/// POST /admin/projects/add
pub async fn create(
    State(state): State<AppState>,
    TypedMultipart(form): TypedMultipart<ProjectForm>,
) -> Redirect {
    let (name, description) = match validate_new(&form) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::info!(error = %e, "Rejected project submission");
            return flash::error(ADD_PATH, "invalid_input");
        }
    };

    let image = match store_image(&state.images, form.image.as_ref()).await {
        Ok(image) => image,
        Err(e) => {
            tracing::error!(error = %e, "Failed to store project image");
            return flash::error(ADD_PATH, "project_add_failed");
        }
    };

    let input = CreateProject {
        name,
        description,
        image,
    };
    match ProjectRepo::create(&state.pool, &input).await {
        Ok(project) => {
            tracing::info!(id = project.id, "Project created");
            flash::success(LIST_PATH, "project_added")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create project");
            discard_image(&state.images, input.image.as_deref()).await;
            flash::error(ADD_PATH, "project_add_failed")
        }
    }
}

/// GET /admin/projects/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /admin/projects/{id}/edit
///
/// Overwrites only the fields present in the form. A new valid image
/// replaces the stored one; the previous file is removed once the update
/// has committed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    TypedMultipart(form): TypedMultipart<ProjectForm>,
) -> AppResult<Redirect> {
    let existing = match ProjectRepo::find_by_id(&state.pool, id).await {
        Ok(Some(project)) => project,
        Ok(None) => return Err(AppError::not_found(ENTITY, id)),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to load project");
            return Ok(flash::error(LIST_PATH, "project_update_failed"));
        }
    };

    let (name, description) = match validate_changes(&form) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::info!(id, error = %e, "Rejected project update");
            return Ok(flash::error(&edit_path(id), "invalid_input"));
        }
    };

    let image = match store_image(&state.images, form.image.as_ref()).await {
        Ok(image) => image,
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to store project image");
            return Ok(flash::error(&edit_path(id), "project_update_failed"));
        }
    };

    let input = UpdateProject {
        name,
        description,
        image,
    };
    match ProjectRepo::update(&state.pool, id, &input).await {
        Ok(Some(_)) => {
            remove_replaced_image(
                &state.images,
                existing.image.as_deref(),
                input.image.as_deref(),
            )
            .await;
            tracing::info!(id, "Project updated");
            Ok(flash::success(LIST_PATH, "project_updated"))
        }
        Ok(None) => {
            discard_image(&state.images, input.image.as_deref()).await;
            Err(AppError::not_found(ENTITY, id))
        }
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to update project");
            discard_image(&state.images, input.image.as_deref()).await;
            Ok(flash::error(&edit_path(id), "project_update_failed"))
        }
    }
}

/// POST /admin/projects/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    match ProjectRepo::delete(&state.pool, id).await {
        Ok(Some(project)) => {
            if let Some(image) = project.image.as_deref() {
                state.images.remove(image).await;
            }
            tracing::info!(id, "Project deleted");
            Ok(flash::success(LIST_PATH, "project_deleted"))
        }
        Ok(None) => Err(AppError::not_found(ENTITY, id)),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to delete project");
            Ok(flash::error(LIST_PATH, "project_delete_failed"))
        }
    }
}

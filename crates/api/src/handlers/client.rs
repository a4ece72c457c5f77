//! Handlers for the `/admin/clients` resource (client testimonials).
//!
//! Writes are form posts: they answer with a flash redirect, and only an
//! unknown id escapes as an HTTP error (404).

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use folio_core::content::{self, MAX_DESIGNATION_LENGTH, MAX_NAME_LENGTH};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::client::{Client, CreateClient, UpdateClient};
use folio_db::repositories::ClientRepo;

use super::{discard_image, remove_replaced_image, store_image};
use crate::error::{AppError, AppResult};
use crate::flash;
use crate::forms::{ClientForm, TypedMultipart};
use crate::response::{DataResponse, FormDescriptor, FormField};
use crate::state::AppState;

const ENTITY: &str = "Client";
const LIST_PATH: &str = "/admin/clients";
const ADD_PATH: &str = "/admin/clients/add";

fn edit_path(id: DbId) -> String {
    format!("/admin/clients/{id}/edit")
}

/// Validated text fields of a client form: name, description, designation.
type ClientFields<T> = (T, T, T);

fn validate_new(form: &ClientForm) -> Result<ClientFields<String>, CoreError> {
    Ok((
        content::require("name", form.name.as_deref(), Some(MAX_NAME_LENGTH))?,
        content::require("description", form.description.as_deref(), None)?,
        content::require(
            "designation",
            form.designation.as_deref(),
            Some(MAX_DESIGNATION_LENGTH),
        )?,
    ))
}

fn validate_changes(form: &ClientForm) -> Result<ClientFields<Option<String>>, CoreError> {
    Ok((
        content::optional("name", form.name.as_deref(), Some(MAX_NAME_LENGTH))?,
        content::optional("description", form.description.as_deref(), None)?,
        content::optional(
            "designation",
            form.designation.as_deref(),
            Some(MAX_DESIGNATION_LENGTH),
        )?,
    ))
}

/// GET /admin/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Client>>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

/// GET /admin/clients/add
pub async fn add_form(State(state): State<AppState>) -> Json<DataResponse<FormDescriptor>> {
    Json(DataResponse {
        data: FormDescriptor {
            fields: vec![
                FormField::required("name", Some(MAX_NAME_LENGTH)),
                FormField::required("description", None),
                FormField::required("designation", Some(MAX_DESIGNATION_LENGTH)),
            ],
            image_extensions: state.images.policy().allowed_extensions().to_vec(),
            max_upload_bytes: state.config.max_content_length,
        },
    })
}

/// POST /admin/clients/add
pub async fn create(
    State(state): State<AppState>,
    TypedMultipart(form): TypedMultipart<ClientForm>,
) -> Redirect {
    let (name, description, designation) = match validate_new(&form) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::info!(error = %e, "Rejected client submission");
            return flash::error(ADD_PATH, "invalid_input");
        }
    };

    let image = match store_image(&state.images, form.image.as_ref()).await {
        Ok(image) => image,
        Err(e) => {
            tracing::error!(error = %e, "Failed to store client image");
            return flash::error(ADD_PATH, "client_add_failed");
        }
    };

    let input = CreateClient {
        name,
        description,
        designation,
        image,
    };
    match ClientRepo::create(&state.pool, &input).await {
        Ok(client) => {
            tracing::info!(id = client.id, "Client created");
            flash::success(LIST_PATH, "client_added")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create client");
            discard_image(&state.images, input.image.as_deref()).await;
            flash::error(ADD_PATH, "client_add_failed")
        }
    }
}

/// GET /admin/clients/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: client }))
}

/// POST /admin/clients/{id}/edit
///
/// Overwrites only the fields present in the form. A new valid image
/// replaces the stored one; the previous file is removed once the update
/// has committed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    TypedMultipart(form): TypedMultipart<ClientForm>,
) -> AppResult<Redirect> {
    let existing = match ClientRepo::find_by_id(&state.pool, id).await {
        Ok(Some(client)) => client,
        Ok(None) => return Err(AppError::not_found(ENTITY, id)),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to load client");
            return Ok(flash::error(LIST_PATH, "client_update_failed"));
        }
    };

    let (name, description, designation) = match validate_changes(&form) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::info!(id, error = %e, "Rejected client update");
            return Ok(flash::error(&edit_path(id), "invalid_input"));
        }
    };

    let image = match store_image(&state.images, form.image.as_ref()).await {
        Ok(image) => image,
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to store client image");
            return Ok(flash::error(&edit_path(id), "client_update_failed"));
        }
    };

    let input = UpdateClient {
        name,
        description,
        designation,
        image,
    };
    match ClientRepo::update(&state.pool, id, &input).await {
        Ok(Some(_)) => {
            remove_replaced_image(
                &state.images,
                existing.image.as_deref(),
                input.image.as_deref(),
            )
            .await;
            tracing::info!(id, "Client updated");
            Ok(flash::success(LIST_PATH, "client_updated"))
        }
        Ok(None) => {
            discard_image(&state.images, input.image.as_deref()).await;
            Err(AppError::not_found(ENTITY, id))
        }
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to update client");
            discard_image(&state.images, input.image.as_deref()).await;
            Ok(flash::error(&edit_path(id), "client_update_failed"))
        }
    }
}

/// POST /admin/clients/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    match ClientRepo::delete(&state.pool, id).await {
        Ok(Some(client)) => {
            if let Some(image) = client.image.as_deref() {
                state.images.remove(image).await;
            }
            tracing::info!(id, "Client deleted");
            Ok(flash::success(LIST_PATH, "client_deleted"))
        }
        Ok(None) => Err(AppError::not_found(ENTITY, id)),
        Err(e) => {
            tracing::error!(id, error = %e, "Failed to delete client");
            Ok(flash::error(LIST_PATH, "client_delete_failed"))
        }
    }
}

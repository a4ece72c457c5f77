//! Typed request payloads.
//!
//! Admin create/edit endpoints receive `multipart/form-data`; the body is
//! collected in full into a [`MultipartFields`] and then converted into a
//! per-endpoint struct via [`FromMultipartFields`]. Collecting the whole
//! body first means the request size limit is enforced before any file is
//! written. Public form posts use `application/x-www-form-urlencoded` and
//! plain `serde` structs.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use serde::Deserialize;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Multipart plumbing
// ---------------------------------------------------------------------------

/// A file part received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// The original file name provided by the client, if any.
    pub file_name: Option<String>,
    /// The raw file data.
    pub data: Bytes,
}

/// All parts of a multipart body. The first value wins for repeated names.
#[derive(Debug, Default)]
pub struct MultipartFields {
    text: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartFields {
    /// Consume an Axum `Multipart` extractor and collect every field.
    ///
    /// A part with a `filename` parameter is a file (even if the name is
    /// empty, as browsers send for an empty file input); anything else is
    /// text.
    pub async fn collect_from(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut fields = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(str::to_string);
            let data = field.bytes().await?;

            if file_name.is_some() {
                fields
                    .files
                    .entry(name)
                    .or_insert(UploadedFile { file_name, data });
            } else {
                let text = String::from_utf8(data.to_vec())
                    .map_err(|_| AppError::BadRequest(format!("Field '{name}' is not valid UTF-8")))?;
                fields.text.entry(name).or_insert(text);
            }
        }

        Ok(fields)
    }

    /// Take a text value for the given field name, if present.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.text.remove(name)
    }

    /// Take a file for the given field name, if present.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

/// Types that can be built from collected multipart fields.
pub trait FromMultipartFields: Sized {
    fn from_fields(fields: MultipartFields) -> Self;
}

/// Extractor that collects a multipart body into a typed payload.
pub struct TypedMultipart<T>(pub T);

impl<S, T> FromRequest<S> for TypedMultipart<T>
where
    S: Send + Sync,
    T: FromMultipartFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let fields = MultipartFields::collect_from(multipart).await?;
        Ok(TypedMultipart(T::from_fields(fields)))
    }
}

// ---------------------------------------------------------------------------
// Admin payloads
// ---------------------------------------------------------------------------

/// Body of `POST /admin/projects/add` and `POST /admin/projects/{id}/edit`.
#[derive(Debug)]
pub struct ProjectForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<UploadedFile>,
}

impl FromMultipartFields for ProjectForm {
    fn from_fields(mut fields: MultipartFields) -> Self {
        Self {
            name: fields.take_text("name"),
            description: fields.take_text("description"),
            image: fields.take_file("image"),
        }
    }
}

/// Body of `POST /admin/clients/add` and `POST /admin/clients/{id}/edit`.
#[derive(Debug)]
pub struct ClientForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub designation: Option<String>,
    pub image: Option<UploadedFile>,
}

impl FromMultipartFields for ClientForm {
    fn from_fields(mut fields: MultipartFields) -> Self {
        Self {
            name: fields.take_text("name"),
            description: fields.take_text("description"),
            designation: fields.take_text("designation"),
            image: fields.take_file("image"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public payloads
// ---------------------------------------------------------------------------

/// Body of `POST /contact`.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub city: Option<String>,
}

/// Body of `POST /subscribe`.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: Option<String>,
}

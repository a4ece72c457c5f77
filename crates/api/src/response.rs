//! Shared response envelope types for API handlers.
//!
//! All page-style responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Description of an admin form, returned by the `GET .../add` pages.
#[derive(Debug, Serialize)]
pub struct FormDescriptor {
    pub fields: Vec<FormField>,
    /// Accepted image extensions for the optional `image` file part.
    pub image_extensions: Vec<String>,
    /// Maximum total request size in bytes.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub required: bool,
    /// `None` for unbounded text.
    pub max_length: Option<usize>,
}

impl FormField {
    pub fn required(name: &'static str, max_length: Option<usize>) -> Self {
        Self {
            name,
            required: true,
            max_length,
        }
    }
}

//! Client (testimonial) entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub designation: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub description: String,
    pub designation: String,
    pub image: Option<String>,
}

/// DTO for updating an existing client. `None` fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub description: Option<String>,
    pub designation: Option<String>,
    pub image: Option<String>,
}

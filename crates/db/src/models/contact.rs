//! Contact form submission model.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub created_at: Timestamp,
}

/// DTO for recording a contact form submission.
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
}

//! Repository for the `contacts` table.

use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::finish_tx;
use crate::models::contact::{Contact, CreateContact};

const COLUMNS: &str = "id, full_name, email, mobile, city, created_at";

/// Provides insert, list and delete for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Record a contact form submission.
    pub async fn create(pool: &SqlitePool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (full_name, email, mobile, city)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Contact>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.mobile)
            .bind(&input.city)
            .fetch_one(&mut *tx)
            .await;
        finish_tx(tx, result).await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Permanently delete a submission. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map(|r| r.rows_affected() > 0);
        finish_tx(tx, result).await
    }
}

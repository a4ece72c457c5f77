//! Repository for the `clients` table.

use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::finish_tx;
use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, designation, image, created_at";

/// Provides CRUD operations for client testimonials.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, description, designation, image)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.designation)
            .bind(&input.image)
            .fetch_one(&mut *tx)
            .await;
        finish_tx(tx, result).await
    }

    /// Find a client by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = ?1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE(?2, name),
                description = COALESCE(?3, description),
                designation = COALESCE(?4, designation),
                image = COALESCE(?5, image)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.designation)
            .bind(&input.image)
            .fetch_optional(&mut *tx)
            .await;
        finish_tx(tx, result).await
    }

    /// Permanently delete a client, returning the removed row.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("DELETE FROM clients WHERE id = ?1 RETURNING {COLUMNS}");
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await;
        finish_tx(tx, result).await
    }
}

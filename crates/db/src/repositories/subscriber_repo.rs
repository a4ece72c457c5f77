//! Repository for the `subscribers` table.
//!
//! Email uniqueness is enforced by the `uq_subscribers_email` constraint;
//! [`SubscriberRepo::find_by_email`] is only a fast pre-check.

use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::finish_tx;
use crate::models::subscriber::Subscriber;

const COLUMNS: &str = "id, email, created_at";

/// Provides insert, lookup, list and delete for newsletter subscribers.
pub struct SubscriberRepo;

impl SubscriberRepo {
    /// Insert a subscriber. Fails with a unique violation if the email is
    /// already present.
    pub async fn create(pool: &SqlitePool, email: &str) -> Result<Subscriber, sqlx::Error> {
        let query = format!("INSERT INTO subscribers (email) VALUES (?1) RETURNING {COLUMNS}");
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_one(&mut *tx)
            .await;
        finish_tx(tx, result).await
    }

    /// Find a subscriber by exact email.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscribers WHERE email = ?1");
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all subscribers, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscribers ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Subscriber>(&query).fetch_all(pool).await
    }

    /// Permanently delete a subscriber. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM subscribers WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map(|r| r.rows_affected() > 0);
        finish_tx(tx, result).await
    }
}

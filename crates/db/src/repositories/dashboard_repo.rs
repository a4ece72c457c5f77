//! Aggregate counts for the admin dashboard.

use sqlx::SqlitePool;

use crate::models::dashboard::ContentCounts;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Count the rows of every content table in a single round trip.
    pub async fn counts(pool: &SqlitePool) -> Result<ContentCounts, sqlx::Error> {
        sqlx::query_as::<_, ContentCounts>(
            "SELECT
                (SELECT COUNT(*) FROM projects) AS projects,
                (SELECT COUNT(*) FROM clients) AS clients,
                (SELECT COUNT(*) FROM contacts) AS contacts,
                (SELECT COUNT(*) FROM subscribers) AS subscribers",
        )
        .fetch_one(pool)
        .await
    }
}

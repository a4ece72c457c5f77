//! Admin dashboard aggregate.

use serde::Serialize;
use sqlx::FromRow;

/// Row counts for each content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct ContentCounts {
    pub projects: i64,
    pub clients: i64,
    pub contacts: i64,
    pub subscribers: i64,
}

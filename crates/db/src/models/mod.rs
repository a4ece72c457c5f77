//! Domain model structs and DTOs.
//!
//! Each entity module contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial edits, where the
//!   entity is editable

pub mod client;
pub mod contact;
pub mod dashboard;
pub mod project;
pub mod subscriber;

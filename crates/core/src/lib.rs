pub mod content;
pub mod error;
pub mod types;
pub mod upload;

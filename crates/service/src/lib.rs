//! Service layer for the record store.
//! - Separates request semantics from data access.
//! - Reuses the entity definitions in the `models` crate.
//! - Owns the error taxonomy the HTTP layer maps to status codes.

pub mod errors;
pub mod record;

pub use record::{RecordRepository, RecordService};

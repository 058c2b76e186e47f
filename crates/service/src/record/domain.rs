use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Stored record as returned to callers.
pub type Record = models::record::Model;

/// Create input. Both fields are required; an `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub stage: String,
}

/// Update input. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.stage.is_none()
    }
}

const HYPHENATED_LEN: usize = 36;

/// Parse an identifier taken from a path segment. Only the hyphenated form
/// the service hands out is accepted; braced, urn, simple and padded
/// spellings of the same id are rejected.
pub fn parse_record_id(raw: &str) -> Result<Uuid, ServiceError> {
    let invalid = || ServiceError::Validation(format!("invalid record id: {raw}"));
    if raw.len() != HYPHENATED_LEN {
        return Err(invalid());
    }
    Uuid::parse_str(raw).map_err(|_| invalid())
}

use std::sync::Arc;

use service::record::{RecordRepository, RecordService};

/// Shared handler state. The record service owns the one storage handle.
#[derive(Clone)]
pub struct ServerState {
    pub records: RecordService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { records: RecordService::new(repo) }
    }
}

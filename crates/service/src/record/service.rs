use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{parse_record_id, NewRecord, Record, RecordPatch};
use super::repository::RecordRepository;
use crate::errors::ServiceError;

/// Application service for records, independent of the web framework.
/// Every operation validates its input and then issues at most one
/// repository call.
#[derive(Clone)]
pub struct RecordService {
    repo: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self { Self { repo } }

    /// Store a new record; the repository assigns its id.
    ///
    /// # Examples
    /// ```
    /// use service::record::{repository::memory::InMemoryRecordRepository, NewRecord, RecordService};
    /// use std::sync::Arc;
    /// let svc = RecordService::new(Arc::new(InMemoryRecordRepository::default()));
    /// let input = NewRecord { name: "Agumon".into(), stage: "Baby".into() };
    /// let rec = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(rec.name, "Agumon");
    /// assert_eq!(rec.stage, "Baby");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, stage = %input.stage))]
    pub async fn create(&self, input: NewRecord) -> Result<Record, ServiceError> {
        let rec = self.repo.insert(&input).await?;
        info!(id = %rec.id, "record_created");
        Ok(rec)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, raw_id: &str) -> Result<Record, ServiceError> {
        let id = parse_record_id(raw_id)?;
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("record"))
    }

    /// Apply the fields present in `patch` and echo the patch back.
    /// An unknown id matches nothing and is not an error.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, raw_id: &str, patch: RecordPatch) -> Result<RecordPatch, ServiceError> {
        let id = parse_record_id(raw_id)?;
        if patch.is_empty() {
            debug!(%id, "empty patch; nothing to write");
            return Ok(patch);
        }
        let matched = self.repo.update(id, &patch).await?;
        info!(%id, matched, "record_updated");
        Ok(patch)
    }

    /// Remove the record if present. Returns how many records were removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<u64, ServiceError> {
        let id = parse_record_id(raw_id)?;
        let removed = self.repo.delete(id).await?;
        info!(%id, removed, "record_deleted");
        Ok(removed)
    }
}

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::domain::{NewRecord, Record, RecordPatch};
use crate::errors::ServiceError;

/// Persistence abstraction for records. Each method maps to one storage call.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn insert(&self, input: &NewRecord) -> Result<Record, ServiceError>;
    async fn list(&self) -> Result<Vec<Record>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<Record>, ServiceError>;
    /// Returns the number of records matched; zero is not an error.
    async fn update(&self, id: Uuid, patch: &RecordPatch) -> Result<u64, ServiceError>;
    /// Returns the number of records removed; zero is not an error.
    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmRecordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn insert(&self, input: &NewRecord) -> Result<Record, ServiceError> {
        Ok(models::record::create(&self.db, &input.name, &input.stage).await?)
    }

    async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(models::record::list_all(&self.db).await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Record>, ServiceError> {
        Ok(models::record::find_by_id(&self.db, id).await?)
    }

    async fn update(&self, id: Uuid, patch: &RecordPatch) -> Result<u64, ServiceError> {
        Ok(models::record::update_fields(&self.db, id, patch.name.as_deref(), patch.stage.as_deref()).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
        Ok(models::record::delete_by_id(&self.db, id).await?)
    }
}

/// In-memory repository for tests and doc examples. Keeps insertion order.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryRecordRepository {
        records: RwLock<Vec<Record>>,
    }

    #[async_trait]
    impl RecordRepository for InMemoryRecordRepository {
        async fn insert(&self, input: &NewRecord) -> Result<Record, ServiceError> {
            let rec = Record { id: Uuid::new_v4(), name: input.name.clone(), stage: input.stage.clone() };
            self.records.write().await.push(rec.clone());
            Ok(rec)
        }

        async fn list(&self) -> Result<Vec<Record>, ServiceError> {
            Ok(self.records.read().await.clone())
        }

        async fn find(&self, id: Uuid) -> Result<Option<Record>, ServiceError> {
            Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
        }

        async fn update(&self, id: Uuid, patch: &RecordPatch) -> Result<u64, ServiceError> {
            let mut records = self.records.write().await;
            let Some(rec) = records.iter_mut().find(|r| r.id == id) else { return Ok(0) };
            if let Some(name) = &patch.name { rec.name = name.clone(); }
            if let Some(stage) = &patch.stage { rec.stage = stage.clone(); }
            Ok(1)
        }

        async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|r| r.id != id);
            Ok((before - records.len()) as u64)
        }
    }
}

//! Record module: domain inputs, repository abstraction, application service.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{parse_record_id, NewRecord, Record, RecordPatch};
pub use repository::{RecordRepository, SeaOrmRecordRepository};
pub use service::RecordService;

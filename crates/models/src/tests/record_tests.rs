use anyhow::Result;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{db, record};

/// Connect with `DATABASE_URL`/`DATABASE_NAME` and provision the table.
/// Returns `None` when no database is configured so the suite can be skipped.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let _ = dotenvy::dotenv();
    let mut cfg = configs::AppConfig::default();
    cfg.apply_env(|k| std::env::var(k).ok())?;
    if cfg.database.validate().is_err() {
        eprintln!("skip: DATABASE_URL/DATABASE_NAME not configured");
        return Ok(None);
    }
    let db = db::connect(&cfg.database).await?;
    db::ensure_schema(&db).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_record_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("Agumon_{}", Uuid::new_v4());
    let created = record::create(&db, &name, "Baby").await?;
    assert_eq!(created.name, name);
    assert_eq!(created.stage, "Baby");

    let found = record::find_by_id(&db, created.id).await?.expect("record exists");
    assert_eq!(found, created);

    let all = record::list_all(&db).await?;
    assert!(all.iter().any(|r| r.id == created.id));

    let matched = record::update_fields(&db, created.id, None, Some("Rookie")).await?;
    assert_eq!(matched, 1);
    let found = record::find_by_id(&db, created.id).await?.expect("record exists");
    assert_eq!(found.name, name);
    assert_eq!(found.stage, "Rookie");

    assert_eq!(record::delete_by_id(&db, created.id).await?, 1);
    assert!(record::find_by_id(&db, created.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_unknown_id_matches_nothing() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let id = Uuid::new_v4();
    assert!(record::find_by_id(&db, id).await?.is_none());
    assert_eq!(record::update_fields(&db, id, Some("X"), Some("Y")).await?, 0);
    assert_eq!(record::delete_by_id(&db, id).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    db::ensure_schema(&db).await?;
    db::ensure_schema(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_update_without_fields_is_rejected() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let err = record::update_fields(&db, Uuid::new_v4(), None, None).await.unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::Validation(_)));
    Ok(())
}

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

/// Serve the real app over a live database on an ephemeral port.
/// Returns `None` when no database is configured.
async fn start_server() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let _ = dotenvy::dotenv();
    let mut cfg = configs::AppConfig::default();
    cfg.apply_env(|k| std::env::var(k).ok())?;
    if cfg.database.validate().is_err() {
        eprintln!("DATABASE_URL/DATABASE_NAME missing; skip e2e tests.");
        return Ok(None);
    }

    let db = server::startup::init_storage(&cfg.database).await?;
    let app = server::startup::build_app(db);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(Some(TestApp { base_url: format!("http://{}", addr) }))
}

#[tokio::test]
async fn e2e_record_scenario() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let c = reqwest::Client::new();
    let url = |path: &str| format!("{}{}", app.base_url, path);

    let res = c.post(url("/records")).json(&json!({"name": "Agumon", "stage": "Baby"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_str().expect("id").to_string();
    assert_eq!(created["name"], "Agumon");

    let res = c.get(url(&format!("/records/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let all: Vec<Value> = c.get(url("/records")).send().await?.json().await?;
    assert!(all.iter().any(|r| r["id"] == id.as_str()));

    let res = c.put(url(&format!("/records/{id}"))).json(&json!({"name": "Agumon", "stage": "Rookie"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let found: Value = c.get(url(&format!("/records/{id}"))).send().await?.json().await?;
    assert_eq!(found["stage"], "Rookie");

    let res = c.delete(url(&format!("/records/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(url(&format!("/records/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(url("/records/not-an-id")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::record::{NewRecord, Record, RecordPatch};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/records", tag = "records",
    request_body = crate::openapi::NewRecordDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RecordDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), JsonApiError> {
    let Json(input) = payload?;
    let rec = state.records.create(input).await?;
    Ok((StatusCode::CREATED, Json(rec)))
}

#[utoipa::path(
    get, path = "/records", tag = "records",
    responses(
        (status = 200, description = "All records", body = [crate::openapi::RecordDoc]),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Record>>, JsonApiError> {
    let all = state.records.list().await?;
    info!(count = all.len(), "list records");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/records/{id}", tag = "records",
    params(("id" = String, Path, description = "Record ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RecordDoc),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Record>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.records.get(&id).await?))
}

#[utoipa::path(
    put, path = "/records/{id}", tag = "records",
    params(("id" = String, Path, description = "Record ID")),
    request_body = crate::openapi::RecordPatchDoc,
    responses(
        (status = 200, description = "Input echoed back", body = crate::openapi::RecordPatchDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<RecordPatch>, JsonRejection>,
) -> Result<Json<RecordPatch>, JsonApiError> {
    let Path(id) = path?;
    // id is checked before the body so a bad id always reports as such
    service::record::parse_record_id(&id)?;
    let Json(patch) = payload?;
    Ok(Json(state.records.update(&id, patch).await?))
}

#[utoipa::path(
    delete, path = "/records/{id}", tag = "records",
    params(("id" = String, Path, description = "Record ID")),
    responses(
        (status = 200, description = "Deleted (also when nothing matched)", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = path?;
    state.records.delete(&id).await?;
    Ok(Json(Message::new("record deleted")))
}

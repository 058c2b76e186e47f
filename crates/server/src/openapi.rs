use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RecordDoc {
    /// Storage-assigned identifier
    pub id: String,
    pub name: String,
    pub stage: String,
}

#[derive(ToSchema)]
pub struct NewRecordDoc { pub name: String, pub stage: String }

/// Only the fields present are written.
#[derive(ToSchema)]
pub struct RecordPatchDoc { pub name: Option<String>, pub stage: Option<String> }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::records::create,
        crate::routes::records::list,
        crate::routes::records::get,
        crate::routes::records::update,
        crate::routes::records::delete,
    ),
    components(
        schemas(
            HealthResponse,
            RecordDoc,
            NewRecordDoc,
            RecordPatchDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "records", description = "Incubating item records"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_record_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/records"));
        assert!(paths.iter().any(|p| p.as_str() == "/records/{id}"));
    }
}

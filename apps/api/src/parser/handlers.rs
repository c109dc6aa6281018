use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::errors::AppError;
use crate::models::resume::{ExtractedFields, FileType, ParsedResumeRow};
use crate::parser::extract::{extract_fields, RESUME_CONFIDENCE};
use crate::parser::normalize::{declared_extension, normalize, SpooledUpload};
use crate::parser::store::{self, SaveResumeParams};
use crate::state::AppState;

/// Name of the multipart field carrying the resume file.
const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub message: String,
    pub parsed_data: ExtractedFields,
    pub resume_id: Uuid,
}

/// POST /api/parser/parse-resume
///
/// Parsing is all-or-nothing: the spooled temp file is removed on every exit
/// path, and no partial extraction is persisted on failure.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    auth: AuthContext,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let (file_name, bytes) = read_upload_field(&mut multipart).await?;

    if bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(
            "File too large. Maximum size is 5MB.".to_string(),
        ));
    }

    let file_type = FileType::from_extension(&declared_extension(&file_name)?)?;

    // Spool to a temp file owned by this request; dropped (deleted) on every
    // exit path below.
    let spool = SpooledUpload::write(&state.config.upload_dir, &bytes)?;
    let raw = spool.read()?;

    let text = normalize(&raw, file_type)?;
    let fields = extract_fields(&text, &state.vocabulary);

    let resume_id = store::save_parsed_resume(
        &state.db,
        SaveResumeParams {
            user_id: auth.user_id,
            original_file_name: &file_name,
            fields: &fields,
            confidence: RESUME_CONFIDENCE,
            file_size: bytes.len() as i64,
            file_type,
        },
    )
    .await?;

    info!(
        "Parsed resume {file_name} for user {} ({} bytes)",
        auth.user_id,
        bytes.len()
    );

    Ok(Json(ParseResumeResponse {
        message: "Resume parsed successfully".to_string(),
        parsed_data: fields,
        resume_id,
    }))
}

/// GET /api/parser/parsed-resume
pub async fn handle_get_parsed_resume(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<ParsedResumeRow>, AppError> {
    let resume = store::most_recent_for(&state.db, auth.user_id)
        .await?
        .ok_or(AppError::ResumeNotFound)?;
    Ok(Json(resume))
}

async fn read_upload_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .ok_or_else(|| AppError::Validation("Upload is missing a file name".to_string()))?
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        return Ok((file_name, bytes));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

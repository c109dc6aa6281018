//! Persistence for parse events. Rows are append-only: a new upload inserts a
//! new row and the most recent row per user is the active profile.

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{ExtractedFields, FileType, ParsedResumeRow};
use crate::models::user::CandidateInfo;

pub struct SaveResumeParams<'a> {
    pub user_id: Uuid,
    pub original_file_name: &'a str,
    pub fields: &'a ExtractedFields,
    pub confidence: f64,
    pub file_size: i64,
    pub file_type: FileType,
}

/// Inserts one parse event and returns its id. Never updates existing rows.
pub async fn save_parsed_resume(
    pool: &PgPool,
    params: SaveResumeParams<'_>,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO parsed_resumes
            (id, user_id, original_file_name, extracted_fields, confidence, file_size, file_type)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(params.user_id)
    .bind(params.original_file_name)
    .bind(Json(params.fields))
    .bind(params.confidence)
    .bind(params.file_size)
    .bind(params.file_type.as_str())
    .execute(pool)
    .await?;

    info!(
        "Saved parsed resume {id} for user {} ({} skills)",
        params.user_id,
        params.fields.skills.len()
    );
    Ok(id)
}

/// The caller's active profile: the most recent parse event, if any.
pub async fn most_recent_for(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ParsedResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ParsedResumeRow>(
        r#"
        SELECT * FROM parsed_resumes
        WHERE user_id = $1
        ORDER BY parsed_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[derive(sqlx::FromRow)]
struct CandidateResumeRow {
    id: Uuid,
    user_id: Uuid,
    original_file_name: String,
    extracted_fields: Json<ExtractedFields>,
    confidence: f64,
    file_size: i64,
    file_type: String,
    parsed_at: chrono::DateTime<chrono::Utc>,
    name: String,
    email: String,
}

/// The most recent parse event per candidate, joined with candidate identity.
pub async fn all_most_recent(
    pool: &PgPool,
) -> Result<Vec<(CandidateInfo, ParsedResumeRow)>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CandidateResumeRow>(
        r#"
        SELECT DISTINCT ON (r.user_id)
            r.id, r.user_id, r.original_file_name, r.extracted_fields,
            r.confidence, r.file_size, r.file_type, r.parsed_at,
            u.name, u.email
        FROM parsed_resumes r
        JOIN users u ON u.id = r.user_id
        ORDER BY r.user_id, r.parsed_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            (
                CandidateInfo {
                    id: row.user_id,
                    name: row.name,
                    email: row.email,
                },
                ParsedResumeRow {
                    id: row.id,
                    user_id: row.user_id,
                    original_file_name: row.original_file_name,
                    extracted_fields: row.extracted_fields,
                    confidence: row.confidence,
                    file_size: row.file_size,
                    file_type: row.file_type,
                    parsed_at: row.parsed_at,
                },
            )
        })
        .collect())
}

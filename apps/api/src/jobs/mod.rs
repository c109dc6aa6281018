//! Read-only access to the job corpus, plus application submission.
//!
//! Listings CRUD belongs to the job-board service; the matching core only
//! selects from the active corpus.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{ApplicationRow, JobRow};

pub async fn list_active_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE is_active = TRUE ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn has_applied(pool: &PgPool, job_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let existing: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM applications WHERE job_id = $1 AND user_id = $2")
            .bind(job_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(existing.is_some())
}

pub async fn insert_application(
    pool: &PgPool,
    job_id: Uuid,
    user_id: Uuid,
    cover_letter: Option<&str>,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (id, job_id, user_id, cover_letter)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job_id)
    .bind(user_id)
    .bind(cover_letter)
    .fetch_one(pool)
    .await
}

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::errors::AppError;
use crate::jobs;
use crate::matching::ranking::{paginate, rank_candidates, rank_jobs, PageParams};
use crate::matching::ranking::{ScoredCandidate, ScoredJob};
use crate::models::job::ApplicationRow;
use crate::parser::store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendationsResponse {
    pub jobs: Vec<ScoredJob>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecommendationsResponse {
    pub candidates: Vec<ScoredCandidate>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total: usize,
}

/// GET /api/matching/recommendations
///
/// Ranks the full active job corpus against the caller's most recent parsed
/// resume. All-or-nothing: a missing resume fails the whole request.
pub async fn handle_job_recommendations(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(params): Query<PageParams>,
) -> Result<Json<JobRecommendationsResponse>, AppError> {
    let resume = store::most_recent_for(&state.db, auth.user_id)
        .await?
        .ok_or(AppError::ResumeNotFound)?;

    let jobs = jobs::list_active_jobs(&state.db).await?;
    let ranked = rank_jobs(
        &resume.extracted_fields.skills,
        &resume.extracted_fields.summary,
        jobs,
    );

    let page = paginate(ranked, &params);
    Ok(Json(JobRecommendationsResponse {
        jobs: page.items,
        total_pages: page.total_pages,
        current_page: page.current_page,
        total: page.total,
    }))
}

/// GET /api/matching/jobs/:job_id/candidates
///
/// Only the job's owner or an admin may rank candidates for it.
pub async fn handle_candidate_recommendations(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(job_id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> Result<Json<CandidateRecommendationsResponse>, AppError> {
    let job = jobs::get_job(&state.db, job_id)
        .await?
        .ok_or(AppError::JobNotFound)?;

    if job.created_by != auth.user_id && !auth.is_admin() {
        return Err(AppError::NotAuthorized);
    }

    let resumes = store::all_most_recent(&state.db).await?;
    let ranked = rank_candidates(&job, resumes);

    let page = paginate(ranked, &params);
    Ok(Json(CandidateRecommendationsResponse {
        candidates: page.items,
        total_pages: page.total_pages,
        current_page: page.current_page,
        total: page.total,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub message: String,
    pub application: ApplicationRow,
}

/// POST /api/matching/jobs/:job_id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(job_id): Path<Uuid>,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplyResponse>), AppError> {
    jobs::get_job(&state.db, job_id)
        .await?
        .ok_or(AppError::JobNotFound)?;

    if jobs::has_applied(&state.db, job_id, auth.user_id).await? {
        return Err(AppError::Validation(
            "Already applied for this job".to_string(),
        ));
    }

    let application =
        jobs::insert_application(&state.db, job_id, auth.user_id, req.cover_letter.as_deref())
            .await?;

    info!("User {} applied for job {job_id}", auth.user_id);

    Ok((
        StatusCode::CREATED,
        Json(ApplyResponse {
            message: "Application submitted successfully".to_string(),
            application,
        }),
    ))
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::parser::handlers as parser;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Parser API
        .route("/api/parser/parse-resume", post(parser::handle_parse_resume))
        .route(
            "/api/parser/parsed-resume",
            get(parser::handle_get_parsed_resume),
        )
        // Matching API
        .route(
            "/api/matching/recommendations",
            get(matching::handle_job_recommendations),
        )
        .route(
            "/api/matching/jobs/:job_id/candidates",
            get(matching::handle_candidate_recommendations),
        )
        .route(
            "/api/matching/jobs/:job_id/apply",
            post(matching::handle_apply),
        )
        .with_state(state)
}

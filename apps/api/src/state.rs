use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::parser::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Controlled skill vocabulary injected into the field extractor.
    /// Immutable for the lifetime of the process; tests construct their own.
    pub vocabulary: Arc<SkillVocabulary>,
}

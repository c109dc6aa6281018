use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting. Read-only to the matching core: listings CRUD lives in the
/// job-board service and this API only selects from the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub created_by: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    /// Skill-like requirement strings, matched against extracted resume skills.
    pub requirements: Vec<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    /// Free-text side of the job for word-set similarity.
    pub fn match_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.company)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub user_id: Uuid,
    pub cover_letter: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

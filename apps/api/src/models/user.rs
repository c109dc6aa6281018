use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of a user exposed in candidate-ranking responses. The full user
/// record (and the caller's role) is owned by the platform's auth service;
/// this core only sees identity headers and this join projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

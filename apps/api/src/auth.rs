//! Identity context supplied by the upstream gateway.
//!
//! The matching core performs no authentication itself: it trusts the
//! `x-user-id` / `x-user-role` headers set by the auth layer in front of it
//! and only does role-shaped branching (e.g. owner-or-admin checks).

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Candidate,
    Employer,
    Admin,
}

impl UserRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "candidate" => Some(UserRole::Candidate),
            "employer" => Some(UserRole::Employer),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Candidate => "candidate",
            UserRole::Employer => "employer",
            UserRole::Admin => "admin",
        }
    }
}

/// The authenticated caller, extracted from trusted gateway headers.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or(AppError::Unauthorized)?;

        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(UserRole::parse)
            .ok_or(AppError::Unauthorized)?;

        Ok(AuthContext { user_id, role })
    }
}

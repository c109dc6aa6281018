use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

/// Declared upload type. Closed set; anything else is rejected before spooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Doc,
    Docx,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Result<Self, AppError> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(FileType::Pdf),
            "doc" => Ok(FileType::Doc),
            "docx" => Ok(FileType::Docx),
            other => Err(AppError::UnsupportedFileType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Doc => "doc",
            FileType::Docx => "docx",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// Contact details are a known extraction gap: the heuristics never fill them,
/// but the shape is part of the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub address: String,
    pub linkedin: String,
}

/// Structured fields derived from one resume upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub contact: ContactInfo,
    pub summary: String,
}

/// One parse event. Append-only: later uploads supersede earlier rows and the
/// most recent row per user is the active profile for matching.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_file_name: String,
    pub extracted_fields: Json<ExtractedFields>,
    /// Fixed heuristic constant, not computed from extraction quality.
    pub confidence: f64,
    pub file_size: i64,
    pub file_type: String,
    pub parsed_at: DateTime<Utc>,
}

//! Text normalization for uploaded resume files.
//!
//! All three declared file types currently share one decode path: the bytes
//! are treated as UTF-8 text and reduced to trimmed, non-empty lines. Real
//! PDF/DOC binary extraction is an open gap; the type tag is kept in the
//! signature so a format-aware decoder can slot in without touching callers.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::AppError;
use crate::models::resume::FileType;

/// Decodes raw file bytes into a single normalized text string: trimmed lines,
/// empties dropped, rejoined with `\n`.
pub fn normalize(bytes: &[u8], _file_type: FileType) -> Result<String, AppError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| AppError::ExtractionFailure("resume bytes are not valid UTF-8".to_string()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Returns the lowercased extension of an uploaded file name.
pub fn declared_extension(file_name: &str) -> Result<String, AppError> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .ok_or_else(|| AppError::UnsupportedFileType(file_name.to_string()))
}

/// A resume upload spooled to a temporary file for the duration of one parse
/// request.
///
/// The backing file is deleted exactly once when the spool is dropped, which
/// covers every exit path: success, extraction failure, and persistence
/// failure alike.
pub struct SpooledUpload {
    file: NamedTempFile,
}

impl SpooledUpload {
    pub fn write(dir: &Path, bytes: &[u8]) -> Result<Self, AppError> {
        let mut file = NamedTempFile::new_in(dir)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to spool upload: {e}")))?;
        file.write_all(bytes)
            .and_then(|_| file.flush())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to spool upload: {e}")))?;
        Ok(SpooledUpload { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the spooled bytes back. The contract with the file source is
    /// read-once-before-cleanup; cleanup itself happens on drop.
    pub fn read(&self) -> Result<Vec<u8>, AppError> {
        fs::read(self.file.path()).map_err(|e| {
            AppError::ExtractionFailure(format!("failed to read spooled upload: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_blank_lines() {
        let raw = b"  John Doe  \n\n   \nSoftware Engineer\n\tPython, SQL\t\n";
        let text = normalize(raw, FileType::Pdf).unwrap();
        assert_eq!(text, "John Doe\nSoftware Engineer\nPython, SQL");
    }

    #[test]
    fn test_normalize_is_identical_across_file_types() {
        let raw = b"line one\n  line two  ";
        let pdf = normalize(raw, FileType::Pdf).unwrap();
        let doc = normalize(raw, FileType::Doc).unwrap();
        let docx = normalize(raw, FileType::Docx).unwrap();
        assert_eq!(pdf, doc);
        assert_eq!(doc, docx);
    }

    #[test]
    fn test_normalize_empty_input_yields_empty_text() {
        assert_eq!(normalize(b"", FileType::Docx).unwrap(), "");
        assert_eq!(normalize(b"\n\n  \n", FileType::Doc).unwrap(), "");
    }

    #[test]
    fn test_normalize_rejects_invalid_utf8() {
        let raw = [0x66, 0x6f, 0xff, 0xfe, 0x6f];
        assert!(matches!(
            normalize(&raw, FileType::Pdf),
            Err(AppError::ExtractionFailure(_))
        ));
    }

    #[test]
    fn test_declared_extension() {
        assert_eq!(declared_extension("resume.PDF").unwrap(), "pdf");
        assert_eq!(declared_extension("my.resume.docx").unwrap(), "docx");
        assert!(matches!(
            declared_extension("resume"),
            Err(AppError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_spool_is_deleted_after_successful_parse() {
        let dir = std::env::temp_dir();
        let path;
        {
            let spool = SpooledUpload::write(&dir, b"Jane Doe\nPython developer").unwrap();
            path = spool.path().to_path_buf();
            assert!(path.exists());
            let bytes = spool.read().unwrap();
            normalize(&bytes, FileType::Pdf).unwrap();
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_spool_is_deleted_after_extraction_failure() {
        let dir = std::env::temp_dir();
        let path;
        {
            let spool = SpooledUpload::write(&dir, &[0xff, 0xfe]).unwrap();
            path = spool.path().to_path_buf();
            let bytes = spool.read().unwrap();
            assert!(normalize(&bytes, FileType::Doc).is_err());
        }
        assert!(!path.exists());
    }
}

//! Field extraction heuristics over normalized resume text.
//!
//! Extraction never fails on a missing field: every heuristic degrades to an
//! empty default. The output is a deterministic function of the text and the
//! injected skill vocabulary.

use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry, ExtractedFields};
use crate::parser::vocabulary::SkillVocabulary;

/// Fixed heuristic confidence attached to every parse, independent of how many
/// fields were actually found.
pub const RESUME_CONFIDENCE: f64 = 0.8;

/// The stored summary is a verbatim prefix of the normalized text, not
/// word-boundary aware.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// A line containing any of these (lowercased) starts an education entry.
const EDUCATION_MARKERS: [&str; 6] = [
    "bachelor",
    "master",
    "phd",
    "university",
    "college",
    "degree",
];

/// The experience section begins after the first occurrence of any of these.
const EXPERIENCE_DELIMITERS: [&str; 3] = ["experience", "work", "employment"];

pub fn extract_fields(text: &str, vocabulary: &SkillVocabulary) -> ExtractedFields {
    ExtractedFields {
        skills: extract_skills(text, vocabulary),
        education: extract_education(text),
        experience: extract_experience(text),
        // Known gap: the heuristics never recover contact details.
        contact: ContactInfo::default(),
        summary: summarize(text),
    }
}

/// Case-insensitive containment test of each vocabulary entry against the full
/// text. The result preserves vocabulary order, not order of appearance.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let lower_text = text.to_lowercase();
    vocabulary
        .skills()
        .iter()
        .filter(|skill| lower_text.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// A marker line yields (degree = line i, institution = line i+1, year = line
/// i+2), with out-of-range lines degrading to empty strings. No deduplication.
fn extract_education(text: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut education = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if EDUCATION_MARKERS.iter().any(|m| lower.contains(m)) {
            education.push(EducationEntry {
                degree: line.to_string(),
                institution: lines.get(i + 1).copied().unwrap_or("").to_string(),
                year: lines.get(i + 2).copied().unwrap_or("").to_string(),
            });
        }
    }

    education
}

/// Scan state for experience extraction: either no entry is open, or one entry
/// is being filled field by field.
enum ExperienceScan {
    Idle,
    Open(ExperienceEntry),
}

fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let Some(section) = experience_section(text) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut scan = ExperienceScan::Idle;

    for line in section.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_entry_start(line) {
            if let ExperienceScan::Open(entry) = scan {
                if !entry.title.is_empty() {
                    entries.push(entry);
                }
            }
            scan = ExperienceScan::Open(ExperienceEntry {
                title: line.to_string(),
                ..Default::default()
            });
        } else if let ExperienceScan::Open(entry) = &mut scan {
            // Fixed fill order: company, then duration, then description.
            if entry.company.is_empty() {
                entry.company = line.to_string();
            } else if entry.duration.is_empty() {
                entry.duration = line.to_string();
            } else {
                if !entry.description.is_empty() {
                    entry.description.push(' ');
                }
                entry.description.push_str(line);
            }
        }
    }

    if let ExperienceScan::Open(entry) = scan {
        if !entry.title.is_empty() {
            entries.push(entry);
        }
    }

    entries
}

/// Text following the first case-insensitive occurrence of an experience
/// delimiter, or `None` when no delimiter occurs.
fn experience_section(text: &str) -> Option<&str> {
    EXPERIENCE_DELIMITERS
        .iter()
        .filter_map(|delim| find_ascii_ci(text, delim).map(|at| (at, delim.len())))
        .min_by_key(|(at, _)| *at)
        .map(|(at, len)| &text[at + len..])
}

/// An entry-start line contains `@` or the standalone token `at`.
fn is_entry_start(line: &str) -> bool {
    line.contains('@') || line.split_whitespace().any(|token| token == "at")
}

fn summarize(text: &str) -> String {
    text.chars().take(SUMMARY_MAX_CHARS).collect()
}

/// Byte-wise ASCII-case-insensitive substring search. The needles are ASCII,
/// so a returned offset is always a char boundary in `haystack`.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

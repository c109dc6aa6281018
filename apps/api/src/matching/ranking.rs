//! Ranking and pagination over scored candidate/job sets.
//!
//! Every call rescoring the full corpus is deliberate at current scale: the
//! inputs are immutable at read time, so concurrent requests need no locking
//! and no incremental index is maintained.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::score_match;
use crate::models::job::JobRow;
use crate::models::resume::ParsedResumeRow;
use crate::models::user::CandidateInfo;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// One-indexed pagination query parameters, defaulting to page 1, limit 10.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Clamped to 1-indexed, non-zero values.
    fn page(&self) -> usize {
        self.page.max(1) as usize
    }

    fn limit(&self) -> usize {
        self.limit.max(1) as usize
    }
}

/// One page out of a ranked set.
#[derive(Debug)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total: usize,
}

/// Takes the one-indexed page of size `limit` starting at `(page-1)*limit`.
/// `total_pages = ceil(total / limit)`.
pub fn paginate<T>(items: Vec<T>, params: &PageParams) -> PageSlice<T> {
    let total = items.len();
    let limit = params.limit();
    let total_pages = total.div_ceil(limit) as u32;

    let start = (params.page() - 1).saturating_mul(limit).min(total);
    let end = (start + limit).min(total);
    let items = items.into_iter().skip(start).take(end - start).collect();

    PageSlice {
        items,
        total_pages,
        current_page: params.page() as u32,
        total,
    }
}

/// A job posting annotated with its match against one candidate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobRow,
    pub match_score: u32,
    pub skill_match: u32,
    pub text_similarity: u32,
}

/// A candidate's active resume annotated with its match against one job.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate: CandidateInfo,
    pub resume: ParsedResumeRow,
    pub match_score: u32,
    pub skill_match: u32,
    pub text_similarity: u32,
}

/// Scores every active job against one candidate profile and sorts descending
/// by match score. Tie order among equal scores follows the stable sort and is
/// not contractual.
pub fn rank_jobs(
    candidate_skills: &[String],
    candidate_summary: &str,
    jobs: Vec<JobRow>,
) -> Vec<ScoredJob> {
    let mut scored: Vec<ScoredJob> = jobs
        .into_iter()
        .map(|job| {
            let result = score_match(
                &job.requirements,
                &job.match_text(),
                candidate_skills,
                candidate_summary,
            );
            ScoredJob {
                match_score: result.blended_score,
                skill_match: result.skill_match_pct(),
                text_similarity: result.text_similarity_pct(),
                job,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}

/// Symmetric to `rank_jobs`: scores every candidate's most recent resume
/// against one job.
pub fn rank_candidates(
    job: &JobRow,
    resumes: Vec<(CandidateInfo, ParsedResumeRow)>,
) -> Vec<ScoredCandidate> {
    let job_text = job.match_text();

    let mut scored: Vec<ScoredCandidate> = resumes
        .into_iter()
        .map(|(candidate, resume)| {
            let result = score_match(
                &job.requirements,
                &job_text,
                &resume.extracted_fields.skills,
                &resume.extracted_fields.summary,
            );
            ScoredCandidate {
                candidate,
                match_score: result.blended_score,
                skill_match: result.skill_match_pct(),
                text_similarity: result.text_similarity_pct(),
                resume,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    use crate::models::resume::ExtractedFields;

    fn make_job(title: &str, requirements: &[&str]) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            created_by: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            description: "builds things".to_string(),
            requirements: requirements.iter().map(|s| s.to_string()).collect(),
            location: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn make_resume(skills: &[&str], summary: &str) -> (CandidateInfo, ParsedResumeRow) {
        let user_id = Uuid::new_v4();
        (
            CandidateInfo {
                id: user_id,
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            },
            ParsedResumeRow {
                id: Uuid::new_v4(),
                user_id,
                original_file_name: "resume.pdf".to_string(),
                extracted_fields: Json(ExtractedFields {
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                    summary: summary.to_string(),
                    ..Default::default()
                }),
                confidence: 0.8,
                file_size: 1024,
                file_type: "pdf".to_string(),
                parsed_at: Utc::now(),
            },
        )
    }

    #[test]
    fn test_rank_jobs_sorted_descending_by_match_score() {
        let skills: Vec<String> = vec!["Python".to_string(), "SQL".to_string()];
        let jobs = vec![
            make_job("no overlap", &["Haskell"]),
            make_job("full overlap", &["Python", "SQL"]),
            make_job("half overlap", &["Python", "Rust"]),
        ];

        let ranked = rank_jobs(&skills, "python sql engineer", jobs);
        assert_eq!(ranked[0].job.title, "full overlap");
        assert_eq!(ranked[1].job.title, "half overlap");
        assert_eq!(ranked[2].job.title, "no overlap");
        assert!(ranked.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_rank_jobs_empty_corpus() {
        assert!(rank_jobs(&[], "", Vec::new()).is_empty());
    }

    #[test]
    fn test_rank_candidates_symmetric_ordering() {
        let job = make_job("backend role", &["Python", "Docker"]);
        let resumes = vec![
            make_resume(&["Java"], "frontend person"),
            make_resume(&["Python", "Docker"], "backend builds things"),
        ];

        let ranked = rank_candidates(&job, resumes);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].resume.extracted_fields.skills.len(), 2);
        assert!(ranked[0].match_score >= ranked[1].match_score);
    }

    #[test]
    fn test_paginate_middle_page() {
        // page=2, limit=10, total=15 -> items at sorted-rank indices 10..15
        let items: Vec<usize> = (0..15).collect();
        let page = paginate(items, &PageParams { page: 2, limit: 10 });
        assert_eq!(page.items, vec![10, 11, 12, 13, 14]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 15);
    }

    #[test]
    fn test_paginate_defaults() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(items, &PageParams::default());
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0], 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let items: Vec<usize> = (0..5).collect();
        let page = paginate(items, &PageParams { page: 9, limit: 10 });
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_paginate_total_pages_formula() {
        for (total, limit, expected) in [(0, 10, 0), (10, 10, 1), (11, 10, 2), (15, 4, 4)] {
            let items: Vec<usize> = (0..total).collect();
            let page = paginate(items, &PageParams { page: 1, limit });
            assert_eq!(page.total_pages, expected, "total={total} limit={limit}");
        }
    }

    #[test]
    fn test_paginate_clamps_zero_parameters() {
        let items: Vec<usize> = (0..3).collect();
        let page = paginate(items, &PageParams { page: 0, limit: 0 });
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items, vec![0]);
        assert_eq!(page.total_pages, 3);
    }
}

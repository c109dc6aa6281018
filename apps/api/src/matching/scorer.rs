//! Pairwise match scoring between one job posting and one candidate profile.
//!
//! Two independent signals blended with fixed weights: explicit skill overlap
//! (0.7) and free-text word-set similarity (0.3). The score is a pure
//! deterministic function of the pair's text content; all division-by-zero
//! cases are guarded to 0 rather than surfaced as errors.

use std::collections::HashSet;

/// Weight of the skill-overlap signal in the blended score.
pub const SKILL_WEIGHT: f64 = 0.7;
/// Weight of the word-set similarity signal in the blended score.
pub const TEXT_WEIGHT: f64 = 0.3;

/// Ephemeral result of scoring one (job, candidate) pair. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub skill_match_ratio: f64,
    pub text_similarity_ratio: f64,
    /// `round((skill * 0.7 + text * 0.3) * 100)`, an integer percentage.
    pub blended_score: u32,
}

impl MatchResult {
    pub fn skill_match_pct(&self) -> u32 {
        (self.skill_match_ratio * 100.0).round() as u32
    }

    pub fn text_similarity_pct(&self) -> u32 {
        (self.text_similarity_ratio * 100.0).round() as u32
    }
}

pub fn score_match(
    job_requirements: &[String],
    job_text: &str,
    candidate_skills: &[String],
    candidate_text: &str,
) -> MatchResult {
    let skill = skill_match_ratio(job_requirements, candidate_skills);
    let text = text_similarity_ratio(job_text, candidate_text);

    MatchResult {
        skill_match_ratio: skill,
        text_similarity_ratio: text,
        blended_score: ((skill * SKILL_WEIGHT + text * TEXT_WEIGHT) * 100.0).round() as u32,
    }
}

/// Fraction of the job's listed skills that the candidate covers,
/// case-insensitively. 0 when either list is empty; a job with no listed
/// requirements therefore always scores 0 here, an accepted asymmetry.
pub fn skill_match_ratio(job_skills: &[String], candidate_skills: &[String]) -> f64 {
    if job_skills.is_empty() || candidate_skills.is_empty() {
        return 0.0;
    }

    let candidate_lower: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let matching = job_skills
        .iter()
        .filter(|s| candidate_lower.contains(&s.to_lowercase()))
        .count();

    matching as f64 / job_skills.len() as f64
}

/// Jaccard similarity over lowercased whitespace-tokenized word sets, with no
/// term-frequency weighting. An empty union scores 0.
pub fn text_similarity_ratio(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    let a_words: HashSet<&str> = a_lower.split_whitespace().collect();
    let b_words: HashSet<&str> = b_lower.split_whitespace().collect();

    let union = a_words.union(&b_words).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a_words.intersection(&b_words).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        // 1 of 2 job skills matched.
        let ratio = skill_match_ratio(&skills(&["Python", "SQL"]), &skills(&["python", "java"]));
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn test_skill_match_zero_when_either_list_empty() {
        assert_eq!(skill_match_ratio(&[], &skills(&["python"])), 0.0);
        assert_eq!(skill_match_ratio(&skills(&["python"]), &[]), 0.0);
        assert_eq!(skill_match_ratio(&[], &[]), 0.0);
    }

    #[test]
    fn test_skill_match_one_when_all_job_skills_covered() {
        let ratio = skill_match_ratio(
            &skills(&["Docker", "AWS"]),
            &skills(&["aws", "docker", "kubernetes"]),
        );
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_skill_match_within_unit_interval() {
        let cases = [
            (vec!["a", "b", "c"], vec!["a"]),
            (vec!["a"], vec!["b"]),
            (vec!["a", "b"], vec!["a", "b"]),
        ];
        for (job, cand) in cases {
            let ratio = skill_match_ratio(&skills(&job), &skills(&cand));
            assert!((0.0..=1.0).contains(&ratio));
        }
    }

    #[test]
    fn test_text_similarity_is_symmetric() {
        let a = "Senior React Developer TechCorp";
        let b = "React developer with TechCorp experience";
        assert_eq!(text_similarity_ratio(a, b), text_similarity_ratio(b, a));
    }

    #[test]
    fn test_text_similarity_react_techcorp_scenario() {
        // job words: {senior, react, developer, techcorp} (4)
        // candidate words: {react, developer, with, techcorp, experience} (5)
        // intersection {react, developer, techcorp} = 3, union = 6
        let sim = text_similarity_ratio(
            "Senior React Developer TechCorp",
            "React developer with TechCorp experience",
        );
        assert_eq!(sim, 3.0 / 6.0);
    }

    #[test]
    fn test_text_similarity_identical_word_sets_is_one() {
        assert_eq!(text_similarity_ratio("rust backend", "Backend RUST"), 1.0);
    }

    #[test]
    fn test_text_similarity_disjoint_is_zero() {
        assert_eq!(text_similarity_ratio("apples pears", "trains planes"), 0.0);
    }

    #[test]
    fn test_text_similarity_both_empty_guarded_to_zero() {
        assert_eq!(text_similarity_ratio("", ""), 0.0);
        assert_eq!(text_similarity_ratio("   ", "\t\n"), 0.0);
    }

    #[test]
    fn test_blended_score_uses_fixed_weights() {
        let result = score_match(
            &skills(&["Python", "SQL"]),
            "data engineer",
            &skills(&["python"]),
            "data engineer",
        );
        assert_eq!(result.skill_match_ratio, 0.5);
        assert_eq!(result.text_similarity_ratio, 1.0);
        // 0.5 * 0.7 + 1.0 * 0.3 = 0.65
        assert_eq!(result.blended_score, 65);
    }

    #[test]
    fn test_blended_score_monotone_in_each_signal() {
        let weak = score_match(
            &skills(&["a", "b", "c", "d"]),
            "x y",
            &skills(&["a"]),
            "x y",
        );
        let stronger_skills = score_match(
            &skills(&["a", "b", "c", "d"]),
            "x y",
            &skills(&["a", "b", "c"]),
            "x y",
        );
        assert!(stronger_skills.blended_score >= weak.blended_score);

        let weak_text = score_match(&skills(&["a"]), "x y z w", &skills(&["a"]), "x q r s");
        let stronger_text = score_match(&skills(&["a"]), "x y z w", &skills(&["a"]), "x y z s");
        assert!(stronger_text.blended_score >= weak_text.blended_score);
    }

    #[test]
    fn test_blended_score_bounds() {
        let zero = score_match(&[], "", &[], "");
        assert_eq!(zero.blended_score, 0);

        let full = score_match(&skills(&["a"]), "same text", &skills(&["a"]), "same text");
        assert_eq!(full.blended_score, 100);
    }

    #[test]
    fn test_percentage_accessors_round() {
        let result = MatchResult {
            skill_match_ratio: 1.0 / 3.0,
            text_similarity_ratio: 2.0 / 3.0,
            blended_score: 0,
        };
        assert_eq!(result.skill_match_pct(), 33);
        assert_eq!(result.text_similarity_pct(), 67);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let job = skills(&["Python", "SQL", "Docker"]);
        let cand = skills(&["docker", "python"]);
        let first = score_match(&job, "a b c", &cand, "b c d");
        let second = score_match(&job, "a b c", &cand, "b c d");
        assert_eq!(first, second);
    }
}

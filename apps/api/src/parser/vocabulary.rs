/// Canonical skill names recognized by the extractor. Matching is a
/// case-insensitive containment test, so entries double as their own match
/// patterns.
const DEFAULT_SKILLS: [&str; 30] = [
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "MongoDB",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "TypeScript",
    "Angular",
    "Vue.js",
    "Express.js",
    "Django",
    "Flask",
    "Spring Boot",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Elasticsearch",
    "GraphQL",
    "REST API",
    "Microservices",
    "Machine Learning",
    "Data Science",
    "DevOps",
    "CI/CD",
    "Agile",
];

/// Immutable controlled vocabulary injected into the field extractor.
///
/// Extracted skill sets are always a subset of this list, in this order, which
/// is what makes duplicates impossible by construction.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SkillVocabulary {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        SkillVocabulary::new(DEFAULT_SKILLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_complete() {
        let vocab = SkillVocabulary::default();
        assert_eq!(vocab.skills().len(), 30);
        assert_eq!(vocab.skills()[0], "JavaScript");
        assert_eq!(vocab.skills()[29], "Agile");
    }

    #[test]
    fn test_custom_vocabulary_preserves_order() {
        let vocab = SkillVocabulary::new(["Welding", "Forklift"]);
        assert_eq!(vocab.skills(), ["Welding", "Forklift"]);
    }
}

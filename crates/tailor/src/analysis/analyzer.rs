//! Job description analysis: seniority, categories, domain, industry,
//! keywords, technologies and title.

use serde::Serialize;
use tracing::{debug, info};

use crate::knowledge::{
    Domain, ExperienceLevel, Industry, KnowledgeBase, SkillCategory, DEFAULT_YEARS_RANGE,
};

use super::keywords::KeywordExtractor;
use super::title::detect_title;

/// Title used when neither a rank pattern nor the domain title table applies.
pub const DEFAULT_TITLE: &str = "Software Developer";

/// Structured view of a job posting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub detected_title: String,
    pub domain: Domain,
    pub experience_level: ExperienceLevel,
    pub years_range: String,
    /// Best-matching categories, strongest first.
    pub matched_categories: Vec<&'static SkillCategory>,
    /// Highest-weighted terms, strongest first. Display only.
    pub extracted_keywords: Vec<String>,
    /// Technologies in scan-list order.
    pub detected_technologies: Vec<String>,
    pub industry: Industry,
}

impl JobAnalysis {
    /// Names of the matched categories, in match order.
    pub fn category_names(&self) -> Vec<&'static str> {
        self.matched_categories.iter().map(|c| c.name).collect()
    }
}

/// Configuration for posting analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Maximum number of skill categories kept.
    pub max_categories: usize,
    /// Number of ranked terms considered for keyword extraction.
    pub keyword_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_categories: 4,
            keyword_limit: 30,
        }
    }
}

/// Turns raw posting text into a [`JobAnalysis`].
pub struct JobAnalyzer {
    knowledge: &'static KnowledgeBase,
    keywords: KeywordExtractor,
    config: AnalyzerConfig,
}

impl JobAnalyzer {
    /// Create an analyzer over the built-in knowledge base.
    pub fn new() -> Self {
        Self::with_config(KnowledgeBase::builtin(), AnalyzerConfig::default())
    }

    /// Create with a custom knowledge base and configuration.
    pub fn with_config(knowledge: &'static KnowledgeBase, config: AnalyzerConfig) -> Self {
        Self {
            knowledge,
            keywords: KeywordExtractor::new(knowledge.stop_words, config.keyword_limit),
            config,
        }
    }

    /// Analyze a posting. Never fails; empty text yields the defaults.
    pub fn analyze(&self, text: &str) -> JobAnalysis {
        info!("Analyzing job description ({} chars)", text.chars().count());

        let lower = text.to_lowercase();

        let (experience_level, years_range) = self.detect_seniority(&lower);
        let matched_categories = self.match_categories(&lower);
        let domain = self.classify_domain(&lower);
        let industry = self.classify_industry(&lower);
        let extracted_keywords = self.keywords.extract(text);
        let detected_technologies = self.detect_technologies(&lower);
        let detected_title = self.detect_title(text, domain);

        info!(
            "Analysis complete: \"{}\" ({}), domain={}, industry={}, {} categories, {} technologies",
            detected_title,
            experience_level,
            domain,
            industry,
            matched_categories.len(),
            detected_technologies.len()
        );

        JobAnalysis {
            detected_title,
            domain,
            experience_level,
            years_range: years_range.to_string(),
            matched_categories,
            extracted_keywords,
            detected_technologies,
            industry,
        }
    }

    /// First pattern with any keyword hit wins.
    fn detect_seniority(&self, lower: &str) -> (ExperienceLevel, &'static str) {
        self.knowledge
            .seniority_patterns
            .iter()
            .find(|p| p.matches(lower))
            .map(|p| (p.level, p.years_range))
            .unwrap_or((ExperienceLevel::MidLevel, DEFAULT_YEARS_RANGE))
    }

    /// Categories with at least one hit, strongest first, capped. Falls back
    /// to the first two declared categories so the result is never empty.
    fn match_categories(&self, lower: &str) -> Vec<&'static SkillCategory> {
        let categories = self.knowledge.skill_categories;

        let mut scored: Vec<(&'static SkillCategory, usize)> = categories
            .iter()
            .map(|c| (c, c.keyword_hits(lower)))
            .filter(|(_, hits)| *hits > 0)
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        debug!(
            "Category scores: {:?}",
            scored.iter().map(|(c, n)| (c.name, *n)).collect::<Vec<_>>()
        );

        if scored.is_empty() {
            return categories.iter().take(2).collect();
        }

        scored
            .into_iter()
            .take(self.config.max_categories)
            .map(|(c, _)| c)
            .collect()
    }

    /// Highest hit count wins; ties go to the first declared domain.
    fn classify_domain(&self, lower: &str) -> Domain {
        let mut best = (Domain::General, 0);
        for (domain, keywords) in self.knowledge.domain_keywords {
            let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count();
            if hits > best.1 {
                best = (*domain, hits);
            }
        }
        best.0
    }

    /// First industry in declaration order with any hit.
    fn classify_industry(&self, lower: &str) -> Industry {
        self.knowledge
            .industry_keywords
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(industry, _)| *industry)
            .unwrap_or_default()
    }

    fn detect_technologies(&self, lower: &str) -> Vec<String> {
        self.knowledge
            .technologies
            .iter()
            .filter(|tech| lower.contains(*tech))
            .map(|tech| tech.to_string())
            .collect()
    }

    fn detect_title(&self, text: &str, domain: Domain) -> String {
        if let Some(title) = detect_title(text) {
            debug!("Title from rank pattern: {}", title);
            return title;
        }
        self.knowledge
            .job_titles(domain)
            .and_then(|titles| titles.first())
            .map(|t| t.to_string())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }
}

impl Default for JobAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

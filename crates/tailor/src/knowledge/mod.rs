//! Static reference data for posting analysis and resume assembly.
//!
//! Everything here is read-only and lives for the whole process. The
//! analyzer and assembler receive a `&'static KnowledgeBase`, normally
//! [`KnowledgeBase::builtin`], so tests can substitute their own tables.
//! Tables whose order matters (seniority patterns, industry keywords,
//! domain keywords) are ordered slices, never maps.

mod classify;
mod content;
mod education;
mod seniority;
mod skills;

pub use classify::{Domain, Industry, DOMAIN_KEYWORDS, INDUSTRY_KEYWORDS, STOP_WORDS, TECHNOLOGIES};
pub use content::{
    VerbGroup, ACHIEVEMENT_TEMPLATES, ACTION_VERBS, COMPANY_POOLS, FIRST_NAMES, GENERIC_COMPANIES,
    JOB_TITLES, LAST_NAMES, LOCATIONS, MONTHS, PASSIONS, PERCENTAGES, SPECIALTIES,
    SUMMARY_TEMPLATES,
};
pub use education::{EducationTemplate, BACHELOR_DEGREE, EDUCATION_TEMPLATES, MASTER_DEGREE};
pub use seniority::{ExperienceLevel, SeniorityPattern, DEFAULT_YEARS_RANGE, SENIORITY_PATTERNS};
pub use skills::{SkillCategory, SKILL_CATEGORIES};

/// The full set of reference tables.
#[derive(Debug)]
pub struct KnowledgeBase {
    pub skill_categories: &'static [SkillCategory],
    pub seniority_patterns: &'static [SeniorityPattern],
    pub domain_keywords: &'static [(Domain, &'static [&'static str])],
    pub industry_keywords: &'static [(Industry, &'static [&'static str])],
    pub technologies: &'static [&'static str],
    pub stop_words: &'static [&'static str],
    pub action_verbs: &'static [VerbGroup],
    pub achievement_templates: &'static [&'static str],
    pub percentages: &'static [&'static str],
    pub company_pools: &'static [(Industry, &'static [&'static str])],
    pub generic_companies: &'static [&'static str],
    pub job_titles: &'static [(Domain, &'static [&'static str])],
    pub specialties: &'static [(Domain, &'static str)],
    pub summary_templates: &'static [&'static str],
    pub passions: &'static [&'static str],
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub locations: &'static [&'static str],
    pub education_templates: &'static [EducationTemplate],
}

pub(crate) static BUILTIN: KnowledgeBase = KnowledgeBase {
    skill_categories: SKILL_CATEGORIES,
    seniority_patterns: SENIORITY_PATTERNS,
    domain_keywords: DOMAIN_KEYWORDS,
    industry_keywords: INDUSTRY_KEYWORDS,
    technologies: TECHNOLOGIES,
    stop_words: STOP_WORDS,
    action_verbs: ACTION_VERBS,
    achievement_templates: ACHIEVEMENT_TEMPLATES,
    percentages: PERCENTAGES,
    company_pools: COMPANY_POOLS,
    generic_companies: GENERIC_COMPANIES,
    job_titles: JOB_TITLES,
    specialties: SPECIALTIES,
    summary_templates: SUMMARY_TEMPLATES,
    passions: PASSIONS,
    first_names: FIRST_NAMES,
    last_names: LAST_NAMES,
    locations: LOCATIONS,
    education_templates: EDUCATION_TEMPLATES,
};

impl KnowledgeBase {
    /// The built-in tables.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Job titles for a domain, most representative first.
    pub fn job_titles(&self, domain: Domain) -> Option<&'static [&'static str]> {
        self.job_titles
            .iter()
            .find(|(d, titles)| *d == domain && !titles.is_empty())
            .map(|(_, titles)| *titles)
    }

    /// Company pool for an industry, falling back to the generic pool.
    pub fn company_pool(&self, industry: Industry) -> &'static [&'static str] {
        self.company_pools
            .iter()
            .find(|(i, pool)| *i == industry && !pool.is_empty())
            .map(|(_, pool)| *pool)
            .unwrap_or(self.generic_companies)
    }

    /// Summary specialty phrase for a domain, if it has one.
    pub fn specialty(&self, domain: Domain) -> Option<&'static str> {
        self.specialties
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, phrase)| *phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookups() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.job_titles(Domain::Backend).unwrap()[0], "Backend Developer");
        assert_eq!(kb.job_titles(Domain::General).unwrap()[0], "Software Developer");
        assert_eq!(kb.company_pool(Industry::Finance)[0], "FinServe Global");
        assert_eq!(kb.specialty(Domain::Devops), Some("cloud infrastructure"));
        assert_eq!(kb.specialty(Domain::Management), None);
    }

    #[test]
    fn test_company_pool_falls_back_to_generic() {
        static SPARSE: KnowledgeBase = KnowledgeBase {
            company_pools: &[(Industry::Tech, &["Only Tech Co"])],
            ..BUILTIN
        };
        assert_eq!(SPARSE.company_pool(Industry::Healthcare), GENERIC_COMPANIES);
        assert_eq!(SPARSE.company_pool(Industry::Tech), &["Only Tech Co"]);
    }

    #[test]
    fn test_every_pool_is_non_empty() {
        let kb = KnowledgeBase::builtin();
        assert!(!kb.first_names.is_empty());
        assert!(!kb.last_names.is_empty());
        assert!(!kb.locations.is_empty());
        assert!(!kb.summary_templates.is_empty());
        assert!(!kb.passions.is_empty());
        assert!(!kb.achievement_templates.is_empty());
        assert!(kb.education_templates.len() > 1);
        for group in kb.action_verbs {
            assert!(!group.verbs.is_empty(), "verb group {} is empty", group.name);
        }
    }
}

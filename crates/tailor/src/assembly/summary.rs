//! Professional summary.

use crate::analysis::JobAnalysis;
use crate::input::{present, CandidateProfile};
use crate::knowledge::KnowledgeBase;
use crate::random::{pick, RandomSource};

const DEFAULT_SPECIALTY: &str = "software";

/// Number of matched category names listed in `{domains}`.
const SUMMARY_DOMAINS: usize = 3;

pub(crate) fn build_summary(
    kb: &KnowledgeBase,
    analysis: &JobAnalysis,
    profile: Option<&CandidateProfile>,
    years: u32,
    rng: &mut dyn RandomSource,
) -> String {
    if let Some(summary) = profile.and_then(|p| present(&p.summary)) {
        return summary.to_string();
    }

    let domains = analysis
        .matched_categories
        .iter()
        .take(SUMMARY_DOMAINS)
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ");
    let specialty = profile
        .and_then(|p| present(&p.specialization))
        .or_else(|| kb.specialty(analysis.domain))
        .unwrap_or(DEFAULT_SPECIALTY);

    let template = pick(rng, kb.summary_templates);
    let passion = pick(rng, kb.passions);

    template
        .replace("{title}", &analysis.detected_title)
        .replace("{years}", &years.to_string())
        .replace("{domains}", &domains)
        .replace("{specialty}", specialty)
        .replace("{passion}", passion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::JobAnalyzer;
    use crate::random::testing::{Highest, Lowest};

    #[test]
    fn test_profile_summary_wins() {
        let analysis = JobAnalyzer::new().analyze("backend");
        let profile = CandidateProfile {
            summary: Some("My own words.".into()),
            ..Default::default()
        };
        let summary =
            build_summary(KnowledgeBase::builtin(), &analysis, Some(&profile), 5, &mut Lowest);
        assert_eq!(summary, "My own words.");
    }

    #[test]
    fn test_generated_summary_fills_every_slot() {
        let analysis = JobAnalyzer::new().analyze("Senior backend engineer with node and docker");
        let summary = build_summary(KnowledgeBase::builtin(), &analysis, None, 9, &mut Lowest);

        assert!(summary.starts_with("Results-driven Senior Backend Engineer With"));
        assert!(summary.contains("9 years"));
        assert!(summary.contains("backend solutions"));
        assert!(summary.contains("best practices and clean architecture"));
        assert!(!summary.contains('{'));
    }

    #[test]
    fn test_specialization_overrides_domain_phrase() {
        let analysis = JobAnalyzer::new().analyze("backend api work");
        let profile = CandidateProfile {
            specialization: Some("payments".into()),
            ..Default::default()
        };
        let summary =
            build_summary(KnowledgeBase::builtin(), &analysis, Some(&profile), 4, &mut Highest);
        assert!(summary.contains("payments systems"));
        assert!(!summary.contains('{'));
    }

    #[test]
    fn test_specialty_default_for_unmapped_domain() {
        let analysis = JobAnalyzer::new().analyze("zzz");
        let summary = build_summary(KnowledgeBase::builtin(), &analysis, None, 3, &mut Highest);
        assert!(summary.contains("software systems"));
        assert!(summary.contains("Frontend, Backend"));
    }
}

//! Skill list: the candidate's own skills topped up with detected
//! technologies, or a random sample from the matched categories.

use std::collections::HashSet;

use crate::analysis::{title_case, JobAnalysis};
use crate::input::CandidateProfile;
use crate::random::{sample, RandomSource};
use crate::resume::dedup_skills;

use super::AssemblerConfig;

pub(crate) fn build_skills(
    analysis: &JobAnalysis,
    profile: Option<&CandidateProfile>,
    config: &AssemblerConfig,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    let own: Vec<String> = profile
        .map(|p| p.skills.iter().map(|s| s.name.clone()).collect())
        .unwrap_or_default();
    let own = dedup_skills(own);

    if !own.is_empty() {
        return with_technologies(own, &analysis.detected_technologies);
    }

    let category_skills: Vec<String> = analysis
        .matched_categories
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| s.to_string()))
        .collect();
    let pool = with_technologies(dedup_skills(category_skills), &analysis.detected_technologies);

    let count = rng.between(config.skill_sample_min, config.skill_sample_max) as usize;
    sample(rng, &pool, count)
}

/// Append each technology not already present (case-insensitively), title-cased.
fn with_technologies(mut skills: Vec<String>, technologies: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    for tech in technologies {
        if seen.insert(tech.to_lowercase()) {
            skills.push(title_case(tech));
        }
    }
    skills
}

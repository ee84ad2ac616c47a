//! Resume content assembly.
//!
//! Combines a [`JobAnalysis`] with an optional [`CandidateProfile`]. Every
//! section prefers the candidate's own data and synthesizes plausible
//! content only for what is missing. Assembly cannot fail.

mod contact;
mod dates;
mod education;
mod experience;
mod skills;
mod summary;

use chrono::Datelike;
use tracing::{debug, info};

use crate::analysis::JobAnalysis;
use crate::error::{Result, TailorError};
use crate::input::CandidateProfile;
use crate::knowledge::KnowledgeBase;
use crate::random::RandomSource;
use crate::resume::ResumeTemplateData;

pub use dates::{month_year, parse_date, year_only};

/// Configuration for resume assembly.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Smallest synthesized skill list.
    pub skill_sample_min: u32,
    /// Largest synthesized skill list.
    pub skill_sample_max: u32,
    /// Year synthesized dates count back from (None = current local year).
    pub reference_year: Option<i32>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            skill_sample_min: 10,
            skill_sample_max: 14,
            reference_year: None,
        }
    }
}

impl AssemblerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.skill_sample_min > self.skill_sample_max {
            return Err(TailorError::Config(format!(
                "skill_sample_min ({}) exceeds skill_sample_max ({})",
                self.skill_sample_min, self.skill_sample_max
            )));
        }
        Ok(())
    }
}

/// Builds a [`ResumeTemplateData`] from an analysis and an optional profile.
pub struct ResumeAssembler {
    knowledge: &'static KnowledgeBase,
    config: AssemblerConfig,
}

impl ResumeAssembler {
    pub fn new() -> Self {
        Self::with_config(KnowledgeBase::builtin(), AssemblerConfig::default())
    }

    pub fn with_config(knowledge: &'static KnowledgeBase, config: AssemblerConfig) -> Self {
        Self { knowledge, config }
    }

    /// Assemble a resume, drawing all randomness from `rng`.
    pub fn assemble(
        &self,
        analysis: &JobAnalysis,
        profile: Option<&CandidateProfile>,
        rng: &mut dyn RandomSource,
    ) -> ResumeTemplateData {
        info!("Assembling resume content");
        let kb = self.knowledge;
        let reference_year = self.reference_year();

        let contact = contact::build_contact(kb, profile, rng);
        let skills = skills::build_skills(analysis, profile, &self.config, rng);
        let years = resolve_years(analysis, profile, rng);
        debug!("Years of experience: {}", years);

        let summary = summary::build_summary(kb, analysis, profile, years, rng);
        let experiences =
            experience::build_experiences(kb, analysis, profile, &skills, reference_year, rng);
        let education =
            education::build_education(kb, analysis, profile, years, reference_year, rng);

        info!(
            "Assembly complete: {} experiences, {} education, {} skills (profile data: {})",
            experiences.len(),
            education.len(),
            skills.len(),
            if profile.is_some_and(|p| !p.experiences.is_empty()) {
                "real"
            } else {
                "generated"
            }
        );

        ResumeTemplateData {
            contact,
            summary,
            experiences,
            education,
            skills,
        }
    }

    fn reference_year(&self) -> i32 {
        self.config
            .reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

impl Default for ResumeAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound on profile-supplied years, keeping date arithmetic in range.
const MAX_CAREER_YEARS: u32 = 60;

/// Years of experience shared by the summary and the education timeline.
/// A positive profile value wins; otherwise drawn from the posting's bucket.
fn resolve_years(
    analysis: &JobAnalysis,
    profile: Option<&CandidateProfile>,
    rng: &mut dyn RandomSource,
) -> u32 {
    if let Some(years) = profile.and_then(CandidateProfile::years) {
        return years.min(MAX_CAREER_YEARS);
    }
    match analysis.years_range.as_str() {
        "7+" => rng.between(7, 12),
        "3-5" => rng.between(3, 6),
        _ => rng.between(1, 2),
    }
}

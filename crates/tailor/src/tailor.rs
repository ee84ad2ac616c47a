//! Main ResumeTailor struct and public API.

use serde::Serialize;
use tracing::info;

use crate::analysis::{AnalyzerConfig, JobAnalysis, JobAnalyzer};
use crate::assembly::{AssemblerConfig, ResumeAssembler};
use crate::error::{Result, TailorError};
use crate::input::{CandidateProfile, JobPosting, PostingLimits};
use crate::knowledge::KnowledgeBase;
use crate::random::RandomSource;
use crate::resume::{polish, ResumeTemplateData};

/// Configuration for the whole pipeline.
#[derive(Debug, Clone, Default)]
pub struct TailorConfig {
    /// Posting analysis configuration.
    pub analyzer: AnalyzerConfig,
    /// Resume assembly configuration.
    pub assembler: AssemblerConfig,
    /// Accepted posting length at the calling boundary.
    pub limits: PostingLimits,
}

impl TailorConfig {
    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.analyzer.max_categories == 0 {
            return Err(TailorError::Config("max_categories must be at least 1".into()));
        }
        if self.limits.min_chars > self.limits.max_chars {
            return Err(TailorError::Config(format!(
                "posting min_chars ({}) exceeds max_chars ({})",
                self.limits.min_chars, self.limits.max_chars
            )));
        }
        self.assembler.validate()
    }
}

/// A resume together with the analysis it was tailored to.
#[derive(Debug, Clone, Serialize)]
pub struct TailoredResume {
    pub analysis: JobAnalysis,
    pub resume: ResumeTemplateData,
}

/// The resume tailoring pipeline: analyze, assemble, polish.
pub struct ResumeTailor {
    limits: PostingLimits,
    analyzer: JobAnalyzer,
    assembler: ResumeAssembler,
}

impl ResumeTailor {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(TailorConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: TailorConfig) -> Self {
        Self::with_knowledge(KnowledgeBase::builtin(), config)
    }

    /// Create a pipeline over custom reference tables.
    pub fn with_knowledge(knowledge: &'static KnowledgeBase, config: TailorConfig) -> Self {
        Self {
            limits: config.limits,
            analyzer: JobAnalyzer::with_config(knowledge, config.analyzer),
            assembler: ResumeAssembler::with_config(knowledge, config.assembler),
        }
    }

    /// Posting limits enforced by [`ResumeTailor::parse_posting`].
    pub fn limits(&self) -> &PostingLimits {
        &self.limits
    }

    /// Validate raw posting text against the configured limits.
    pub fn parse_posting(&self, text: &str) -> Result<JobPosting> {
        JobPosting::parse(text, &self.limits)
    }

    /// Analyze a posting without assembling a resume.
    pub fn analyze(&self, text: &str) -> JobAnalysis {
        self.analyzer.analyze(text)
    }

    /// Generate a resume with a fresh random source.
    pub fn generate(&self, text: &str, profile: Option<&CandidateProfile>) -> ResumeTemplateData {
        let mut rng = fastrand::Rng::new();
        self.generate_with_rng(text, profile, &mut rng)
    }

    /// Generate a resume drawing all randomness from `rng`.
    pub fn generate_with_rng(
        &self,
        text: &str,
        profile: Option<&CandidateProfile>,
        rng: &mut dyn RandomSource,
    ) -> ResumeTemplateData {
        self.tailor_with_rng(text, profile, rng).resume
    }

    /// Generate a resume and return it with its analysis.
    pub fn tailor(&self, text: &str, profile: Option<&CandidateProfile>) -> TailoredResume {
        let mut rng = fastrand::Rng::new();
        self.tailor_with_rng(text, profile, &mut rng)
    }

    /// [`ResumeTailor::tailor`] with an injected random source.
    pub fn tailor_with_rng(
        &self,
        text: &str,
        profile: Option<&CandidateProfile>,
        rng: &mut dyn RandomSource,
    ) -> TailoredResume {
        info!("Resume generation started");
        let analysis = self.analyzer.analyze(text);
        let assembled = self.assembler.assemble(&analysis, profile, rng);
        let resume = polish(assembled);
        info!("Resume generation complete");
        TailoredResume { analysis, resume }
    }
}

impl Default for ResumeTailor {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a resume for a posting with the default pipeline.
pub fn generate_resume(text: &str, profile: Option<&CandidateProfile>) -> ResumeTemplateData {
    ResumeTailor::new().generate(text, profile)
}

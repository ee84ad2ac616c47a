//! Tailor: heuristic resume tailoring for job postings.
//!
//! Tailor reads a free-text job posting, infers the role, seniority, domain,
//! industry and technologies it asks for, and assembles a complete resume
//! that blends the candidate's own data with synthesized content for any
//! missing section.
//!
//! # Pipeline
//!
//! - **Analyze**: keyword scoring, ordered pattern matching and term
//!   frequency turn text into a [`JobAnalysis`]
//! - **Assemble**: profile data is preferred; gaps are filled from the
//!   built-in [`KnowledgeBase`] so that years, skills and bullets agree
//! - **Polish**: required fields are guaranteed and skills de-duplicated
//!
//! # Example
//!
//! ```
//! use tailor::{generate_resume, CandidateProfile};
//!
//! let posting = "We are hiring a Senior Backend Engineer with Node.js, AWS and Docker.";
//! let profile = CandidateProfile {
//!     first_name: Some("Dana".into()),
//!     ..Default::default()
//! };
//!
//! let resume = generate_resume(posting, Some(&profile));
//! assert!(resume.full_name().starts_with("Dana "));
//! assert!(!resume.skills.is_empty());
//! ```

pub mod analysis;
pub mod assembly;
pub mod error;
pub mod input;
pub mod knowledge;
pub mod random;
pub mod resume;

mod tailor;

pub use crate::tailor::{generate_resume, ResumeTailor, TailorConfig, TailoredResume};
pub use analysis::{AnalyzerConfig, JobAnalysis, JobAnalyzer};
pub use assembly::{AssemblerConfig, ResumeAssembler};
pub use error::{Result, TailorError};
pub use input::{CandidateProfile, JobPosting, PostingLimits, ProfileInput, ProfileRecord};
pub use knowledge::{Domain, ExperienceLevel, Industry, KnowledgeBase};
pub use random::RandomSource;
pub use resume::{polish, ResumeTemplateData};

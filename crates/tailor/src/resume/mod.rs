//! Resume document model and the final polishing pass.

mod document;
mod polish;

pub use document::{ContactBlock, EducationEntry, ExperienceEntry, ResumeTemplateData};
pub use polish::{dedup_skills, polish, DEFAULT_FULL_NAME, DEFAULT_SKILLS, DEFAULT_SUMMARY};

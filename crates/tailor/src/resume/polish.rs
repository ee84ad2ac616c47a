//! Final validation pass over an assembled resume.
//!
//! Fills any empty required field with a fixed placeholder and removes
//! duplicate skills. The pass is total and idempotent.

use std::collections::HashSet;

use tracing::{debug, info};

use super::document::ResumeTemplateData;

pub const DEFAULT_FULL_NAME: &str = "Alex Johnson";
pub const DEFAULT_SUMMARY: &str = "Experienced software professional with a strong track record.";
pub const DEFAULT_SKILLS: &[&str] = &["JavaScript", "TypeScript", "Problem Solving"];

pub const PLACEHOLDER_COMPANY: &str = "Confidential Company";
pub const PLACEHOLDER_POSITION: &str = "Software Engineer";
pub const PLACEHOLDER_DESCRIPTION: &str =
    "Contributed to the design, development, and delivery of software projects.";
pub const PLACEHOLDER_SCHOOL: &str = "Self-Directed Study";
pub const PLACEHOLDER_DEGREE: &str = "Coursework";

/// Enforce the resume invariants.
pub fn polish(mut resume: ResumeTemplateData) -> ResumeTemplateData {
    info!("Validating resume");

    fill_blank(&mut resume.contact.full_name, DEFAULT_FULL_NAME);
    fill_blank(&mut resume.summary, DEFAULT_SUMMARY);

    for entry in &mut resume.experiences {
        fill_blank(&mut entry.company, PLACEHOLDER_COMPANY);
        fill_blank(&mut entry.position, PLACEHOLDER_POSITION);
        fill_blank(&mut entry.description, PLACEHOLDER_DESCRIPTION);
    }
    for entry in &mut resume.education {
        fill_blank(&mut entry.school, PLACEHOLDER_SCHOOL);
        fill_blank(&mut entry.degree, PLACEHOLDER_DEGREE);
    }

    let before = resume.skills.len();
    resume.skills = dedup_skills(resume.skills);
    if resume.skills.is_empty() {
        resume.skills = DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    }
    debug!("Skills: {} in, {} out", before, resume.skills.len());

    resume
}

/// Drop blank skills and case-insensitive duplicates, keeping first-seen order.
pub fn dedup_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

fn fill_blank(field: &mut String, fallback: &str) {
    if field.trim().is_empty() {
        *field = fallback.to_string();
    }
}

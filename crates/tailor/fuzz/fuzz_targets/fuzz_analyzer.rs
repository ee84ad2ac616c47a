//! Fuzz target for posting analysis and full generation.
//!
//! Analysis must never panic, and generation must always produce a resume
//! with a name, a summary and at least one skill.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tailor::{JobAnalyzer, ResumeTailor};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    seed: u64,
}

fuzz_target!(|input: Input| {
    let analysis = JobAnalyzer::new().analyze(&input.text);
    let _ = analysis.detected_title.len();
    let _ = analysis.extracted_keywords.len();

    let mut rng = fastrand::Rng::with_seed(input.seed);
    let resume = ResumeTailor::new().generate_with_rng(&input.text, None, &mut rng);
    assert!(!resume.full_name().is_empty());
    assert!(!resume.summary.is_empty());
    assert!(!resume.skills.is_empty());
});

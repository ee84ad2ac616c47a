//! Property-based tests for the tailoring pipeline.
//!
//! ```bash
//! cargo test -p tailor --test property_tests
//! PROPTEST_CASES=10000 cargo test -p tailor --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use tailor::input::ProfileSkill;
use tailor::resume::{dedup_skills, ContactBlock};
use tailor::{polish, CandidateProfile, JobAnalyzer, ResumeTailor, ResumeTemplateData};

// =============================================================================
// Test Strategies
// =============================================================================

/// Posting-like text mixing vocabulary the analyzer reacts to with noise.
fn posting_like() -> impl Strategy<Value = String> {
    let words = prop_oneof![
        Just("senior".to_string()),
        Just("junior".to_string()),
        Just("lead".to_string()),
        Just("react".to_string()),
        Just("node.js".to_string()),
        Just("docker".to_string()),
        Just("fintech".to_string()),
        Just("saas".to_string()),
        Just("healthcare".to_string()),
        "[a-zA-Z]{1,12}",
        "[0-9]{1,2}\\+ years",
    ];
    prop::collection::vec(words, 0..60).prop_map(|w| w.join(" "))
}

fn skill_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("React".to_string()),
            Just("react".to_string()),
            Just("REACT".to_string()),
            Just(" ".to_string()),
            "[A-Za-z]{1,8}",
        ],
        0..20,
    )
}

// =============================================================================
// Analyzer Properties
// =============================================================================

mod analyzer_tests {
    use super::*;

    proptest! {
        #[test]
        fn analyzer_never_panics(text in "\\PC{0,500}") {
            let _ = JobAnalyzer::new().analyze(&text);
        }

        #[test]
        fn analysis_is_well_formed(text in posting_like()) {
            let analysis = JobAnalyzer::new().analyze(&text);
            prop_assert!(!analysis.matched_categories.is_empty());
            prop_assert!(analysis.matched_categories.len() <= 4);
            prop_assert!(!analysis.detected_title.is_empty());
            for kw in &analysis.extracted_keywords {
                prop_assert!(kw.chars().count() > 2);
            }
        }

        #[test]
        fn analysis_is_deterministic(text in posting_like()) {
            let analyzer = JobAnalyzer::new();
            let a = serde_json::to_string(&analyzer.analyze(&text)).unwrap();
            let b = serde_json::to_string(&analyzer.analyze(&text)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

// =============================================================================
// Polisher Properties
// =============================================================================

mod polish_tests {
    use super::*;

    proptest! {
        #[test]
        fn polish_is_idempotent(name in "[ a-zA-Z]{0,12}", summary in "[ a-z]{0,20}", skills in skill_list()) {
            let resume = ResumeTemplateData {
                contact: ContactBlock { full_name: name, ..Default::default() },
                summary,
                skills,
                ..Default::default()
            };
            let once = polish(resume);
            let twice = polish(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn dedup_leaves_no_case_insensitive_duplicates(skills in skill_list()) {
            let deduped = dedup_skills(skills.clone());
            let lowered: HashSet<String> = deduped.iter().map(|s| s.to_lowercase()).collect();
            prop_assert_eq!(lowered.len(), deduped.len());
            // Every kept skill came from the input.
            for skill in &deduped {
                prop_assert!(skills.contains(skill));
            }
        }
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

mod pipeline_tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_resume_meets_invariants(
            text in posting_like(),
            seed in any::<u64>(),
            own_skills in skill_list(),
        ) {
            let profile = CandidateProfile {
                skills: own_skills
                    .into_iter()
                    .map(|name| ProfileSkill { name, ..Default::default() })
                    .collect(),
                ..Default::default()
            };
            let mut rng = fastrand::Rng::with_seed(seed);
            let resume = ResumeTailor::new().generate_with_rng(&text, Some(&profile), &mut rng);

            prop_assert!(!resume.full_name().trim().is_empty());
            prop_assert!(!resume.summary.trim().is_empty());
            prop_assert!(!resume.skills.is_empty());
            let lowered: HashSet<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();
            prop_assert_eq!(lowered.len(), resume.skills.len());
            for exp in &resume.experiences {
                prop_assert!(!exp.company.is_empty() && !exp.position.is_empty());
                prop_assert!(!exp.description.is_empty());
            }
            for edu in &resume.education {
                prop_assert!(!edu.school.is_empty() && !edu.degree.is_empty());
            }
        }
    }
}

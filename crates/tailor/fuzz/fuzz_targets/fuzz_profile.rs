//! Fuzz target for profile parsing.
//!
//! Arbitrary bytes must either fail to parse or yield a profile the
//! pipeline accepts.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tailor::{CandidateProfile, ResumeTailor};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(profile) = CandidateProfile::from_json_str(json) {
        let mut rng = fastrand::Rng::with_seed(data.len() as u64);
        let resume =
            ResumeTailor::new().generate_with_rng("backend engineer", Some(&profile), &mut rng);
        assert!(!resume.skills.is_empty());
    }
});

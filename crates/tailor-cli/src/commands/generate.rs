//! Generate command - build a tailored resume for a job posting.

use std::path::PathBuf;

use colored::Colorize;
use tailor::random::source_from_seed;
use tailor::{CandidateProfile, ResumeTailor};

use super::read_text;

pub fn run(
    file: PathBuf,
    profile: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: Option<u64>,
    with_analysis: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tailor = ResumeTailor::new();

    let text = read_text(&file)?;
    let posting = tailor.parse_posting(&text)?;

    let profile = profile.map(CandidateProfile::load).transpose()?;

    let mut rng = source_from_seed(seed);
    let tailored = tailor.tailor_with_rng(posting.as_str(), profile.as_ref(), &mut rng);

    if verbose {
        let analysis = &tailored.analysis;
        eprintln!(
            "{} {} ({}, {}, {})",
            "Tailoring for".cyan().bold(),
            analysis.detected_title.white().bold(),
            analysis.experience_level,
            analysis.domain,
            analysis.industry
        );
    }

    let json = if with_analysis {
        serde_json::to_string_pretty(&tailored)?
    } else {
        serde_json::to_string_pretty(&tailored.resume)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json + "\n")?;
            eprintln!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

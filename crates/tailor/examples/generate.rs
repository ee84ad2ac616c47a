//! Example: Tailor a resume to a job posting file.
//!
//! Usage:
//!   cargo run --example generate -- <posting_file> [profile.json]

use std::env;

use tailor::{CandidateProfile, JobPosting, ResumeTailor};

fn main() -> tailor::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example generate -- <posting_file> [profile.json]");
        std::process::exit(1);
    }

    let tailor = ResumeTailor::new();
    let posting = JobPosting::load(&args[1], tailor.limits())?;
    let profile = args.get(2).map(CandidateProfile::load).transpose()?;

    let tailored = tailor.tailor(posting.as_str(), profile.as_ref());
    let analysis = &tailored.analysis;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Title:      {}", analysis.detected_title);
    println!("Level:      {} ({} years)", analysis.experience_level, analysis.years_range);
    println!("Domain:     {}", analysis.domain);
    println!("Industry:   {}", analysis.industry);
    println!("Categories: {}", analysis.category_names().join(", "));
    println!("{}", separator);

    println!("{}", serde_json::to_string_pretty(&tailored.resume)?);
    Ok(())
}

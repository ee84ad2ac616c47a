//! Analyze command - show what the analyzer infers from a posting.

use std::path::PathBuf;

use colored::Colorize;
use tailor::ResumeTailor;

use super::read_text;

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(&file)?;
    let analysis = ResumeTailor::new().analyze(&text);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analysis of".cyan().bold(),
        file.display().to_string().white()
    );
    println!();
    println!("Title:        {}", analysis.detected_title.white().bold());
    println!(
        "Seniority:    {} ({} years)",
        analysis.experience_level.to_string().yellow(),
        analysis.years_range
    );
    println!("Domain:       {}", analysis.domain);
    println!("Industry:     {}", analysis.industry);
    println!("Categories:   {}", analysis.category_names().join(", "));

    if analysis.detected_technologies.is_empty() {
        println!("Technologies: {}", "none detected".dimmed());
    } else {
        println!(
            "Technologies: {}",
            analysis.detected_technologies.join(", ").green()
        );
    }

    if verbose {
        println!();
        println!("{}", "Keywords:".yellow().bold());
        for keyword in &analysis.extracted_keywords {
            println!("  {}", keyword);
        }
    }

    Ok(())
}

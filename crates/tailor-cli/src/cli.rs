//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tailor: generate a resume tailored to a job posting
#[derive(Parser)]
#[command(name = "tailor")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a resume for a job posting
    Generate {
        /// Path to the job posting text ("-" reads stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Candidate profile JSON (flat or persisted record shape)
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Write the resume JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Include the posting analysis alongside the resume
        #[arg(long)]
        with_analysis: bool,
    },

    /// Show what the analyzer infers from a job posting
    Analyze {
        /// Path to the job posting text ("-" reads stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the resume generation HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "TAILOR_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "TAILOR_PORT", default_value = "3001")]
        port: u16,

        /// Allowed CORS origin (any origin when unset)
        #[arg(long, env = "CORS_ORIGIN")]
        cors_origin: Option<String>,
    },
}

//! Serve command - run the resume generation HTTP API.

use colored::Colorize;

use crate::server::{self, AppState};

pub fn run(
    host: String,
    port: u16,
    cors_origin: Option<String>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(cors_origin);

    println!(
        "{} http://{}:{}",
        "Resume service starting on".cyan().bold(),
        host,
        port
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::run_server(state, &host, port))
}

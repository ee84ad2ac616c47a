//! CLI command implementations.

pub mod analyze;
pub mod generate;
pub mod serve;

use std::io::Read;
use std::path::Path;

/// Read posting text from a file, or from stdin when the path is "-".
pub fn read_text(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }
    Ok(std::fs::read_to_string(path)?)
}

//! Job posting text accepted at the calling boundary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TailorError};

/// Accepted posting length, in characters after trimming. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingLimits {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for PostingLimits {
    fn default() -> Self {
        Self {
            min_chars: 50,
            max_chars: 15_000,
        }
    }
}

/// A trimmed posting whose length is within [`PostingLimits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    text: String,
}

impl JobPosting {
    /// Trim and validate posting text.
    pub fn parse(text: &str, limits: &PostingLimits) -> Result<Self> {
        let trimmed = text.trim();
        let length = trimmed.chars().count();

        if length < limits.min_chars {
            return Err(TailorError::PostingTooShort {
                length,
                min: limits.min_chars,
            });
        }
        if length > limits.max_chars {
            return Err(TailorError::PostingTooLong {
                length,
                max: limits.max_chars,
            });
        }

        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Read and validate a posting from a file.
    pub fn load(path: impl AsRef<Path>, limits: &PostingLimits) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TailorError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text, limits)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for JobPosting {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

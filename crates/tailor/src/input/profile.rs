//! Flat candidate profile. Every field is optional; the assembler fills gaps.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, TailorError};

/// A candidate's own data, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_years")]
    pub years_of_experience: Option<f64>,
    pub specialization: Option<String>,
    pub skills: Vec<ProfileSkill>,
    pub experiences: Vec<ProfileExperience>,
    pub education: Vec<ProfileEducation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSkill {
    pub name: String,
    pub category: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileExperience {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileEducation {
    pub institution: String,
    pub degree: String,
    #[serde(alias = "fieldOfStudy")]
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<Gpa>,
}

/// Grade point average, accepted either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gpa {
    Number(f64),
    Text(String),
}

impl Gpa {
    /// Numeric value, if the GPA parses as one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Gpa::Number(n) => Some(*n),
            Gpa::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Whether the GPA should be shown: a positive number.
    pub fn is_positive(&self) -> bool {
        self.value().is_some_and(|v| v > 0.0)
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gpa::Number(n) => write!(f, "{}", n),
            Gpa::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// Years of experience as any JSON number or numeric string. Anything else,
/// or a negative value, reads as absent instead of failing the profile.
pub(crate) fn lenient_years<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .filter(|y: &f64| y.is_finite() && *y >= 0.0))
}

/// The value of an optional field, treating blank strings as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl CandidateProfile {
    /// Load a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TailorError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a profile from JSON. Accepts both the flat shape and the
    /// persisted record shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let input: super::ProfileInput = serde_json::from_str(json)?;
        Ok(input.into_candidate())
    }

    /// Whole profile years of experience; anything under one counts as absent.
    pub fn years(&self) -> Option<u32> {
        self.years_of_experience
            .filter(|y| *y >= 1.0)
            .map(|y| y.trunc() as u32)
    }
}

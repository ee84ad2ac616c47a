//! Seniority levels and the ordered patterns used to detect them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Experience level inferred from a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    #[default]
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
        }
    }

    /// Inclusive range for the number of synthesized work-history entries.
    pub fn experience_entries(&self) -> (u32, u32) {
        match self {
            ExperienceLevel::Senior => (3, 4),
            ExperienceLevel::MidLevel => (2, 3),
            ExperienceLevel::Junior => (1, 2),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A seniority level with its years bucket and detection keywords.
#[derive(Debug, Clone, Copy)]
pub struct SeniorityPattern {
    pub level: ExperienceLevel,
    pub years_range: &'static str,
    pub keywords: &'static [&'static str],
}

impl SeniorityPattern {
    /// Whether any keyword is a substring of the lower-cased text.
    pub fn matches(&self, lower_text: &str) -> bool {
        self.keywords.iter().any(|kw| lower_text.contains(kw))
    }
}

/// Years bucket used when no pattern matches.
pub const DEFAULT_YEARS_RANGE: &str = "3-5";

/// Evaluated in order; the first match wins.
pub static SENIORITY_PATTERNS: &[SeniorityPattern] = &[
    SeniorityPattern {
        level: ExperienceLevel::Senior,
        years_range: "7+",
        keywords: &[
            "senior", "sr.", "lead", "principal", "staff", "architect", "7+ years", "8+ years",
            "10+ years", "5+ years", "extensive experience", "deep expertise",
        ],
    },
    SeniorityPattern {
        level: ExperienceLevel::MidLevel,
        years_range: "3-5",
        keywords: &[
            "mid", "intermediate", "3+ years", "4+ years", "3-5 years", "2-4 years",
            "solid experience", "proven track record",
        ],
    },
    SeniorityPattern {
        level: ExperienceLevel::Junior,
        years_range: "0-2",
        keywords: &[
            "junior", "jr.", "entry", "associate", "graduate", "intern", "0-2 years", "1+ year",
            "1-2 years", "new grad", "early career", "entry level", "entry-level",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_is_checked_first() {
        assert_eq!(SENIORITY_PATTERNS[0].level, ExperienceLevel::Senior);
        assert_eq!(SENIORITY_PATTERNS[0].years_range, "7+");
    }

    #[test]
    fn test_mid_level_serializes_with_hyphen() {
        let json = serde_json::to_string(&ExperienceLevel::MidLevel).unwrap();
        assert_eq!(json, r#""Mid-Level""#);
        let back: ExperienceLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExperienceLevel::MidLevel);
    }

    #[test]
    fn test_experience_entry_ranges() {
        assert_eq!(ExperienceLevel::Senior.experience_entries(), (3, 4));
        assert_eq!(ExperienceLevel::MidLevel.experience_entries(), (2, 3));
        assert_eq!(ExperienceLevel::Junior.experience_entries(), (1, 2));
    }
}

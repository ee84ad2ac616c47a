//! The assembled resume, ready for template rendering.

use serde::{Deserialize, Serialize};

/// Contact details. Serialized inline with the rest of the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBlock {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    /// `"Mon YYYY"`, or the caller's text when it could not be parsed.
    pub start_date: String,
    /// Empty for the current position.
    pub end_date: String,
    pub current: bool,
    /// Newline-separated; achievement lines start with `"• "`.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field: String,
    /// Year only.
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// A complete resume document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTemplateData {
    #[serde(flatten)]
    pub contact: ContactBlock,
    pub summary: String,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl ResumeTemplateData {
    pub fn full_name(&self) -> &str {
        &self.contact.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_serializes_flat() {
        let resume = ResumeTemplateData {
            contact: ContactBlock {
                full_name: "Jo Park".into(),
                email: "jo@email.com".into(),
                ..Default::default()
            },
            summary: "Engineer.".into(),
            skills: vec!["Rust".into()],
            ..Default::default()
        };

        let json = serde_json::to_value(&resume).unwrap();
        assert_eq!(json["fullName"], "Jo Park");
        assert_eq!(json["email"], "jo@email.com");
        assert_eq!(json["website"], "");
        assert!(json.get("contact").is_none());
        assert_eq!(json["skills"][0], "Rust");
    }

    #[test]
    fn test_deserialize_from_flat_json() {
        let json = r#"{
            "fullName": "Jo Park", "email": "", "phone": "", "location": "",
            "linkedin": "", "github": "", "website": "", "summary": "S",
            "experiences": [{"company": "A", "position": "P", "startDate": "Jan 2020",
                             "endDate": "", "current": true, "description": "D"}],
            "education": [], "skills": ["Go"]
        }"#;
        let resume: ResumeTemplateData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.full_name(), "Jo Park");
        assert!(resume.experiences[0].current);
        assert_eq!(resume.experiences[0].start_date, "Jan 2020");
    }
}

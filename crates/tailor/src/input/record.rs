//! Persisted profile record and its flattening into a [`CandidateProfile`].

use serde::{Deserialize, Serialize};

use super::profile::{
    lenient_years, present, CandidateProfile, ProfileEducation, ProfileExperience, ProfileSkill,
};

/// The richer profile shape stored by the profile service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub professional_summary: Option<ProfessionalSummary>,
    #[serde(default)]
    pub work_experience: Vec<ProfileExperience>,
    #[serde(default)]
    pub education: Vec<ProfileEducation>,
    #[serde(default)]
    pub skills: Vec<ProfileSkill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalSummary {
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_years")]
    pub years_of_experience: Option<f64>,
    pub core_competencies: Vec<String>,
    pub specialization: Option<String>,
}

impl Address {
    /// `"City, Country"` from whichever parts are present.
    pub fn display_location(&self) -> Option<String> {
        let parts: Vec<&str> = [present(&self.city), present(&self.country)]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

impl ProfileRecord {
    /// Flatten into the shape the assembler consumes.
    pub fn flatten(self) -> CandidateProfile {
        let info = self.personal_info;
        let summary = self.professional_summary.unwrap_or_default();

        CandidateProfile {
            first_name: info.first_name,
            middle_name: info.middle_name,
            last_name: info.last_name,
            email: info.email,
            phone: info.phone,
            location: info.address.as_ref().and_then(Address::display_location),
            linkedin: info.linkedin,
            github: info.github,
            portfolio: info.portfolio,
            website: info.website,
            summary: summary.summary,
            years_of_experience: summary.years_of_experience,
            specialization: summary.specialization,
            skills: self.skills,
            experiences: self.work_experience,
            education: self.education,
        }
    }
}

/// A profile in either accepted shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileInput {
    Record(ProfileRecord),
    Flat(CandidateProfile),
}

impl ProfileInput {
    pub fn into_candidate(self) -> CandidateProfile {
        match self {
            ProfileInput::Record(record) => record.flatten(),
            ProfileInput::Flat(profile) => profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json() -> &'static str {
        r#"{
            "personalInfo": {
                "firstName": "Priya",
                "middleName": "K",
                "lastName": "Shah",
                "email": "priya@example.com",
                "address": {"street": "1 Main St", "city": "Austin", "state": "TX", "country": "USA"},
                "portfolio": "https://priya.dev"
            },
            "professionalSummary": {
                "summary": "Platform engineer.",
                "yearsOfExperience": 8,
                "coreCompetencies": ["Kubernetes"],
                "specialization": "platform"
            },
            "workExperience": [
                {"company": "Acme", "position": "SRE", "startDate": "2020-01-15", "current": true,
                 "achievements": ["Cut costs"]}
            ],
            "education": [
                {"institution": "UT Austin", "degree": "BS", "fieldOfStudy": "CS", "gpa": 3.7}
            ],
            "skills": [{"name": "Go", "category": "Backend", "level": "expert"}]
        }"#
    }

    #[test]
    fn test_flatten_record() {
        let record: ProfileRecord = serde_json::from_str(record_json()).unwrap();
        let profile = record.flatten();

        assert_eq!(profile.first_name.as_deref(), Some("Priya"));
        assert_eq!(profile.middle_name.as_deref(), Some("K"));
        assert_eq!(profile.location.as_deref(), Some("Austin, USA"));
        assert_eq!(profile.summary.as_deref(), Some("Platform engineer."));
        assert_eq!(profile.years(), Some(8));
        assert_eq!(profile.specialization.as_deref(), Some("platform"));
        assert_eq!(profile.portfolio.as_deref(), Some("https://priya.dev"));
        assert_eq!(profile.experiences[0].company, "Acme");
        assert_eq!(profile.education[0].field.as_deref(), Some("CS"));
        assert_eq!(profile.skills[0].name, "Go");
    }

    #[test]
    fn test_location_from_partial_address() {
        let only_country = Address {
            country: Some("Canada".into()),
            ..Default::default()
        };
        assert_eq!(only_country.display_location().as_deref(), Some("Canada"));

        let blank = Address {
            city: Some("".into()),
            ..Default::default()
        };
        assert_eq!(blank.display_location(), None);
    }

    #[test]
    fn test_profile_input_accepts_both_shapes() {
        let record: ProfileInput = serde_json::from_str(record_json()).unwrap();
        assert!(matches!(record, ProfileInput::Record(_)));
        assert_eq!(record.into_candidate().location.as_deref(), Some("Austin, USA"));

        let flat: ProfileInput =
            serde_json::from_str(r#"{"firstName": "Lee", "location": "Oslo"}"#).unwrap();
        assert!(matches!(flat, ProfileInput::Flat(_)));
        assert_eq!(flat.into_candidate().location.as_deref(), Some("Oslo"));
    }

    #[test]
    fn test_record_without_summary_block() {
        let json = r#"{"personalInfo": {"firstName": "Ana"}}"#;
        let profile = serde_json::from_str::<ProfileRecord>(json).unwrap().flatten();
        assert_eq!(profile.summary, None);
        assert_eq!(profile.location, None);
        assert!(profile.experiences.is_empty());
    }
}

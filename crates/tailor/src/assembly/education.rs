//! Education history.

use crate::analysis::JobAnalysis;
use crate::input::{present, CandidateProfile, ProfileEducation};
use crate::knowledge::{ExperienceLevel, KnowledgeBase, BACHELOR_DEGREE, MASTER_DEGREE};
use crate::random::{pick, RandomSource};
use crate::resume::EducationEntry;

use super::dates::year_only;

pub(crate) fn build_education(
    kb: &KnowledgeBase,
    analysis: &JobAnalysis,
    profile: Option<&CandidateProfile>,
    years: u32,
    reference_year: i32,
    rng: &mut dyn RandomSource,
) -> Vec<EducationEntry> {
    match profile.map(|p| &p.education) {
        Some(entries) if !entries.is_empty() => entries.iter().map(from_profile).collect(),
        _ => synthesize(kb, analysis, years, reference_year, rng),
    }
}

fn from_profile(edu: &ProfileEducation) -> EducationEntry {
    EducationEntry {
        school: edu.institution.clone(),
        degree: edu.degree.clone(),
        field: present(&edu.field).unwrap_or_default().to_string(),
        start_date: year_only(edu.start_date.as_deref()),
        end_date: year_only(edu.end_date.as_deref()),
        description: match &edu.gpa {
            Some(gpa) if gpa.is_positive() => format!("GPA: {}", gpa),
            _ => String::new(),
        },
    }
}

/// Graduation is placed `years` of work plus the length of study before the
/// reference year. Seniors get a Master's, preceded by a Bachelor's from a
/// different school.
fn synthesize(
    kb: &KnowledgeBase,
    analysis: &JobAnalysis,
    years: u32,
    reference_year: i32,
    rng: &mut dyn RandomSource,
) -> Vec<EducationEntry> {
    let templates = kb.education_templates;
    let senior = analysis.experience_level == ExperienceLevel::Senior;

    let first = rng.index(templates.len());
    let template = &templates[first];
    let degree = if senior { MASTER_DEGREE } else { template.degree };

    let graduation = reference_year - years as i32 - if senior { 6 } else { 4 };
    let study = if degree.contains("Master") { 2 } else { 4 };

    let mut entries = vec![EducationEntry {
        school: template.school.to_string(),
        degree: degree.to_string(),
        field: pick(rng, template.fields).to_string(),
        start_date: (graduation - study).to_string(),
        end_date: graduation.to_string(),
        description: pick(rng, template.descriptions).to_string(),
    }];

    if senior && templates.len() > 1 {
        // Uniform over every template except the first pick.
        let mut second = rng.index(templates.len() - 1);
        if second >= first {
            second += 1;
        }
        let bachelor = &templates[second];
        entries.push(EducationEntry {
            school: bachelor.school.to_string(),
            degree: BACHELOR_DEGREE.to_string(),
            field: pick(rng, bachelor.fields).to_string(),
            start_date: (graduation - 6).to_string(),
            end_date: (graduation - 2).to_string(),
            description: pick(rng, bachelor.descriptions).to_string(),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::JobAnalyzer;
    use crate::input::Gpa;
    use crate::random::testing::{Highest, Lowest};

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn test_profile_education_mapped() {
        let profile = CandidateProfile {
            education: vec![
                ProfileEducation {
                    institution: "MIT".into(),
                    degree: "BS".into(),
                    field: Some("Physics".into()),
                    start_date: Some("2012-09-01".into()),
                    end_date: Some("2016-05-15T00:00:00Z".into()),
                    gpa: Some(Gpa::Number(3.9)),
                },
                ProfileEducation {
                    institution: "Coursera".into(),
                    degree: "Certificate".into(),
                    gpa: Some(Gpa::Text("".into())),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let analysis = JobAnalyzer::new().analyze("anything");
        let entries = build_education(kb(), &analysis, Some(&profile), 5, 2025, &mut Lowest);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].school, "MIT");
        assert_eq!(entries[0].field, "Physics");
        assert_eq!(entries[0].start_date, "2012");
        assert_eq!(entries[0].end_date, "2016");
        assert_eq!(entries[0].description, "GPA: 3.9");
        assert_eq!(entries[1].field, "");
        assert_eq!(entries[1].start_date, "");
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn test_mid_level_single_entry() {
        let analysis = JobAnalyzer::new().analyze("developer");
        let entries = build_education(kb(), &analysis, None, 5, 2025, &mut Lowest);

        assert_eq!(entries.len(), 1);
        // First template is a Bachelor's: 4 years of study, graduating 2025 - 5 - 4.
        assert_eq!(entries[0].degree, BACHELOR_DEGREE);
        assert_eq!(entries[0].end_date, "2016");
        assert_eq!(entries[0].start_date, "2012");
    }

    #[test]
    fn test_mid_level_masters_template() {
        let analysis = JobAnalyzer::new().analyze("developer");
        // Highest picks the last template, a Bachelor's; use a fixed index instead.
        struct Second;
        impl RandomSource for Second {
            fn index(&mut self, len: usize) -> usize {
                1.min(len - 1)
            }
            fn between(&mut self, low: u32, _high: u32) -> u32 {
                low
            }
        }
        let entries = build_education(kb(), &analysis, None, 3, 2025, &mut Second);
        assert_eq!(entries[0].degree, MASTER_DEGREE);
        assert_eq!(entries[0].end_date, "2018");
        assert_eq!(entries[0].start_date, "2016");
    }

    #[test]
    fn test_senior_gets_masters_and_bachelors() {
        let analysis = JobAnalyzer::new().analyze("Senior engineer");
        let entries = build_education(kb(), &analysis, None, 10, 2025, &mut Highest);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, MASTER_DEGREE);
        // 2025 - 10 - 6
        assert_eq!(entries[0].end_date, "2009");
        assert_eq!(entries[0].start_date, "2007");
        assert_eq!(entries[1].degree, BACHELOR_DEGREE);
        assert_eq!(entries[1].start_date, "2003");
        assert_eq!(entries[1].end_date, "2007");
        assert_ne!(entries[0].school, entries[1].school);
    }

    #[test]
    fn test_senior_second_school_differs_for_every_first_pick() {
        let analysis = JobAnalyzer::new().analyze("Senior engineer");
        for seed in 0..50 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let entries = build_education(kb(), &analysis, None, 8, 2025, &mut rng);
            assert_ne!(entries[0].school, entries[1].school);
        }
    }
}

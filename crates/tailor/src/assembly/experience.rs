//! Work history: the candidate's own entries, or a synthesized career that
//! walks backwards from the reference year.

use crate::analysis::{JobAnalysis, DEFAULT_TITLE};
use crate::input::{present, CandidateProfile, ProfileExperience};
use crate::knowledge::{Domain, KnowledgeBase, MONTHS};
use crate::random::{pick, sample, RandomSource};
use crate::resume::ExperienceEntry;

use super::dates::month_year;

const BULLET: &str = "• ";
const FALLBACK_TECHNOLOGY: &str = "modern technologies";

pub(crate) fn build_experiences(
    kb: &KnowledgeBase,
    analysis: &JobAnalysis,
    profile: Option<&CandidateProfile>,
    skills: &[String],
    reference_year: i32,
    rng: &mut dyn RandomSource,
) -> Vec<ExperienceEntry> {
    match profile.map(|p| &p.experiences) {
        Some(entries) if !entries.is_empty() => entries.iter().map(from_profile).collect(),
        _ => synthesize(kb, analysis, skills, reference_year, rng),
    }
}

fn from_profile(exp: &ProfileExperience) -> ExperienceEntry {
    ExperienceEntry {
        company: exp.company.clone(),
        position: exp.position.clone(),
        start_date: month_year(exp.start_date.as_deref()),
        end_date: if exp.current {
            String::new()
        } else {
            month_year(exp.end_date.as_deref())
        },
        current: exp.current,
        description: describe(exp),
    }
}

/// Description first, then one bullet line per achievement.
fn describe(exp: &ProfileExperience) -> String {
    let mut lines: Vec<String> = Vec::new();
    if let Some(description) = present(&exp.description) {
        lines.push(description.to_string());
    }
    lines.extend(
        exp.achievements
            .iter()
            .filter(|a| !a.trim().is_empty())
            .map(|a| format!("{}{}", BULLET, a)),
    );
    lines.join("\n")
}

fn synthesize(
    kb: &KnowledgeBase,
    analysis: &JobAnalysis,
    skills: &[String],
    reference_year: i32,
    rng: &mut dyn RandomSource,
) -> Vec<ExperienceEntry> {
    let (low, high) = analysis.experience_level.experience_entries();
    let count = rng.between(low, high) as usize;

    let companies = sample(rng, kb.company_pool(analysis.industry), count);
    let titles = kb
        .job_titles(analysis.domain)
        .or_else(|| kb.job_titles(Domain::General))
        .unwrap_or(&[DEFAULT_TITLE]);

    let mut entries = Vec::with_capacity(count);
    let mut end_year = reference_year;

    for i in 0..count {
        let current = i == 0;
        let duration = rng.between(1, 3) as i32;
        let start_year = end_year - duration;

        let bullet_count = rng.between(3, 4) as usize;
        let bullets: Vec<String> = (0..bullet_count)
            .map(|b| achievement(kb, b, skills, rng))
            .collect();

        let company = match companies.get(i) {
            Some(name) => name.to_string(),
            None => pick(rng, kb.generic_companies).to_string(),
        };
        let position = if i == 0 {
            analysis.detected_title.clone()
        } else {
            titles[i.min(titles.len() - 1)].to_string()
        };

        let start_date = format!("{} {}", pick(rng, MONTHS), start_year);
        let end_date = if current {
            String::new()
        } else {
            format!("{} {}", pick(rng, MONTHS), end_year)
        };

        entries.push(ExperienceEntry {
            company,
            position,
            start_date,
            end_date,
            current,
            description: bullets.join("\n"),
        });
        end_year = start_year;
    }

    entries
}

/// One bullet. Verb groups rotate with the bullet index so each entry opens
/// with a different kind of accomplishment.
fn achievement(
    kb: &KnowledgeBase,
    index: usize,
    skills: &[String],
    rng: &mut dyn RandomSource,
) -> String {
    let template = pick(rng, kb.achievement_templates);
    let group = &kb.action_verbs[index % kb.action_verbs.len()];
    let verb = pick(rng, group.verbs);
    let technology = if skills.is_empty() {
        FALLBACK_TECHNOLOGY
    } else {
        pick(rng, skills).as_str()
    };
    let metric = pick(rng, kb.percentages);
    let outcome = pick(rng, kb.percentages);

    format!(
        "{}{}",
        BULLET,
        template
            .replace("{verb}", verb)
            .replace("{technology}", technology)
            .replace("{metric}", metric)
            .replace("{outcome}", outcome)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::JobAnalyzer;
    use crate::knowledge::{ExperienceLevel, Industry};
    use crate::random::testing::{Highest, Lowest};

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn test_profile_entries_mapped_in_order() {
        let profile = CandidateProfile {
            experiences: vec![
                ProfileExperience {
                    company: "Acme".into(),
                    position: "Lead Engineer".into(),
                    start_date: Some("2021-04-01".into()),
                    end_date: Some("2024-01-01".into()),
                    current: true,
                    description: Some("Owned the platform.".into()),
                    achievements: vec!["Cut latency 40%".into(), "Hired 5".into()],
                    ..Default::default()
                },
                ProfileExperience {
                    company: "Globex".into(),
                    position: "Engineer".into(),
                    start_date: Some("2018-06".into()),
                    end_date: Some("Spring 2021".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let analysis = JobAnalyzer::new().analyze("anything");
        let entries = build_experiences(kb(), &analysis, Some(&profile), &[], 2025, &mut Lowest);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Acme");
        assert!(entries[0].current);
        assert_eq!(entries[0].start_date, "Apr 2021");
        assert_eq!(entries[0].end_date, "");
        assert_eq!(
            entries[0].description,
            "Owned the platform.\n• Cut latency 40%\n• Hired 5"
        );
        assert_eq!(entries[1].company, "Globex");
        assert!(!entries[1].current);
        assert_eq!(entries[1].start_date, "Jun 2018");
        assert_eq!(entries[1].end_date, "Spring 2021");
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn test_synthesized_senior_history() {
        let analysis = JobAnalyzer::new().analyze("Senior backend engineer, fintech payments");
        assert_eq!(analysis.experience_level, ExperienceLevel::Senior);
        assert_eq!(analysis.industry, Industry::Finance);

        let skills = vec!["Rust".to_string()];
        let entries = build_experiences(kb(), &analysis, None, &skills, 2025, &mut Lowest);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].position, analysis.detected_title);
        assert!(entries[0].current);
        assert_eq!(entries[0].end_date, "");
        assert_eq!(entries[0].start_date, "Jan 2024");
        assert_eq!(entries[1].end_date, "Jan 2024");
        assert_eq!(entries[1].start_date, "Jan 2023");
        assert_eq!(entries[1].position, "Software Engineer");
        assert!(entries.iter().skip(1).all(|e| !e.current));

        let finance = kb().company_pool(Industry::Finance);
        for entry in &entries {
            assert!(finance.contains(&entry.company.as_str()));
            let bullets: Vec<&str> = entry.description.lines().collect();
            assert_eq!(bullets.len(), 3);
            assert!(bullets.iter().all(|b| b.starts_with("• ")));
            assert!(!entry.description.contains('{'));
        }
        // Verb groups rotate: development, leadership, improvement.
        let first: Vec<&str> = entries[0].description.lines().collect();
        assert!(first[0].starts_with("• Developed"));
        assert!(first[1].starts_with("• Led"));
        assert!(first[2].starts_with("• Optimized"));
    }

    #[test]
    fn test_companies_are_distinct() {
        let analysis = JobAnalyzer::new().analyze("Senior engineer");
        let mut rng = fastrand::Rng::with_seed(5);
        let entries = build_experiences(kb(), &analysis, None, &[], 2025, &mut rng);
        let mut names: Vec<&str> = entries.iter().map(|e| e.company.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn test_later_positions_follow_title_table() {
        let analysis = JobAnalyzer::new().analyze("Senior mobile engineer");
        let entries = build_experiences(kb(), &analysis, None, &[], 2025, &mut Highest);
        assert_eq!(entries.len(), 4);
        let titles = kb().job_titles(analysis.domain).unwrap();
        assert_eq!(entries[3].position, titles[3]);
        // Highest durations: 3 years each.
        assert_eq!(entries[0].start_date, "Dec 2022");
        assert_eq!(entries[3].start_date, "Dec 2013");
        assert_eq!(entries[3].end_date, "Dec 2016");
    }

    #[test]
    fn test_bullets_without_skills_use_fallback() {
        let analysis = JobAnalyzer::new().analyze("Junior developer");
        let entries = build_experiences(kb(), &analysis, None, &[], 2025, &mut Highest);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description.lines().count(), 4);
        // The last template mentions {technology}.
        assert!(entries[0].description.contains("modern technologies"));
    }
}

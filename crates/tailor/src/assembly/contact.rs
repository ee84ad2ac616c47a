//! Contact block: profile values where present, synthesized otherwise.

use crate::input::{present, CandidateProfile};
use crate::knowledge::KnowledgeBase;
use crate::random::{pick, RandomSource};
use crate::resume::ContactBlock;

/// Username used when a name has no alphanumeric characters.
const FALLBACK_USERNAME: &str = "candidate";

pub(crate) fn build_contact(
    kb: &KnowledgeBase,
    profile: Option<&CandidateProfile>,
    rng: &mut dyn RandomSource,
) -> ContactBlock {
    let first_name = text(profile.map(|p| &p.first_name))
        .unwrap_or_else(|| pick(rng, kb.first_names).to_string());
    let middle_name = text(profile.map(|p| &p.middle_name));
    let last_name = text(profile.map(|p| &p.last_name))
        .unwrap_or_else(|| pick(rng, kb.last_names).to_string());

    let full_name = match &middle_name {
        Some(middle) => format!("{} {} {}", first_name, middle, last_name),
        None => format!("{} {}", first_name, last_name),
    };
    let username = username(&first_name, &last_name);

    let email = text(profile.map(|p| &p.email))
        .unwrap_or_else(|| format!("{}@email.com", username));
    let phone = text(profile.map(|p| &p.phone)).unwrap_or_else(|| synthesize_phone(rng));
    let location = text(profile.map(|p| &p.location))
        .unwrap_or_else(|| pick(rng, kb.locations).to_string());
    let linkedin = text(profile.map(|p| &p.linkedin))
        .unwrap_or_else(|| format!("https://linkedin.com/in/{}", username));
    let github = text(profile.map(|p| &p.github))
        .unwrap_or_else(|| format!("https://github.com/{}", username));
    let website = text(profile.map(|p| &p.website))
        .or_else(|| text(profile.map(|p| &p.portfolio)))
        .unwrap_or_default();

    ContactBlock {
        full_name,
        email,
        phone,
        location,
        linkedin,
        github,
        website,
    }
}

fn text(field: Option<&Option<String>>) -> Option<String> {
    field.and_then(present).map(str::to_string)
}

/// Lower-cased first and last name with everything but letters and digits removed.
fn username(first: &str, last: &str) -> String {
    let name: String = first
        .chars()
        .chain(last.chars())
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if name.is_empty() {
        FALLBACK_USERNAME.to_string()
    } else {
        name
    }
}

/// `(XXX) XXX-XXXX` with no leading 0 or 1 in the area code or exchange.
fn synthesize_phone(rng: &mut dyn RandomSource) -> String {
    let area = rng.between(200, 999);
    let exchange = rng.between(200, 999);
    let line = rng.between(1000, 9999);
    format!("({}) {}-{}", area, exchange, line)
}

//! Job title detection from rank-prefixed phrases.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Checked in order; the first pattern that matches anywhere in the text wins.

static TITLE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (rank_pattern(r"senior|sr\.?"), "Senior "),
        (rank_pattern(r"junior|jr\.?"), "Junior "),
        (rank_pattern("lead"), "Lead "),
        (rank_pattern("staff"), "Staff "),
    ]
});

/// ASCII word run, the same class the tokenizer splits on.
const WORD: &str = r"(?-u:\w)+";

/// A rank keyword followed by two or three words, captured as group 1.
fn rank_pattern(rank: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)(?:{rank})\s+({w}\s+{w}(?:\s+{w})?)",
        rank = rank,
        w = WORD
    ))
    .unwrap()
}

/// Detect a rank-prefixed title such as "Senior Backend Engineer".
///
/// Captures the two or three words following the rank keyword and
/// title-cases them. Returns `None` when no rank keyword is followed by at
/// least two words.
pub fn detect_title(text: &str) -> Option<String> {
    TITLE_PATTERNS.iter().find_map(|(pattern, prefix)| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|phrase| format!("{}{}", prefix, title_case(phrase.as_str())))
    })
}

/// Upper-case every word character that follows a non-word character.
///
/// `"node.js"` becomes `"Node.Js"` and `"github actions"` becomes
/// `"Github Actions"`; characters that are already upper-case are kept.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.chars() {
        let is_word = is_word_char(c);
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// `[A-Za-z0-9_]`.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

//! Term-frequency keyword extraction.
//!
//! Terms are weighted by tf-idf with the posting as the only document in the
//! corpus. The idf factor is then the same for every term, so the ranking is
//! by frequency with ties broken by first occurrence.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use super::title::is_word_char;

/// A term with its frequency and tf-idf weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    pub term: String,
    pub frequency: usize,
    pub weight: f64,
}

/// Extracts the highest-weighted terms from a posting.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    limit: usize,
}

impl KeywordExtractor {
    /// Create an extractor that keeps at most `limit` ranked terms before filtering.
    pub fn new(stop_words: &'static [&'static str], limit: usize) -> Self {
        Self {
            stop_words: stop_words.iter().copied().collect(),
            limit,
        }
    }

    /// Rank every term in the text, highest weight first.
    pub fn rank_terms(&self, text: &str) -> Vec<RankedTerm> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }

        // One document, and every term occurs in it.
        let documents = 1.0_f64;
        let document_frequency = 1.0_f64;
        let idf = 1.0 + (documents / (1.0 + document_frequency)).ln();

        let mut ranked: Vec<RankedTerm> = counts
            .into_iter()
            .map(|(term, frequency)| RankedTerm {
                term,
                frequency,
                weight: frequency as f64 * idf,
            })
            .collect();

        // Stable: equal weights keep first-occurrence order.
        ranked.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Top-ranked terms, minus short terms and stop words.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.rank_terms(text)
            .into_iter()
            .take(self.limit)
            .filter(|t| t.term.chars().count() > 2 && !self.stop_words.contains(t.term.as_str()))
            .map(|t| t.term)
            .collect()
    }
}

/// Lower-cased runs of word characters.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::STOP_WORDS;

    #[test]
    fn test_frequency_ranking() {
        let extractor = KeywordExtractor::new(STOP_WORDS, 30);
        let keywords = extractor.extract("Rust rust RUST kafka kafka docker");
        assert_eq!(keywords, vec!["rust", "kafka", "docker"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let extractor = KeywordExtractor::new(STOP_WORDS, 30);
        let keywords = extractor.extract("zebra apple mango");
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_short_terms_and_stop_words_dropped() {
        let extractor = KeywordExtractor::new(STOP_WORDS, 30);
        let keywords = extractor.extract("the the the and go ai python");
        assert_eq!(keywords, vec!["python"]);
    }

    #[test]
    fn test_limit_applies_before_filtering() {
        let extractor = KeywordExtractor::new(STOP_WORDS, 2);
        // "the" and "and" take both ranked slots, then get filtered out.
        let keywords = extractor.extract("the the the and and python");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_weights_are_proportional_to_frequency() {
        let extractor = KeywordExtractor::new(STOP_WORDS, 30);
        let ranked = extractor.rank_terms("alpha alpha beta");
        assert_eq!(ranked[0].term, "alpha");
        assert_eq!(ranked[0].frequency, 2);
        assert!((ranked[0].weight - 2.0 * ranked[1].weight).abs() < 1e-9);
    }

    #[test]
    fn test_non_ascii_letters_split_terms() {
        let extractor = KeywordExtractor::new(STOP_WORDS, 30);
        let ranked = extractor.rank_terms("Café naïve_sql");
        let terms: Vec<&str> = ranked.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["caf", "na", "ve_sql"]);
    }

    #[test]
    fn test_empty_text() {
        let extractor = KeywordExtractor::new(STOP_WORDS, 30);
        assert!(extractor.extract("").is_empty());
        assert!(extractor.rank_terms("  \n\t ").is_empty());
    }
}

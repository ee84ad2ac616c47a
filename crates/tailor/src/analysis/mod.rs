//! Job posting analysis.

mod analyzer;
mod keywords;
mod title;

pub use analyzer::{AnalyzerConfig, JobAnalysis, JobAnalyzer, DEFAULT_TITLE};
pub use keywords::{KeywordExtractor, RankedTerm};
pub use title::{detect_title, title_case};

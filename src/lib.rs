// Docsense: heuristic document analysis
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline or one of its collaborators (extraction, rendering).

pub mod config;
pub mod extract;
pub mod keywords;
pub mod language;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod summary;

pub use pipeline::analyze::{analyze, AnalysisResult, Analyzer};
pub use sentiment::Sentiment;

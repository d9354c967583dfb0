pub mod analysis;
pub mod config;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod tracing;
pub mod transcript;
pub mod types;
pub mod web;
pub mod yt;

pub use error::Error;
pub use llm::gemini;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use processor::{
    builder::VideoAnalyzerBuilder, AnalysisReport, NotesReport, StageOutcome, VideoAnalyzer,
};

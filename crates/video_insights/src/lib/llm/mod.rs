pub mod gemini;
pub mod summarizer;

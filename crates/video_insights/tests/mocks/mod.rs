pub mod summarizer;
pub mod transcript_source;
pub mod video_platform;

mod keywords;
mod sentiment;

pub use keywords::extract_keywords;
pub use sentiment::{analyze_sentiment, bucket_comments};

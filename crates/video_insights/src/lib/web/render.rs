use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use itertools::Itertools;

use crate::{
    processor::{AnalysisReport, NotesReport, StageOutcome},
    transcript::TranscriptError,
    types::VideoId,
    web::PageSpec,
};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
input[type=text]{width:100%;padding:.5rem;box-sizing:border-box}\
img{width:100%;margin-top:1rem}\
.error{background:#fde8e8;color:#9b1c1c;padding:.75rem;border-radius:.25rem}\
.warning{background:#fdf6b2;color:#723b13;padding:.75rem;border-radius:.25rem}\
.text{white-space:pre-wrap;overflow-y:auto;max-height:32rem}";

pub fn page(spec: PageSpec, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head><body><h1>{title}</h1>{body}</body></html>",
        title = encode_text(spec.title),
    )
}

pub fn form(spec: PageSpec, link: &str) -> String {
    format!(
        "<form method=\"get\" action=\"/\">\
         <label for=\"link\">Enter YouTube Video Link:</label>\
         <input type=\"text\" id=\"link\" name=\"link\" value=\"{link}\">\
         <button type=\"submit\" name=\"action\" value=\"run\">{button}</button>\
         </form>",
        link = encode_double_quoted_attribute(link),
        button = encode_text(spec.button),
    )
}

pub fn thumbnail(video_id: &VideoId) -> String {
    format!(
        "<img src=\"{}\" alt=\"Video thumbnail\">",
        encode_double_quoted_attribute(&video_id.thumbnail_url())
    )
}

pub fn error(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", encode_text(message))
}

pub fn warning(message: &str) -> String {
    format!("<p class=\"warning\">{}</p>", encode_text(message))
}

fn heading(level: u8, text: &str) -> String {
    format!("<h{level}>{}</h{level}>", encode_text(text))
}

fn text_block(text: &str) -> String {
    format!("<div class=\"text\">{}</div>", encode_text(text))
}

fn transcript_failure(e: &TranscriptError) -> String {
    if e.is_recoverable() {
        warning(&e.to_string())
    } else {
        error(&e.to_string())
    }
}

fn stage_failure<T>(outcome: &StageOutcome<T>) -> Option<String> {
    match outcome {
        StageOutcome::NotFound(message) => Some(warning(message)),
        StageOutcome::Failed(message) => Some(error(message)),
        StageOutcome::Ready(_) | StageOutcome::Skipped => None,
    }
}

pub fn notes_report(report: &NotesReport) -> String {
    if let Err(e) = &report.transcript {
        return transcript_failure(e);
    }

    match &report.summary {
        StageOutcome::Ready(summary) => {
            format!("{}{}", heading(2, "Detailed Notes:"), text_block(summary))
        }
        other => stage_failure(other).unwrap_or_default(),
    }
}

pub fn analysis_report(report: &AnalysisReport) -> String {
    let mut html = String::new();

    match &report.transcript {
        Err(e) => {
            html.push_str(&transcript_failure(e));
            html.push_str(&warning(
                "Transcript-based analysis skipped due to unavailable subtitles.",
            ));
        }
        Ok(_) => {
            html.push_str(&heading(2, "Summary:"));
            match &report.summary {
                StageOutcome::Ready(summary) => html.push_str(&text_block(summary)),
                other => html.push_str(&stage_failure(other).unwrap_or_default()),
            }

            html.push_str(&heading(3, "Keywords:"));
            if let Some(keywords) = report.keywords.ready() {
                html.push_str(&text_block(&keywords.join(", ")));
            }
        }
    }

    html.push_str(&heading(2, "Video Details:"));
    match &report.details {
        StageOutcome::Ready(details) => {
            let _ = write!(
                html,
                "<p><strong>Title:</strong> <a href=\"{}\">{}</a></p>",
                encode_double_quoted_attribute(&report.video_id.watch_url()),
                encode_text(&details.title)
            );
            let rows = [
                ("Channel", details.channel_title.clone()),
                ("Views", details.views.to_string()),
                ("Likes", details.likes.to_string()),
                ("Dislikes", details.dislikes.to_string()),
                ("Comments", details.comments.to_string()),
            ];
            for (label, value) in rows {
                let _ = write!(html, "<p><strong>{label}:</strong> {}</p>", encode_text(&value));
            }
        }
        other => html.push_str(&stage_failure(other).unwrap_or_default()),
    }

    html.push_str(&heading(3, "Comment Sentiment Analysis:"));
    match &report.comments {
        StageOutcome::Ready(buckets) => {
            for (label, count) in [
                ("Positive Comments", buckets.positive.len()),
                ("Negative Comments", buckets.negative.len()),
                ("Neutral Comments", buckets.neutral.len()),
            ] {
                let _ = write!(html, "<p><strong>{label}:</strong> {count}</p>");
            }

            html.push_str(&heading(3, "Negative Comments:"));
            if buckets.negative.is_empty() {
                html.push_str("<p>No negative comments found.</p>");
            } else {
                let items = buckets
                    .negative
                    .iter()
                    .map(|c| format!("<li>{}</li>", encode_text(c)))
                    .join("");
                let _ = write!(html, "<ol>{items}</ol>");
            }
        }
        other => html.push_str(&stage_failure(other).unwrap_or_default()),
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CommentSentiments, VideoMetadata};

    fn analysis(transcript: Result<String, TranscriptError>) -> AnalysisReport {
        let video_id = VideoId::from("abc123");
        AnalysisReport {
            thumbnail_url: video_id.thumbnail_url(),
            video_id,
            transcript,
            summary: StageOutcome::Skipped,
            keywords: StageOutcome::Skipped,
            details: StageOutcome::NotFound("No video found for id abc123".into()),
            comments: StageOutcome::Ready(CommentSentiments::default()),
        }
    }

    #[test]
    fn test_text_blocks_are_escaped() {
        assert_eq!(
            text_block(r#"<script>alert("x") & 'y'</script>"#),
            r#"<div class="text">&lt;script&gt;alert("x") &amp; 'y'&lt;/script&gt;</div>"#
        );
        assert_eq!(error("a < b"), r#"<p class="error">a &lt; b</p>"#);
    }

    #[test]
    fn test_form_escapes_link_value() {
        let html = form(PageSpec::NOTES, "\"><script>");
        assert!(html.contains("value=\"&quot;"));
        assert!(!html.contains("\"><script>"));
        assert!(html.contains("Get Detailed Notes"));
    }

    #[test]
    fn test_missing_transcript_skips_summary_but_shows_details() {
        let html = analysis_report(&analysis(Err(TranscriptError::NotAvailable)));
        assert!(html.contains("No transcript available in any language"));
        assert!(html.contains("Transcript-based analysis skipped"));
        assert!(!html.contains("Summary:"));
        assert!(html.contains("Video Details:"));
        assert!(html.contains("No video found for id abc123"));
        assert!(html.contains("No negative comments found."));
    }

    #[test]
    fn test_full_report_sections() {
        let mut report = analysis(Ok("transcript".into()));
        report.summary = StageOutcome::Ready("* point <one>".into());
        report.keywords = StageOutcome::Ready(vec!["rust".into(), "cargo".into()]);
        report.details = StageOutcome::Ready(VideoMetadata {
            title: "Intro".into(),
            channel_title: "Chan".into(),
            views: 10,
            ..Default::default()
        });
        report.comments = StageOutcome::Ready(CommentSentiments {
            positive: vec!["nice".into()],
            negative: vec!["bad <audio>".into(), "boring".into()],
            neutral: vec![],
        });

        let html = analysis_report(&report);
        assert!(html.contains("* point &lt;one&gt;"));
        assert!(html.contains("rust, cargo"));
        assert!(html.contains(
            "<strong>Title:</strong> <a href=\"https://www.youtube.com/watch?v=abc123\">Intro</a>"
        ));
        assert!(html.contains("<strong>Views:</strong> 10"));
        assert!(html.contains("<strong>Dislikes:</strong> 0"));
        assert!(html.contains("<strong>Negative Comments:</strong> 2"));
        assert!(html.contains("<ol><li>bad &lt;audio&gt;</li><li>boring</li></ol>"));
    }

    #[test]
    fn test_notes_report_shows_disabled_warning() {
        let video_id = VideoId::from("abc123");
        let report = NotesReport {
            thumbnail_url: video_id.thumbnail_url(),
            video_id,
            transcript: Err(TranscriptError::Disabled),
            summary: StageOutcome::Skipped,
        };
        let html = notes_report(&report);
        assert!(html.starts_with("<p class=\"warning\">"));
        assert!(html.contains("Subtitles are disabled"));
    }
}

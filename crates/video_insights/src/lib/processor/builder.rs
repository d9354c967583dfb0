use text_signals::{LexiconAnalyzer, SentimentScorer, Tokenizer};

use crate::{
    llm::gemini::NOTES_PROMPT,
    transcript::TranscriptFetcher,
    yt::{TranscriptSource, VideoPlatform},
    Summarizer, VideoAnalyzer,
};

pub struct VideoAnalyzerBuilder<T = (), S = (), P = (), N = LexiconAnalyzer> {
    transcript_source: T,
    summarizer: S,
    platform: P,
    nlp: N,
    preferred_languages: Vec<String>,
    prompt: String,
    max_keywords: usize,
    max_comments: usize,
}

impl VideoAnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            transcript_source: (),
            summarizer: (),
            platform: (),
            nlp: LexiconAnalyzer,
            preferred_languages: Vec::new(),
            prompt: NOTES_PROMPT.to_string(),
            max_keywords: 10,
            max_comments: 100,
        }
    }
}

impl Default for VideoAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, P, N> VideoAnalyzerBuilder<T, S, P, N> {
    pub fn transcript_source<T2: TranscriptSource + Send + Sync + 'static>(
        self,
        transcript_source: T2,
    ) -> VideoAnalyzerBuilder<T2, S, P, N> {
        VideoAnalyzerBuilder {
            transcript_source,
            summarizer: self.summarizer,
            platform: self.platform,
            nlp: self.nlp,
            preferred_languages: self.preferred_languages,
            prompt: self.prompt,
            max_keywords: self.max_keywords,
            max_comments: self.max_comments,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> VideoAnalyzerBuilder<T, S2, P, N> {
        VideoAnalyzerBuilder {
            transcript_source: self.transcript_source,
            summarizer,
            platform: self.platform,
            nlp: self.nlp,
            preferred_languages: self.preferred_languages,
            prompt: self.prompt,
            max_keywords: self.max_keywords,
            max_comments: self.max_comments,
        }
    }

    pub fn platform<P2: VideoPlatform + Send + Sync + 'static>(
        self,
        platform: P2,
    ) -> VideoAnalyzerBuilder<T, S, P2, N> {
        VideoAnalyzerBuilder {
            transcript_source: self.transcript_source,
            summarizer: self.summarizer,
            platform,
            nlp: self.nlp,
            preferred_languages: self.preferred_languages,
            prompt: self.prompt,
            max_keywords: self.max_keywords,
            max_comments: self.max_comments,
        }
    }

    pub fn nlp<N2: Tokenizer + SentimentScorer + Send + Sync + 'static>(
        self,
        nlp: N2,
    ) -> VideoAnalyzerBuilder<T, S, P, N2> {
        VideoAnalyzerBuilder {
            transcript_source: self.transcript_source,
            summarizer: self.summarizer,
            platform: self.platform,
            nlp,
            preferred_languages: self.preferred_languages,
            prompt: self.prompt,
            max_keywords: self.max_keywords,
            max_comments: self.max_comments,
        }
    }

    /// Languages tried before falling back to any available transcript.
    /// Empty means a single unrestricted attempt.
    pub fn preferred_languages<L: Into<String>>(
        mut self,
        languages: impl IntoIterator<Item = L>,
    ) -> Self {
        self.preferred_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn max_comments(mut self, max_comments: usize) -> Self {
        self.max_comments = max_comments;
        self
    }
}

impl<T, S, P, N> VideoAnalyzerBuilder<T, S, P, N>
where
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> VideoAnalyzer<T, S, P, N> {
        VideoAnalyzer {
            transcripts: TranscriptFetcher::new(self.transcript_source)
                .with_preferred_languages(self.preferred_languages),
            summarizer: self.summarizer,
            platform: self.platform,
            nlp: self.nlp,
            prompt: self.prompt,
            max_keywords: self.max_keywords,
            max_comments: self.max_comments,
        }
    }
}

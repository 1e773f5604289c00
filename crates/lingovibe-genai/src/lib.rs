use async_trait::async_trait;
use lingovibe_types::{DictionaryResult, Language};

pub mod chat;
pub mod gemini;

pub use chat::{ChatBackend, ChatSession};
pub use gemini::{GeminiClient, GeminiMedia};

/// Used when image generation fails or returns no picture
pub const FALLBACK_IMAGE_URL: &str = "https://picsum.photos/400/400";
pub const STORY_FALLBACK: &str = "Could not generate story.";

/// Generates a dictionary entry for a term
#[async_trait]
pub trait LookupService: Send + Sync {
    /// The returned term is always in `target`, translated if the input was in `source`
    async fn lookup(
        &self,
        term: &str,
        source: Language,
        target: Language,
    ) -> Result<DictionaryResult, GenAiError>;
}

/// Pictures and speech. Neither call ever fails outward.
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Image URL for the term, or [`FALLBACK_IMAGE_URL`]
    async fn image_for(&self, term: &str, target: Language) -> String;

    /// Synthesize and play `text`; failures are logged and dropped
    async fn speak(&self, text: &str, lang: Language);
}

pub trait ChatService: Send + Sync {
    fn create_session(&self, term: &str, source: Language, target: Language) -> ChatSession;
}

#[async_trait]
pub trait StoryService: Send + Sync {
    /// Callers must pass at least two terms
    async fn compose(
        &self,
        terms: &[String],
        target: Language,
        source: Language,
    ) -> Result<String, GenAiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

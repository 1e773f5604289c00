use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lingovibe_audio::{AudioSink, PcmBuffer, decode_base64};
use lingovibe_config::audio::AudioConfig;
use lingovibe_config::gemini::GeminiConfig;
use lingovibe_types::{ChatMessage, DictionaryResult, Language};
use reqwest::StatusCode;

use crate::chat::{ChatBackend, ChatSession};
use crate::{
    ChatService, FALLBACK_IMAGE_URL, GenAiError, LookupService, MediaService, STORY_FALLBACK,
    StoryService,
};

use self::wire::{ErrorResponse, GenerateRequest, GenerateResponse, GenerationConfig};

pub mod prompts;
pub mod wire;

/// Gemini `generateContent` over REST
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GenAiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        tracing::info!(
            "Initializing Gemini client: url={}, text={}, image={}, tts={}",
            config.api_url,
            config.text_model,
            config.image_model,
            config.tts_model
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            model
        )
    }

    pub async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenAiError> {
        if !self.config.has_api_key() {
            return Err(GenAiError::AuthenticationError);
        }

        tracing::debug!("Calling {} ({} content blocks)", model, request.contents.len());

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| GenAiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    /// Base64 PCM for `text`, `None` if the model returned no audio
    pub async fn synthesize_speech(&self, text: &str) -> Result<Option<String>, GenAiError> {
        let request = GenerateRequest::prompt(text).with_config(GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(prompts::speech_config(&self.config.voice)),
            ..GenerationConfig::default()
        });

        let response = self.generate(&self.config.tts_model, &request).await?;
        Ok(response.inline_data().map(|d| d.data.clone()))
    }

    async fn generate_image(
        &self,
        term: &str,
        target: Language,
    ) -> Result<Option<String>, GenAiError> {
        let request = GenerateRequest::prompt(prompts::image_prompt(term, target));
        let response = self.generate(&self.config.image_model, &request).await?;

        Ok(response
            .inline_data()
            .map(|d| format!("data:{};base64,{}", d.mime_type, d.data)))
    }
}

fn status_error(status: StatusCode, body: &str) -> GenAiError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GenAiError::RateLimitExceeded,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenAiError::AuthenticationError,
        _ => {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .map(|e| e.error.message)
                .unwrap_or_default();
            if message.is_empty() {
                GenAiError::ApiError(format!("HTTP {}", status))
            } else {
                GenAiError::ApiError(format!("HTTP {}: {}", status, message))
            }
        }
    }
}

/// Parse the model's JSON reply into an entry
pub fn parse_dictionary(text: &str) -> Result<DictionaryResult, GenAiError> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    serde_json::from_str(trimmed)
        .map_err(|e| GenAiError::InvalidResponse(format!("Malformed dictionary entry: {}", e)))
}

#[async_trait]
impl LookupService for GeminiClient {
    async fn lookup(
        &self,
        term: &str,
        source: Language,
        target: Language,
    ) -> Result<DictionaryResult, GenAiError> {
        let request = GenerateRequest::prompt(prompts::LOOKUP_CONTENTS)
            .with_system(prompts::lookup_instruction(term, source, target))
            .with_config(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(prompts::lookup_schema(source, target)),
                ..GenerationConfig::default()
            });

        let response = self.generate(&self.config.text_model, &request).await?;
        let text = response.text().ok_or(GenAiError::EmptyResponse)?;
        let mut result = parse_dictionary(&text)?;
        // Images are attached later, never by the text model
        result.image_url = None;

        tracing::info!("Looked up '{}' -> '{}'", term, result.term);
        Ok(result)
    }
}

#[async_trait]
impl StoryService for GeminiClient {
    async fn compose(
        &self,
        terms: &[String],
        target: Language,
        source: Language,
    ) -> Result<String, GenAiError> {
        let request = GenerateRequest::prompt(prompts::story_prompt(terms, target, source));
        let response = self.generate(&self.config.text_model, &request).await?;

        Ok(response.text().unwrap_or_else(|| STORY_FALLBACK.to_string()))
    }
}

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn reply(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
    ) -> Result<String, GenAiError> {
        let request = GenerateRequest::conversation(history).with_system(system_instruction);
        let response = self.generate(&self.config.text_model, &request).await?;

        Ok(response.text().unwrap_or_default())
    }
}

impl ChatService for GeminiClient {
    fn create_session(&self, term: &str, source: Language, target: Language) -> ChatSession {
        ChatSession::new(Arc::new(self.clone()), term, source, target)
    }
}

/// Speech failures are only ever logged
#[derive(Debug, thiserror::Error)]
enum SpeakError {
    #[error(transparent)]
    GenAi(#[from] GenAiError),
    #[error(transparent)]
    Audio(#[from] lingovibe_audio::AudioError),
}

/// Images and speech on top of a [`GeminiClient`]
pub struct GeminiMedia {
    client: GeminiClient,
    sink: Arc<dyn AudioSink>,
    sample_rate: u32,
    channels: u16,
}

impl GeminiMedia {
    pub fn new(client: GeminiClient, sink: Arc<dyn AudioSink>, audio: &AudioConfig) -> Self {
        Self {
            client,
            sink,
            sample_rate: audio.sample_rate,
            channels: audio.channels,
        }
    }

    async fn try_speak(&self, text: &str) -> Result<(), SpeakError> {
        let Some(encoded) = self.client.synthesize_speech(text).await? else {
            tracing::debug!("No audio returned for '{}'", text);
            return Ok(());
        };

        let bytes = decode_base64(&encoded)?;
        let buffer = PcmBuffer::from_pcm16_le(&bytes, self.sample_rate, self.channels)?;
        self.sink.play(&buffer)?;
        Ok(())
    }
}

#[async_trait]
impl MediaService for GeminiMedia {
    async fn image_for(&self, term: &str, target: Language) -> String {
        match self.client.generate_image(term, target).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::warn!("No image data for '{}', using placeholder", term);
                FALLBACK_IMAGE_URL.to_string()
            }
            Err(e) => {
                tracing::error!("Image generation for '{}' failed: {}", term, e);
                FALLBACK_IMAGE_URL.to_string()
            }
        }
    }

    async fn speak(&self, text: &str, lang: Language) {
        tracing::debug!("Speaking {} text: '{}'", lang, text);
        if let Err(e) = self.try_speak(text).await {
            tracing::error!("TTS error: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            GenAiError::RateLimitExceeded
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, ""),
            GenAiError::AuthenticationError
        ));

        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": {"code": 400, "message": "bad schema", "status": "INVALID_ARGUMENT"}}"#,
        );
        assert_eq!(err.to_string(), "API error: HTTP 400 Bad Request: bad schema");

        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>");
        assert_eq!(err.to_string(), "API error: HTTP 500 Internal Server Error");
    }

    #[test]
    fn parses_entry_with_and_without_fences() {
        let json = r#"{"term":"libro","definition":"book","examples":[{"target":"Mi libro.","native":"My book."}],"usageContext":{"tone":"neutral","culture":"","synonyms":["tomo"],"nuance":""}}"#;

        let plain = parse_dictionary(json).unwrap();
        assert_eq!(plain.term, "libro");
        assert_eq!(plain.examples.len(), 1);

        let fenced = parse_dictionary(&format!("```json\n{json}\n```")).unwrap();
        assert_eq!(fenced, plain);

        assert!(matches!(
            parse_dictionary("not json"),
            Err(GenAiError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: String::new(),
            api_url: "http://127.0.0.1:9".to_string(),
            ..GeminiConfig::default()
        })
        .unwrap();

        let err = client
            .lookup("book", Language::English, Language::Spanish)
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::AuthenticationError));
    }
}

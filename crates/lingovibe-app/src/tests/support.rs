use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kanal::AsyncReceiver;
use lingovibe_config::Config;
use lingovibe_core::{FixedClock, MemoryStore, NotebookStore, SequentialIds};
use lingovibe_genai::chat::ChatBackend;
use lingovibe_genai::{
    ChatService, ChatSession, GenAiError, LookupService, MediaService, StoryService,
};
use lingovibe_types::{
    AppEvent, ChatMessage, DictionaryResult, ExampleSentence, Language, UiEvent, UsageContext,
};

use crate::events::{Session, handle_events};
use crate::state::AppState;

pub const IMAGE_URL: &str = "data:image/png;base64,AAAA";

pub fn entry(term: &str) -> DictionaryResult {
    DictionaryResult {
        term: term.to_string(),
        definition: format!("meaning of {term}"),
        pronunciation: None,
        examples: vec![ExampleSentence {
            target: format!("Uso {term} hoy."),
            native: format!("I use {term} today."),
        }],
        usage_context: UsageContext {
            tone: "neutral".to_string(),
            ..UsageContext::default()
        },
        image_url: None,
    }
}

/// Answers from a fixed table; anything else is a backend failure
#[derive(Default)]
pub struct StubLookup {
    pub entries: HashMap<String, DictionaryResult>,
}

impl StubLookup {
    pub fn with(terms: &[(&str, &str)]) -> Self {
        let entries = terms
            .iter()
            .map(|(query, term)| (query.to_string(), entry(term)))
            .collect();
        Self { entries }
    }
}

#[async_trait]
impl LookupService for StubLookup {
    async fn lookup(
        &self,
        term: &str,
        _source: Language,
        _target: Language,
    ) -> Result<DictionaryResult, GenAiError> {
        self.entries
            .get(term)
            .cloned()
            .ok_or_else(|| GenAiError::ApiError("HTTP 500".to_string()))
    }
}

#[derive(Default)]
pub struct StubMedia {
    pub spoken: Mutex<Vec<(String, Language)>>,
}

#[async_trait]
impl MediaService for StubMedia {
    async fn image_for(&self, _term: &str, _target: Language) -> String {
        IMAGE_URL.to_string()
    }

    async fn speak(&self, text: &str, lang: Language) {
        self.spoken.lock().unwrap().push((text.to_string(), lang));
    }
}

pub struct StubStory {
    pub fail: bool,
}

#[async_trait]
impl StoryService for StubStory {
    async fn compose(
        &self,
        terms: &[String],
        _target: Language,
        _source: Language,
    ) -> Result<String, GenAiError> {
        if self.fail {
            return Err(GenAiError::RateLimitExceeded);
        }
        Ok(format!("Once upon a time: {}", terms.join(", ")))
    }
}

/// Echoes the last user message back
pub struct EchoChat;

#[async_trait]
impl ChatBackend for EchoChat {
    async fn reply(
        &self,
        _system_instruction: &str,
        history: &[ChatMessage],
    ) -> Result<String, GenAiError> {
        let last = history.last().map(|m| m.text.clone()).unwrap_or_default();
        Ok(format!("echo: {last}"))
    }
}

impl ChatService for EchoChat {
    fn create_session(&self, term: &str, source: Language, target: Language) -> ChatSession {
        ChatSession::new(Arc::new(EchoChat), term, source, target)
    }
}

pub struct Harness {
    pub state: AppState,
    pub session: Session,
    pub media: Arc<StubMedia>,
}

impl Harness {
    pub fn new(lookup: StubLookup) -> Self {
        Self::with_story(lookup, StubStory { fail: false })
    }

    pub fn with_story(lookup: StubLookup, story: StubStory) -> Self {
        let config = Config::default();
        let media = Arc::new(StubMedia::default());
        let notebook = NotebookStore::load(
            Arc::new(MemoryStore::new()),
            config.storage.notebook_key.clone(),
        );

        let state = AppState {
            notebook: tokio::sync::Mutex::new(notebook),
            lookup: Arc::new(lookup),
            media: media.clone(),
            chat: Arc::new(EchoChat),
            story: Arc::new(story),
            ids: Arc::new(SequentialIds::new("w")),
            clock: Arc::new(FixedClock(1_700_000_000_000)),
            config,
        };

        Self {
            state,
            session: Session::new(Language::English, Language::Spanish),
            media,
        }
    }

    /// Feed events through the dispatcher and collect what would be rendered
    pub async fn run(&mut self, events: Vec<AppEvent>) -> Vec<UiEvent> {
        let (ui_tx, ui_rx) = kanal::bounded_async(256);
        for event in events {
            handle_events(&self.state, &mut self.session, &ui_tx, event)
                .await
                .expect("handler failed");
        }
        drain(&ui_rx)
    }

    pub async fn type_line(&mut self, line: &str) -> Vec<UiEvent> {
        self.run(vec![AppEvent::TextInput(line.to_string())]).await
    }

    pub async fn saved_ids(&self) -> Vec<String> {
        let notebook = self.state.notebook.lock().await;
        notebook.words().iter().map(|w| w.id.clone()).collect()
    }
}

fn drain(rx: &AsyncReceiver<UiEvent>) -> Vec<UiEvent> {
    let mut out = Vec::new();
    while let Ok(Some(event)) = rx.try_recv() {
        out.push(event);
    }
    out
}

pub fn notice(events: &[UiEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            UiEvent::Notice(text) | UiEvent::Failure(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

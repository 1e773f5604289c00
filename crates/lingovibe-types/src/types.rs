use serde::{Deserialize, Serialize};

use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    /// Sentence in the language being learned
    pub target: String,
    /// Translation in the user's own language
    pub native: String,
}

/// The "vibe check": how the term is actually used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageContext {
    pub tone: String,
    pub culture: String,
    pub synonyms: Vec<String>,
    pub nuance: String,
}

/// One generated dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryResult {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
    #[serde(default)]
    pub usage_context: UsageContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A dictionary entry kept in the notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWord {
    #[serde(flatten)]
    pub entry: DictionaryResult,
    pub id: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub source_lang: Language,
    pub target_lang: Language,
}

impl SavedWord {
    pub fn new(
        entry: DictionaryResult,
        id: String,
        timestamp: i64,
        source_lang: Language,
        target_lang: Language,
    ) -> Self {
        Self {
            entry,
            id,
            timestamp,
            source_lang,
            target_lang,
        }
    }

    pub fn term(&self) -> &str {
        &self.entry.term
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// What a flashcard shows for the current study position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    /// 1-based
    pub position: usize,
    pub total: usize,
    pub term: String,
    pub image_url: Option<String>,
    pub revealed: bool,
    pub definition: String,
    pub example: Option<ExampleSentence>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub term: String,
    pub source: Language,
    pub target: Language,
    pub save: bool,
    pub speak: bool,
    pub with_image: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyAction {
    Flip,
    Next,
    SpeakTerm,
    SpeakExample,
    Exit,
}

/// Commands flowing into the event loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw line typed into the shell, interpreted against the current mode
    TextInput(String),
    Lookup(LookupRequest),
    SaveCurrent,
    DeleteWord(String),
    ShowNotebook,
    CheckSaved(String),
    StartStudy,
    Study(StudyAction),
    WeaveStory {
        source: Language,
        target: Language,
    },
    SetLanguages {
        source: Language,
        target: Language,
    },
    OpenChat {
        term: Option<String>,
    },
    ChatInput(String),
    CloseChat,
    Speak {
        text: String,
        lang: Option<Language>,
    },
    Help,
    Shutdown,
}

/// Output flowing from the event loop to the terminal renderer
#[derive(Debug, Clone)]
pub enum UiEvent {
    ShowResult {
        result: DictionaryResult,
        saved: bool,
    },
    ShowImage(String),
    ShowNotebook(Vec<SavedWord>),
    ShowCard(Flashcard),
    ShowStory(String),
    Chat(ChatMessage),
    Notice(String),
    Failure(String),
    Help,
    Closed,
}

use std::env;
use std::path::PathBuf;

use lingovibe_types::Language;
use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::gemini::GeminiConfig;
use self::language::LanguageConfig;
use self::storage::StorageConfig;

pub mod audio;
pub mod gemini;
pub mod language;
pub mod storage;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub storage: StorageConfig,
    pub audio: AudioConfig,
    pub languages: LanguageConfig,
}

impl Config {
    /// Overlay environment variables on top of whatever was loaded
    pub fn apply_env(&mut self) {
        if let Some(key) = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            self.gemini.api_key = key;
        }

        if let Ok(url) = env::var("GEMINI_API_URL") {
            self.gemini.api_url = url;
        }

        if let Some(timeout) = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.gemini.timeout_seconds = timeout;
        }

        if let Ok(dir) = env::var("LINGOVIBE_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Ok(key) = env::var("LINGOVIBE_NOTEBOOK_KEY") {
            self.storage.notebook_key = key;
        }

        if let Some(lang) = env_language("LINGOVIBE_SOURCE_LANG") {
            self.languages.source = lang;
        }

        if let Some(lang) = env_language("LINGOVIBE_TARGET_LANG") {
            self.languages.target = lang;
        }
    }
}

fn env_language(name: &str) -> Option<Language> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

use lingovibe_types::Language;
use serde::{Deserialize, Serialize};

fn default_source() -> Language {
    Language::English
}

fn default_target() -> Language {
    Language::Spanish
}

/// Language pair used when a command does not name one
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct LanguageConfig {
    #[serde(default = "default_source")]
    pub source: Language,
    #[serde(default = "default_target")]
    pub target: Language,
}

impl LanguageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.source == self.target {
            return Err(format!(
                "source and target language are both {}",
                self.source
            ));
        }
        Ok(())
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

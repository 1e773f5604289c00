use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages offered on both sides of a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "English")]
    English,
    #[serde(rename = "Chinese (Mandarin)")]
    Chinese,
    #[serde(rename = "Spanish")]
    Spanish,
    #[serde(rename = "French")]
    French,
    #[serde(rename = "German")]
    German,
    #[serde(rename = "Japanese")]
    Japanese,
    #[serde(rename = "Korean")]
    Korean,
    #[serde(rename = "Portuguese")]
    Portuguese,
    #[serde(rename = "Russian")]
    Russian,
    #[serde(rename = "Arabic")]
    Arabic,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Chinese,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::Korean,
        Language::Portuguese,
        Language::Russian,
        Language::Arabic,
    ];

    /// Name shown to the user and sent to the model in prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese (Mandarin)",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Arabic => "Arabic",
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Arabic => "ar",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| {
                needle.eq_ignore_ascii_case(lang.code())
                    || needle.eq_ignore_ascii_case(lang.display_name())
                    || needle.eq_ignore_ascii_case(&format!("{lang:?}"))
            })
            .ok_or_else(|| ParseLanguageError(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_names_and_display_names() {
        assert_eq!("es".parse::<Language>(), Ok(Language::Spanish));
        assert_eq!("JA".parse::<Language>(), Ok(Language::Japanese));
        assert_eq!("chinese".parse::<Language>(), Ok(Language::Chinese));
        assert_eq!(
            " Chinese (Mandarin) ".parse::<Language>(),
            Ok(Language::Chinese)
        );
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Language::Chinese).unwrap();
        assert_eq!(json, "\"Chinese (Mandarin)\"");

        let back: Language = serde_json::from_str("\"Arabic\"").unwrap();
        assert_eq!(back, Language::Arabic);
    }
}

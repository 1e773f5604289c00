use lingovibe_types::Language;
use serde_json::{Value, json};

pub fn lookup_instruction(term: &str, source: Language, target: Language) -> String {
    format!(
        r#"You are a fun, witty, and culturally savvy language tutor.
The user speaks {source} and is learning {target}.

The user has entered: "{term}".

TASK:
1. Detect if "{term}" is in {source} or {target}.
2. If it is in {source}, translate it to the most natural/common word or phrase in {target}. Use that translation as the main "term".
3. If it is already in {target}, use it as the main "term".
4. Generate a dictionary entry for this {target} term.

Rules:
1. Definition: Natural language explanation in {source}.
2. Examples: Provide 2 distinct example sentences in {target} with {source} translations.
3. Usage Context: This is the "Vibe Check". Be conversational, like a friend. Explain cultural context, when to use it (and when not to), the tone (casual/formal), and list 2-3 synonyms or easily confused words with brief distincts. AVOID textbook jargon. Be concise.

Return strict JSON."#
    )
}

pub const LOOKUP_CONTENTS: &str = "Explain the concept.";

/// Response schema for a dictionary entry
pub fn lookup_schema(source: Language, target: Language) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "term": { "type": "STRING", "description": format!("The word or phrase in {target}") },
            "definition": { "type": "STRING" },
            "pronunciation": { "type": "STRING" },
            "examples": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "target": { "type": "STRING", "description": format!("Sentence in {target}") },
                        "native": { "type": "STRING", "description": format!("Translation in {source}") }
                    }
                }
            },
            "usageContext": {
                "type": "OBJECT",
                "properties": {
                    "tone": { "type": "STRING" },
                    "culture": { "type": "STRING" },
                    "synonyms": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "nuance": { "type": "STRING" }
                }
            }
        },
        "required": ["term", "definition", "examples", "usageContext"]
    })
}

pub fn image_prompt(term: &str, target: Language) -> String {
    format!(
        "A simple, vibrant, fun, flat-design style vector illustration representing the concept of \"{term}\" \
         in the context of the {target} language/culture. Bright colors, white background. Minimalist."
    )
}

pub fn story_prompt(terms: &[String], target: Language, source: Language) -> String {
    format!(
        "Create a short, funny, and coherent story in {target} (with {source} translation in parentheses \
         after each sentence) using the following words: {}. Keep it under 200 words.",
        terms.join(", ")
    )
}

pub fn speech_config(voice: &str) -> Value {
    json!({
        "voiceConfig": {
            "prebuiltVoiceConfig": { "voiceName": voice }
        }
    })
}

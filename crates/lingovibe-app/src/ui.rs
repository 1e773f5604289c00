use kanal::AsyncReceiver;
use lingovibe_types::{ChatRole, DictionaryResult, Flashcard, SavedWord, UiEvent};

pub const HELP: &str = "\
Type a word or phrase to look it up. Other commands:
  save              save the last lookup to your notebook
  list              show your notebook
  delete <id>       remove a saved word
  saved <term>      check whether a term is saved
  study             flashcards (f flip, n next, s speak, e example, q quit)
  story             a short story using your saved words
  chat [term]       ask follow-up questions (/exit to leave)
  speak [text|n]    read text, the current word, or its example n aloud
  lang <src> <tgt>  switch languages, e.g. lang en ja
  quit              leave";

/// Prints everything the event loop reports until it closes
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<UiEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        if let UiEvent::Closed = event {
            break;
        }

        match event {
            UiEvent::Failure(message) => eprintln!("{}", message),
            event => {
                if let Some(text) = render(&event) {
                    println!("{}", text);
                }
            }
        }
    }

    tracing::debug!("UI loop finished");
    Ok(())
}

pub fn render(event: &UiEvent) -> Option<String> {
    let text = match event {
        UiEvent::ShowResult { result, saved } => render_result(result, *saved),
        UiEvent::ShowImage(url) => format!("Image: {}", url),
        UiEvent::ShowNotebook(words) => render_notebook(words),
        UiEvent::ShowCard(card) => render_card(card),
        UiEvent::ShowStory(story) => format!("\n{}\n", story),
        UiEvent::Chat(message) => match message.role {
            ChatRole::Model => format!("tutor> {}", message.text),
            ChatRole::User => format!("you> {}", message.text),
        },
        UiEvent::Notice(message) | UiEvent::Failure(message) => message.clone(),
        UiEvent::Help => HELP.to_string(),
        UiEvent::Closed => return None,
    };
    Some(text)
}

pub fn render_result(result: &DictionaryResult, saved: bool) -> String {
    let mut out = String::new();

    out.push_str(&result.term);
    if let Some(pronunciation) = &result.pronunciation {
        out.push_str(&format!("  /{}/", pronunciation));
    }
    if saved {
        out.push_str("  [saved]");
    }
    out.push('\n');
    out.push_str(&result.definition);
    out.push('\n');

    if !result.examples.is_empty() {
        out.push_str("\nExamples:\n");
        for (i, example) in result.examples.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n     {}\n", i + 1, example.target, example.native));
        }
    }

    let usage = &result.usage_context;
    out.push_str("\nVibe check:\n");
    out.push_str(&format!("  Tone: {}\n", usage.tone));
    if !usage.culture.is_empty() {
        out.push_str(&format!("  Culture: {}\n", usage.culture));
    }
    if !usage.synonyms.is_empty() {
        out.push_str(&format!("  Similar: {}\n", usage.synonyms.join(", ")));
    }
    if !usage.nuance.is_empty() {
        out.push_str(&format!("  Nuance: {}\n", usage.nuance));
    }

    out.trim_end().to_string()
}

pub fn render_notebook(words: &[SavedWord]) -> String {
    if words.is_empty() {
        return "Your notebook is empty.".to_string();
    }

    let mut out = format!("{} saved:\n", words.len());
    for word in words {
        out.push_str(&format!(
            "  {}  {} ({} -> {})\n",
            word.id,
            word.term(),
            word.source_lang,
            word.target_lang
        ));
    }
    out.trim_end().to_string()
}

pub fn render_card(card: &Flashcard) -> String {
    let mut out = format!("[{}/{}] {}", card.position, card.total, card.term);

    if card.revealed {
        out.push_str(&format!("\n  {}", card.definition));
        if let Some(example) = &card.example {
            out.push_str(&format!("\n  \"{}\"\n  {}", example.target, example.native));
        }
    } else {
        out.push_str("\n  (f to flip)");
    }
    out
}

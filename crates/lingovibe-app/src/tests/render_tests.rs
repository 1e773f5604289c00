use lingovibe_types::{ExampleSentence, Flashcard, Language, SavedWord, UiEvent};

use super::support::entry;
use crate::ui::{render, render_card, render_notebook, render_result};

fn card(revealed: bool) -> Flashcard {
    Flashcard {
        position: 2,
        total: 5,
        term: "mesa".to_string(),
        image_url: None,
        revealed,
        definition: "A table".to_string(),
        example: Some(ExampleSentence {
            target: "La mesa es grande.".to_string(),
            native: "The table is big.".to_string(),
        }),
    }
}

#[test]
fn hidden_card_shows_only_the_term() {
    let text = render_card(&card(false));
    assert!(text.starts_with("[2/5] mesa"));
    assert!(!text.contains("A table"));
}

#[test]
fn revealed_card_shows_definition_and_example() {
    let text = render_card(&card(true));
    assert!(text.contains("A table"));
    assert!(text.contains("La mesa es grande."));
    assert!(text.contains("The table is big."));
}

#[test]
fn result_marks_saved_terms() {
    let mut result = entry("libro");
    result.pronunciation = Some("ˈli.βɾo".to_string());

    let text = render_result(&result, true);
    assert!(text.starts_with("libro  /ˈli.βɾo/  [saved]"));
    assert!(text.contains("  1. Uso libro hoy."));
    assert!(text.contains("Tone: neutral"));
    assert!(!render_result(&result, false).contains("[saved]"));
}

#[test]
fn notebook_lists_ids_newest_first() {
    assert_eq!(render_notebook(&[]), "Your notebook is empty.");

    let words = vec![
        SavedWord::new(entry("mesa"), "w2".to_string(), 2, Language::English, Language::Spanish),
        SavedWord::new(entry("libro"), "w1".to_string(), 1, Language::English, Language::Spanish),
    ];
    let text = render_notebook(&words);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "2 saved:");
    assert!(lines[1].contains("w2") && lines[1].contains("mesa"));
    assert!(lines[2].contains("w1") && lines[2].contains("libro"));
}

#[test]
fn closed_renders_nothing() {
    assert!(render(&UiEvent::Closed).is_none());
    assert_eq!(render(&UiEvent::Notice("hi".to_string())).as_deref(), Some("hi"));
}

use kanal::AsyncSender;
use lingovibe_core::preprocess::{Preprocessor, QueryPreprocessor};
use lingovibe_types::{ChatMessage, UiEvent};

use crate::events::Session;
use crate::state::AppState;

pub async fn handle_open_chat(
    state: &AppState,
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
    term: Option<String>,
) -> anyhow::Result<()> {
    let named = term
        .map(|t| QueryPreprocessor.process(&t))
        .filter(|t| !t.is_empty());

    // The current lookup's language pair wins when chatting about it
    let (term, source, target) = match (named, session.current.as_ref()) {
        (Some(term), Some(current)) if term == current.result.term => {
            (term, current.source, current.target)
        }
        (Some(term), _) => (term, session.source, session.target),
        (None, Some(current)) => (current.result.term.clone(), current.source, current.target),
        (None, None) => {
            ui_tx
                .send(UiEvent::Notice(
                    "Look up a word first, or name one: chat <term>".to_string(),
                ))
                .await?;
            return Ok(());
        }
    };

    tracing::info!("Opening chat about '{}'", term);
    session.study = None;
    let chat = state.chat.create_session(&term, source, target);
    ui_tx
        .send(UiEvent::Chat(ChatMessage::model(chat.greeting())))
        .await?;
    session.chat = Some(chat);
    Ok(())
}

pub async fn handle_chat_input(
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
    text: &str,
) -> anyhow::Result<()> {
    let Some(chat) = session.chat.as_mut() else {
        ui_tx
            .send(UiEvent::Notice("No chat is open.".to_string()))
            .await?;
        return Ok(());
    };

    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }

    let reply = chat.send_message(text).await;
    ui_tx.send(UiEvent::Chat(ChatMessage::model(reply))).await?;
    Ok(())
}

pub async fn handle_close_chat(
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    if let Some(chat) = session.chat.take() {
        tracing::debug!("Closing chat about '{}'", chat.term());
        ui_tx
            .send(UiEvent::Notice("Chat closed.".to_string()))
            .await?;
    }
    Ok(())
}

use std::ops::ControlFlow;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lingovibe_core::StudySequencer;
use lingovibe_genai::ChatSession;
use lingovibe_types::{AppEvent, DictionaryResult, Language, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod chat;
pub mod lookup;
pub mod notebook;
pub mod story;
pub mod study;
pub mod text_input;

use chat::{handle_chat_input, handle_close_chat, handle_open_chat};
use lookup::{handle_lookup, handle_save_current};
use notebook::{handle_check_saved, handle_delete, handle_show_notebook};
use story::handle_story;
use study::{handle_start_study, handle_study_action};
use text_input::interpret;

/// The last lookup shown to the user
pub struct CurrentLookup {
    pub result: DictionaryResult,
    pub source: Language,
    pub target: Language,
}

/// Per-run interaction state owned by the event loop
pub struct Session {
    pub source: Language,
    pub target: Language,
    pub current: Option<CurrentLookup>,
    pub study: Option<StudySequencer>,
    pub chat: Option<ChatSession>,
}

impl Session {
    pub fn new(source: Language, target: Language) -> Self {
        Self {
            source,
            target,
            current: None,
            study: None,
            chat: None,
        }
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    events_rx: AsyncReceiver<AppEvent>,
    ui_tx: AsyncSender<UiEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = Session::new(state.config.languages.source, state.config.languages.target);

    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    let result = async {
        loop {
            let event = tokio::select! {
                _ = cancel.cancelled() => break,
                event = events_rx.recv() => match event {
                    Ok(event) => event,
                    Err(_) => break,
                },
            };

            if handle_events(&state, &mut session, &ui_tx, event).await?.is_break() {
                tracing::info!("Shutdown requested");
                cancel.cancel();
                break;
            }
        }
        anyhow::Ok(())
    }
    .await;

    // The renderer waits for this before it exits
    let _ = ui_tx.send(UiEvent::Closed).await;
    result
}

pub async fn handle_events(
    state: &AppState,
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    tracing::debug!("EVENT RECEIVED: {:?}", std::mem::discriminant(&event));

    let event = match event {
        AppEvent::TextInput(line) => match interpret(&line, session) {
            Ok(Some(event)) => event,
            Ok(None) => return Ok(ControlFlow::Continue(())),
            Err(message) => {
                ui_tx.send(UiEvent::Failure(message)).await?;
                return Ok(ControlFlow::Continue(()));
            }
        },
        event => event,
    };

    match event {
        AppEvent::Lookup(request) => {
            handle_lookup(state, session, ui_tx, request).await?;
        }
        AppEvent::SaveCurrent => {
            handle_save_current(state, session, ui_tx).await?;
        }
        AppEvent::DeleteWord(id) => {
            handle_delete(state, session, ui_tx, &id).await?;
        }
        AppEvent::ShowNotebook => {
            handle_show_notebook(state, ui_tx).await?;
        }
        AppEvent::CheckSaved(term) => {
            handle_check_saved(state, ui_tx, &term).await?;
        }
        AppEvent::StartStudy => {
            handle_start_study(state, session, ui_tx).await?;
        }
        AppEvent::Study(action) => {
            handle_study_action(state, session, ui_tx, action).await?;
        }
        AppEvent::WeaveStory { source, target } => {
            handle_story(state, ui_tx, source, target).await?;
        }
        AppEvent::SetLanguages { source, target } => {
            if source == target {
                ui_tx
                    .send(UiEvent::Failure(format!(
                        "Pick two different languages (both are {source})"
                    )))
                    .await?;
            } else {
                session.source = source;
                session.target = target;
                ui_tx
                    .send(UiEvent::Notice(format!(
                        "I speak {source}, I'm learning {target}"
                    )))
                    .await?;
            }
        }
        AppEvent::OpenChat { term } => {
            handle_open_chat(state, session, ui_tx, term).await?;
        }
        AppEvent::ChatInput(text) => {
            handle_chat_input(session, ui_tx, &text).await?;
        }
        AppEvent::CloseChat => {
            handle_close_chat(session, ui_tx).await?;
        }
        AppEvent::Speak { text, lang } => {
            let lang = lang.unwrap_or(session.target);
            state.media.speak(&text, lang).await;
        }
        AppEvent::Help => {
            ui_tx.send(UiEvent::Help).await?;
        }
        AppEvent::Shutdown => {
            return Ok(ControlFlow::Break(()));
        }
        AppEvent::TextInput(_) => {
            // Interpreted above
        }
    }

    Ok(ControlFlow::Continue(()))
}

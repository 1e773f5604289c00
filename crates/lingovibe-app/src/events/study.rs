use kanal::AsyncSender;
use lingovibe_core::StudySequencer;
use lingovibe_types::{StudyAction, UiEvent};

use crate::events::Session;
use crate::state::AppState;

pub const EMPTY_NOTEBOOK: &str = "Your notebook is empty. Go search and save some cool words!";

pub async fn handle_start_study(
    state: &AppState,
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    let snapshot = state.notebook.lock().await.words().to_vec();

    let Some(study) = StudySequencer::new(snapshot) else {
        ui_tx
            .send(UiEvent::Notice(EMPTY_NOTEBOOK.to_string()))
            .await?;
        return Ok(());
    };

    tracing::info!("Starting study session with {} cards", study.len());
    session.chat = None;
    ui_tx.send(UiEvent::ShowCard(study.card())).await?;
    session.study = Some(study);
    Ok(())
}

pub async fn handle_study_action(
    state: &AppState,
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
    action: StudyAction,
) -> anyhow::Result<()> {
    let Some(study) = session.study.as_mut() else {
        ui_tx
            .send(UiEvent::Notice(
                "Not studying right now. Type 'study' to start.".to_string(),
            ))
            .await?;
        return Ok(());
    };

    match action {
        StudyAction::Flip => {
            study.flip();
            ui_tx.send(UiEvent::ShowCard(study.card())).await?;
        }
        StudyAction::Next => {
            study.advance();
            ui_tx.send(UiEvent::ShowCard(study.card())).await?;
        }
        StudyAction::SpeakTerm => {
            let word = study.current();
            let (text, lang) = (word.term().to_string(), word.target_lang);
            state.media.speak(&text, lang).await;
        }
        StudyAction::SpeakExample => {
            let word = study.current();
            match word.entry.examples.first() {
                Some(example) => {
                    let (text, lang) = (example.target.clone(), word.target_lang);
                    state.media.speak(&text, lang).await;
                }
                None => {
                    ui_tx
                        .send(UiEvent::Notice("This card has no example.".to_string()))
                        .await?;
                }
            }
        }
        StudyAction::Exit => {
            session.study = None;
            ui_tx
                .send(UiEvent::Notice("Study session ended.".to_string()))
                .await?;
        }
    }

    Ok(())
}

use kanal::AsyncSender;
use lingovibe_core::preprocess::{Preprocessor, QueryPreprocessor};
use lingovibe_types::UiEvent;

use crate::events::Session;
use crate::state::AppState;

pub async fn handle_show_notebook(
    state: &AppState,
    ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    let words = state.notebook.lock().await.words().to_vec();
    ui_tx.send(UiEvent::ShowNotebook(words)).await?;
    Ok(())
}

pub async fn handle_check_saved(
    state: &AppState,
    ui_tx: &AsyncSender<UiEvent>,
    term: &str,
) -> anyhow::Result<()> {
    let term = QueryPreprocessor.process(term);
    let saved = state.notebook.lock().await.is_saved(&term);

    let notice = if saved {
        format!("'{}' is saved", term)
    } else {
        format!("'{}' is not saved", term)
    };
    ui_tx.send(UiEvent::Notice(notice)).await?;
    Ok(())
}

pub async fn handle_delete(
    state: &AppState,
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
    id: &str,
) -> anyhow::Result<()> {
    let (removed, live) = {
        let mut notebook = state.notebook.lock().await;
        let removed = notebook.get(id).map(|w| w.term().to_string());
        let live = notebook.delete(id).to_vec();
        (removed, live)
    };

    let Some(term) = removed else {
        ui_tx
            .send(UiEvent::Notice(format!("No saved word with id {}", id)))
            .await?;
        return Ok(());
    };

    ui_tx
        .send(UiEvent::Notice(format!("Removed '{}'", term)))
        .await?;

    if let Some(study) = session.study.as_mut() {
        if study.resync(&live) {
            ui_tx.send(UiEvent::ShowCard(study.card())).await?;
        } else {
            session.study = None;
            ui_tx
                .send(UiEvent::Notice(
                    "Your notebook is empty now. Study session closed.".to_string(),
                ))
                .await?;
        }
    }

    Ok(())
}

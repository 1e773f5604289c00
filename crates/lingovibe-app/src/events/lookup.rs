use kanal::AsyncSender;
use lingovibe_core::materialize;
use lingovibe_core::preprocess::{Preprocessor, QueryPreprocessor};
use lingovibe_types::{LookupRequest, UiEvent};

use crate::events::{CurrentLookup, Session};
use crate::state::AppState;

pub const LOOKUP_FAILURE: &str = "Oops! The AI got tongue-tied. Try again.";

pub async fn handle_lookup(
    state: &AppState,
    session: &mut Session,
    ui_tx: &AsyncSender<UiEvent>,
    request: LookupRequest,
) -> anyhow::Result<()> {
    let term = QueryPreprocessor.process(&request.term);
    if term.is_empty() {
        tracing::debug!("Ignoring blank lookup");
        return Ok(());
    }

    // A new lookup replaces whatever the chat was about
    session.chat = None;

    tracing::info!(
        "Looking up '{}' ({} -> {})",
        term,
        request.source,
        request.target
    );

    let mut result = match state.lookup.lookup(&term, request.source, request.target).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Lookup for '{}' failed: {}", term, e);
            session.current = None;
            ui_tx.send(UiEvent::Failure(LOOKUP_FAILURE.to_string())).await?;
            return Ok(());
        }
    };

    let saved = state.notebook.lock().await.is_saved(&result.term);
    ui_tx
        .send(UiEvent::ShowResult {
            result: result.clone(),
            saved,
        })
        .await?;

    if request.with_image {
        let url = state.media.image_for(&result.term, request.target).await;
        ui_tx.send(UiEvent::ShowImage(url.clone())).await?;
        result.image_url = Some(url);
    }

    let spoken = result.term.clone();
    session.current = Some(CurrentLookup {
        result,
        source: request.source,
        target: request.target,
    });

    if request.save {
        handle_save_current(state, session, ui_tx).await?;
    }

    if request.speak {
        state.media.speak(&spoken, request.target).await;
    }

    Ok(())
}

pub async fn handle_save_current(
    state: &AppState,
    session: &Session,
    ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    let Some(current) = session.current.as_ref() else {
        ui_tx
            .send(UiEvent::Notice("Look up a word first.".to_string()))
            .await?;
        return Ok(());
    };

    let term = current.result.term.clone();
    let notice = {
        let mut notebook = state.notebook.lock().await;
        if notebook.is_saved(&term) {
            format!("'{}' is already in your notebook", term)
        } else {
            let word = materialize(
                current.result.clone(),
                state.ids.as_ref(),
                state.clock.as_ref(),
                current.source,
                current.target,
            );
            let total = notebook.save(word).len();
            format!("Saved '{}' ({} in notebook)", term, total)
        }
    };

    ui_tx.send(UiEvent::Notice(notice)).await?;
    Ok(())
}

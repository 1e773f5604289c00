use kanal::AsyncSender;
use lingovibe_types::{Language, UiEvent};

use crate::state::AppState;

pub const STORY_TOO_FEW: &str = "Save at least 2 words to make a story!";
pub const STORY_FAILURE: &str = "Failed to weave a story. Try again!";

pub async fn handle_story(
    state: &AppState,
    ui_tx: &AsyncSender<UiEvent>,
    source: Language,
    target: Language,
) -> anyhow::Result<()> {
    let terms = state.notebook.lock().await.terms();
    if terms.len() < 2 {
        ui_tx
            .send(UiEvent::Failure(STORY_TOO_FEW.to_string()))
            .await?;
        return Ok(());
    }

    tracing::info!("Weaving a story from {} words", terms.len());
    match state.story.compose(&terms, target, source).await {
        Ok(story) => {
            ui_tx.send(UiEvent::ShowStory(story)).await?;
        }
        Err(e) => {
            tracing::error!("Story generation failed: {}", e);
            ui_tx
                .send(UiEvent::Failure(STORY_FAILURE.to_string()))
                .await?;
        }
    }

    Ok(())
}

use std::sync::Arc;

use lingovibe_audio::{AudioSink, NullSink, WavFileSink};
use lingovibe_config::Config;
use lingovibe_core::{Clock, FileStore, IdGenerator, NotebookStore, SystemClock, UuidIds};
use lingovibe_genai::{
    ChatService, GeminiClient, GeminiMedia, LookupService, MediaService, StoryService,
};
use tokio::sync::Mutex;

/// Everything the event loop needs, built once at startup
pub struct AppState {
    pub config: Config,
    pub notebook: Mutex<NotebookStore>,
    pub lookup: Arc<dyn LookupService>,
    pub media: Arc<dyn MediaService>,
    pub chat: Arc<dyn ChatService>,
    pub story: Arc<dyn StoryService>,
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        if !config.gemini.has_api_key() {
            tracing::warn!("No Gemini API key configured; lookups will fail");
        }

        let storage = Arc::new(FileStore::new(config.storage.data_dir.clone()));
        tracing::info!("Notebook storage in {}", storage.dir().display());
        let notebook = NotebookStore::load(storage, config.storage.notebook_key.clone());

        let sink: Arc<dyn AudioSink> = if config.audio.enabled {
            Arc::new(WavFileSink::new(config.audio.output_dir.clone()))
        } else {
            Arc::new(NullSink)
        };

        let client = GeminiClient::new(config.gemini.clone())?;
        let media = GeminiMedia::new(client.clone(), sink, &config.audio);
        let client = Arc::new(client);

        Ok(Self {
            notebook: Mutex::new(notebook),
            lookup: client.clone(),
            media: Arc::new(media),
            chat: client.clone(),
            story: client,
            ids: Arc::new(UuidIds),
            clock: Arc::new(SystemClock),
            config,
        })
    }
}

// Application state
// Built once at startup and shared read-only across requests

use crate::config::Config;
use crate::error::AppError;
use crate::services::{LyricsOvhClient, LyricsSource, SongStore};
use std::sync::Arc;
use std::time::Duration;

/// State handle passed to every handler
pub type SharedState = Arc<AppState>;

/// Main application state
///
/// The store carries no lock: concurrent writes to one song are
/// last-write-wins.
#[derive(Clone)]
pub struct AppState {
    /// Local song store
    pub store: SongStore,
    /// Remote lyrics lookup
    pub lyrics: Arc<dyn LyricsSource>,
}

impl AppState {
    /// Create application state from its parts
    pub fn new(store: SongStore, lyrics: Arc<dyn LyricsSource>) -> Self {
        Self { store, lyrics }
    }

    /// Open the configured store and build the lyrics.ovh client
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let store = SongStore::open(&config.storage.songs_dir).await?;
        let client = LyricsOvhClient::new(
            &config.lyrics_api.base_url,
            Duration::from_secs(config.lyrics_api.timeout_secs),
        )?;
        Ok(Self::new(store, Arc::new(client)))
    }

    /// Wrap into the shared handle used by the router
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

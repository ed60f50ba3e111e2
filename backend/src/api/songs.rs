//! Song management API handlers
//!
//! Listing and deleting entries in the local song store.

use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

/// Request to delete a song
#[derive(Debug, Deserialize)]
pub struct DeleteSongRequest {
    /// Song identifier (filename without `.txt`)
    pub song: Option<String>,
}

/// Response for mutating operations
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SuccessResponse {
    /// Always `true`; failures are reported as errors
    pub success: bool,
}

/// GET /api/songs - List cached song identifiers
pub async fn list_songs(State(state): State<SharedState>) -> Result<Json<Vec<String>>, AppError> {
    let songs = state.store.list().await?;
    tracing::debug!(count = songs.len(), "Listed songs");
    Ok(Json(songs))
}

/// POST /api/delete_song - Remove a cached song
pub async fn delete_song(
    State(state): State<SharedState>,
    payload: Result<Json<DeleteSongRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(request) = payload?;
    let song = request
        .song
        .ok_or_else(|| AppError::InvalidRequest("Missing song".to_string()))?;

    state.store.delete(&song).await?;
    tracing::info!(song = %song, "Deleted song");

    Ok(Json(SuccessResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{LyricsSource, SongStore};
    use crate::state::AppState;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tempfile::tempdir;

    struct NoLyrics;

    #[async_trait]
    impl LyricsSource for NoLyrics {
        async fn fetch(&self, _artist: &str, _title: &str) -> Option<String> {
            None
        }
    }

    async fn create_test_state() -> (tempfile::TempDir, SharedState) {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = SongStore::open(temp_dir.path())
            .await
            .expect("Failed to open store");
        (temp_dir, AppState::new(store, Arc::new(NoLyrics)).shared())
    }

    fn delete_request(song: Option<&str>) -> Result<Json<DeleteSongRequest>, JsonRejection> {
        Ok(Json(DeleteSongRequest {
            song: song.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_list_songs_empty() {
        let (_temp_dir, state) = create_test_state().await;
        let Json(songs) = list_songs(State(state)).await.expect("list failed");
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn test_list_songs_sorted() {
        let (temp_dir, state) = create_test_state().await;
        std::fs::write(temp_dir.path().join("b - x.txt"), "").expect("write");
        std::fs::write(temp_dir.path().join("a.txt"), "").expect("write");

        let Json(songs) = list_songs(State(state)).await.expect("list failed");
        assert_eq!(songs, vec!["a", "b - x"]);
    }

    #[tokio::test]
    async fn test_delete_existing_song() {
        let (temp_dir, state) = create_test_state().await;
        let path = temp_dir.path().join("Angie.txt");
        std::fs::write(&path, "lyrics").expect("write");

        let Json(response) = delete_song(State(state), delete_request(Some("Angie")))
            .await
            .expect("delete failed");
        assert_eq!(response, SuccessResponse { success: true });
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_delete_missing_song() {
        let (_temp_dir, state) = create_test_state().await;
        let result = delete_song(State(state), delete_request(Some("Angie"))).await;
        match result.unwrap_err() {
            AppError::SongNotFound(_) => {
                // Expected error
            }
            other => panic!("Expected SongNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_without_song_field() {
        let (_temp_dir, state) = create_test_state().await;
        let result = delete_song(State(state), delete_request(None)).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}

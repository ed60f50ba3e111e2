//! Lyrics API handlers
//!
//! Lookups check the local store first and fall back to the remote lyrics
//! source, saving whatever it returns. Edits write straight to the store.

use crate::api::songs::SuccessResponse;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use serde::{Deserialize, Serialize};

/// Where returned lyrics came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Read from the local store
    Local,
    /// Fetched from the remote lyrics API
    Api,
}

/// Query parameters for a lyrics lookup
#[derive(Debug, Default, Deserialize)]
pub struct LyricsQuery {
    /// Song title, or a full song identifier
    pub song: Option<String>,
    /// Artist; required for a remote lookup
    pub artist: Option<String>,
}

/// Lyrics lookup response
#[derive(Debug, Serialize)]
pub struct LyricsResponse {
    /// Lyrics text
    pub lyrics: String,
    /// Where the lyrics came from
    pub source: Provenance,
    /// Identifier the fetched lyrics were saved under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_as: Option<String>,
}

/// Request to overwrite a song's lyrics
#[derive(Debug, Deserialize)]
pub struct EditLyricsRequest {
    /// Song identifier (filename without `.txt`)
    pub song: Option<String>,
    /// New file content
    pub lyrics: Option<String>,
}

/// GET /api/lyrics - Look up lyrics by song and optional artist
pub async fn get_lyrics(
    State(state): State<SharedState>,
    query: Result<Query<LyricsQuery>, QueryRejection>,
) -> Result<Json<LyricsResponse>, AppError> {
    let Query(params) = query?;
    let title = params
        .song
        .as_deref()
        .filter(|song| !song.trim().is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Missing song".to_string()))?;
    let artist = params
        .artist
        .as_deref()
        .filter(|artist| !artist.trim().is_empty());

    if let Some(found) = state.store.find(title, artist).await? {
        tracing::info!(song = %found.id, "Serving lyrics from local store");
        return Ok(Json(LyricsResponse {
            lyrics: found.lyrics,
            source: Provenance::Local,
            saved_as: None,
        }));
    }

    let Some(artist) = artist else {
        return Err(AppError::LyricsNotFound);
    };
    let lyrics = state
        .lyrics
        .fetch(artist, title)
        .await
        .ok_or(AppError::LyricsNotFound)?;

    let saved_as = match state.store.save(title, Some(artist), &lyrics).await {
        Ok(id) => {
            tracing::info!(song = %id, "Saved fetched lyrics");
            Some(id)
        }
        Err(e) => {
            tracing::warn!(
                title = %title,
                artist = %artist,
                error = %e,
                "Failed to save fetched lyrics"
            );
            None
        }
    };

    Ok(Json(LyricsResponse {
        lyrics,
        source: Provenance::Api,
        saved_as,
    }))
}

/// POST /api/lyrics/edit - Create or overwrite a song's lyrics
pub async fn edit_lyrics(
    State(state): State<SharedState>,
    payload: Result<Json<EditLyricsRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(request) = payload?;
    let song = request
        .song
        .ok_or_else(|| AppError::InvalidRequest("Missing song".to_string()))?;
    let lyrics = request
        .lyrics
        .ok_or_else(|| AppError::InvalidRequest("Missing lyrics".to_string()))?;

    state.store.write(&song, &lyrics).await?;
    tracing::info!(song = %song, bytes = lyrics.len(), "Updated lyrics");

    Ok(Json(SuccessResponse { success: true }))
}

//! lyrics.ovh API client
//!
//! Looks up lyrics by artist and title. Every failure mode (transport error,
//! non-success status, malformed body, empty lyrics) is reported to callers
//! as "not found"; the cause is logged here.

use crate::error::AppError;
use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

/// A remote source of lyrics
#[async_trait]
pub trait LyricsSource: Send + Sync {
    /// Fetch lyrics for a song, or `None` when no lyrics are available
    async fn fetch(&self, artist: &str, title: &str) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct LyricsOvhResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

/// Client for `GET {base}/{artist}/{title}`
#[derive(Debug, Clone)]
pub struct LyricsOvhClient {
    client: reqwest::Client,
    base_url: Url,
}

impl LyricsOvhClient {
    /// Create a client with its own connection pool
    ///
    /// # Errors
    /// * Returns `AppError::Internal` if the base URL is unusable or the HTTP
    ///   client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let user_agent = format!("lyrics-backend/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::Internal(anyhow!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(client, base_url)
    }

    /// Create a client sharing an existing `reqwest::Client`
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::Internal(anyhow!("Invalid lyrics API URL {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Internal(anyhow!(
                "Lyrics API URL cannot be used as a base: {}",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// URL for an artist/title pair, each percent-encoded as one path segment
    pub fn lyrics_url(&self, artist: &str, title: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(artist).push(title);
        }
        url
    }

    /// Perform the lookup, distinguishing "no lyrics" from request failures
    ///
    /// # Returns
    /// * `Ok(Some(String))` - Non-empty lyrics
    /// * `Ok(None)` - API answered 404 or returned no lyrics
    /// * `Err(AppError)` - Transport failure, unexpected status or bad body
    pub async fn request_lyrics(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Option<String>, AppError> {
        let url = self.lyrics_url(artist, title);
        tracing::debug!(url = %url, artist = %artist, title = %title, "Calling lyrics API");

        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::Internal(anyhow!("Failed to send HTTP request to lyrics API: {}", e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::Internal(anyhow!(
                "Lyrics API returned error status {}",
                status.as_u16()
            )));
        }

        let body: LyricsOvhResponse = response.json().await.map_err(|e| {
            AppError::Internal(anyhow!("Failed to parse JSON response from lyrics API: {}", e))
        })?;

        Ok(body.lyrics.filter(|lyrics| !lyrics.trim().is_empty()))
    }
}

#[async_trait]
impl LyricsSource for LyricsOvhClient {
    async fn fetch(&self, artist: &str, title: &str) -> Option<String> {
        match self.request_lyrics(artist, title).await {
            Ok(Some(lyrics)) => {
                tracing::debug!(
                    artist = %artist,
                    title = %title,
                    response_len = lyrics.len(),
                    "Received lyrics from API"
                );
                Some(lyrics)
            }
            Ok(None) => {
                tracing::info!(artist = %artist, title = %title, "Lyrics API has no match");
                None
            }
            Err(e) => {
                tracing::warn!(
                    artist = %artist,
                    title = %title,
                    error = %e,
                    "Lyrics API lookup failed"
                );
                None
            }
        }
    }
}

//! Local song store
//!
//! A flat directory of UTF-8 text files, one per song, named
//! `"<title> - <artist>.txt"` or `"<title>.txt"`. The filename without its
//! extension is the song identifier used throughout the API.

use crate::error::AppError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const SONG_EXTENSION: &str = ".txt";

/// Lyrics read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSong {
    /// Song identifier (filename without `.txt`)
    pub id: String,
    /// File content
    pub lyrics: String,
}

/// Build the identifier for a title and optional artist
pub fn song_id(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(artist) => format!("{} - {}", title, artist),
        None => title.to_string(),
    }
}

/// Check that an identifier maps to a file directly inside the store
///
/// # Returns
/// * `Ok(())` - Identifier is usable as a filename stem
/// * `Err(AppError::InvalidRequest)` - Identifier is blank, `.`/`..`, or
///   contains a path separator or NUL byte
pub fn validate_song_id(id: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Song name cannot be empty".to_string(),
        ));
    }
    if id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(AppError::InvalidRequest(format!(
            "Invalid song name: {}",
            id
        )));
    }
    Ok(())
}

/// File-backed song store
#[derive(Debug, Clone)]
pub struct SongStore {
    root: PathBuf,
}

impl SongStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Directory backing this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, AppError> {
        validate_song_id(id)?;
        Ok(self.root.join(format!("{}{}", id, SONG_EXTENSION)))
    }

    /// List identifiers of all songs in the store, sorted
    ///
    /// A store whose directory has disappeared lists as empty.
    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut songs = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 filename");
                continue;
            };
            let Some(id) = name.strip_suffix(SONG_EXTENSION) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }

            // Follows symlinks, unlike DirEntry::metadata
            match fs::metadata(entry.path()).await {
                Ok(metadata) if metadata.is_file() => songs.push(id.to_string()),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "Failed to stat song file"
                    );
                }
            }
        }

        songs.sort();
        Ok(songs)
    }

    /// Path of an existing song file
    ///
    /// Anything at the path that is not a regular file (a directory named
    /// `X.txt`, for example) counts as missing, matching what `list` shows.
    async fn existing_file(&self, id: &str) -> Result<PathBuf, AppError> {
        let path = self.path_for(id)?;
        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(path),
            Ok(_) => Err(AppError::SongNotFound(id.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::SongNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read a song by identifier
    pub async fn read(&self, id: &str) -> Result<String, AppError> {
        let path = self.existing_file(id).await?;
        match fs::read_to_string(&path).await {
            Ok(lyrics) => Ok(lyrics),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::SongNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up lyrics by title, then by `"<title> - <artist>"`
    ///
    /// # Returns
    /// * `Ok(Some(StoredSong))` - First matching file
    /// * `Ok(None)` - Neither file exists
    /// * `Err(AppError)` - Invalid title or an I/O failure
    ///
    /// An artist that cannot be part of a filename (`AC/DC`) only rules out
    /// the `"<title> - <artist>"` file; it is not an error.
    pub async fn find(
        &self,
        title: &str,
        artist: Option<&str>,
    ) -> Result<Option<StoredSong>, AppError> {
        let mut candidates = vec![song_id(title, None)];
        if let Some(artist) = artist {
            let id = song_id(title, Some(artist));
            if validate_song_id(&id).is_ok() {
                candidates.push(id);
            } else {
                tracing::debug!(song = %id, "Skipping unusable song filename");
            }
        }

        for id in candidates {
            match self.read(&id).await {
                Ok(lyrics) => return Ok(Some(StoredSong { id, lyrics })),
                Err(AppError::SongNotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }

    /// Save lyrics under `"<title> - <artist>"` and return the identifier
    pub async fn save(
        &self,
        title: &str,
        artist: Option<&str>,
        lyrics: &str,
    ) -> Result<String, AppError> {
        let id = song_id(title, artist);
        self.write(&id, lyrics).await?;
        Ok(id)
    }

    /// Create or overwrite a song file with exactly `lyrics`
    pub async fn write(&self, id: &str, lyrics: &str) -> Result<(), AppError> {
        let path = self.path_for(id)?;
        fs::write(&path, lyrics).await?;
        tracing::debug!(song = %id, bytes = lyrics.len(), "Wrote song file");
        Ok(())
    }

    /// Remove a song file
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let path = self.existing_file(id).await?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::SongNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

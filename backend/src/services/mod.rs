//! Service layer for business logic
//!
//! This module contains service abstractions that separate business logic
//! from HTTP handlers, making the code more modular and testable.

pub mod lyrics_api;
pub mod store;

pub use lyrics_api::{LyricsOvhClient, LyricsSource};
pub use store::{SongStore, StoredSong};

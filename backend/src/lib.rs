//! Lyrics Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
/// Application state management
///
/// Holds the song store and remote lyrics source shared by handlers.
pub mod state;

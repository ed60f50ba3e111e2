// State management module
// Holds the song store and the remote lyrics source shared by all handlers

pub mod app_state;

pub use app_state::{AppState, SharedState};

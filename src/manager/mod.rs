//! Session management
//!
//! Handles the current-folder session over a file storage.

pub mod state;

pub use state::FileManager;

//! Utility modules for the mode explorer
//!
//! This module contains text helpers shared by the theory operations
//! and the WASM API.

pub mod note_text;

// Re-export commonly used helpers
pub use note_text::*;

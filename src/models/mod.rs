//! Models module for the mode explorer
//!
//! This module contains the static tables (alphabets, enharmonics, scale
//! catalogue, chord qualities) and the value types built from them.

pub mod chord;
pub mod notation;
pub mod note;
pub mod pitch_systems;
pub mod scales;

// Re-export commonly used types
pub use chord::{ChordClassification, ChordQuality};
pub use notation::Notation;
pub use note::Note;
pub use scales::{Scale, ScaleFamily};

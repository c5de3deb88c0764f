//! Error types for music theory operations
//!
//! Every failure is a name that could not be resolved against one of the
//! fixed tables (alphabet, scale catalogue, notation labels). A chord with a
//! nonstandard interval pattern is not an error.

use thiserror::Error;

/// Top-level error type for scale, chord, search and comparison operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Note or tonic not found in the active alphabet (nor its enharmonic table)
    #[error("Unknown note: '{0}'")]
    UnknownNote(String),

    /// Mode name not in the scale catalogue
    #[error("Unknown scale: '{0}'")]
    UnknownScale(String),

    /// Notation label not recognised
    #[error("Unknown notation: '{0}'. Expected one of: en, fr")]
    UnknownNotation(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;

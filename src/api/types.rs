//! Shared types for the WASM API
//!
//! Result shapes returned to JavaScript that have no library counterpart.

use serde::Serialize;

use crate::models::{ChordClassification, Note, Scale, ScaleFamily};

/// One catalogue entry for the mode dropdowns
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScaleEntry {
    pub name: &'static str,
    pub english_name: &'static str,
    pub family: ScaleFamily,
    pub intervals: [u8; 7],
}

impl From<Scale> for ScaleEntry {
    fn from(scale: Scale) -> Self {
        ScaleEntry {
            name: scale.name(),
            english_name: scale.english_name(),
            family: scale.family(),
            intervals: scale.intervals(),
        }
    }
}

/// Result of classifying a chord typed by the user
#[derive(Serialize, Clone, Debug)]
pub struct ChordResult {
    /// Notes as resolved (canonical spelling)
    pub notes: Vec<Note>,
    #[serde(flatten)]
    pub classification: ChordClassification,
}

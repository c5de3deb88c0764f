//! WASM API for chord classification

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, theory_error, validation_error, validate_chord_notes};
use crate::api::types::ChordResult;
use crate::errors::Result as TheoryResult;
use crate::models::{Notation, Note};
use crate::theory::classify;
use crate::{wasm_info, wasm_log};

/// Classify a chord given as an array of note names (root, third, fifth[, seventh])
///
/// # Returns
/// `{ notes, label, labelFr, symbol }`; label and symbol are
/// "non standard" / "N/A" for unlisted interval patterns
#[wasm_bindgen(js_name = classifyChord)]
pub fn classify_chord(notes: JsValue, notation: Notation) -> Result<JsValue, JsValue> {
    let names: Vec<String> = deserialize(notes, "Invalid chord notes")?;
    wasm_info!("classifyChord called: {:?}, notation={}", names, notation);

    validate_chord_notes(&names).map_err(validation_error)?;

    let resolved = names
        .iter()
        .map(|name| Note::parse(name, notation))
        .collect::<TheoryResult<Vec<_>>>()
        .map_err(|e| theory_error(e, "Chord classification failed"))?;
    let classification = classify(&names, notation)
        .map_err(|e| theory_error(e, "Chord classification failed"))?;

    wasm_log!("  {} ({})", classification.symbol(), classification.label());

    serialize(
        &ChordResult { notes: resolved, classification },
        "Chord serialization error",
    )
}

//! WASM API for mode search

use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, theory_error};
use crate::models::Notation;
use crate::renderers::format_search_results;
use crate::theory::search_text;
use crate::{wasm_info, wasm_log};

/// Modes containing every note (or every chord) in a space-separated input
///
/// # Returns
/// Array of `{ tonic, scale }`, tonics in alphabet order then scales in
/// catalogue order; empty when nothing matches
#[wasm_bindgen(js_name = searchModes)]
pub fn search_modes(input: &str, is_chord: bool, notation: Notation) -> Result<JsValue, JsValue> {
    wasm_info!("searchModes called: input='{}', isChord={}, notation={}", input, is_chord, notation);

    let matches = search_text(input, is_chord, notation)
        .map_err(|e| theory_error(e, "Mode search failed"))?;

    wasm_log!("  {} matching mode(s)", matches.len());
    serialize(&matches, "Search result serialization error")
}

/// Mode search as report text
#[wasm_bindgen(js_name = formatSearchResults)]
pub fn format_search_results_text(input: &str, is_chord: bool, notation: Notation) -> Result<String, JsValue> {
    let matches = search_text(input, is_chord, notation)
        .map_err(|e| theory_error(e, "Mode search failed"))?;
    Ok(format_search_results(input, is_chord, &matches, notation))
}

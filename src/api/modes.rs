//! WASM API for scale generation, mode analysis and mode comparison
//!
//! Tonic arguments accept the GUI's dropdown values, so "C#/Db" is read
//! as "C#".

use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, theory_error};
use crate::api::types::ScaleEntry;
use crate::models::{Notation, Scale};
use crate::renderers::{format_comparison, format_mode_analysis};
use crate::theory::{analyze, compare_named, generate_named, ModeAnalysis, ModeComparison};
use crate::utils::{tonic_choices, tonic_from_choice};
use crate::{wasm_info, wasm_log};

/// Notes of a scale, in scale-degree order
///
/// # Returns
/// Array of 7 note names spelled in the requested notation
#[wasm_bindgen(js_name = generateScale)]
pub fn generate_scale(scale_name: &str, tonic: &str, notation: Notation) -> Result<JsValue, JsValue> {
    wasm_info!("generateScale called: tonic='{}', scale='{}', notation={}", tonic, scale_name, notation);

    let notes = generate_named(scale_name, tonic_from_choice(tonic), notation)
        .map_err(|e| theory_error(e, "Scale generation failed"))?;

    wasm_log!("  Generated {:?}", notes.iter().map(|n| n.name()).collect::<Vec<_>>());
    serialize(&notes, "Scale serialization error")
}

fn analysis_for(tonic: &str, scale_name: &str, notation: Notation) -> Result<ModeAnalysis, JsValue> {
    analyze(tonic_from_choice(tonic), scale_name, notation)
        .map_err(|e| theory_error(e, "Mode analysis failed"))
}

/// Mode notes plus its 7 triads and 7 tetrads with their classifications
#[wasm_bindgen(js_name = analyzeMode)]
pub fn analyze_mode(tonic: &str, scale_name: &str, notation: Notation) -> Result<JsValue, JsValue> {
    wasm_info!("analyzeMode called: tonic='{}', scale='{}', notation={}", tonic, scale_name, notation);

    let analysis = analysis_for(tonic, scale_name, notation)?;
    serialize(&analysis, "Analysis serialization error")
}

/// Mode analysis as report text
#[wasm_bindgen(js_name = formatModeAnalysis)]
pub fn format_mode_analysis_text(tonic: &str, scale_name: &str, notation: Notation) -> Result<String, JsValue> {
    let analysis = analysis_for(tonic, scale_name, notation)?;
    Ok(format_mode_analysis(&analysis))
}

fn comparison_for(
    tonic_a: &str,
    scale_a: &str,
    tonic_b: &str,
    scale_b: &str,
    notation: Notation,
) -> Result<ModeComparison, JsValue> {
    compare_named(tonic_from_choice(tonic_a), scale_a, tonic_from_choice(tonic_b), scale_b, notation)
        .map_err(|e| theory_error(e, "Mode comparison failed"))
}

/// Notes of two modes with their common and differing notes
#[wasm_bindgen(js_name = compareModes)]
pub fn compare_modes(
    tonic_a: &str,
    scale_a: &str,
    tonic_b: &str,
    scale_b: &str,
    notation: Notation,
) -> Result<JsValue, JsValue> {
    wasm_info!(
        "compareModes called: '{} {}' vs '{} {}', notation={}",
        tonic_a, scale_a, tonic_b, scale_b, notation
    );

    let comparison = comparison_for(tonic_a, scale_a, tonic_b, scale_b, notation)?;
    wasm_log!("  {} common note(s)", comparison.common.len());
    serialize(&comparison, "Comparison serialization error")
}

/// Mode comparison as report text
#[wasm_bindgen(js_name = formatComparison)]
pub fn format_comparison_text(
    tonic_a: &str,
    scale_a: &str,
    tonic_b: &str,
    scale_b: &str,
    notation: Notation,
) -> Result<String, JsValue> {
    let comparison = comparison_for(tonic_a, scale_a, tonic_b, scale_b, notation)?;
    Ok(format_comparison(&comparison))
}

/// Scale catalogue in catalogue order
#[wasm_bindgen(js_name = listScales)]
pub fn list_scales() -> Result<JsValue, JsValue> {
    let entries: Vec<ScaleEntry> = Scale::ALL.into_iter().map(ScaleEntry::from).collect();
    serialize(&entries, "Scale catalogue serialization error")
}

/// Tonic dropdown values for a notation ("C", "C#/Db", ...)
#[wasm_bindgen(js_name = tonicChoices)]
pub fn tonic_choices_array(notation: Notation) -> js_sys::Array {
    tonic_choices(notation)
        .into_iter()
        .map(|choice| JsValue::from_str(&choice))
        .collect()
}

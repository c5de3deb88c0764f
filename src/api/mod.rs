//! Mode Explorer WASM API
//!
//! This module provides the JavaScript-facing API used by the GUI. Every
//! function is a thin wrapper: resolve arguments, call into `theory`, then
//! serialize the result (or format it as report text).
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and logging
//! - `types`: Result shapes that only exist at the JS boundary
//! - `modes`: Scale generation, mode analysis, mode comparison, dropdown data
//! - `chords`: Chord classification
//! - `search`: Mode search

pub mod helpers;
pub mod types;
pub mod chords;
pub mod modes;
pub mod search;

// Re-export all public functions to keep a flat API
pub use chords::classify_chord;
pub use modes::{
    analyze_mode, compare_modes, format_comparison_text, format_mode_analysis_text, generate_scale,
    list_scales, tonic_choices_array,
};
pub use search::{format_search_results_text, search_modes};

//! Renderers module for the mode explorer
//!
//! This module turns analysis, search and comparison results into the
//! plain text shown in the GUI's result panes.

pub mod text;

pub use text::{format_comparison, format_mode_analysis, format_search_results, join_notes};

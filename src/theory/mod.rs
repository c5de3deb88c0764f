//! Music theory operations
//!
//! Pure functions over the static tables in `models`:
//! - `scale_generator`: notes of a scale from a tonic
//! - `chord_classifier`: quality and symbol of a triad or tetrad
//! - `chord_builder`: diatonic triads and tetrads of a mode
//! - `chord_symbol`: chord symbols ("Am7") to notes
//! - `mode_analysis`: a mode with its classified chords
//! - `mode_search`: modes containing given notes or chords
//! - `mode_comparator`: common and differing notes of two modes

pub mod chord_builder;
pub mod chord_classifier;
pub mod chord_symbol;
pub mod mode_analysis;
pub mod mode_comparator;
pub mod mode_search;
pub mod scale_generator;

pub use chord_builder::{build_diatonic_chords, DiatonicChords};
pub use chord_classifier::{classify, classify_notes};
pub use chord_symbol::{parse_chord, ChordSymbol};
pub use mode_analysis::{analyze, analyze_instance, AnalyzedChord, ModeAnalysis};
pub use mode_comparator::{compare, compare_named, ModeComparison};
pub use mode_search::{search, search_text, ModeMatch};
pub use scale_generator::{generate, generate_from, generate_named, ScaleInstance};

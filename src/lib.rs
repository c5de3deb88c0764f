//! Mode Explorer WASM Module
//!
//! Music theory core for the mode analysis, mode search and mode comparison
//! tools: scale generation over a fixed 21-mode catalogue, triad/tetrad
//! classification, diatonic chord building, and brute-force mode search,
//! in English (C D E) or French (Do Ré Mi) note names.
//!
//! - `models`: static tables (alphabets, enharmonics, scales, chord qualities)
//! - `theory`: the pure operations over those tables
//! - `renderers`: plain-text reports
//! - `api`: JavaScript-facing wrappers for the GUI

pub mod errors;
pub mod models;
pub mod theory;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use errors::TheoryError;
pub use models::*;
pub use theory::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Mode Explorer WASM module initialized");
}

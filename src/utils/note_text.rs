//! Text normalization for note names and GUI selections
//!
//! Note input is case-insensitive: every name is normalized to the
//! alphabets' convention (first letter uppercase, rest lowercase) before
//! any table lookup.

use crate::models::notation::Notation;

/// Uppercase the first character and lowercase the rest ("c#" -> "C#", "RÉB" -> "Réb")
pub fn capitalize(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Extract the tonic from a dropdown value of the form "X/Y" (keeps "X")
pub fn tonic_from_choice(choice: &str) -> &str {
    choice.split('/').next().unwrap_or(choice).trim()
}

/// Dropdown values for tonic selection: naturals alone, accidentals as
/// "sharp/flat" pairs ("C#/Db", "Do#/Réb")
pub fn tonic_choices(notation: Notation) -> Vec<String> {
    notation
        .alphabet()
        .iter()
        .map(|&name| match notation.enharmonic_of(name) {
            Some(flat) if name.ends_with('#') => format!("{}/{}", name, flat),
            _ => name.to_string(),
        })
        .collect()
}

/// Split free-text input on whitespace
pub fn split_items(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

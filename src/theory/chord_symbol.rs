//! Chord symbol parsing ("Am7", "Sol#dim", "Bbmaj7", "C-E-G")
//!
//! A symbol is a root note name followed by a quality suffix from the
//! chord quality table. Suffixes are compared case-insensitively and tried
//! longest first, and a suffix only wins if what precedes it is a valid
//! root. "Cm7b5" is therefore always half-diminished, never "Cm" + "7b5".
//!
//! Input that is not a symbol may list the chord tones explicitly,
//! separated by hyphens.

use serde::Serialize;

use crate::errors::{Result, TheoryError};
use crate::models::{ChordQuality, Notation, Note};

/// A root plus a quality, e.g. A + Minor7 for "Am7"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordSymbol {
    pub root: Note,
    pub quality: ChordQuality,
}

impl ChordSymbol {
    /// Parse a chord symbol using longest-suffix-first matching
    pub fn parse(text: &str, notation: Notation) -> Option<ChordSymbol> {
        let text = text.trim();

        let mut qualities = ChordQuality::ALL;
        qualities.sort_by_key(|quality| std::cmp::Reverse(quality.suffix().len()));

        qualities.into_iter().find_map(|quality| {
            let root = strip_suffix_ignore_case(text, quality.suffix())?;
            if root.is_empty() {
                return None;
            }
            Note::parse(root, notation)
                .ok()
                .map(|root| ChordSymbol { root, quality })
        })
    }

    /// Chord tones in root, third, fifth[, seventh] order
    pub fn notes(&self) -> Vec<Note> {
        self.quality
            .intervals()
            .iter()
            .map(|&interval| self.root.transpose(interval))
            .collect()
    }

    /// Conventional symbol with the canonical root spelling
    pub fn to_symbol(&self) -> String {
        format!("{}{}", self.root, self.quality.suffix())
    }
}

/// Notes of a chord given as a symbol or as hyphen-separated note names
pub fn parse_chord(text: &str, notation: Notation) -> Result<Vec<Note>> {
    if let Some(symbol) = ChordSymbol::parse(text, notation) {
        return Ok(symbol.notes());
    }

    if text.contains('-') {
        return text
            .split('-')
            .map(|name| Note::parse(name.trim(), notation))
            .collect();
    }

    log::warn!("Unrecognised chord '{}' ({})", text, notation);
    Err(TheoryError::UnknownNote(text.to_string()))
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

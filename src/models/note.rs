//! A chromatic note spelled in a given notation
//!
//! Notes are stored as a pitch class (0 = C / Do ... 11 = B / Si) plus the
//! notation they are spelled in. The spelling is always the canonical
//! alphabet entry, so generated notes never carry flats.
//!
//! Input spellings are resolved in two steps:
//! - exact match against the alphabet (after capitalization)
//! - one enharmonic hop (Db -> C#, Sib -> La#, E# -> F, ...)

use serde::{Serialize, Serializer};
use std::fmt;

use crate::errors::{Result, TheoryError};
use crate::models::notation::Notation;
use crate::utils::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note {
    pitch_class: u8,
    notation: Notation,
}

impl Note {
    /// Create a note from a pitch class (taken modulo 12)
    pub fn new(pitch_class: u8, notation: Notation) -> Self {
        Note {
            pitch_class: pitch_class % 12,
            notation,
        }
    }

    /// Resolve a user-supplied note name (case-insensitive)
    pub fn parse(text: &str, notation: Notation) -> Result<Self> {
        let spelling = capitalize(text);

        notation
            .resolve(&spelling)
            .map(|index| Note::new(index, notation))
            .ok_or_else(|| TheoryError::UnknownNote(text.to_string()))
    }

    /// All 12 notes of a notation, in alphabet order
    pub fn chromatic(notation: Notation) -> impl Iterator<Item = Note> {
        (0..12).map(move |pc| Note::new(pc, notation))
    }

    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Canonical spelling in this note's notation
    pub fn name(&self) -> &'static str {
        self.notation.alphabet()[self.pitch_class as usize]
    }

    /// Move up by a number of semitones (wraps at the octave)
    pub fn transpose(&self, semitones: u8) -> Note {
        Note::new((self.pitch_class + semitones % 12) % 12, self.notation)
    }

    /// Ascending interval in semitones from this note to `other` (0..=11)
    pub fn interval_to(&self, other: &Note) -> u8 {
        (other.pitch_class + 12 - self.pitch_class) % 12
    }

    /// Same pitch class respelled in another notation
    pub fn in_notation(&self, notation: Notation) -> Note {
        Note::new(self.pitch_class, notation)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

//! Note-naming conventions
//!
//! A notation selects one of two parallel 12-entry chromatic alphabets and
//! the matching enharmonic table. Notes are stored as pitch classes, so the
//! English alphabet acts as the pivot between notations.

use std::fmt;
use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::errors::TheoryError;
use crate::models::pitch_systems::{EnglishSystem, FrenchSystem, NoteSpelling};

/// Enumeration of supported note-naming conventions
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Notation {
    /// Letter names (C, C#, D, ... B)
    English = 0,

    /// Solfège names (Do, Do#, Ré, ... Si)
    French = 1,
}

impl Notation {
    pub const ALL: [Notation; 2] = [Notation::English, Notation::French];

    /// The 12 canonical (sharp) spellings, indexed by pitch class
    pub fn alphabet(&self) -> &'static [&'static str; 12] {
        match self {
            Notation::English => &EnglishSystem::ALPHABET,
            Notation::French => &FrenchSystem::ALPHABET,
        }
    }

    /// Sharp <-> flat spelling pairs for this notation
    pub fn enharmonics(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Notation::English => EnglishSystem::ENHARMONICS,
            Notation::French => FrenchSystem::ENHARMONICS,
        }
    }

    /// Short code used by the GUI and in serialized requests
    pub fn code(&self) -> &'static str {
        match self {
            Notation::English => "en",
            Notation::French => "fr",
        }
    }

    /// Index of an exact (already capitalized) spelling in the alphabet
    pub fn index_of(&self, spelling: &str) -> Option<u8> {
        match self {
            Notation::English => EnglishSystem::index_of(spelling),
            Notation::French => FrenchSystem::index_of(spelling),
        }
    }

    /// Single-hop enharmonic equivalent of a spelling, if the table has one
    pub fn enharmonic_of(&self, spelling: &str) -> Option<&'static str> {
        match self {
            Notation::English => EnglishSystem::enharmonic_of(spelling),
            Notation::French => FrenchSystem::enharmonic_of(spelling),
        }
    }

    /// Pitch class of a capitalized spelling, through at most one enharmonic hop
    pub fn resolve(&self, spelling: &str) -> Option<u8> {
        match self {
            Notation::English => EnglishSystem::resolve(spelling),
            Notation::French => FrenchSystem::resolve(spelling),
        }
    }
}

impl Default for Notation {
    fn default() -> Self {
        Notation::French
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Notation {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" | "anglais" => Ok(Notation::English),
            "fr" | "french" | "français" | "francais" => Ok(Notation::French),
            _ => Err(TheoryError::UnknownNotation(s.to_string())),
        }
    }
}

//! Note alphabets for each notation
//!
//! Each notation provides a 12-entry chromatic alphabet spelled with sharps
//! and a one-hop enharmonic table used to resolve flat (and E#/B#/Fb/Cb)
//! spellings onto alphabet entries.

pub mod english;
pub mod french;

pub use english::EnglishSystem;
pub use french::FrenchSystem;

/// Static spelling tables for a note-naming convention
pub trait NoteSpelling {
    /// Canonical spellings, indexed by pitch class (0 = C / Do)
    const ALPHABET: [&'static str; 12];

    /// Enharmonic pairs `(spelling, equivalent)`; pairs between two
    /// accidentals appear in both directions.
    const ENHARMONICS: &'static [(&'static str, &'static str)];

    /// Pitch class of an exact (already capitalized) alphabet spelling
    fn index_of(spelling: &str) -> Option<u8> {
        Self::ALPHABET
            .iter()
            .position(|&name| name == spelling)
            .map(|i| i as u8)
    }

    /// Single-hop enharmonic equivalent of a spelling, if the table has one
    fn enharmonic_of(spelling: &str) -> Option<&'static str> {
        Self::ENHARMONICS
            .iter()
            .find(|(from, _)| *from == spelling)
            .map(|(_, to)| *to)
    }

    /// Pitch class of a spelling: alphabet entry first, else one enharmonic
    /// hop onto the alphabet. Never follows a second hop.
    fn resolve(spelling: &str) -> Option<u8> {
        Self::index_of(spelling).or_else(|| Self::enharmonic_of(spelling).and_then(Self::index_of))
    }
}

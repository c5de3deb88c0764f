//! French solfège alphabet (Do Ré Mi Fa Sol La Si)
//!
//! Spellings keep the accent on Ré, so "Re" is not a valid note name.

use super::NoteSpelling;

/// French solfège implementation
pub struct FrenchSystem;

impl NoteSpelling for FrenchSystem {
    const ALPHABET: [&'static str; 12] = [
        "Do", "Do#", "Ré", "Ré#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
    ];

    const ENHARMONICS: &'static [(&'static str, &'static str)] = &[
        ("Do#", "Réb"), ("Ré#", "Mib"), ("Mi#", "Fa"), ("Fa#", "Solb"),
        ("Sol#", "Lab"), ("La#", "Sib"), ("Si#", "Do"),
        ("Réb", "Do#"), ("Mib", "Ré#"), ("Fab", "Mi"), ("Solb", "Fa#"),
        ("Lab", "Sol#"), ("Sib", "La#"), ("Dob", "Si"),
    ];
}

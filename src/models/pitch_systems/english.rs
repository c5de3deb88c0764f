//! English letter-name alphabet (C D E F G A B)

use super::NoteSpelling;

/// English letter-name implementation
pub struct EnglishSystem;

impl NoteSpelling for EnglishSystem {
    const ALPHABET: [&'static str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];

    const ENHARMONICS: &'static [(&'static str, &'static str)] = &[
        ("C#", "Db"), ("D#", "Eb"), ("E#", "F"), ("F#", "Gb"),
        ("G#", "Ab"), ("A#", "Bb"), ("B#", "C"),
        ("Db", "C#"), ("Eb", "D#"), ("Fb", "E"), ("Gb", "F#"),
        ("Ab", "G#"), ("Bb", "A#"), ("Cb", "B"),
    ];
}

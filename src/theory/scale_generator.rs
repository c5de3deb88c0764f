/// Scale generation: apply semitone offsets to a tonic
///
/// Output keeps scale-degree order (the order of the offsets), not sorted
/// pitch-class order, and is always spelled from the notation's alphabet.

use serde::Serialize;
use std::fmt;

use crate::errors::Result;
use crate::models::{Notation, Note, Scale};

/// Generate the notes of a scale from its offsets and a tonic name
pub fn generate(intervals: &[u8; 7], tonic: &str, notation: Notation) -> Result<[Note; 7]> {
    let tonic = Note::parse(tonic, notation)?;
    Ok(generate_from(intervals, tonic))
}

/// Generate the notes of a scale from an already resolved tonic
pub fn generate_from(intervals: &[u8; 7], tonic: Note) -> [Note; 7] {
    (*intervals).map(|offset| tonic.transpose(offset))
}

/// Generate a catalogue scale, resolving both the scale name and the tonic
pub fn generate_named(scale_name: &str, tonic: &str, notation: Notation) -> Result<[Note; 7]> {
    let scale: Scale = scale_name.parse()?;
    generate(&scale.intervals(), tonic, notation)
}

/// A catalogue scale rooted on a tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScaleInstance {
    pub tonic: Note,
    pub scale: Scale,
}

impl ScaleInstance {
    pub fn new(tonic: Note, scale: Scale) -> Self {
        ScaleInstance { tonic, scale }
    }

    /// Resolve a (tonic, scale name) selection
    pub fn parse(tonic: &str, scale_name: &str, notation: Notation) -> Result<Self> {
        let scale: Scale = scale_name.parse()?;
        let tonic = Note::parse(tonic, notation)?;
        Ok(ScaleInstance { tonic, scale })
    }

    pub fn notation(&self) -> Notation {
        self.tonic.notation()
    }

    /// Notes in scale-degree order
    pub fn notes(&self) -> [Note; 7] {
        generate_from(&self.scale.intervals(), self.tonic)
    }

    /// Whether a note's pitch class belongs to this scale
    pub fn contains(&self, note: &Note) -> bool {
        let offset = self.tonic.interval_to(note);
        self.scale.intervals().contains(&offset)
    }
}

impl fmt::Display for ScaleInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TheoryError;

    fn names(notes: &[Note]) -> Vec<&'static str> {
        notes.iter().map(Note::name).collect()
    }

    #[test]
    fn test_c_major() {
        let notes = generate(&[0, 2, 4, 5, 7, 9, 11], "C", Notation::English).unwrap();
        assert_eq!(names(&notes), vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_keeps_degree_order_across_octave() {
        let notes = generate(&Scale::Dorian.intervals(), "A", Notation::English).unwrap();
        assert_eq!(names(&notes), vec!["A", "B", "C", "D", "E", "F#", "G"]);
    }

    #[test]
    fn test_french_notation() {
        let notes = generate_named("mineur harmonique", "la", Notation::French).unwrap();
        assert_eq!(names(&notes), vec!["La", "Si", "Do", "Ré", "Mi", "Fa", "Sol#"]);
    }

    #[test]
    fn test_all_scales_all_tonics() {
        for notation in Notation::ALL {
            for tonic in notation.alphabet() {
                for scale in Scale::ALL {
                    let notes = generate(&scale.intervals(), tonic, notation).unwrap();
                    assert_eq!(notes[0].name(), *tonic);

                    let mut pitch_classes: Vec<u8> = notes.iter().map(Note::pitch_class).collect();
                    pitch_classes.sort();
                    pitch_classes.dedup();
                    assert_eq!(pitch_classes.len(), 7, "{} {}", tonic, scale);

                    for note in &notes {
                        assert!(notation.alphabet().contains(&note.name()));
                    }
                }
            }
        }
    }

    #[test]
    fn test_flat_tonic_is_respelled() {
        let notes = generate(&Scale::Ionian.intervals(), "Eb", Notation::English).unwrap();
        assert_eq!(names(&notes), vec!["D#", "F", "G", "G#", "A#", "C", "D"]);
    }

    #[test]
    fn test_unknown_tonic() {
        assert_eq!(
            generate(&Scale::Ionian.intervals(), "X", Notation::English),
            Err(TheoryError::UnknownNote("X".to_string()))
        );
        // French names are not valid in English notation
        assert!(generate(&Scale::Ionian.intervals(), "Do", Notation::English).is_err());
    }

    #[test]
    fn test_unknown_scale() {
        assert_eq!(
            generate_named("bebop", "C", Notation::English),
            Err(TheoryError::UnknownScale("bebop".to_string()))
        );
    }

    #[test]
    fn test_scale_instance() {
        let instance = ScaleInstance::parse("D", "dorien", Notation::English).unwrap();
        assert_eq!(instance.to_string(), "D dorien");
        assert!(instance.contains(&Note::parse("C", Notation::English).unwrap()));
        assert!(!instance.contains(&Note::parse("C#", Notation::English).unwrap()));
        assert_eq!(instance.notes()[0], instance.tonic);
    }

    #[test]
    fn test_idempotent() {
        let first = generate_named("lydien #2", "F#", Notation::English).unwrap();
        let second = generate_named("lydien #2", "F#", Notation::English).unwrap();
        assert_eq!(first, second);
    }
}

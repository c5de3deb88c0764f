/// Diatonic third-stacking over a seven-note scale
///
/// Degree i gives the triad (i, i+2, i+4) and the tetrad (i, i+2, i+4, i+6),
/// indices taken modulo 7.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiatonicChords<T> {
    pub triads: [[T; 3]; 7],
    pub tetrads: [[T; 4]; 7],
}

/// Build the 7 triads and 7 tetrads of a mode, in scale-degree order
pub fn build_diatonic_chords<T: Clone>(mode_notes: &[T; 7]) -> DiatonicChords<T> {
    let note = |degree: usize, step: usize| mode_notes[(degree + step) % 7].clone();

    DiatonicChords {
        triads: std::array::from_fn(|i| [note(i, 0), note(i, 2), note(i, 4)]),
        tetrads: std::array::from_fn(|i| [note(i, 0), note(i, 2), note(i, 4), note(i, 6)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Notation, Scale};
    use crate::theory::scale_generator::generate;

    #[test]
    fn test_c_major_chords() {
        let notes = ["C", "D", "E", "F", "G", "A", "B"];
        let chords = build_diatonic_chords(&notes);

        assert_eq!(chords.triads[0], ["C", "E", "G"]);
        assert_eq!(chords.triads[1], ["D", "F", "A"]);
        assert_eq!(chords.triads[6], ["B", "D", "F"]);
        assert_eq!(chords.tetrads[0], ["C", "E", "G", "B"]);
        assert_eq!(chords.tetrads[4], ["G", "B", "D", "F"]);
        assert_eq!(chords.tetrads[5], ["A", "C", "E", "G"]);
    }

    #[test]
    fn test_roots_follow_degree_order() {
        let notes = generate(&Scale::Phrygian.intervals(), "E", Notation::English).unwrap();
        let chords = build_diatonic_chords(&notes);
        for i in 0..7 {
            assert_eq!(chords.triads[i][0], notes[i]);
            assert_eq!(chords.tetrads[i][0], notes[i]);
            assert_eq!(chords.tetrads[i][..3], chords.triads[i]);
        }
    }
}

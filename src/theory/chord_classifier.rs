//! Chord classification from a fixed interval table
//!
//! The chord is read positionally: root, third, fifth and optional seventh.
//! Notes are never sorted, so an inverted voicing is classified by the
//! intervals it actually spells above its first note.

use crate::errors::Result;
use crate::models::{ChordClassification, ChordQuality, Notation, Note};
use crate::utils::capitalize;

/// Classify a chord given as note names
///
/// Names are resolved case-insensitively (flats through the enharmonic
/// table). The symbol keeps the root as the caller spelled it, so "Eb G Bb"
/// gives "Eb" rather than "D#".
pub fn classify<S: AsRef<str>>(chord: &[S], notation: Notation) -> Result<ChordClassification> {
    let notes = chord
        .iter()
        .map(|name| Note::parse(name.as_ref(), notation))
        .collect::<Result<Vec<_>>>()?;

    let root_name = chord.first().map(|name| capitalize(name.as_ref())).unwrap_or_default();

    Ok(match quality_of(&notes) {
        Some(quality) => ChordClassification::new(quality, &root_name),
        None => ChordClassification::non_standard(),
    })
}

/// Classify already resolved notes; the symbol uses the canonical root spelling
pub fn classify_notes(notes: &[Note]) -> ChordClassification {
    match (quality_of(notes), notes.first()) {
        (Some(quality), Some(root)) => ChordClassification::new(quality, root.name()),
        _ => ChordClassification::non_standard(),
    }
}

/// Quality of a triad or tetrad, None for other sizes or unlisted patterns
pub fn quality_of(notes: &[Note]) -> Option<ChordQuality> {
    match notes {
        [root, third, fifth] => {
            ChordQuality::from_intervals(root.interval_to(third), root.interval_to(fifth), None)
        }
        [root, third, fifth, seventh] => ChordQuality::from_intervals(
            root.interval_to(third),
            root.interval_to(fifth),
            Some(root.interval_to(seventh)),
        ),
        _ => None,
    }
}

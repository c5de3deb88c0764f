//! Mode search: which (tonic, scale) pairs contain a set of notes or chords
//!
//! The search is exhaustive over 12 tonics x 21 scales. Results come out in
//! loop order (tonics in alphabet order, then scales in catalogue order) and
//! that order is part of the contract.
//!
//! A target note is satisfied when it, or its single-hop enharmonic
//! equivalent, is in the generated scale. Generated scales only contain
//! alphabet spellings, so resolving each target once (alphabet entry, else
//! one enharmonic hop) and testing its pitch class gives the same answer.

use serde::Serialize;

use crate::errors::Result;
use crate::models::{Notation, Note, Scale};
use crate::theory::chord_symbol::parse_chord;
use crate::theory::scale_generator::ScaleInstance;
use crate::utils::split_items;

/// A (tonic, scale) pair whose notes cover every search target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeMatch {
    pub tonic: Note,
    pub scale: Scale,
}

impl ModeMatch {
    pub fn instance(&self) -> ScaleInstance {
        ScaleInstance::new(self.tonic, self.scale)
    }
}

/// Find every mode containing all targets
///
/// With `is_chord` false each target is a note name; otherwise each target
/// is a chord symbol (or hyphen-separated notes) and all of its tones must be
/// in the mode. An empty result is not an error, but a target that does not
/// resolve fails the whole search with `UnknownNote` instead of matching nothing.
pub fn search<S: AsRef<str>>(targets: &[S], is_chord: bool, notation: Notation) -> Result<Vec<ModeMatch>> {
    let required = targets
        .iter()
        .map(|target| {
            let target = target.as_ref();
            if is_chord {
                parse_chord(target, notation)
            } else {
                Note::parse(target, notation).map(|note| vec![note])
            }
        })
        .collect::<Result<Vec<Vec<Note>>>>()?;

    let matches: Vec<ModeMatch> = Note::chromatic(notation)
        .flat_map(|tonic| Scale::ALL.into_iter().map(move |scale| ModeMatch { tonic, scale }))
        .filter(|candidate| {
            let instance = candidate.instance();
            required
                .iter()
                .all(|notes| notes.iter().all(|note| instance.contains(note)))
        })
        .collect();

    log::debug!(
        "Mode search ({} {} target(s), {}): {} match(es)",
        targets.len(),
        if is_chord { "chord" } else { "note" },
        notation,
        matches.len()
    );

    Ok(matches)
}

/// Search with whitespace-separated free text input
pub fn search_text(input: &str, is_chord: bool, notation: Notation) -> Result<Vec<ModeMatch>> {
    search(&split_items(input), is_chord, notation)
}

/// Comparison of two modes as pitch-class sets
///
/// Both modes are spelled in the same notation. The set fields are ordered
/// by pitch class, but callers should treat them as plain sets.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::errors::Result;
use crate::models::{Notation, Note};
use crate::theory::scale_generator::ScaleInstance;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeComparison {
    pub mode_a: ScaleInstance,
    pub mode_b: ScaleInstance,
    /// Notes of mode A in scale-degree order
    pub notes_a: Vec<Note>,
    /// Notes of mode B in scale-degree order
    pub notes_b: Vec<Note>,
    pub common: BTreeSet<Note>,
    pub only_a: BTreeSet<Note>,
    pub only_b: BTreeSet<Note>,
}

impl ModeComparison {
    /// True when both modes use the same seven pitch classes
    pub fn same_notes(&self) -> bool {
        self.only_a.is_empty() && self.only_b.is_empty()
    }
}

/// Compare two resolved modes
pub fn compare(a: ScaleInstance, b: ScaleInstance) -> ModeComparison {
    // Respell B in A's notation so set operations compare like with like
    let b = ScaleInstance::new(b.tonic.in_notation(a.notation()), b.scale);

    let notes_a = a.notes();
    let notes_b = b.notes();
    let set_a: BTreeSet<Note> = notes_a.iter().copied().collect();
    let set_b: BTreeSet<Note> = notes_b.iter().copied().collect();

    ModeComparison {
        mode_a: a,
        mode_b: b,
        notes_a: notes_a.to_vec(),
        notes_b: notes_b.to_vec(),
        common: set_a.intersection(&set_b).copied().collect(),
        only_a: set_a.difference(&set_b).copied().collect(),
        only_b: set_b.difference(&set_a).copied().collect(),
    }
}

/// Compare two modes given by tonic and scale names
pub fn compare_named(
    tonic_a: &str,
    scale_a: &str,
    tonic_b: &str,
    scale_b: &str,
    notation: Notation,
) -> Result<ModeComparison> {
    let a = ScaleInstance::parse(tonic_a, scale_a, notation)?;
    let b = ScaleInstance::parse(tonic_b, scale_b, notation)?;
    Ok(compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TheoryError;

    fn names(set: &BTreeSet<Note>) -> BTreeSet<&'static str> {
        set.iter().map(Note::name).collect()
    }

    #[test]
    fn test_relative_modes_share_all_notes() {
        let result = compare_named("C", "ionien", "A", "éolien", Notation::English).unwrap();
        assert_eq!(result.common.len(), 7);
        assert!(result.only_a.is_empty());
        assert!(result.only_b.is_empty());
        assert!(result.same_notes());
        assert_eq!(result.notes_b[0].name(), "A");
    }

    #[test]
    fn test_parallel_modes() {
        let result = compare_named("C", "ionien", "C", "dorien", Notation::English).unwrap();
        assert_eq!(names(&result.only_a), BTreeSet::from(["E", "B"]));
        assert_eq!(names(&result.only_b), BTreeSet::from(["D#", "A#"]));
        assert_eq!(result.common.len(), 5);
    }

    #[test]
    fn test_set_identities() {
        let result = compare_named("Ré", "lydien #2", "Fa#", "super locrien", Notation::French).unwrap();
        let a: BTreeSet<Note> = result.notes_a.iter().copied().collect();
        let b: BTreeSet<Note> = result.notes_b.iter().copied().collect();
        let union_a: BTreeSet<Note> = result.common.union(&result.only_a).copied().collect();
        let union_b: BTreeSet<Note> = result.common.union(&result.only_b).copied().collect();
        assert_eq!(union_a, a);
        assert_eq!(union_b, b);
        assert!(result.only_a.is_disjoint(&result.only_b));
    }

    #[test]
    fn test_swapping_swaps_differences() {
        let ab = compare_named("E", "phrygien", "E", "phrygien dominant", Notation::English).unwrap();
        let ba = compare_named("E", "phrygien dominant", "E", "phrygien", Notation::English).unwrap();
        assert_eq!(ab.common, ba.common);
        assert_eq!(ab.only_a, ba.only_b);
        assert_eq!(ab.only_b, ba.only_a);
    }

    #[test]
    fn test_mixed_notations_are_respelled() {
        let a = ScaleInstance::parse("Do", "ionien", Notation::French).unwrap();
        let b = ScaleInstance::parse("A", "éolien", Notation::English).unwrap();
        let result = compare(a, b);
        assert!(result.same_notes());
        assert_eq!(result.notes_b[0].name(), "La");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            compare_named("C", "ionien", "C", "nope", Notation::English),
            Err(TheoryError::UnknownScale("nope".to_string()))
        );
        assert_eq!(
            compare_named("C", "ionien", "Do", "ionien", Notation::English),
            Err(TheoryError::UnknownNote("Do".to_string()))
        );
    }
}

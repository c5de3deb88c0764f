//! Scale catalogue (modes of the major, melodic minor and harmonic minor scales)
//!
//! The catalogue is fixed: 21 seven-note scales, each defined by its semitone
//! offsets from the tonic. Catalogue order is observable (GUI dropdowns and
//! mode search results follow it), so `Scale::ALL` must not be reordered.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::TheoryError;

/// Family of parent scale a mode is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleFamily {
    Major,
    MelodicMinor,
    HarmonicMinor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scale {
    // Modes of the major scale
    #[serde(rename = "ionien")]
    Ionian,
    #[serde(rename = "dorien")]
    Dorian,
    #[serde(rename = "phrygien")]
    Phrygian,
    #[serde(rename = "lydien")]
    Lydian,
    #[serde(rename = "mixolydien")]
    Mixolydian,
    #[serde(rename = "éolien")]
    Aeolian,
    #[serde(rename = "locrien")]
    Locrian,

    // Modes of the melodic minor scale
    #[serde(rename = "mineur mélodique")]
    MelodicMinor,
    #[serde(rename = "dorien b2")]
    DorianFlat2,
    #[serde(rename = "lydien augmenté")]
    LydianAugmented,
    #[serde(rename = "lydien dominant")]
    LydianDominant,
    #[serde(rename = "mixolydien b6")]
    MixolydianFlat6,
    #[serde(rename = "éolien b5")]
    AeolianFlat5,
    #[serde(rename = "super locrien")]
    SuperLocrian,

    // Modes of the harmonic minor scale
    #[serde(rename = "mineur harmonique")]
    HarmonicMinor,
    #[serde(rename = "locrien #6")]
    LocrianSharp6,
    #[serde(rename = "ionien #5")]
    IonianSharp5,
    #[serde(rename = "dorien #4")]
    DorianSharp4,
    #[serde(rename = "phrygien dominant")]
    PhrygianDominant,
    #[serde(rename = "lydien #2")]
    LydianSharp2,
    #[serde(rename = "super locrien bb7")]
    SuperLocrianDoubleFlat7,
}

/// Lowercase name (catalogue key or English alias) -> scale
static SCALE_INDEX: Lazy<HashMap<String, Scale>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for scale in Scale::ALL {
        index.insert(scale.name().to_string(), scale);
        index.insert(scale.english_name().to_string(), scale);
    }
    index
});

impl Scale {
    /// Full catalogue in catalogue order
    pub const ALL: [Scale; 21] = [
        Scale::Ionian,
        Scale::Dorian,
        Scale::Phrygian,
        Scale::Lydian,
        Scale::Mixolydian,
        Scale::Aeolian,
        Scale::Locrian,
        Scale::MelodicMinor,
        Scale::DorianFlat2,
        Scale::LydianAugmented,
        Scale::LydianDominant,
        Scale::MixolydianFlat6,
        Scale::AeolianFlat5,
        Scale::SuperLocrian,
        Scale::HarmonicMinor,
        Scale::LocrianSharp6,
        Scale::IonianSharp5,
        Scale::DorianSharp4,
        Scale::PhrygianDominant,
        Scale::LydianSharp2,
        Scale::SuperLocrianDoubleFlat7,
    ];

    /// Semitone offsets from the tonic for degrees 1-7
    pub fn intervals(&self) -> [u8; 7] {
        match self {
            Scale::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Scale::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Scale::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Scale::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Scale::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Scale::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            Scale::Locrian => [0, 1, 3, 5, 6, 8, 10],
            Scale::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
            Scale::DorianFlat2 => [0, 1, 3, 5, 7, 9, 10],
            Scale::LydianAugmented => [0, 2, 4, 6, 8, 9, 11],
            Scale::LydianDominant => [0, 2, 4, 6, 7, 9, 10],
            Scale::MixolydianFlat6 => [0, 2, 4, 5, 7, 8, 10],
            Scale::AeolianFlat5 => [0, 2, 3, 5, 6, 8, 10],
            Scale::SuperLocrian => [0, 1, 3, 4, 6, 8, 10],
            Scale::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
            Scale::LocrianSharp6 => [0, 1, 3, 5, 6, 9, 10],
            Scale::IonianSharp5 => [0, 2, 4, 5, 8, 9, 11],
            Scale::DorianSharp4 => [0, 2, 3, 6, 7, 9, 10],
            Scale::PhrygianDominant => [0, 1, 4, 5, 7, 8, 10],
            Scale::LydianSharp2 => [0, 3, 4, 6, 7, 9, 11],
            Scale::SuperLocrianDoubleFlat7 => [0, 1, 3, 4, 6, 8, 9],
        }
    }

    /// Catalogue key (lowercase French name)
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Ionian => "ionien",
            Scale::Dorian => "dorien",
            Scale::Phrygian => "phrygien",
            Scale::Lydian => "lydien",
            Scale::Mixolydian => "mixolydien",
            Scale::Aeolian => "éolien",
            Scale::Locrian => "locrien",
            Scale::MelodicMinor => "mineur mélodique",
            Scale::DorianFlat2 => "dorien b2",
            Scale::LydianAugmented => "lydien augmenté",
            Scale::LydianDominant => "lydien dominant",
            Scale::MixolydianFlat6 => "mixolydien b6",
            Scale::AeolianFlat5 => "éolien b5",
            Scale::SuperLocrian => "super locrien",
            Scale::HarmonicMinor => "mineur harmonique",
            Scale::LocrianSharp6 => "locrien #6",
            Scale::IonianSharp5 => "ionien #5",
            Scale::DorianSharp4 => "dorien #4",
            Scale::PhrygianDominant => "phrygien dominant",
            Scale::LydianSharp2 => "lydien #2",
            Scale::SuperLocrianDoubleFlat7 => "super locrien bb7",
        }
    }

    /// English name, also accepted when resolving a scale by name
    pub fn english_name(&self) -> &'static str {
        match self {
            Scale::Ionian => "ionian",
            Scale::Dorian => "dorian",
            Scale::Phrygian => "phrygian",
            Scale::Lydian => "lydian",
            Scale::Mixolydian => "mixolydian",
            Scale::Aeolian => "aeolian",
            Scale::Locrian => "locrian",
            Scale::MelodicMinor => "melodic minor",
            Scale::DorianFlat2 => "dorian b2",
            Scale::LydianAugmented => "lydian augmented",
            Scale::LydianDominant => "lydian dominant",
            Scale::MixolydianFlat6 => "mixolydian b6",
            Scale::AeolianFlat5 => "aeolian b5",
            Scale::SuperLocrian => "super locrian",
            Scale::HarmonicMinor => "harmonic minor",
            Scale::LocrianSharp6 => "locrian #6",
            Scale::IonianSharp5 => "ionian #5",
            Scale::DorianSharp4 => "dorian #4",
            Scale::PhrygianDominant => "phrygian dominant",
            Scale::LydianSharp2 => "lydian #2",
            Scale::SuperLocrianDoubleFlat7 => "super locrian bb7",
        }
    }

    pub fn family(&self) -> ScaleFamily {
        match self.index() {
            0..=6 => ScaleFamily::Major,
            7..=13 => ScaleFamily::MelodicMinor,
            _ => ScaleFamily::HarmonicMinor,
        }
    }

    /// Position in the catalogue
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Catalogue keys in catalogue order
    pub fn names() -> Vec<&'static str> {
        Scale::ALL.iter().map(Scale::name).collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scale {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive lookup over keys and English aliases
        SCALE_INDEX
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| TheoryError::UnknownScale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_size_and_order() {
        assert_eq!(Scale::ALL.len(), 21);
        assert_eq!(Scale::ALL[0], Scale::Ionian);
        assert_eq!(Scale::ALL[20], Scale::SuperLocrianDoubleFlat7);
        for (i, scale) in Scale::ALL.iter().enumerate() {
            assert_eq!(scale.index(), i);
        }
    }

    #[test]
    fn test_intervals_invariant() {
        for scale in Scale::ALL {
            let intervals = scale.intervals();
            assert_eq!(intervals[0], 0, "{} must start at 0", scale);
            assert!(
                intervals.windows(2).all(|w| w[0] < w[1]),
                "{} offsets must be strictly increasing",
                scale
            );
            assert!(intervals[6] <= 11, "{} offsets must stay within the octave", scale);
        }
    }

    #[test]
    fn test_families_are_rotations() {
        // Every mode in a family is a rotation of the family's first scale
        let pitch_set = |scale: Scale, root: u8| -> Vec<u8> {
            let mut set: Vec<u8> = scale.intervals().iter().map(|i| (i + root) % 12).collect();
            set.sort();
            set
        };
        for (first, family) in [
            (Scale::Ionian, ScaleFamily::Major),
            (Scale::MelodicMinor, ScaleFamily::MelodicMinor),
            (Scale::HarmonicMinor, ScaleFamily::HarmonicMinor),
        ] {
            let parent = first.intervals();
            for (degree, scale) in Scale::ALL.iter().filter(|s| s.family() == family).enumerate() {
                let root = (12 - parent[degree]) % 12;
                assert_eq!(pitch_set(*scale, parent[degree]), pitch_set(first, 0), "{}", scale);
                assert_eq!(pitch_set(*scale, 0), pitch_set(first, root), "{}", scale);
            }
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("dorien".parse::<Scale>().unwrap(), Scale::Dorian);
        assert_eq!("Éolien".parse::<Scale>().unwrap(), Scale::Aeolian);
        assert_eq!("MINEUR HARMONIQUE".parse::<Scale>().unwrap(), Scale::HarmonicMinor);
        assert_eq!("Super Locrien bb7".parse::<Scale>().unwrap(), Scale::SuperLocrianDoubleFlat7);
    }

    #[test]
    fn test_from_str_english_alias() {
        assert_eq!("aeolian".parse::<Scale>().unwrap(), Scale::Aeolian);
        assert_eq!("Phrygian Dominant".parse::<Scale>().unwrap(), Scale::PhrygianDominant);
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "blues".parse::<Scale>(),
            Err(TheoryError::UnknownScale("blues".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_catalogue_key() {
        assert_eq!(serde_json::to_string(&Scale::LocrianSharp6).unwrap(), "\"locrien #6\"");
        let parsed: Scale = serde_json::from_str("\"mineur mélodique\"").unwrap();
        assert_eq!(parsed, Scale::MelodicMinor);
    }

    #[test]
    fn test_names() {
        let names = Scale::names();
        assert_eq!(names.len(), 21);
        assert_eq!(names[5], "éolien");
    }
}

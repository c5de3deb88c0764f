//! Chord qualities and classification results
//!
//! A chord is an ordered list of notes read as root, third, fifth and
//! (optionally) seventh. Its quality is looked up from the intervals of the
//! upper notes above the root; the same table drives chord-symbol parsing.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::notation::Notation;

/// Label reported when no quality matches the interval pattern
pub const NON_STANDARD_LABEL: &str = "non standard";

/// Symbol reported when no quality matches the interval pattern
pub const NON_STANDARD_SYMBOL: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    // Triads
    Major,
    Minor,
    Diminished,
    Augmented,

    // Tetrads
    Major7,
    Dominant7,
    Minor7,
    MinorMajor7,
    Diminished7,
    HalfDiminished7,
    Major7Sharp5,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 11] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Major7,
        ChordQuality::Dominant7,
        ChordQuality::Minor7,
        ChordQuality::MinorMajor7,
        ChordQuality::Diminished7,
        ChordQuality::HalfDiminished7,
        ChordQuality::Major7Sharp5,
    ];

    /// Semitones above the root for each chord tone, root included
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::MinorMajor7 => &[0, 3, 7, 11],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
            ChordQuality::Major7Sharp5 => &[0, 4, 8, 11],
        }
    }

    /// Exact lookup on (third, fifth[, seventh]); no nearest match
    pub fn from_intervals(third: u8, fifth: u8, seventh: Option<u8>) -> Option<Self> {
        ChordQuality::ALL.into_iter().find(|quality| {
            match (quality.intervals(), seventh) {
                ([_, t, f], None) => *t == third && *f == fifth,
                ([_, t, f, s], Some(seventh)) => *t == third && *f == fifth && *s == seventh,
                _ => false,
            }
        })
    }

    /// Suffix appended to the root name in the conventional symbol
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::MinorMajor7 => "mMaj7",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::HalfDiminished7 => "m7b5",
            ChordQuality::Major7Sharp5 => "maj7(#5)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Major7 => "major 7th",
            ChordQuality::Dominant7 => "dominant 7th",
            ChordQuality::Minor7 => "minor 7th",
            ChordQuality::MinorMajor7 => "minor-major 7th",
            ChordQuality::Diminished7 => "diminished 7th",
            ChordQuality::HalfDiminished7 => "half-diminished 7th",
            ChordQuality::Major7Sharp5 => "major7 sharp5",
        }
    }

    pub fn french_label(&self) -> &'static str {
        match self {
            ChordQuality::Major => "majeur",
            ChordQuality::Minor => "mineur",
            ChordQuality::Diminished => "diminué",
            ChordQuality::Augmented => "augmenté",
            ChordQuality::Major7 => "majeur 7",
            ChordQuality::Dominant7 => "dominant 7",
            ChordQuality::Minor7 => "mineur 7",
            ChordQuality::MinorMajor7 => "mineur majeur 7",
            ChordQuality::Diminished7 => "diminué 7",
            ChordQuality::HalfDiminished7 => "demi-diminué 7",
            ChordQuality::Major7Sharp5 => "majeur 7 quinte augmenté",
        }
    }

    pub fn is_tetrad(&self) -> bool {
        self.intervals().len() == 4
    }
}

/// Outcome of classifying a chord: a quality and its symbol, or neither
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordClassification {
    quality: Option<ChordQuality>,
    symbol: Option<String>,
}

impl ChordClassification {
    /// Classification with the symbol built from the root's spelling
    pub fn new(quality: ChordQuality, root_name: &str) -> Self {
        ChordClassification {
            quality: Some(quality),
            symbol: Some(format!("{}{}", root_name, quality.suffix())),
        }
    }

    /// The ("non standard", "N/A") result
    pub fn non_standard() -> Self {
        ChordClassification {
            quality: None,
            symbol: None,
        }
    }

    pub fn quality(&self) -> Option<ChordQuality> {
        self.quality
    }

    pub fn is_standard(&self) -> bool {
        self.quality.is_some()
    }

    pub fn label(&self) -> &'static str {
        self.quality.map_or(NON_STANDARD_LABEL, |q| q.label())
    }

    /// Label in the notation's language
    pub fn label_in(&self, notation: Notation) -> &'static str {
        match notation {
            Notation::English => self.label(),
            Notation::French => self.quality.map_or(NON_STANDARD_LABEL, |q| q.french_label()),
        }
    }

    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(NON_STANDARD_SYMBOL)
    }

    /// (type label, symbol) pair
    pub fn as_pair(&self) -> (&'static str, &str) {
        (self.label(), self.symbol())
    }
}

impl Serialize for ChordClassification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChordClassification", 3)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("labelFr", self.label_in(Notation::French))?;
        state.serialize_field("symbol", self.symbol())?;
        state.end()
    }
}

//! Mode analysis: the notes of a mode plus its classified diatonic chords

use serde::Serialize;

use crate::errors::Result;
use crate::models::{ChordClassification, Notation, Note, Scale};
use crate::theory::chord_builder::build_diatonic_chords;
use crate::theory::chord_classifier::classify_notes;
use crate::theory::scale_generator::ScaleInstance;

/// One diatonic chord with its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedChord {
    /// Scale degree of the root, starting at 1
    pub degree: usize,
    pub notes: Vec<Note>,
    pub classification: ChordClassification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeAnalysis {
    pub tonic: Note,
    pub scale: Scale,
    pub notes: Vec<Note>,
    pub triads: Vec<AnalyzedChord>,
    pub tetrads: Vec<AnalyzedChord>,
}

impl ModeAnalysis {
    pub fn notation(&self) -> Notation {
        self.tonic.notation()
    }
}

/// Analyze a mode given by tonic and scale names
pub fn analyze(tonic: &str, scale_name: &str, notation: Notation) -> Result<ModeAnalysis> {
    let instance = ScaleInstance::parse(tonic, scale_name, notation)?;
    Ok(analyze_instance(&instance))
}

/// Analyze an already resolved mode
pub fn analyze_instance(instance: &ScaleInstance) -> ModeAnalysis {
    let notes = instance.notes();
    let chords = build_diatonic_chords(&notes);

    let analyzed = |degree: usize, chord: &[Note]| AnalyzedChord {
        degree: degree + 1,
        notes: chord.to_vec(),
        classification: classify_notes(chord),
    };

    let analysis = ModeAnalysis {
        tonic: instance.tonic,
        scale: instance.scale,
        notes: notes.to_vec(),
        triads: chords.triads.iter().enumerate().map(|(i, c)| analyzed(i, &c[..])).collect(),
        tetrads: chords.tetrads.iter().enumerate().map(|(i, c)| analyzed(i, &c[..])).collect(),
    };

    log::debug!(
        "Analyzed {}: {} standard triads, {} standard tetrads",
        instance,
        analysis.triads.iter().filter(|c| c.classification.is_standard()).count(),
        analysis.tetrads.iter().filter(|c| c.classification.is_standard()).count()
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TheoryError;

    fn symbols(chords: &[AnalyzedChord]) -> Vec<String> {
        chords.iter().map(|c| c.classification.symbol().to_string()).collect()
    }

    #[test]
    fn test_c_ionian() {
        let analysis = analyze("C", "ionien", Notation::English).unwrap();
        assert_eq!(symbols(&analysis.triads), vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
        assert_eq!(
            symbols(&analysis.tetrads),
            vec!["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bm7b5"]
        );
        assert_eq!(analysis.triads[4].degree, 5);
    }

    #[test]
    fn test_harmonic_minor_in_french() {
        let analysis = analyze("La", "mineur harmonique", Notation::French).unwrap();
        assert_eq!(
            symbols(&analysis.triads),
            vec!["Lam", "Sidim", "Doaug", "Rém", "Mi", "Fa", "Sol#dim"]
        );
        assert_eq!(
            symbols(&analysis.tetrads),
            vec!["LamMaj7", "Sim7b5", "Domaj7(#5)", "Rém7", "Mi7", "Famaj7", "Sol#dim7"]
        );
        assert_eq!(analysis.tetrads[0].classification.label_in(Notation::French), "mineur majeur 7");
    }

    #[test]
    fn test_catalogue_modes_have_standard_chords() {
        // Every catalogue mode is a rotation of major, melodic or harmonic minor
        for scale in Scale::ALL {
            let analysis = analyze("D", scale.name(), Notation::English).unwrap();
            assert_eq!(analysis.notes.len(), 7);
            for chord in analysis.triads.iter().chain(analysis.tetrads.iter()) {
                assert!(chord.classification.is_standard(), "{} degree {}", scale, chord.degree);
            }
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            analyze("C", "pentatonic", Notation::English),
            Err(TheoryError::UnknownScale("pentatonic".to_string()))
        );
        assert_eq!(
            analyze("Z", "ionien", Notation::English),
            Err(TheoryError::UnknownNote("Z".to_string()))
        );
    }
}

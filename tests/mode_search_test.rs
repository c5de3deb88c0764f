// Mode search integration tests
//
// Exercises the public search API the way the search window uses it:
// free-text input, either notes or chord symbols, in both notations.

#[cfg(test)]
mod mode_search_tests {
    use mode_explorer_wasm::{search, search_text, Notation, Scale, TheoryError};

    fn contains(matches: &[mode_explorer_wasm::ModeMatch], tonic: &str, scale: Scale) -> bool {
        matches.iter().any(|m| m.tonic.name() == tonic && m.scale == scale)
    }

    #[test]
    fn test_note_search_covers_all_c_modes() {
        let matches = search(&["C"], false, Notation::English).unwrap();

        // Every scale on C contains C
        for scale in Scale::ALL {
            assert!(contains(&matches, "C", scale), "missing C {}", scale);
        }
        assert!(contains(&matches, "D", Scale::Dorian));
        // B# is spelled C, so C# ionian qualifies; C# dorian has B instead
        assert!(contains(&matches, "C#", Scale::Ionian));
        assert!(!contains(&matches, "C#", Scale::Dorian));
    }

    #[test]
    fn test_full_major_scale_finds_its_seven_modes() {
        let matches = search_text("C D E F G A B", false, Notation::English).unwrap();
        let found: Vec<(String, Scale)> = matches
            .iter()
            .map(|m| (m.tonic.to_string(), m.scale))
            .collect();

        assert_eq!(
            found,
            vec![
                ("C".to_string(), Scale::Ionian),
                ("D".to_string(), Scale::Dorian),
                ("E".to_string(), Scale::Phrygian),
                ("F".to_string(), Scale::Lydian),
                ("G".to_string(), Scale::Mixolydian),
                ("A".to_string(), Scale::Aeolian),
                ("B".to_string(), Scale::Locrian),
            ]
        );
    }

    #[test]
    fn test_french_note_search_matches_english() {
        let english = search_text("c eb g", false, Notation::English).unwrap();
        let french = search_text("do mib sol", false, Notation::French).unwrap();

        assert_eq!(english.len(), french.len());
        for (en, fr) in english.iter().zip(french.iter()) {
            assert_eq!(en.tonic.pitch_class(), fr.tonic.pitch_class());
            assert_eq!(en.scale, fr.scale);
        }
    }

    #[test]
    fn test_chord_progression_search() {
        // ii - V - I in C
        let matches = search_text("Dm7 G7 Cmaj7", true, Notation::English).unwrap();
        assert!(contains(&matches, "C", Scale::Ionian));
        assert!(contains(&matches, "A", Scale::Aeolian));
        assert_eq!(matches.len(), 7);
    }

    #[test]
    fn test_altered_chord_narrows_to_minor_modes() {
        let matches = search_text("Am E7", true, Notation::English).unwrap();
        assert!(contains(&matches, "A", Scale::HarmonicMinor));
        assert!(!contains(&matches, "A", Scale::Aeolian));
        assert!(!contains(&matches, "C", Scale::Ionian));
    }

    #[test]
    fn test_no_results() {
        // No catalogue scale has three consecutive semitones
        let matches = search_text("C C# D", false, Notation::English).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_unknown_input_is_reported() {
        assert_eq!(
            search_text("C Z", false, Notation::English),
            Err(TheoryError::UnknownNote("Z".to_string()))
        );
    }
}

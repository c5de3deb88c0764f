//! Plain-text reports for the GUI text panes
//!
//! Labels follow the notation: French notation gets the French interface
//! wording, English notation the English one. Notes are joined with " - ".

use crate::models::{Notation, Note};
use crate::theory::{AnalyzedChord, ModeAnalysis, ModeComparison, ModeMatch};
use crate::utils::{capitalize, split_items};

/// Interface wording for one notation
struct Labels {
    analysis_title: &'static str,
    mode_notes: &'static str,
    triads: &'static str,
    triad: &'static str,
    tetrads: &'static str,
    tetrad: &'static str,
    usual_name: &'static str,
    search_title_notes: &'static str,
    search_title_chords: &'static str,
    matching_modes: &'static str,
    no_match_notes: &'static str,
    no_match_chords: &'static str,
    comparison_title: &'static str,
    and: &'static str,
    common_notes: &'static str,
    different_notes: &'static str,
}

const FRENCH: Labels = Labels {
    analysis_title: "Analyse du mode",
    mode_notes: "Notes du mode",
    triads: "Triades",
    triad: "Triade",
    tetrads: "Tétrades",
    tetrad: "Tétrade",
    usual_name: "nom usuel",
    search_title_notes: "Recherche de modes contenant la série de notes",
    search_title_chords: "Recherche de modes contenant la série d'accords",
    matching_modes: "Modes correspondants",
    no_match_notes: "Aucun mode ne contient la série de notes spécifiée.",
    no_match_chords: "Aucun mode ne contient la série d'accords spécifiée.",
    comparison_title: "Comparaison entre",
    and: "et",
    common_notes: "Notes communes",
    different_notes: "Notes différentes",
};

const ENGLISH: Labels = Labels {
    analysis_title: "Analysis of mode",
    mode_notes: "Mode notes",
    triads: "Triads",
    triad: "Triad",
    tetrads: "Tetrads",
    tetrad: "Tetrad",
    usual_name: "usual name",
    search_title_notes: "Search for modes containing the notes",
    search_title_chords: "Search for modes containing the chords",
    matching_modes: "Matching modes",
    no_match_notes: "No mode contains the given notes.",
    no_match_chords: "No mode contains the given chords.",
    comparison_title: "Comparison between",
    and: "and",
    common_notes: "Common notes",
    different_notes: "Different notes",
};

fn labels(notation: Notation) -> &'static Labels {
    match notation {
        Notation::English => &ENGLISH,
        Notation::French => &FRENCH,
    }
}

/// Join notes with " - "
pub fn join_notes<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    notes
        .into_iter()
        .map(Note::name)
        .collect::<Vec<_>>()
        .join(" - ")
}

fn chord_lines(heading: &str, item: &str, chords: &[AnalyzedChord], notation: Notation, usual_name: &str) -> String {
    let mut out = format!("{}:\n", heading);
    for chord in chords {
        out.push_str(&format!(
            "{} {}: {} ({} {}, {}: {})\n",
            item,
            chord.degree,
            join_notes(&chord.notes),
            chord.notes[0],
            chord.classification.label_in(notation),
            usual_name,
            chord.classification.symbol()
        ));
    }
    out
}

/// Report for a mode analysis: notes, then triads and tetrads with their names
pub fn format_mode_analysis(analysis: &ModeAnalysis) -> String {
    let notation = analysis.notation();
    let labels = labels(notation);

    let mut out = format!("{} {} {}\n", labels.analysis_title, analysis.tonic, analysis.scale);
    out.push_str(&format!("{}: {}\n", labels.mode_notes, join_notes(&analysis.notes)));
    out.push_str(&chord_lines(labels.triads, labels.triad, &analysis.triads, notation, labels.usual_name));
    out.push_str(&chord_lines(labels.tetrads, labels.tetrad, &analysis.tetrads, notation, labels.usual_name));
    out
}

/// Report for a mode search, echoing the (capitalized) input
pub fn format_search_results(input: &str, is_chord: bool, matches: &[ModeMatch], notation: Notation) -> String {
    let labels = labels(notation);

    let title = if is_chord { labels.search_title_chords } else { labels.search_title_notes };
    let echoed: Vec<String> = split_items(input).into_iter().map(capitalize).collect();
    let mut out = format!("{} : {}\n", title, echoed.join(" "));

    if matches.is_empty() {
        let message = if is_chord { labels.no_match_chords } else { labels.no_match_notes };
        out.push_str(message);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("{} :\n", labels.matching_modes));
    for m in matches {
        out.push_str(&format!("• {} {}\n", m.tonic, m.scale));
    }
    out
}

/// Report for a comparison: both modes, common notes, then the differences
pub fn format_comparison(comparison: &ModeComparison) -> String {
    let labels = labels(comparison.mode_a.notation());
    let (a, b) = (&comparison.mode_a, &comparison.mode_b);

    let mut out = format!("{} {} {} {}\n", labels.comparison_title, a, labels.and, b);
    out.push_str(&format!("{}: {}\n", a, join_notes(&comparison.notes_a)));
    out.push_str(&format!("{}: {}\n", b, join_notes(&comparison.notes_b)));
    out.push_str(&format!("{}: {}\n", labels.common_notes, join_notes(&comparison.common)));
    out.push_str(&format!(
        "{}: {}: {} | {}: {}\n",
        labels.different_notes,
        a,
        join_notes(&comparison.only_a),
        b,
        join_notes(&comparison.only_b)
    ));
    out
}

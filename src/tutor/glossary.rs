// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Offline explanation service.
//!
//! Answers from the theory core itself so explanations work without a
//! network. The detail string decides what kind of concept is meant:
//! chord labels like "C Major" are also key names, so the label alone
//! is not enough. Concepts it does not recognize get an empty reply,
//! which the tutor turns into its "couldn't generate" fallback.

use std::future::Future;

use super::{ExplainError, ExplanationRequest, ExplanationService};
use crate::music::{
    all_chord_types, find_chord_type, find_key_signature, note_from_pitch, place_pitch, ChordType,
    Interval, Pitch,
};

/// Built-in glossary answering note, interval, key and chord concepts
#[derive(Debug, Clone, Copy, Default)]
pub struct GlossaryService;

fn consonance(interval: Interval) -> &'static str {
    match interval.semitones() {
        0 | 5 | 7 | 12 => "a perfect consonance, open and stable",
        3 | 4 | 8 | 9 => "an imperfect consonance, sweet and full",
        _ => "a dissonance that pulls toward resolution",
    }
}

/// Chord quality named by a detail like "A Minor chord built on D. ..."
fn chord_from_detail(detail: &str) -> Option<&'static ChordType> {
    let (quality, _) = detail.strip_prefix("A ")?.split_once(" chord built on ")?;
    find_chord_type(quality).ok()
}

/// Pitch named by a detail like "MIDI note 60"
fn pitch_from_detail(detail: &str) -> Option<Pitch> {
    detail.strip_prefix("MIDI note ")?.trim().parse().ok()
}

fn chord_entry(label: &str, chord: &ChordType) -> String {
    format!(
        "{} stacks notes {} semitones above its root.",
        label.trim(),
        chord.interval_list()
    )
}

fn note_entry(pitch: Pitch) -> String {
    let note = note_from_pitch(pitch);
    let placement = place_pitch(pitch);
    let ledgers = match placement.ledger_lines.len() {
        0 => "no ledger lines".to_string(),
        1 => "one ledger line".to_string(),
        n => format!("{} ledger lines", n),
    };
    format!(
        "{} is MIDI note {} in octave {}, sounding at {:.2} Hz. \
         On the treble staff it sits at step {} and needs {}.",
        note, pitch, note.octave, note.frequency, placement.step, ledgers
    )
}

impl GlossaryService {
    /// Look up a concept label, using the detail string to tell kinds apart
    pub fn lookup(&self, concept: &str, detail: &str) -> Option<String> {
        if let Some(chord) = chord_from_detail(detail) {
            return Some(chord_entry(concept, chord));
        }

        if let Some(pitch) = pitch_from_detail(detail) {
            return Some(note_entry(pitch));
        }

        if let Some(interval) = Interval::ALL
            .iter()
            .find(|i| i.name().eq_ignore_ascii_case(concept))
        {
            return Some(format!(
                "A {} spans {} semitones. It is {}.",
                interval.name(),
                interval.semitones(),
                consonance(*interval)
            ));
        }

        if let Ok(key) = find_key_signature(concept) {
            let accidentals = match (key.sharp_count, key.flat_count) {
                (0, 0) => "no sharps or flats".to_string(),
                (1, 0) => "one sharp".to_string(),
                (s, 0) => format!("{} sharps", s),
                (_, 1) => "one flat".to_string(),
                (_, f) => format!("{} flats", f),
            };
            return Some(format!(
                "{} has {} in its signature. Its scale is {}.",
                key.name,
                accidentals,
                key.scale_degrees.join(" ")
            ));
        }

        // Free-form chord labels look like "C# Minor 7th"; match the quality suffix
        let label = concept.trim().to_lowercase();
        let chord = all_chord_types()
            .iter()
            .find(|c| label.ends_with(&c.name.to_lowercase()))?;
        Some(chord_entry(concept, chord))
    }
}

impl ExplanationService for GlossaryService {
    fn explain(
        &self,
        request: &ExplanationRequest<'_>,
    ) -> impl Future<Output = Result<String, ExplainError>> + Send {
        let text = self
            .lookup(request.concept, request.detail)
            .unwrap_or_default();
        async move { Ok(text) }
    }
}

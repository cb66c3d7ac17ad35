// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord catalog and chord-tone builder.

use std::fmt;

use serde::Serialize;

use super::pitch::{NoteName, Pitch};
use super::TheoryError;

/// A chord quality defined by its offsets from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordType {
    /// Quality name, e.g. "Minor 7th"
    pub name: &'static str,
    /// Semitones above the root, starting at 0
    pub intervals_from_root: &'static [i32],
}

impl ChordType {
    pub const MAJOR: ChordType = ChordType {
        name: "Major",
        intervals_from_root: &[0, 4, 7],
    };
    pub const MINOR: ChordType = ChordType {
        name: "Minor",
        intervals_from_root: &[0, 3, 7],
    };
    pub const DIMINISHED: ChordType = ChordType {
        name: "Diminished",
        intervals_from_root: &[0, 3, 6],
    };
    pub const AUGMENTED: ChordType = ChordType {
        name: "Augmented",
        intervals_from_root: &[0, 4, 8],
    };
    pub const MAJOR_SEVENTH: ChordType = ChordType {
        name: "Major 7th",
        intervals_from_root: &[0, 4, 7, 11],
    };
    pub const MINOR_SEVENTH: ChordType = ChordType {
        name: "Minor 7th",
        intervals_from_root: &[0, 3, 7, 10],
    };
    pub const DOMINANT_SEVENTH: ChordType = ChordType {
        name: "Dominant 7th",
        intervals_from_root: &[0, 4, 7, 10],
    };

    /// Offsets as a comma-separated list, e.g. "0, 4, 7"
    pub fn interval_list(&self) -> String {
        self.intervals_from_root
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of chord tones
    pub fn len(&self) -> usize {
        self.intervals_from_root.len()
    }

    /// Always false for catalog entries
    pub fn is_empty(&self) -> bool {
        self.intervals_from_root.is_empty()
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Triads first, then sevenths
pub static CHORD_TYPES: [ChordType; 7] = [
    ChordType::MAJOR,
    ChordType::MINOR,
    ChordType::DIMINISHED,
    ChordType::AUGMENTED,
    ChordType::MAJOR_SEVENTH,
    ChordType::MINOR_SEVENTH,
    ChordType::DOMINANT_SEVENTH,
];

/// The full chord catalog
pub fn all_chord_types() -> &'static [ChordType] {
    &CHORD_TYPES
}

/// Find a chord quality by name, ignoring case and separators
/// ("minor 7th", "dominant_7th", "Dominant-7th")
pub fn find_chord_type(name: &str) -> Result<&'static ChordType, TheoryError> {
    let normalize = |s: &str| s.to_lowercase().replace([' ', '-', '_'], "");
    let wanted = normalize(name);
    CHORD_TYPES
        .iter()
        .find(|c| normalize(c.name) == wanted)
        .ok_or_else(|| TheoryError::UnknownChordType(name.to_string()))
}

/// Pitches of a chord on `root`, in catalog offset order
pub fn build_chord_pitches(root: Pitch, chord_type: &ChordType) -> Vec<Pitch> {
    chord_type
        .intervals_from_root
        .iter()
        .map(|offset| root + offset)
        .collect()
}

/// Display label, e.g. "C# Minor 7th"
pub fn chord_label(root: Pitch, chord_type: &ChordType) -> String {
    let root_name = NoteName::from_pitch_class(root.rem_euclid(12) as u8);
    format!("{} {}", root_name, chord_type.name)
}

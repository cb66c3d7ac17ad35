// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Two-note interval classification.
//!
//! Only raw distances 0-12 have names. Wider or negative distances are
//! reported as "<n> semitones"; nothing is folded into the octave.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::Pitch;

/// Named intervals from unison to octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    PerfectUnison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    PerfectOctave,
}

impl Interval {
    /// All intervals ordered by size
    pub const ALL: [Interval; 13] = [
        Interval::PerfectUnison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::Tritone,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
        Interval::PerfectOctave,
    ];

    /// Classify a distance; `None` outside 0-12
    pub fn from_semitones(semitones: i32) -> Option<Self> {
        usize::try_from(semitones)
            .ok()
            .and_then(|i| Interval::ALL.get(i).copied())
    }

    /// Size in semitones
    pub fn semitones(self) -> i32 {
        self as i32
    }

    /// Canonical name, e.g. "Perfect 5th"
    pub fn name(self) -> &'static str {
        match self {
            Interval::PerfectUnison => "Perfect Unison",
            Interval::MinorSecond => "Minor 2nd",
            Interval::MajorSecond => "Major 2nd",
            Interval::MinorThird => "Minor 3rd",
            Interval::MajorThird => "Major 3rd",
            Interval::PerfectFourth => "Perfect 4th",
            Interval::Tritone => "Tritone",
            Interval::PerfectFifth => "Perfect 5th",
            Interval::MinorSixth => "Minor 6th",
            Interval::MajorSixth => "Major 6th",
            Interval::MinorSeventh => "Minor 7th",
            Interval::MajorSeventh => "Major 7th",
            Interval::PerfectOctave => "Perfect Octave",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name a semitone distance.
///
/// The caller sorts the two pitches first; a negative distance is not
/// made absolute here and falls through to the generic label.
pub fn interval_name(semitones: i32) -> String {
    match Interval::from_semitones(semitones) {
        Some(interval) => interval.name().to_string(),
        None => format!("{} semitones", semitones),
    }
}

/// Up to two selected pitches, kept in ascending order.
///
/// Selecting a third pitch starts over with just that pitch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSelection {
    pitches: Vec<Pitch>,
}

impl IntervalSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a pitch
    pub fn select(&mut self, pitch: Pitch) {
        if self.pitches.len() == 2 {
            self.pitches.clear();
        }
        self.pitches.push(pitch);
        self.pitches.sort_unstable();
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.pitches.clear();
    }

    /// Selected pitches, lowest first
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Whether both notes are chosen
    pub fn is_complete(&self) -> bool {
        self.pitches.len() == 2
    }

    /// Distance from the lower to the upper pitch once both are chosen
    pub fn distance(&self) -> Option<i32> {
        match self.pitches.as_slice() {
            [low, high] => Some(high - low),
            _ => None,
        }
    }

    /// Interval label, or a prompt while the selection is incomplete
    pub fn label(&self) -> String {
        self.distance()
            .map(interval_name)
            .unwrap_or_else(|| "Select 2 notes".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_intervals() {
        assert_eq!(interval_name(0), "Perfect Unison");
        assert_eq!(interval_name(1), "Minor 2nd");
        assert_eq!(interval_name(6), "Tritone");
        assert_eq!(interval_name(7), "Perfect 5th");
        assert_eq!(interval_name(11), "Major 7th");
        assert_eq!(interval_name(12), "Perfect Octave");
    }

    #[test]
    fn test_fallback_label() {
        assert_eq!(interval_name(13), "13 semitones");
        assert_eq!(interval_name(24), "24 semitones");
        assert_eq!(interval_name(-5), "-5 semitones");
    }

    #[test]
    fn test_semitones_match_position() {
        for (i, interval) in Interval::ALL.iter().enumerate() {
            assert_eq!(interval.semitones(), i as i32);
            assert_eq!(Interval::from_semitones(i as i32), Some(*interval));
        }
        assert_eq!(Interval::from_semitones(13), None);
        assert_eq!(Interval::from_semitones(-1), None);
    }

    #[test]
    fn test_selection_sorts() {
        let mut sel = IntervalSelection::new();
        assert_eq!(sel.label(), "Select 2 notes");

        sel.select(67);
        assert_eq!(sel.distance(), None);

        sel.select(60);
        assert_eq!(sel.pitches(), &[60, 67]);
        assert_eq!(sel.distance(), Some(7));
        assert_eq!(sel.label(), "Perfect 5th");
    }

    #[test]
    fn test_selection_restarts_on_third_pitch() {
        let mut sel = IntervalSelection::new();
        sel.select(60);
        sel.select(64);
        sel.select(50);
        assert_eq!(sel.pitches(), &[50]);
        assert!(!sel.is_complete());

        sel.reset();
        assert!(sel.pitches().is_empty());
    }
}

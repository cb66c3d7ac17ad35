// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch model.
//!
//! Converts integer pitch numbers (60 = middle C, one unit per
//! equal-tempered semitone) into named notes with octave and frequency.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TheoryError;

/// Pitch number (60 = C4). Any integer is accepted, including negatives.
pub type Pitch = i32;

/// Concert A reference frequency in Hz
pub const REFERENCE_FREQUENCY: f64 = 440.0;

/// Pitch number of the reference frequency (A4)
pub const REFERENCE_PITCH: Pitch = 69;

/// Pitch number of middle C (C4)
pub const MIDDLE_C: Pitch = 60;

/// Chromatic note names, always spelled with sharps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl NoteName {
    /// All names in chromatic order, C first
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    /// Get the chromatic class (0-11) for this name
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Get the name for a chromatic class; wraps values above 11
    pub fn from_pitch_class(pc: u8) -> Self {
        NoteName::ALL[(pc % 12) as usize]
    }

    /// Sharp spelling, e.g. "C#"
    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        }
    }

    /// True for the five names carrying a sharp (the black piano keys)
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            NoteName::Cs | NoteName::Ds | NoteName::Fs | NoteName::Gs | NoteName::As
        )
    }

    /// Look up a natural letter (case-insensitive) in the sharp table
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pitch viewed as a named note
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Sharp-spelled chromatic name
    pub name: NoteName,
    /// Octave, -1 for pitches 0-11
    pub octave: i32,
    /// The pitch this note was derived from
    pub pitch: Pitch,
    /// Equal-tempered frequency in Hz
    pub frequency: f64,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// Derive the note for a pitch.
///
/// Uses floored division and a non-negative modulo so that pitches
/// below zero land in octave -2 and lower with valid names.
pub fn note_from_pitch(pitch: Pitch) -> Note {
    let octave = pitch.div_euclid(12) - 1;
    let pc = pitch.rem_euclid(12) as u8;
    Note {
        name: NoteName::from_pitch_class(pc),
        octave,
        pitch,
        frequency: frequency_from_pitch(pitch),
    }
}

/// Equal-tempered frequency: `440 * 2^((pitch - 69) / 12)`
pub fn frequency_from_pitch(pitch: Pitch) -> f64 {
    REFERENCE_FREQUENCY * 2f64.powf((pitch - REFERENCE_PITCH) as f64 / 12.0)
}

/// Parse a pitch from user input.
///
/// Accepts a plain number ("61") or a letter with an optional `#`/`b`
/// and a written octave ("C#4", "Bb3", "C-1"). The accidental shifts
/// the natural letter's pitch, so "Cb4" is 59 and "B#3" is 60.
pub fn parse_pitch(input: &str) -> Result<Pitch, TheoryError> {
    let s = input.trim();
    if let Ok(pitch) = s.parse::<Pitch>() {
        return Ok(pitch);
    }

    let mut chars = s.chars();
    let letter = chars
        .next()
        .and_then(NoteName::from_letter)
        .ok_or_else(|| TheoryError::UnknownNote(input.to_string()))?;

    let rest = chars.as_str();
    let (alter, octave_str) = match rest.chars().next() {
        Some('#') => (1, &rest[1..]),
        Some('b') => (-1, &rest[1..]),
        _ => (0, rest),
    };

    let octave: i32 = octave_str
        .parse()
        .map_err(|_| TheoryError::InvalidOctave(input.to_string()))?;

    octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(12))
        .and_then(|base| base.checked_add(letter.pitch_class() as i32 + alter))
        .ok_or_else(|| TheoryError::InvalidOctave(input.to_string()))
}

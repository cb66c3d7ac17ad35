// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Treble staff positions and ledger lines.
//!
//! A staff step counts letters, not semitones: C4 is 0, D4 is 1, ...,
//! B4 is 6, C5 is 7. The five treble lines sit on the even steps 2
//! (E4) through 10 (F5).

use serde::Serialize;

use super::pitch::{note_from_pitch, NoteName, Pitch};

/// Step of the bottom staff line (E4)
pub const BOTTOM_LINE_STEP: i32 = 2;

/// Step of the top staff line (F5)
pub const TOP_LINE_STEP: i32 = 10;

/// Steps per octave
pub const STEPS_PER_OCTAVE: i32 = 7;

fn diatonic_index(letter: NoteName) -> i32 {
    match letter {
        NoteName::C => 0,
        NoteName::D => 1,
        NoteName::E => 2,
        NoteName::F => 3,
        NoteName::G => 4,
        NoteName::A => 5,
        NoteName::B => 6,
        // Only natural letters come out of from_letter
        _ => 0,
    }
}

/// Staff step for a spelled name and octave.
///
/// The accidental is ignored: C#4 sits on the same step as C4. An
/// unrecognized letter is placed at step 0 of its octave.
pub fn staff_step(name: &str, octave: i32) -> i32 {
    let base = name
        .trim()
        .chars()
        .next()
        .and_then(NoteName::from_letter)
        .map(diatonic_index)
        .unwrap_or(0);
    base + (octave - 4) * STEPS_PER_OCTAVE
}

/// Ledger lines needed for a note at `step`, ordered outward from the staff.
///
/// Below the staff every even step from 0 down to the note is drawn,
/// above it every even step from 12 up to the note. A note in a space
/// just outside the staff (D4, G5) needs none.
///
/// One line is returned per two steps of distance from the staff, so
/// callers should pass steps from real pitches (a few octaves around
/// middle C). Extreme steps do not overflow but allocate accordingly.
pub fn ledger_lines(step: i32) -> Vec<i32> {
    if step < BOTTOM_LINE_STEP {
        (step..=BOTTOM_LINE_STEP - 2).rev().step_by(2).collect()
    } else if step > TOP_LINE_STEP {
        (TOP_LINE_STEP + 2..=step).step_by(2).collect()
    } else {
        Vec::new()
    }
}

/// Everything a renderer needs to draw one notehead
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffPlacement {
    /// The pitch being placed
    pub pitch: Pitch,
    /// Diatonic step from middle C
    pub step: i32,
    /// Ledger line steps, outward from the staff
    pub ledger_lines: Vec<i32>,
    /// Accidental glyph drawn before the notehead
    pub accidental: Option<char>,
}

/// Place a pitch on the treble staff using its sharp spelling
pub fn place_pitch(pitch: Pitch) -> StaffPlacement {
    let note = note_from_pitch(pitch);
    let step = staff_step(note.name.as_str(), note.octave);
    StaffPlacement {
        pitch,
        step,
        ledger_lines: ledger_lines(step),
        accidental: note.name.is_sharp().then_some('#'),
    }
}

/// Vertical layout of a five-line staff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaffGeometry {
    /// Y coordinate of the top line
    pub top_line_y: f64,
    /// Distance between adjacent lines
    pub line_spacing: f64,
}

impl Default for StaffGeometry {
    fn default() -> Self {
        Self {
            top_line_y: 60.0,
            line_spacing: 10.0,
        }
    }
}

impl StaffGeometry {
    /// Y coordinate for a step; y grows downward
    pub fn y_for_step(&self, step: i32) -> f64 {
        self.top_line_y + (TOP_LINE_STEP - step) as f64 * (self.line_spacing / 2.0)
    }

    /// Y coordinates of the five staff lines, top first
    pub fn line_ys(&self) -> [f64; 5] {
        [0, 1, 2, 3, 4].map(|i| self.top_line_y + i as f64 * self.line_spacing)
    }
}

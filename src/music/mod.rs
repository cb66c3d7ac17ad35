// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core for tonelens.
//!
//! Pure conversions between pitch numbers, note spellings, intervals,
//! key signatures, chords and staff positions. Nothing in here blocks,
//! allocates global state, or fails on well-typed input except the
//! strict lookups that return [`TheoryError`].

pub mod chord;
pub mod interval;
pub mod key_signature;
pub mod keyboard;
pub mod pitch;
pub mod staff;

pub use chord::{all_chord_types, build_chord_pitches, chord_label, find_chord_type, ChordType};
pub use interval::{interval_name, Interval, IntervalSelection};
pub use key_signature::{
    all_key_signatures, chromatic_class_of_spelled_note, find_key_signature, KeySignature,
};
pub use keyboard::{keyboard, white_key_index, PianoKey};
pub use pitch::{frequency_from_pitch, note_from_pitch, parse_pitch, Note, NoteName, Pitch};
pub use staff::{ledger_lines, place_pitch, staff_step, StaffGeometry, StaffPlacement};

use thiserror::Error;

/// Errors from strict lookups and input parsing.
///
/// The core conversions themselves never fail; these only come from
/// resolving user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Note name could not be parsed
    #[error("unknown note name: {0:?}")]
    UnknownNote(String),

    /// Octave missing or not an integer
    #[error("invalid octave in {0:?}")]
    InvalidOctave(String),

    /// No key signature with this name
    #[error("unknown key signature: {0:?}")]
    UnknownKeySignature(String),

    /// No chord type with this name
    #[error("unknown chord type: {0:?}")]
    UnknownChordType(String),
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Piano keyboard layout.

use serde::Serialize;

use super::pitch::{note_from_pitch, Note, Pitch};

/// One key of a piano range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PianoKey {
    pub pitch: Pitch,
    pub note: Note,
    pub is_black: bool,
}

/// `count` consecutive keys starting at `start`
pub fn keyboard(start: Pitch, count: usize) -> Vec<PianoKey> {
    (start..)
        .take(count)
        .map(|pitch| {
            let note = note_from_pitch(pitch);
            PianoKey {
                pitch,
                note,
                is_black: note.name.is_sharp(),
            }
        })
        .collect()
}

/// White keys in `start..pitch`.
///
/// A black key is drawn on the boundary after this many white keys.
pub fn white_key_index(start: Pitch, pitch: Pitch) -> usize {
    (start..pitch)
        .filter(|&p| !note_from_pitch(p).name.is_sharp())
        .count()
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Major key signature catalog.
//!
//! Thirteen keys around the circle of fifths, sharp side first. Scale
//! degrees keep their written spelling (Bb, E#, Cb); membership tests go
//! through [`chromatic_class_of_spelled_note`].

use std::ops::Range;

use serde::Serialize;

use super::pitch::{NoteName, Pitch};
use super::TheoryError;

/// A major key signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeySignature {
    /// Display name, e.g. "Bb Major"
    pub name: &'static str,
    /// Number of sharps in the signature
    pub sharp_count: u8,
    /// Number of flats in the signature
    pub flat_count: u8,
    /// Spelled scale degrees, tonic first
    pub scale_degrees: [&'static str; 7],
}

/// Circle of fifths: C to F# by sharps, then F to Gb by flats
pub static KEY_SIGNATURES: [KeySignature; 13] = [
    key("C Major", 0, 0, ["C", "D", "E", "F", "G", "A", "B"]),
    key("G Major", 1, 0, ["G", "A", "B", "C", "D", "E", "F#"]),
    key("D Major", 2, 0, ["D", "E", "F#", "G", "A", "B", "C#"]),
    key("A Major", 3, 0, ["A", "B", "C#", "D", "E", "F#", "G#"]),
    key("E Major", 4, 0, ["E", "F#", "G#", "A", "B", "C#", "D#"]),
    key("B Major", 5, 0, ["B", "C#", "D#", "E", "F#", "G#", "A#"]),
    key("F# Major", 6, 0, ["F#", "G#", "A#", "B", "C#", "D#", "E#"]),
    key("F Major", 0, 1, ["F", "G", "A", "Bb", "C", "D", "E"]),
    key("Bb Major", 0, 2, ["Bb", "C", "D", "Eb", "F", "G", "A"]),
    key("Eb Major", 0, 3, ["Eb", "F", "G", "Ab", "Bb", "C", "D"]),
    key("Ab Major", 0, 4, ["Ab", "Bb", "C", "Db", "Eb", "F", "G"]),
    key("Db Major", 0, 5, ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]),
    key("Gb Major", 0, 6, ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "F"]),
];

const fn key(
    name: &'static str,
    sharp_count: u8,
    flat_count: u8,
    scale_degrees: [&'static str; 7],
) -> KeySignature {
    KeySignature {
        name,
        sharp_count,
        flat_count,
        scale_degrees,
    }
}

/// The full catalog in circle-of-fifths order
pub fn all_key_signatures() -> &'static [KeySignature] {
    &KEY_SIGNATURES
}

/// Find a key by name ("Eb Major") or tonic ("eb"), ignoring case
pub fn find_key_signature(name: &str) -> Result<&'static KeySignature, TheoryError> {
    let wanted = name.trim();
    KEY_SIGNATURES
        .iter()
        .find(|k| k.name.eq_ignore_ascii_case(wanted) || k.tonic().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| TheoryError::UnknownKeySignature(name.to_string()))
}

/// Map a spelled note name to its chromatic class (0-11).
///
/// Cb, Fb, E# and B# are resolved directly. Otherwise one trailing `#`
/// or `b` is stripped, the letter is looked up in the sharp table and
/// shifted by one semitone. An unknown letter counts as class 0.
pub fn chromatic_class_of_spelled_note(spelled: &str) -> u8 {
    match spelled {
        "Cb" => return 11,
        "Fb" => return 4,
        "E#" => return 5,
        "B#" => return 0,
        _ => {}
    }

    let (base, alter) = if let Some(base) = spelled.strip_suffix('#') {
        (base, 1)
    } else if let Some(base) = spelled.strip_suffix('b') {
        (base, -1)
    } else {
        (spelled, 0)
    };

    let class = NoteName::ALL
        .iter()
        .position(|n| n.as_str() == base)
        .unwrap_or(0) as i32;

    (class + alter).rem_euclid(12) as u8
}

impl KeySignature {
    /// Spelled tonic, e.g. "F#"
    pub fn tonic(&self) -> &'static str {
        self.scale_degrees[0]
    }

    /// Chromatic classes of the scale, ascending and deduplicated
    pub fn chromatic_classes(&self) -> Vec<u8> {
        let mut classes: Vec<u8> = self
            .scale_degrees
            .iter()
            .map(|n| chromatic_class_of_spelled_note(n))
            .collect();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    /// Check if a pitch (any octave) belongs to this key
    pub fn contains_pitch(&self, pitch: Pitch) -> bool {
        let pc = pitch.rem_euclid(12) as u8;
        self.scale_degrees
            .iter()
            .any(|n| chromatic_class_of_spelled_note(n) == pc)
    }

    /// Every pitch in `range` that belongs to this key, ascending
    pub fn pitches_in_range(&self, range: Range<Pitch>) -> Vec<Pitch> {
        let classes = self.chromatic_classes();
        range
            .filter(|p| classes.contains(&(p.rem_euclid(12) as u8)))
            .collect()
    }

    /// Short accidental summary: "Natural", "2 Sharps", "3 Flats"
    pub fn accidental_label(&self) -> String {
        if self.sharp_count > 0 {
            format!("{} Sharps", self.sharp_count)
        } else if self.flat_count > 0 {
            format!("{} Flats", self.flat_count)
        } else {
            "Natural".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = all_key_signatures().iter().map(|k| k.name).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "C Major");
        assert_eq!(names[6], "F# Major");
        assert_eq!(names[7], "F Major");
        assert_eq!(names[12], "Gb Major");
        assert_eq!(all_key_signatures(), all_key_signatures());
    }

    #[test]
    fn test_accidental_counts_match_spellings() {
        for key in all_key_signatures() {
            let sharps = key.scale_degrees.iter().filter(|n| n.ends_with('#')).count();
            let flats = key.scale_degrees.iter().filter(|n| n.ends_with('b')).count();
            assert_eq!(sharps, key.sharp_count as usize, "{}", key.name);
            assert_eq!(flats, key.flat_count as usize, "{}", key.name);
            assert!(key.sharp_count == 0 || key.flat_count == 0, "{}", key.name);
        }
    }

    #[test]
    fn test_spelled_classes() {
        assert_eq!(chromatic_class_of_spelled_note("C"), 0);
        assert_eq!(chromatic_class_of_spelled_note("F#"), 6);
        assert_eq!(chromatic_class_of_spelled_note("Bb"), 10);
        assert_eq!(chromatic_class_of_spelled_note("Db"), 1);
        assert_eq!(chromatic_class_of_spelled_note("B"), 11);
    }

    #[test]
    fn test_enharmonic_edge_spellings() {
        assert_eq!(chromatic_class_of_spelled_note("Cb"), 11);
        assert_eq!(chromatic_class_of_spelled_note("Fb"), 4);
        assert_eq!(chromatic_class_of_spelled_note("E#"), 5);
        assert_eq!(chromatic_class_of_spelled_note("B#"), 0);
    }

    #[test]
    fn test_unknown_letter_defaults_to_c() {
        assert_eq!(chromatic_class_of_spelled_note("H"), 0);
        assert_eq!(chromatic_class_of_spelled_note(""), 0);
        // Unknown letter, then the accidental still applies
        assert_eq!(chromatic_class_of_spelled_note("X#"), 1);
    }

    #[test]
    fn test_every_key_has_seven_classes() {
        for key in all_key_signatures() {
            assert_eq!(key.chromatic_classes().len(), 7, "{}", key.name);
        }
    }

    #[test]
    fn test_g_major_membership() {
        let g = find_key_signature("G Major").unwrap();
        assert!(g.contains_pitch(66)); // F#4
        assert!(!g.contains_pitch(65)); // F4
        assert!(g.contains_pitch(-5)); // G, far below the piano
    }

    #[test]
    fn test_gb_major_uses_cb_as_b() {
        let gb = find_key_signature("Gb Major").unwrap();
        assert_eq!(gb.chromatic_classes(), vec![1, 3, 5, 6, 8, 10, 11]);
        assert!(gb.contains_pitch(71)); // B4 sounds the Cb
    }

    #[test]
    fn test_pitches_in_range() {
        let c = find_key_signature("C Major").unwrap();
        assert_eq!(c.pitches_in_range(60..73), vec![60, 62, 64, 65, 67, 69, 71, 72]);

        let d = find_key_signature("D").unwrap();
        assert_eq!(d.pitches_in_range(48..72).len(), 14);
    }

    #[test]
    fn test_accidental_label() {
        assert_eq!(KEY_SIGNATURES[0].accidental_label(), "Natural");
        assert_eq!(KEY_SIGNATURES[2].accidental_label(), "2 Sharps");
        assert_eq!(KEY_SIGNATURES[9].accidental_label(), "3 Flats");
    }

    #[test]
    fn test_find_key_signature() {
        assert_eq!(find_key_signature("eb major").unwrap().name, "Eb Major");
        assert_eq!(find_key_signature("F#").unwrap().sharp_count, 6);
        assert_eq!(
            find_key_signature("H Major"),
            Err(TheoryError::UnknownKeySignature("H Major".to_string()))
        );
    }
}

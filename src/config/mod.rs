// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for tonelens.
//!
//! Every field has a default, so an empty file (or no file at all)
//! gives the stock two-octave piano, middle-C chord roots and the
//! standard playback envelope. Files may be YAML or TOML.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Piano keyboard range
    #[serde(default)]
    pub piano: PianoConfig,
    /// Key signature view ranges
    #[serde(default)]
    pub keys: KeysViewConfig,
    /// Chord builder settings
    #[serde(default)]
    pub chords: ChordsViewConfig,
    /// Playback settings
    #[serde(default)]
    pub audio: AudioConfig,
    /// Explanation service settings
    #[serde(default)]
    pub tutor: TutorConfig,
}

impl AppConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };
        config.validate()?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml treats an empty document as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Reject settings that would render nothing or invert a range
    pub fn validate(&self) -> Result<()> {
        ensure!(self.piano.keys > 0, "piano.keys must be at least 1");
        ensure!(
            self.keys.range_start < self.keys.range_end,
            "keys.range_start ({}) must be below keys.range_end ({})",
            self.keys.range_start,
            self.keys.range_end
        );
        ensure!(
            self.keys.staff_low <= self.keys.staff_high,
            "keys.staff_low ({}) must not exceed keys.staff_high ({})",
            self.keys.staff_low,
            self.keys.staff_high
        );
        ensure!(self.audio.sample_rate > 0, "audio.sample_rate must be positive");
        ensure!(
            self.audio.note_duration > 0.0 && self.audio.chord_duration > 0.0,
            "audio durations must be positive"
        );
        ensure!(self.audio.interval_gap >= 0.0, "audio.interval_gap must not be negative");
        ensure!(self.tutor.timeout_secs > 0, "tutor.timeout_secs must be positive");
        Ok(())
    }
}

/// Piano keyboard range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PianoConfig {
    /// Lowest key (default C3)
    #[serde(default = "default_piano_start")]
    pub start: i32,
    /// Number of keys
    #[serde(default = "default_piano_keys")]
    pub keys: usize,
}

fn default_piano_start() -> i32 {
    48
}
fn default_piano_keys() -> usize {
    25
}

impl Default for PianoConfig {
    fn default() -> Self {
        Self {
            start: default_piano_start(),
            keys: default_piano_keys(),
        }
    }
}

/// Ranges used when showing a key signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeysViewConfig {
    /// First pitch of the highlighted range
    #[serde(default = "default_range_start")]
    pub range_start: i32,
    /// End of the highlighted range (exclusive)
    #[serde(default = "default_range_end")]
    pub range_end: i32,
    /// Lowest pitch drawn on the staff
    #[serde(default = "default_staff_low")]
    pub staff_low: i32,
    /// Highest pitch drawn on the staff (inclusive)
    #[serde(default = "default_staff_high")]
    pub staff_high: i32,
}

fn default_range_start() -> i32 {
    48
}
fn default_range_end() -> i32 {
    72
}
fn default_staff_low() -> i32 {
    60
}
fn default_staff_high() -> i32 {
    72
}

impl Default for KeysViewConfig {
    fn default() -> Self {
        Self {
            range_start: default_range_start(),
            range_end: default_range_end(),
            staff_low: default_staff_low(),
            staff_high: default_staff_high(),
        }
    }
}

/// Chord builder settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChordsViewConfig {
    /// Pitch of C in the octave chord roots are built in
    #[serde(default = "default_root_base")]
    pub root_base: i32,
}

fn default_root_base() -> i32 {
    60
}

impl Default for ChordsViewConfig {
    fn default() -> Self {
        Self {
            root_base: default_root_base(),
        }
    }
}

/// Playback settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Output sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Length of a single note in seconds
    #[serde(default = "default_note_duration")]
    pub note_duration: f64,
    /// Length of a chord in seconds
    #[serde(default = "default_chord_duration")]
    pub chord_duration: f64,
    /// Delay between the two notes of an interval in seconds
    #[serde(default = "default_interval_gap")]
    pub interval_gap: f64,
}

fn default_sample_rate() -> u32 {
    44100
}
fn default_note_duration() -> f64 {
    0.5
}
fn default_chord_duration() -> f64 {
    1.0
}
fn default_interval_gap() -> f64 {
    0.5
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            note_duration: default_note_duration(),
            chord_duration: default_chord_duration(),
            interval_gap: default_interval_gap(),
        }
    }
}

/// Explanation service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TutorConfig {
    /// Model identifier passed to the service
    #[serde(default = "default_model")]
    pub model: String,
    /// Give up on a request after this many seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Word limit requested in the prompt
    #[serde(default = "default_max_words")]
    pub max_words: u32,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_max_words() -> u32 {
    80
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_words: default_max_words(),
        }
    }
}

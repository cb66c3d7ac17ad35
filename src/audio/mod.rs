// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Audio feedback for tonelens.
//!
//! This module provides:
//! - Oscillator tone rendering with a decaying envelope
//! - Sinks that receive the rendered samples (WAV file, discard)
//! - An engine that turns pitches into note, interval and chord playback

pub mod sink;
pub mod tone;

pub use sink::{AudioSink, NullSink, WavSink};
pub use tone::{render_chord, render_sequence, render_tone, ToneRequest, Waveform};

use thiserror::Error;
use tracing::debug;

use crate::config::AudioConfig;
use crate::music::{frequency_from_pitch, Pitch};

/// Audio error types
#[derive(Debug, Error)]
pub enum AudioError {
    /// Frequency not positive and finite
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency { freq: f64 },

    /// Duration not positive and finite
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration { duration: f64 },

    /// Zero sample rate
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate { rate: u32 },

    /// WAV encoding or file I/O failed
    #[error("WAV output failed: {0}")]
    Wav(#[from] hound::Error),
}

/// Audio engine rendering pitches into a sink
pub struct AudioEngine<S: AudioSink> {
    sink: S,
    config: AudioConfig,
}

impl<S: AudioSink> AudioEngine<S> {
    /// Create a new audio engine
    pub fn new(sink: S, config: AudioConfig) -> Self {
        Self { sink, config }
    }

    /// Get the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the engine, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Get sample rate
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    /// Play a single sine tone, as when a piano key is clicked
    pub fn play_note(&mut self, pitch: Pitch) -> Result<(), AudioError> {
        let tone = ToneRequest::new(frequency_from_pitch(pitch), self.config.note_duration);
        let samples = render_tone(&tone, self.config.sample_rate)?;
        debug!(pitch, frequency = tone.frequency, "play note");
        self.sink.play(&samples, self.config.sample_rate)
    }

    /// Play pitches one after another, separated by the interval gap
    pub fn play_interval(&mut self, pitches: &[Pitch]) -> Result<(), AudioError> {
        if pitches.is_empty() {
            return Ok(());
        }
        let tones: Vec<ToneRequest> = pitches
            .iter()
            .map(|&p| ToneRequest::new(frequency_from_pitch(p), self.config.note_duration))
            .collect();
        let samples = render_sequence(&tones, self.config.interval_gap, self.config.sample_rate)?;
        debug!(?pitches, "play interval");
        self.sink.play(&samples, self.config.sample_rate)
    }

    /// Play all pitches together as triangle tones
    pub fn play_chord(&mut self, pitches: &[Pitch]) -> Result<(), AudioError> {
        if pitches.is_empty() {
            return Ok(());
        }
        let frequencies: Vec<f64> = pitches.iter().map(|&p| frequency_from_pitch(p)).collect();
        let samples = render_chord(
            &frequencies,
            self.config.chord_duration,
            self.config.sample_rate,
        )?;
        debug!(?pitches, "play chord");
        self.sink.play(&samples, self.config.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AudioEngine<NullSink> {
        AudioEngine::new(NullSink::new(), AudioConfig::default())
    }

    #[test]
    fn test_audio_engine_creation() {
        let engine = engine();
        assert_eq!(engine.sample_rate(), 44100);
        assert_eq!(engine.sink().blocks(), 0);
    }

    #[test]
    fn test_play_note() {
        let mut engine = engine();
        engine.play_note(69).unwrap();
        assert_eq!(engine.sink().blocks(), 1);
        assert_eq!(engine.sink().samples(), 22050);
    }

    #[test]
    fn test_play_interval_spans_both_notes() {
        let mut engine = engine();
        engine.play_interval(&[60, 67]).unwrap();
        // Second note starts 0.5s in and lasts 0.5s
        assert_eq!(engine.into_sink().samples(), 44100);
    }

    #[test]
    fn test_play_chord() {
        let mut engine = engine();
        engine.play_chord(&[60, 64, 67]).unwrap();
        assert_eq!(engine.sink().samples(), 44100);
    }

    #[test]
    fn test_empty_selection_is_silent() {
        let mut engine = engine();
        engine.play_interval(&[]).unwrap();
        engine.play_chord(&[]).unwrap();
        assert_eq!(engine.sink().blocks(), 0);
    }

    #[test]
    fn test_bad_config_surfaces_error() {
        let config = AudioConfig {
            sample_rate: 0,
            ..AudioConfig::default()
        };
        let mut engine = AudioEngine::new(NullSink::new(), config);
        assert!(matches!(
            engine.play_note(60),
            Err(AudioError::InvalidSampleRate { rate: 0 })
        ));
    }
}

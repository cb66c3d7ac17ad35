// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Oscillator tone rendering.
//!
//! Each tone starts at gain 0.3 and decays exponentially to 0.01 over
//! its duration, the same envelope used for piano clicks, interval
//! playback and chords.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::AudioError;

/// Gain at the start of every tone
pub const START_GAIN: f64 = 0.3;

/// Gain reached at the end of every tone
pub const END_GAIN: f64 = 0.01;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Sample the waveform at a phase in [0, 1)
    fn sample(self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
            Waveform::Triangle => 4.0 * (phase - (phase + 0.5).floor()).abs() - 1.0,
        }
    }
}

/// A single tone to render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneRequest {
    /// Frequency in Hz
    pub frequency: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Oscillator shape
    #[serde(default)]
    pub waveform: Waveform,
}

impl ToneRequest {
    /// Sine tone
    pub fn new(frequency: f64, duration: f64) -> Self {
        Self {
            frequency,
            duration,
            waveform: Waveform::Sine,
        }
    }

    /// Replace the waveform
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    fn validate(&self) -> Result<(), AudioError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(AudioError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: self.duration,
            });
        }
        Ok(())
    }
}

fn check_sample_rate(sample_rate: u32) -> Result<(), AudioError> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(())
}

fn sample_count(seconds: f64, sample_rate: u32) -> usize {
    (seconds * sample_rate as f64).round() as usize
}

/// Render one tone as mono samples
pub fn render_tone(tone: &ToneRequest, sample_rate: u32) -> Result<Vec<f32>, AudioError> {
    tone.validate()?;
    check_sample_rate(sample_rate)?;

    let rate = sample_rate as f64;
    let decay = END_GAIN / START_GAIN;
    let num_samples = sample_count(tone.duration, sample_rate);

    let samples = (0..num_samples)
        .map(|i| {
            let t = i as f64 / rate;
            let phase = (tone.frequency * t).fract();
            let gain = START_GAIN * decay.powf(t / tone.duration);
            (tone.waveform.sample(phase) * gain) as f32
        })
        .collect();

    Ok(samples)
}

fn mix_into(buffer: &mut Vec<f32>, samples: &[f32], offset: usize) {
    let end = offset + samples.len();
    if buffer.len() < end {
        buffer.resize(end, 0.0);
    }
    for (out, s) in buffer[offset..end].iter_mut().zip(samples) {
        *out += s;
    }
}

/// Render all frequencies at once as triangle tones
pub fn render_chord(
    frequencies: &[f64],
    duration: f64,
    sample_rate: u32,
) -> Result<Vec<f32>, AudioError> {
    let mut buffer = Vec::new();
    for &frequency in frequencies {
        let tone = ToneRequest::new(frequency, duration).with_waveform(Waveform::Triangle);
        mix_into(&mut buffer, &render_tone(&tone, sample_rate)?, 0);
    }
    Ok(buffer)
}

/// Render tones one after another, each starting `gap` seconds after the last
pub fn render_sequence(
    tones: &[ToneRequest],
    gap: f64,
    sample_rate: u32,
) -> Result<Vec<f32>, AudioError> {
    if !gap.is_finite() || gap < 0.0 {
        return Err(AudioError::InvalidDuration { duration: gap });
    }

    let mut buffer = Vec::new();
    for (i, tone) in tones.iter().enumerate() {
        let offset = sample_count(gap * i as f64, sample_rate);
        mix_into(&mut buffer, &render_tone(tone, sample_rate)?, offset);
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length() {
        let samples = render_tone(&ToneRequest::new(440.0, 0.5), 44100).unwrap();
        assert_eq!(samples.len(), 22050);
    }

    #[test]
    fn test_envelope_decays() {
        let tone = ToneRequest::new(440.0, 1.0).with_waveform(Waveform::Square);
        let samples = render_tone(&tone, 8000).unwrap();
        assert!((samples[0].abs() - 0.3).abs() < 1e-6);
        let last = samples[samples.len() - 1].abs();
        assert!(last < 0.011 && last > 0.009, "last sample {}", last);
    }

    #[test]
    fn test_invalid_tones() {
        assert!(matches!(
            render_tone(&ToneRequest::new(0.0, 1.0), 44100),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            render_tone(&ToneRequest::new(440.0, -1.0), 44100),
            Err(AudioError::InvalidDuration { .. })
        ));
        assert!(matches!(
            render_tone(&ToneRequest::new(440.0, 1.0), 0),
            Err(AudioError::InvalidSampleRate { rate: 0 })
        ));
    }

    #[test]
    fn test_chord_mixes_in_place() {
        let single = render_chord(&[220.0], 0.25, 8000).unwrap();
        let triad = render_chord(&[261.63, 329.63, 392.0], 0.25, 8000).unwrap();
        assert_eq!(single.len(), triad.len());
        assert!(render_chord(&[], 0.25, 8000).unwrap().is_empty());
    }

    #[test]
    fn test_sequence_offsets() {
        let tones = [ToneRequest::new(261.63, 0.5), ToneRequest::new(392.0, 0.5)];
        let samples = render_sequence(&tones, 0.5, 1000).unwrap();
        assert_eq!(samples.len(), 1000);
        assert!(render_sequence(&tones, -0.1, 1000).is_err());
    }

    #[test]
    fn test_waveform_shapes() {
        assert_eq!(Waveform::Sawtooth.sample(0.0), -1.0);
        assert_eq!(Waveform::Triangle.sample(0.5), 1.0);
        assert_eq!(Waveform::Triangle.sample(0.0), -1.0);
        assert_eq!(Waveform::Square.sample(0.75), -1.0);
    }
}

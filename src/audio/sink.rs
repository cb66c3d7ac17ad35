// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Destinations for rendered audio.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::AudioError;

/// Something that accepts rendered mono samples.
///
/// Callers treat playback as fire-and-forget; a sink reports failure
/// only for errors the caller can act on (bad path, disk full).
pub trait AudioSink {
    /// Hand over a block of samples in [-1.0, 1.0]
    fn play(&mut self, samples: &[f32], sample_rate: u32) -> Result<(), AudioError>;
}

/// Writes each block to a 16-bit mono WAV file, replacing the previous one
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
}

impl WavSink {
    /// Create a sink targeting `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Output path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AudioSink for WavSink {
    fn play(&mut self, samples: &[f32], sample_rate: u32) -> Result<(), AudioError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(&self.path, spec)?;
        for &s in samples {
            let clamped = s.clamp(-1.0, 1.0);
            writer.write_sample((clamped * i16::MAX as f32) as i16)?;
        }
        writer.finalize()?;

        debug!(
            path = %self.path.display(),
            samples = samples.len(),
            sample_rate,
            "wrote WAV"
        );
        Ok(())
    }
}

/// Discards audio, counting what it was given
#[derive(Debug, Clone, Default)]
pub struct NullSink {
    blocks: usize,
    samples: usize,
}

impl NullSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `play` calls so far
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Total samples received
    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl AudioSink for NullSink {
    fn play(&mut self, samples: &[f32], _sample_rate: u32) -> Result<(), AudioError> {
        self.blocks += 1;
        self.samples += samples.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_counts() {
        let mut sink = NullSink::new();
        sink.play(&[0.0; 10], 44100).unwrap();
        sink.play(&[0.5; 5], 44100).unwrap();
        assert_eq!(sink.blocks(), 2);
        assert_eq!(sink.samples(), 15);
    }

    #[test]
    fn test_wav_sink_writes_clamped_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let mut sink = WavSink::new(&path);
        sink.play(&[0.0, 0.5, 2.0, -2.0], 8000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.spec().channels, 1);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 16383, i16::MAX, -i16::MAX]);
    }

    #[test]
    fn test_wav_sink_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = WavSink::new(dir.path().join("missing").join("tone.wav"));
        assert!(matches!(
            sink.play(&[0.0], 8000),
            Err(AudioError::Wav(_))
        ));
    }
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Natural-language explanations of theory concepts.
//!
//! The [`Tutor`] builds a prompt from a concept label and a detail
//! string, awaits an [`ExplanationService`] under a timeout, and always
//! returns readable text: service failures become an apology, never an
//! error.

pub mod glossary;

pub use glossary::GlossaryService;

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::TutorConfig;
use crate::music::{chord_label, note_from_pitch, ChordType, KeySignature, NoteName, Pitch};

/// Shown when the service answers with no text
pub const EMPTY_FALLBACK: &str = "I couldn't generate an explanation right now.";

/// Shown when the service fails or times out
pub const CONNECTION_FALLBACK: &str =
    "Sorry, I'm having trouble connecting to the AI tutor right now.";

/// Errors an explanation service may report
#[derive(Debug, Error)]
pub enum ExplainError {
    /// The service could not be reached or refused the request
    #[error("explanation service unavailable: {0}")]
    Unavailable(String),
}

/// One request to an explanation service
#[derive(Debug, Clone, Copy)]
pub struct ExplanationRequest<'a> {
    /// Model identifier from configuration
    pub model: &'a str,
    /// Full prompt text
    pub prompt: &'a str,
    /// Concept label the prompt was built from
    pub concept: &'a str,
    /// Detail string the prompt was built from
    pub detail: &'a str,
}

/// A text-generation backend
pub trait ExplanationService {
    /// Produce an explanation for the request
    fn explain(
        &self,
        request: &ExplanationRequest<'_>,
    ) -> impl Future<Output = Result<String, ExplainError>> + Send;
}

/// Detail string for an interval between two sorted pitches
pub fn interval_detail(low: Pitch, high: Pitch) -> String {
    format!(
        "An interval of {} semitones between MIDI notes {} and {}",
        high - low,
        low,
        high
    )
}

/// Detail string for a single pitch
pub fn note_detail(pitch: Pitch) -> String {
    format!("MIDI note {}", pitch)
}

/// Detail string for a key signature
pub fn key_detail(key: &KeySignature) -> String {
    format!(
        "The key signature with {} sharps and {} flats.",
        key.sharp_count, key.flat_count
    )
}

/// Detail string for a chord built on `root`
pub fn chord_detail(root: Pitch, chord_type: &ChordType) -> String {
    let root_name = NoteName::from_pitch_class(root.rem_euclid(12) as u8);
    format!(
        "A {} chord built on {}. Intervals: {}",
        chord_type.name,
        root_name,
        chord_type.interval_list()
    )
}

/// Prompt-building front end over an explanation service
pub struct Tutor<S> {
    service: S,
    config: TutorConfig,
}

impl<S: ExplanationService> Tutor<S> {
    /// Create a tutor over `service`
    pub fn new(service: S, config: TutorConfig) -> Self {
        Self { service, config }
    }

    /// Get the service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Build the prompt sent for a concept
    pub fn prompt(&self, concept: &str, detail: &str) -> String {
        format!(
            "You are an expert music theory tutor.\n\
             Briefly explain the concept of \"{}\" in the context of \"{}\".\n\
             Keep the explanation concise (under {} words), engaging, and easy to understand for a beginner.\n\
             Do not use markdown formatting like bold or headers, just plain text or simple paragraphs.",
            concept, detail, self.config.max_words
        )
    }

    /// Explain a concept, falling back to an apology on any failure
    pub async fn explain(&self, concept: &str, detail: &str) -> String {
        let prompt = self.prompt(concept, detail);
        let request = ExplanationRequest {
            model: &self.config.model,
            prompt: &prompt,
            concept,
            detail,
        };
        let limit = Duration::from_secs(self.config.timeout_secs);

        debug!(concept, model = %self.config.model, "requesting explanation");

        match tokio::time::timeout(limit, self.service.explain(&request)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) => {
                warn!(concept, "explanation service returned no text");
                EMPTY_FALLBACK.to_string()
            }
            Ok(Err(err)) => {
                error!(concept, %err, "explanation service error");
                CONNECTION_FALLBACK.to_string()
            }
            Err(_) => {
                error!(
                    concept,
                    timeout_secs = self.config.timeout_secs,
                    "explanation request timed out"
                );
                CONNECTION_FALLBACK.to_string()
            }
        }
    }

    /// Explain a single note
    pub async fn explain_note(&self, pitch: Pitch) -> String {
        let concept = note_from_pitch(pitch).to_string();
        self.explain(&concept, &note_detail(pitch)).await
    }

    /// Explain the interval between two pitches; they are sorted first
    pub async fn explain_interval(&self, a: Pitch, b: Pitch) -> String {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let concept = crate::music::interval_name(high - low);
        self.explain(&concept, &interval_detail(low, high)).await
    }

    /// Explain a key signature
    pub async fn explain_key(&self, key: &KeySignature) -> String {
        self.explain(key.name, &key_detail(key)).await
    }

    /// Explain a chord on `root`
    pub async fn explain_chord(&self, root: Pitch, chord_type: &ChordType) -> String {
        let concept = chord_label(root, chord_type);
        self.explain(&concept, &chord_detail(root, chord_type)).await
    }
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! tonelens: music theory for visualizers.
//!
//! The [`music`] module is the pure theory core: pitches and notes,
//! interval names, the key signature and chord catalogs, staff steps
//! and ledger lines. Around it sit the collaborators a front end needs:
//! [`audio`] renders tones, [`tutor`] asks an explanation service about
//! a concept, and [`config`] loads the settings both use.

pub mod audio;
pub mod config;
pub mod music;
pub mod tutor;

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use tonelens::audio::{AudioEngine, WavSink};
use tonelens::config::AppConfig;
use tonelens::music::{
    all_chord_types, all_key_signatures, build_chord_pitches, chord_label,
    chromatic_class_of_spelled_note, find_chord_type, find_key_signature, keyboard,
    note_from_pitch, parse_pitch, place_pitch, IntervalSelection, KeySignature, NoteName, Pitch,
    TheoryError,
};
use tonelens::tutor::{GlossaryService, Tutor};

#[derive(Parser)]
#[command(name = "tonelens", about = "Music theory visualizer")]
#[command(version)]
struct Cli {
    /// Configuration file (YAML or TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show name, octave, frequency and staff position of a pitch
    Note {
        /// Pitch number (60) or name with octave (C#4)
        pitch: String,
    },

    /// Name the interval between two pitches
    Interval { a: String, b: String },

    /// List the key signature catalog
    Keys,

    /// Show a key signature's scale on the piano and staff
    Key {
        /// Key name ("Bb Major") or tonic ("Bb")
        name: String,
    },

    /// List the chord catalog
    Chords,

    /// Build a chord on a root
    Chord {
        /// Root name (E, Eb) or full pitch (E3, 52)
        root: String,
        /// Chord quality ("minor 7th")
        quality: String,
    },

    /// Ask the tutor to explain a concept
    Explain {
        #[command(subcommand)]
        topic: Topic,
    },

    /// Render audio to a WAV file
    Render {
        /// Output WAV path
        output: PathBuf,
        #[command(subcommand)]
        topic: Topic,
    },
}

#[derive(Subcommand)]
enum Topic {
    /// A single note
    Note { pitch: String },
    /// Two notes
    Interval { a: String, b: String },
    /// A key signature
    Key { name: String },
    /// A chord on a root
    Chord { root: String, quality: String },
}

/// Resolve a chord root: a full pitch, or a bare name placed in the root octave
fn parse_root(input: &str, root_base: Pitch) -> Result<Pitch, TheoryError> {
    if let Ok(pitch) = parse_pitch(input) {
        return Ok(pitch);
    }

    let mut chars = input.trim().chars();
    let letter = chars
        .next()
        .and_then(NoteName::from_letter)
        .ok_or_else(|| TheoryError::UnknownNote(input.to_string()))?;
    let accidental = chars.as_str();
    if !matches!(accidental, "" | "#" | "b") {
        return Err(TheoryError::UnknownNote(input.to_string()));
    }

    let spelled = format!("{}{}", letter, accidental);
    Ok(root_base + chromatic_class_of_spelled_note(&spelled) as Pitch)
}

fn sorted_pair(a: &str, b: &str) -> Result<IntervalSelection> {
    let mut selection = IntervalSelection::new();
    selection.select(parse_pitch(a)?);
    selection.select(parse_pitch(b)?);
    Ok(selection)
}

fn format_piano(config: &AppConfig, active: &[Pitch]) -> String {
    keyboard(config.piano.start, config.piano.keys)
        .iter()
        .map(|key| {
            if active.contains(&key.pitch) {
                key.note.to_string()
            } else if key.is_black {
                ":".to_string()
            } else {
                ".".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_staff(pitches: &[Pitch]) {
    for &pitch in pitches {
        let placement = place_pitch(pitch);
        let accidental = placement.accidental.map(String::from).unwrap_or_default();
        println!(
            "  {:<4} step {:>3}{}  ledger lines: {:?}",
            note_from_pitch(pitch).to_string(),
            placement.step,
            if accidental.is_empty() {
                String::new()
            } else {
                format!(" ({})", accidental)
            },
            placement.ledger_lines
        );
    }
}

/// One octave of the key, tonic to tonic, starting at the first tonic at or above `low`
fn scale_from_tonic(key: &KeySignature, low: Pitch) -> Vec<Pitch> {
    let tonic = chromatic_class_of_spelled_note(key.tonic()) as Pitch;
    let start = low + (tonic - low).rem_euclid(12);
    key.pitches_in_range(start..start + 13)
}

fn show_note(input: &str) -> Result<()> {
    let pitch = parse_pitch(input)?;
    let note = note_from_pitch(pitch);
    println!("{} (pitch {})", note, note.pitch);
    println!("Frequency: {:.2} Hz", note.frequency);
    print_staff(&[pitch]);
    Ok(())
}

fn show_interval(a: &str, b: &str) -> Result<()> {
    let selection = sorted_pair(a, b)?;
    let pitches = selection.pitches();
    println!(
        "{} -> {}: {}",
        note_from_pitch(pitches[0]),
        note_from_pitch(pitches[1]),
        selection.label()
    );
    if let Some(distance) = selection.distance() {
        println!("({} semitones)", distance);
    }
    print_staff(pitches);
    Ok(())
}

fn show_key(config: &AppConfig, key: &KeySignature) {
    let active = key.pitches_in_range(config.keys.range_start..config.keys.range_end);
    let staff: Vec<Pitch> = active
        .iter()
        .copied()
        .filter(|p| (config.keys.staff_low..=config.keys.staff_high).contains(p))
        .collect();

    println!("{}", key.name);
    println!("Accidentals: {}", key.accidental_label());
    println!("Scale: {}", key.scale_degrees.join(" "));
    println!("Piano: {}", format_piano(config, &active));
    println!("Staff:");
    print_staff(&staff);
}

fn show_chord(config: &AppConfig, root: &str, quality: &str) -> Result<()> {
    let root = parse_root(root, config.chords.root_base)?;
    let chord_type = find_chord_type(quality)?;
    let pitches = build_chord_pitches(root, chord_type);
    let names: Vec<String> = pitches.iter().map(|&p| note_from_pitch(p).to_string()).collect();

    println!("{}", chord_label(root, chord_type));
    println!("Intervals: {}", chord_type.interval_list());
    println!("Notes: {}", names.join(" "));
    println!("Piano: {}", format_piano(config, &pitches));
    println!("Staff:");
    print_staff(&pitches);
    Ok(())
}

fn explain(config: &AppConfig, topic: &Topic) -> Result<()> {
    let tutor = Tutor::new(GlossaryService, config.tutor.clone());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let text = match topic {
        Topic::Note { pitch } => runtime.block_on(tutor.explain_note(parse_pitch(pitch)?)),
        Topic::Interval { a, b } => {
            let (a, b) = (parse_pitch(a)?, parse_pitch(b)?);
            runtime.block_on(tutor.explain_interval(a, b))
        }
        Topic::Key { name } => {
            let key = find_key_signature(name)?;
            runtime.block_on(tutor.explain_key(key))
        }
        Topic::Chord { root, quality } => {
            let root = parse_root(root, config.chords.root_base)?;
            let chord_type = find_chord_type(quality)?;
            runtime.block_on(tutor.explain_chord(root, chord_type))
        }
    };

    println!("{}", text);
    Ok(())
}

fn render(config: &AppConfig, output: &Path, topic: &Topic) -> Result<()> {
    let mut engine = AudioEngine::new(WavSink::new(output), config.audio.clone());

    match topic {
        Topic::Note { pitch } => engine.play_note(parse_pitch(pitch)?)?,
        Topic::Interval { a, b } => {
            let selection = sorted_pair(a, b)?;
            engine.play_interval(selection.pitches())?
        }
        Topic::Key { name } => {
            let key = find_key_signature(name)?;
            engine.play_interval(&scale_from_tonic(key, config.keys.staff_low))?
        }
        Topic::Chord { root, quality } => {
            let root = parse_root(root, config.chords.root_base)?;
            let chord_type = find_chord_type(quality)?;
            engine.play_chord(&build_chord_pitches(root, chord_type))?
        }
    }

    info!(path = %output.display(), "rendered audio");
    println!("Wrote {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match &cli.command {
        Command::Note { pitch } => show_note(pitch)?,
        Command::Interval { a, b } => show_interval(a, b)?,
        Command::Keys => {
            for key in all_key_signatures() {
                println!("{:<10} {}", key.name, key.accidental_label());
            }
        }
        Command::Key { name } => show_key(&config, find_key_signature(name)?),
        Command::Chords => {
            for chord in all_chord_types() {
                println!("{:<14} {}", chord.name, chord.interval_list());
            }
        }
        Command::Chord { root, quality } => show_chord(&config, root, quality)?,
        Command::Explain { topic } => explain(&config, topic)?,
        Command::Render { output, topic } => render(&config, output, topic)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        assert_eq!(parse_root("C", 60), Ok(60));
        assert_eq!(parse_root("eb", 60), Ok(63));
        assert_eq!(parse_root("Cb", 60), Ok(71));
        assert_eq!(parse_root("E3", 60), Ok(52));
        assert_eq!(parse_root("52", 60), Ok(52));
        assert!(parse_root("H", 60).is_err());
        assert!(parse_root("C##", 60).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["tonelens", "-vv", "chord", "D", "minor 7th"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Chord { .. }));
    }

    #[test]
    fn test_scale_from_tonic() {
        let d = find_key_signature("D Major").unwrap();
        assert_eq!(
            scale_from_tonic(d, 60),
            vec![62, 64, 66, 67, 69, 71, 73, 74]
        );

        let c = find_key_signature("C").unwrap();
        assert_eq!(scale_from_tonic(c, 60).first(), Some(&60));
        assert_eq!(scale_from_tonic(c, 60).last(), Some(&72));

        // Tonic class 6 sits above the window start, so Gb4 comes first
        let gb = find_key_signature("Gb").unwrap();
        assert_eq!(scale_from_tonic(gb, 60).first(), Some(&66));
    }

    #[test]
    fn test_format_piano_marks_active_keys() {
        let mut config = AppConfig::default();
        config.piano.start = 60;
        config.piano.keys = 5;
        assert_eq!(format_piano(&config, &[60, 64]), "C4 : . : E4");
    }
}

//! # Drill
//!
//! One practice cycle at a time: pick what to play, work out where it is on
//! the fretboard, and hand the result to the renderer.
//!
//! ## Modes
//! - `note` - a letter with an optional sharp or flat
//! - `string` - the same, plus a string to find it on and its fret
//! - `chord` - a major or minor chord, a CAGED shape and the moved fingering
//!
//! The drill remembers the last note and string so that neither repeats on
//! consecutive cycles.
//!
//! [`run_cycle`] is one turn of the practice loop: announce, render, count
//! the beats. A chord cycle whose shape can't be placed is reported on the
//! diagnostic writer and the beats are still counted, so the loop keeps its
//! tempo and carries on.

use crate::error::DrillError;
use crate::fretboard::{chord_fingering, fret_on_string, ChordShape, Fingering, Fret, CHORD_SHAPES};
use crate::pacer::Pacer;
use crate::pitch::{Note, NoteName};
use crate::render::{render_event, RenderOptions};
use crate::selector::{ChordQuality, RandomSource, Selector};
use clap::ValueEnum;
use log::debug;
use serde::Deserialize;
use std::io::Write;

/// What each cycle asks the player to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DrillMode {
    /// Name a note
    #[default]
    Note,
    /// Find a note on a given string
    String,
    /// Play a chord with a given CAGED shape
    Chord,
}

/// The record produced by one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillEvent {
    Note {
        note: Note,
    },
    String {
        note: Note,
        /// 0 = low E
        string: usize,
        fret: Fret,
    },
    Chord {
        note: Note,
        /// Index into [`crate::CHORD_SHAPES`]
        shape: usize,
        quality: ChordQuality,
        fingering: Fingering,
    },
}

impl DrillEvent {
    pub fn note(&self) -> Note {
        match self {
            DrillEvent::Note { note }
            | DrillEvent::String { note, .. }
            | DrillEvent::Chord { note, .. } => *note,
        }
    }
}

pub struct Drill<R: RandomSource> {
    mode: DrillMode,
    selector: Selector<R>,
    shapes: &'static [ChordShape],
    last_note: Option<NoteName>,
    last_string: Option<usize>,
}

impl<R: RandomSource> Drill<R> {
    pub fn new(mode: DrillMode, selector: Selector<R>) -> Self {
        Self {
            mode,
            selector,
            shapes: &CHORD_SHAPES,
            last_note: None,
            last_string: None,
        }
    }

    /// Draw chords from `shapes` instead of [`CHORD_SHAPES`].
    ///
    /// The table must keep the majors-then-minors layout the selector
    /// indexes into.
    pub fn with_shapes(mut self, shapes: &'static [ChordShape]) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn mode(&self) -> DrillMode {
        self.mode
    }

    /// Run one cycle.
    ///
    /// A chord cycle fails with [`DrillError::UnresolvedShapeAnchor`] if the
    /// shape table is inconsistent. The note is still consumed, so the next
    /// call moves on to a fresh selection.
    pub fn next_event(&mut self) -> Result<DrillEvent, DrillError> {
        let letter = self.selector.next_note(self.last_note);
        self.last_note = Some(letter);
        let accidental = self.selector.next_accidental(letter);
        let note = Note::new(letter, accidental);

        let event = match self.mode {
            DrillMode::Note => DrillEvent::Note { note },
            DrillMode::String => {
                let string = self.selector.next_string(self.last_string);
                self.last_string = Some(string);
                let fret = fret_on_string(note, string)?;
                DrillEvent::String { note, string, fret }
            }
            DrillMode::Chord => {
                let quality = self.selector.next_quality();
                let shape = self.selector.next_chord_shape(quality);
                let template = self.shapes.get(shape).ok_or_else(|| {
                    DrillError::UnresolvedShapeAnchor(format!("#{}", shape))
                })?;
                let fingering = chord_fingering(template, letter, accidental)?;
                DrillEvent::Chord {
                    note,
                    shape,
                    quality,
                    fingering,
                }
            }
        };
        debug!("drill event {:?}", event);
        Ok(event)
    }
}

/// One turn of the practice loop.
///
/// Writes the rendered event to `out`, then counts the beats. An
/// [`DrillError::UnresolvedShapeAnchor`] is written to `diagnostics` and the
/// cycle is skipped; any other error is returned.
pub fn run_cycle<R, W, E>(
    drill: &mut Drill<R>,
    pacer: &Pacer,
    options: RenderOptions,
    out: &mut W,
    diagnostics: &mut E,
) -> Result<(), DrillError>
where
    R: RandomSource,
    W: Write,
    E: Write,
{
    match drill.next_event() {
        Ok(event) => {
            write!(out, "{}", render_event(&event, options))?;
            out.flush()?;
        }
        Err(DrillError::UnresolvedShapeAnchor(name)) => {
            debug!("skipping chord cycle, shape '{}' has no anchor", name);
            writeln!(
                diagnostics,
                "Skipping chord: no anchor pitch for shape '{}'",
                name
            )?;
        }
        Err(e) => return Err(e),
    }
    pacer.count(out)
}

//! # Fretboard Renderer
//!
//! Draws drill events as ASCII fretboard diagrams, high E on top:
//!
//! ```text
//! C#m  (Em shape, +9)
//! e  |---|---|---|---|---|---|---|---|-r-|---|---| ...
//! B  |---|---|---|---|---|---|---|---|-5-|---|---| ...
//! ...
//!      1   2   3   4   5   6   7   8   9  10  11  ...
//! ```
//!
//! Unplayed strings show an `x` before the nut. With color on, markers are
//! tinted by harmonic function using ANSI escapes.

use crate::drill::DrillEvent;
use crate::fretboard::{Fingering, Fret, HarmonicFunction, FRET_COUNT};
use crate::pitch::{string_label, strings_high_to_low};
use crate::selector::ChordQuality;
use crossterm::style::{style, Color, Stylize};

/// Width of one fret cell, not counting its `|`.
const CELL: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// What to draw on one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Muted,
    Empty,
    Note(Fret),
    Tone(Fret, HarmonicFunction),
}

fn glyph(function: HarmonicFunction) -> &'static str {
    match function {
        HarmonicFunction::Root => "R",
        HarmonicFunction::RootOctave => "r",
        HarmonicFunction::MajorThird => "3",
        HarmonicFunction::MinorThird => "b3",
        HarmonicFunction::Fifth => "5",
    }
}

fn tint(function: HarmonicFunction) -> Color {
    match function {
        HarmonicFunction::Root | HarmonicFunction::RootOctave => Color::Red,
        HarmonicFunction::MajorThird => Color::Green,
        HarmonicFunction::MinorThird => Color::Blue,
        HarmonicFunction::Fifth => Color::Yellow,
    }
}

/// A fret cell with `text` centered, padded with string dashes.
fn cell(text: &str, color: Option<Color>) -> String {
    let width = text.chars().count().min(CELL);
    let left = (CELL - width) / 2;
    let right = CELL - width - left;
    let body = match color {
        Some(c) => style(text).with(c).bold().to_string(),
        None => text.to_string(),
    };
    format!("{}{}{}", "-".repeat(left), body, "-".repeat(right))
}

fn string_line(string: usize, mark: Mark, options: RenderOptions) -> String {
    let mut line = String::new();
    line.push_str(string_label(string));
    line.push(' ');
    line.push(if mark == Mark::Muted { 'x' } else { ' ' });
    line.push('|');

    for fret in 1..=FRET_COUNT {
        let text = match mark {
            Mark::Note(f) if f == fret => cell("*", options.color.then_some(Color::Cyan)),
            Mark::Tone(f, function) if f == fret => {
                cell(glyph(function), options.color.then(|| tint(function)))
            }
            _ => "-".repeat(CELL),
        };
        line.push_str(&text);
        line.push('|');
    }
    line
}

/// Fret numbers aligned under the cells.
pub fn ruler() -> String {
    let mut line = " ".repeat(4);
    for fret in 1..=FRET_COUNT {
        line.push_str(&format!("{:^3} ", fret));
    }
    line.trim_end().to_string()
}

/// Rows in the order given, then the ruler.
fn diagram(rows: impl Iterator<Item = (usize, Mark)>, options: RenderOptions) -> String {
    let mut out = String::new();
    for (string, mark) in rows {
        out.push_str(&string_line(string, mark, options));
        out.push('\n');
    }
    out.push_str(&ruler());
    out.push('\n');
    out
}

/// Diagram for a chord fingering, high E on top.
pub fn render_fingering(fingering: &Fingering, options: RenderOptions) -> String {
    let rows = fingering.high_to_low().map(|(string, tone)| {
        let mark = match tone {
            Some(t) => Mark::Tone(t.fret, t.function),
            None => Mark::Muted,
        };
        (string, mark)
    });
    diagram(rows, options)
}

/// Diagram with a single note on one string.
pub fn render_string_note(string: usize, fret: Fret, options: RenderOptions) -> String {
    let rows = strings_high_to_low().map(|s| {
        let mark = if s == string { Mark::Note(fret) } else { Mark::Empty };
        (s, mark)
    });
    diagram(rows, options)
}

/// Heading plus diagram for one drill cycle.
///
/// Note events render as the bare note name so the pacer's dots can follow
/// on the same line.
pub fn render_event(event: &DrillEvent, options: RenderOptions) -> String {
    match event {
        DrillEvent::Note { note } => note.to_string(),
        DrillEvent::String { note, string, fret } => {
            let mut out = format!(
                "{}  on the {} string, fret {}\n",
                note,
                string_label(*string),
                fret
            );
            out.push_str(&render_string_note(*string, *fret, options));
            out
        }
        DrillEvent::Chord {
            note,
            quality,
            fingering,
            ..
        } => {
            let suffix = match quality {
                ChordQuality::Major => "",
                ChordQuality::Minor => "m",
            };
            let mut out = format!(
                "{}{}  ({} shape, +{})\n",
                note, suffix, fingering.shape, fingering.offset
            );
            out.push_str(&render_fingering(fingering, options));
            out
        }
    }
}

/// Key to the chord markers.
pub fn legend(options: RenderOptions) -> String {
    let entries = [
        HarmonicFunction::Root,
        HarmonicFunction::RootOctave,
        HarmonicFunction::MajorThird,
        HarmonicFunction::MinorThird,
        HarmonicFunction::Fifth,
    ];
    entries
        .iter()
        .map(|f| {
            let g = if options.color {
                style(glyph(*f)).with(tint(*f)).bold().to_string()
            } else {
                glyph(*f).to_string()
            };
            format!("{} {}", g, f)
        })
        .collect::<Vec<_>>()
        .join("   ")
}

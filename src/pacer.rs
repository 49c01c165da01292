//! # Pacer
//!
//! Keeps the drill in time. After each announcement the pacer prints one dot
//! per beat, ends the line, and rests one more beat before the next cycle:
//!
//! ```text
//! F#............
//! ```

use crate::config::validate_tempo;
use crate::error::DrillError;
use std::io::Write;
use std::thread;
use std::time::Duration;

pub struct Pacer {
    beat: Duration,
    beats_per_note: u32,
    sleep: fn(Duration),
}

impl Pacer {
    /// # Errors
    /// [`DrillError::InvalidTempo`] unless `bpm` is positive and finite.
    pub fn new(bpm: f64, beats_per_note: u32) -> Result<Self, DrillError> {
        let bpm = validate_tempo(bpm)?;
        Ok(Self {
            beat: Duration::from_secs_f64(60.0 / bpm),
            beats_per_note,
            sleep: thread::sleep,
        })
    }

    /// Replace the blocking sleep, e.g. with a no-op in tests.
    pub fn with_sleep(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    /// Time between beats.
    pub fn beat(&self) -> Duration {
        self.beat
    }

    pub fn beats_per_note(&self) -> u32 {
        self.beats_per_note
    }

    /// Wall-clock time for one whole cycle.
    pub fn cycle(&self) -> Duration {
        self.beat * (self.beats_per_note + 1)
    }

    /// Count out the beats following an announcement.
    pub fn count<W: Write>(&self, out: &mut W) -> Result<(), DrillError> {
        for _ in 0..self.beats_per_note {
            (self.sleep)(self.beat);
            write!(out, ".")?;
            out.flush()?;
        }
        writeln!(out)?;
        (self.sleep)(self.beat);
        Ok(())
    }
}

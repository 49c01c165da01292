//! # Error Types
//!
//! This module defines all error types for the drill.
//!
//! ## Error Types
//! - `InvalidPitchLetter` - a character outside A-G where a note letter was expected
//! - `IllegalAccidental` - a spelling like `B#` or `Fb` that the drill never uses
//! - `UnresolvedShapeAnchor` - a chord shape whose name doesn't start with a note letter
//! - `InvalidTempo` - a tempo that isn't a positive number of beats per minute
//! - `InvalidConfig` - a config file or flag value that can't be used
//! - `Io` - console or config file I/O failure
//!
//! Only `Io` and the configuration errors are fatal to the drill loop. A chord
//! cycle that fails with `UnresolvedShapeAnchor` is logged and skipped.
//!
//! ## Usage
//! ```rust
//! use fretdrill::{chord_fingering, ChordShape, DrillError, NoteName, Accidental};
//!
//! let shape = ChordShape::new("?", [None; 6]);
//! match chord_fingering(&shape, NoteName::A, Accidental::Natural) {
//!     Ok(fingering) => println!("{:?}", fingering),
//!     Err(DrillError::UnresolvedShapeAnchor(name)) => {
//!         eprintln!("skipping chord, shape '{}' has no anchor", name);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use crate::pitch::{Accidental, NoteName};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    /// A note letter outside A-G.
    ///
    /// # Example
    /// ```
    /// # use fretdrill::DrillError;
    /// let err = DrillError::InvalidPitchLetter('H');
    /// assert_eq!(err.to_string(), "Invalid pitch letter 'H': expected A-G");
    /// ```
    #[error("Invalid pitch letter '{0}': expected A-G")]
    InvalidPitchLetter(char),

    /// A letter/accidental pair with no black key between it and its neighbour.
    ///
    /// # Example
    /// ```
    /// # use fretdrill::{Accidental, DrillError, NoteName};
    /// let err = DrillError::IllegalAccidental {
    ///     letter: NoteName::E,
    ///     accidental: Accidental::Sharp,
    /// };
    /// assert_eq!(err.to_string(), "Illegal accidental: E#");
    /// ```
    #[error("Illegal accidental: {letter}{accidental}")]
    IllegalAccidental {
        letter: NoteName,
        accidental: Accidental,
    },

    /// A chord shape whose name can't be resolved to a chromatic anchor.
    ///
    /// This means the shape table is inconsistent. The drill reports it and
    /// skips the chord for that cycle.
    #[error("Unresolved shape anchor: no pitch for chord shape '{0}'")]
    UnresolvedShapeAnchor(String),

    /// A tempo that is zero, negative or not a number.
    ///
    /// # Example
    /// ```
    /// # use fretdrill::DrillError;
    /// let err = DrillError::InvalidTempo(-5.0);
    /// assert_eq!(err.to_string(), "Invalid tempo -5 bpm: must be a positive number");
    /// ```
    #[error("Invalid tempo {0} bpm: must be a positive number")]
    InvalidTempo(f64),

    /// Invalid configuration file or option value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

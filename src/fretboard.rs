//! # Fretboard Mapper
//!
//! Turns abstract notes and CAGED chord shapes into concrete fret numbers on
//! a standard-tuned guitar.
//!
//! ## Single Notes
//! [`fret_for_note`] walks forward from a string's open pitch to the target
//! pitch class. The distance in semitones is the fret. Landing on the open
//! pitch itself gives fret 12, so the drill always asks for a fretted note
//! and never for an open string.
//!
//! ## Chord Shapes
//! Each [`ChordShape`] is an open-position template named after the chord it
//! plays there (`C`, `A`, `G`, `E`, `D` and their minors). Moving a shape to
//! another root shifts every played string by the chromatic distance from the
//! shape's anchor to that root:
//!
//! ```text
//! E shape, root E (offset 0):  12  2  2  1 12 12
//! E shape, root G (offset 3):   3  5  5  4  3  3
//! A shape, root C (offset 3):   x  3  5  5  5  3
//! ```
//!
//! Shifted frets are reduced modulo 12 and a result of 0 becomes 12. The rule
//! applies to every played string, including the unshifted template, so a
//! fingering never contains an open string.
//!
//! Harmonic functions describe a string's role in the chord and don't change
//! when the shape moves.

use crate::error::DrillError;
use crate::pitch::{
    chromatic_index, normalize_flat_to_sharp, strings_high_to_low, Accidental, Note, NoteName,
    SEMITONES, STANDARD_TUNING, STRING_COUNT,
};
use crate::selector::ChordQuality;
use log::debug;
use std::fmt;

/// A fret number. 0 is the open string, 12 the octave.
pub type Fret = u8;

/// Frets drawn on the diagram.
pub const FRET_COUNT: Fret = 24;

/// Number of shapes of each quality in [`CHORD_SHAPES`].
pub const MAJOR_SHAPE_COUNT: usize = 5;

/// A string's role within a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonicFunction {
    /// The shape's anchor root (one per shape)
    Root,
    /// The root doubled on another string
    RootOctave,
    MajorThird,
    MinorThird,
    Fifth,
}

impl HarmonicFunction {
    /// Semitones above the root.
    pub fn interval(self) -> u8 {
        match self {
            HarmonicFunction::Root | HarmonicFunction::RootOctave => 0,
            HarmonicFunction::MinorThird => 3,
            HarmonicFunction::MajorThird => 4,
            HarmonicFunction::Fifth => 7,
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HarmonicFunction::Root => "root",
            HarmonicFunction::RootOctave => "root (octave)",
            HarmonicFunction::MajorThird => "major third",
            HarmonicFunction::MinorThird => "minor third",
            HarmonicFunction::Fifth => "fifth",
        };
        write!(f, "{}", name)
    }
}

/// A played string: fret and harmonic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTone {
    pub fret: Fret,
    pub function: HarmonicFunction,
}

/// One string of a shape template or fingering. `None` = not played.
pub type StringTone = Option<ShapeTone>;

/// An open-position chord template, strings ordered low E to high E.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordShape {
    pub name: &'static str,
    pub strings: [StringTone; STRING_COUNT],
}

impl ChordShape {
    pub const fn new(name: &'static str, strings: [StringTone; STRING_COUNT]) -> Self {
        Self { name, strings }
    }

    /// Minor shapes are named with a trailing `m`.
    pub fn quality(&self) -> ChordQuality {
        if self.name.ends_with('m') {
            ChordQuality::Minor
        } else {
            ChordQuality::Major
        }
    }

    /// Chromatic position of the chord this shape plays in open position.
    pub fn anchor(&self) -> Result<u8, DrillError> {
        self.name
            .chars()
            .next()
            .and_then(|c| NoteName::try_from(c).ok())
            .map(|letter| chromatic_index(letter, Accidental::Natural))
            .ok_or_else(|| DrillError::UnresolvedShapeAnchor(self.name.to_string()))
    }

    /// Index of the string tagged [`HarmonicFunction::Root`].
    pub fn root_string(&self) -> Option<usize> {
        self.strings
            .iter()
            .position(|s| matches!(s, Some(t) if t.function == HarmonicFunction::Root))
    }
}

const X: StringTone = None;

const fn tone(fret: Fret, function: HarmonicFunction) -> StringTone {
    Some(ShapeTone { fret, function })
}

use HarmonicFunction::{Fifth as P5, MajorThird as M3, MinorThird as B3, Root as R, RootOctave as O};

/// The CAGED shapes: majors at 0-4, minors at 5-9 in the same order.
pub static CHORD_SHAPES: [ChordShape; 2 * MAJOR_SHAPE_COUNT] = [
    ChordShape::new("C", [X, tone(3, R), tone(2, M3), tone(0, P5), tone(1, O), tone(0, M3)]),
    ChordShape::new("A", [X, tone(0, R), tone(2, P5), tone(2, O), tone(2, M3), tone(0, P5)]),
    ChordShape::new("G", [tone(3, R), tone(2, M3), tone(0, P5), tone(0, O), tone(0, M3), tone(3, O)]),
    ChordShape::new("E", [tone(0, R), tone(2, P5), tone(2, O), tone(1, M3), tone(0, P5), tone(0, O)]),
    ChordShape::new("D", [X, X, tone(0, R), tone(2, P5), tone(3, O), tone(2, M3)]),
    ChordShape::new("Cm", [X, tone(3, R), tone(1, B3), tone(0, P5), tone(1, O), tone(3, P5)]),
    ChordShape::new("Am", [X, tone(0, R), tone(2, P5), tone(2, O), tone(1, B3), tone(0, P5)]),
    ChordShape::new("Gm", [tone(3, R), tone(1, B3), tone(0, P5), tone(0, O), tone(3, P5), tone(3, O)]),
    ChordShape::new("Em", [tone(0, R), tone(2, P5), tone(2, O), tone(0, B3), tone(0, P5), tone(0, O)]),
    ChordShape::new("Dm", [X, X, tone(0, R), tone(2, P5), tone(3, O), tone(1, B3)]),
];

/// Reduce a fret into 1-12, turning 0 into 12.
fn wrap_fret(fret: u8) -> Fret {
    match fret % SEMITONES {
        0 => SEMITONES,
        f => f,
    }
}

/// Fret of a note on a string with the given open pitch.
///
/// Flats are respelled as sharps first. The open pitch itself maps to
/// fret 12, not 0.
///
/// ```
/// use fretdrill::{fret_for_note, Accidental, NoteName};
///
/// assert_eq!(fret_for_note(NoteName::E, Accidental::Natural, NoteName::E).unwrap(), 12);
/// assert_eq!(fret_for_note(NoteName::G, Accidental::Natural, NoteName::E).unwrap(), 3);
/// assert_eq!(fret_for_note(NoteName::B, Accidental::Flat, NoteName::E).unwrap(), 6);
/// ```
///
/// # Errors
/// [`DrillError::IllegalAccidental`] for spellings like `E#` or `Cb`.
pub fn fret_for_note(
    letter: NoteName,
    accidental: Accidental,
    open: NoteName,
) -> Result<Fret, DrillError> {
    let (letter, accidental) = normalize_flat_to_sharp(letter, accidental)?;
    let target = chromatic_index(letter, accidental);
    let open = open.natural_index();
    let distance = (target + SEMITONES - open) % SEMITONES;
    Ok(wrap_fret(distance))
}

/// Fret of `note` on string `string` (0 = low E) in standard tuning.
pub fn fret_on_string(note: Note, string: usize) -> Result<Fret, DrillError> {
    let open = STANDARD_TUNING.get(string).copied().ok_or_else(|| {
        DrillError::InvalidConfig(format!("No string {} on a {}-string guitar", string, STRING_COUNT))
    })?;
    fret_for_note(note.letter, note.accidental, open)
}

/// A chord shape moved to a concrete root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingering {
    pub shape: &'static str,
    pub root: Note,
    /// Semitones the template was shifted by
    pub offset: u8,
    /// Low E first, like [`STANDARD_TUNING`]
    pub strings: [StringTone; STRING_COUNT],
}

impl Fingering {
    /// Frets low to high, `None` for unplayed strings.
    pub fn frets(&self) -> [Option<Fret>; STRING_COUNT] {
        self.strings.map(|s| s.map(|t| t.fret))
    }

    /// Strings in display order, high E first, with their indices.
    pub fn high_to_low(&self) -> impl Iterator<Item = (usize, StringTone)> + '_ {
        strings_high_to_low().map(move |i| (i, self.strings[i]))
    }
}

/// Move `shape` so that it plays a chord rooted on `root_letter`/`accidental`.
///
/// ```
/// use fretdrill::{chord_fingering, Accidental, NoteName, CHORD_SHAPES};
///
/// let a_shape = &CHORD_SHAPES[1];
/// let c = chord_fingering(a_shape, NoteName::C, Accidental::Natural).unwrap();
/// assert_eq!(c.frets(), [None, Some(3), Some(5), Some(5), Some(5), Some(3)]);
/// ```
///
/// # Errors
/// - [`DrillError::UnresolvedShapeAnchor`] if the shape's name has no pitch
/// - [`DrillError::IllegalAccidental`] for spellings like `B#`
pub fn chord_fingering(
    shape: &ChordShape,
    root_letter: NoteName,
    accidental: Accidental,
) -> Result<Fingering, DrillError> {
    let anchor = shape.anchor()?;
    let (letter, sharp) = normalize_flat_to_sharp(root_letter, accidental)?;
    let root = chromatic_index(letter, sharp);
    let offset = (root + SEMITONES - anchor) % SEMITONES;

    let strings = shape.strings.map(|s| {
        s.map(|t| ShapeTone {
            fret: wrap_fret(t.fret % SEMITONES + offset),
            function: t.function,
        })
    });

    debug!(
        "{} shape moved {} semitones to {}{}",
        shape.name, offset, root_letter, accidental
    );
    Ok(Fingering {
        shape: shape.name,
        root: Note::new(root_letter, accidental),
        offset,
        strings,
    })
}

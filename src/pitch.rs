//! # Pitch Model
//!
//! Static knowledge of the 12-tone chromatic scale as the drill spells it:
//! seven natural letters, an optional sharp or flat, and the open strings of
//! a standard-tuned six-string guitar.
//!
//! ## Chromatic Space
//! Positions run 0-11 starting at A, so the natural letters land on
//! `A=0 B=2 C=3 D=5 E=7 F=8 G=10`. A sharp adds one semitone and a flat
//! subtracts one, modulo 12. Enharmonic spellings like `A#` and `Bb` share
//! a position.
//!
//! ## Spelling Rules
//! There is no black key between E-F or B-C, so the drill never spells a
//! sharp on B or E, nor a flat on C or F. [`Accidental::is_legal_on`] encodes
//! that rule and the selector and mapper both respect it.

use crate::error::DrillError;
use std::fmt;

/// Number of pitch classes in an octave.
pub const SEMITONES: u8 = 12;

/// Natural note letters A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteName {
    /// All seven letters in alphabetical order.
    pub const ALL: [NoteName; 7] = [
        NoteName::A,
        NoteName::B,
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
    ];

    /// Chromatic position of the natural letter (A = 0).
    pub fn natural_index(self) -> u8 {
        match self {
            NoteName::A => 0,
            NoteName::B => 2,
            NoteName::C => 3,
            NoteName::D => 5,
            NoteName::E => 7,
            NoteName::F => 8,
            NoteName::G => 10,
        }
    }

    /// The letter one step down the alphabet, wrapping A to G.
    pub fn predecessor(self) -> NoteName {
        match self {
            NoteName::A => NoteName::G,
            NoteName::B => NoteName::A,
            NoteName::C => NoteName::B,
            NoteName::D => NoteName::C,
            NoteName::E => NoteName::D,
            NoteName::F => NoteName::E,
            NoteName::G => NoteName::F,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::A => 'A',
            NoteName::B => 'B',
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
        }
    }
}

impl TryFrom<char> for NoteName {
    type Error = DrillError;

    /// Parse a note letter, accepting either case.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(NoteName::A),
            'B' => Ok(NoteName::B),
            'C' => Ok(NoteName::C),
            'D' => Ok(NoteName::D),
            'E' => Ok(NoteName::E),
            'F' => Ok(NoteName::F),
            'G' => Ok(NoteName::G),
            _ => Err(DrillError::InvalidPitchLetter(c)),
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidentals: none, sharp or flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // #
    Flat,  // b
}

impl Accidental {
    pub const ALL: [Accidental; 3] = [Accidental::Natural, Accidental::Sharp, Accidental::Flat];

    /// Semitone shift applied to the natural letter.
    pub fn semitone_shift(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    /// Whether this accidental can be spelled on `letter`.
    ///
    /// Sharps are illegal on B and E, flats on C and F.
    ///
    /// ```
    /// use fretdrill::{Accidental, NoteName};
    ///
    /// assert!(Accidental::Sharp.is_legal_on(NoteName::F));
    /// assert!(!Accidental::Sharp.is_legal_on(NoteName::E));
    /// assert!(!Accidental::Flat.is_legal_on(NoteName::C));
    /// ```
    pub fn is_legal_on(self, letter: NoteName) -> bool {
        match self {
            Accidental::Natural => true,
            Accidental::Sharp => !matches!(letter, NoteName::B | NoteName::E),
            Accidental::Flat => !matches!(letter, NoteName::C | NoteName::F),
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accidental::Natural => Ok(()),
            Accidental::Sharp => write!(f, "#"),
            Accidental::Flat => write!(f, "b"),
        }
    }
}

/// A spelled note: letter plus accidental, e.g. `Bb` or `F#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: NoteName,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: NoteName, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn chromatic_index(self) -> u8 {
        chromatic_index(self.letter, self.accidental)
    }

    pub fn is_legal(self) -> bool {
        self.accidental.is_legal_on(self.letter)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

/// Chromatic position (0-11, A = 0) of a letter with an accidental.
///
/// Total over every letter and accidental; enharmonic spellings agree.
///
/// ```
/// use fretdrill::{chromatic_index, Accidental, NoteName};
///
/// assert_eq!(chromatic_index(NoteName::A, Accidental::Natural), 0);
/// assert_eq!(chromatic_index(NoteName::G, Accidental::Sharp), 11);
/// assert_eq!(
///     chromatic_index(NoteName::G, Accidental::Sharp),
///     chromatic_index(NoteName::A, Accidental::Flat),
/// );
/// ```
pub fn chromatic_index(letter: NoteName, accidental: Accidental) -> u8 {
    let index = letter.natural_index() as i8 + accidental.semitone_shift();
    index.rem_euclid(SEMITONES as i8) as u8
}

/// Respell a flat as the equivalent sharp on the preceding letter.
///
/// `Ab` becomes `G#`, `Bb` becomes `A#`. Naturals and sharps are returned
/// unchanged. Illegal spellings are rejected since their predecessor sharp
/// would name a different pitch.
pub fn normalize_flat_to_sharp(
    letter: NoteName,
    accidental: Accidental,
) -> Result<(NoteName, Accidental), DrillError> {
    if !accidental.is_legal_on(letter) {
        return Err(DrillError::IllegalAccidental { letter, accidental });
    }
    match accidental {
        Accidental::Flat => Ok((letter.predecessor(), Accidental::Sharp)),
        _ => Ok((letter, accidental)),
    }
}

/// Open-string pitches of standard tuning, low string first.
pub const STANDARD_TUNING: [NoteName; 6] = [
    NoteName::E,
    NoteName::A,
    NoteName::D,
    NoteName::G,
    NoteName::B,
    NoteName::E,
];

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = STANDARD_TUNING.len();

/// String indices in display order, high E first.
pub fn strings_high_to_low() -> impl Iterator<Item = usize> {
    (0..STRING_COUNT).rev()
}

/// Short label for a string, index 0 being the low E.
///
/// The high E is printed lower-case so the two E strings can be told apart.
pub fn string_label(string: usize) -> &'static str {
    match string {
        0 => "E",
        1 => "A",
        2 => "D",
        3 => "G",
        4 => "B",
        _ => "e",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_positions() {
        let expected = [0, 2, 3, 5, 7, 8, 10];
        for (letter, index) in NoteName::ALL.iter().zip(expected) {
            assert_eq!(chromatic_index(*letter, Accidental::Natural), index);
        }
    }

    #[test]
    fn test_chromatic_index_total() {
        for letter in NoteName::ALL {
            for accidental in Accidental::ALL {
                assert!(chromatic_index(letter, accidental) < SEMITONES);
            }
        }
    }

    #[test]
    fn test_enharmonic_pairs_agree() {
        for letter in NoteName::ALL {
            let sharp = Note::new(letter.predecessor(), Accidental::Sharp);
            let flat = Note::new(letter, Accidental::Flat);
            if sharp.is_legal() && flat.is_legal() {
                assert_eq!(sharp.chromatic_index(), flat.chromatic_index(), "{} vs {}", sharp, flat);
            }
        }
        // Illegal spellings still land on the physical pitch
        assert_eq!(
            chromatic_index(NoteName::E, Accidental::Sharp),
            chromatic_index(NoteName::F, Accidental::Natural)
        );
        assert_eq!(
            chromatic_index(NoteName::C, Accidental::Flat),
            chromatic_index(NoteName::B, Accidental::Natural)
        );
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(chromatic_index(NoteName::A, Accidental::Flat), 11);
        assert_eq!(chromatic_index(NoteName::G, Accidental::Sharp), 11);
    }

    #[test]
    fn test_legality_rule() {
        let illegal = [
            (NoteName::B, Accidental::Sharp),
            (NoteName::E, Accidental::Sharp),
            (NoteName::C, Accidental::Flat),
            (NoteName::F, Accidental::Flat),
        ];
        for letter in NoteName::ALL {
            for accidental in Accidental::ALL {
                let expected = !illegal.contains(&(letter, accidental));
                assert_eq!(accidental.is_legal_on(letter), expected, "{}{}", letter, accidental);
            }
        }
    }

    #[test]
    fn test_normalize_flat_to_sharp() {
        assert_eq!(
            normalize_flat_to_sharp(NoteName::A, Accidental::Flat).unwrap(),
            (NoteName::G, Accidental::Sharp)
        );
        assert_eq!(
            normalize_flat_to_sharp(NoteName::B, Accidental::Flat).unwrap(),
            (NoteName::A, Accidental::Sharp)
        );
        assert_eq!(
            normalize_flat_to_sharp(NoteName::D, Accidental::Natural).unwrap(),
            (NoteName::D, Accidental::Natural)
        );
        assert_eq!(
            normalize_flat_to_sharp(NoteName::F, Accidental::Sharp).unwrap(),
            (NoteName::F, Accidental::Sharp)
        );
    }

    #[test]
    fn test_normalize_preserves_pitch() {
        for letter in NoteName::ALL {
            for accidental in Accidental::ALL {
                if let Ok((l, a)) = normalize_flat_to_sharp(letter, accidental) {
                    assert_ne!(a, Accidental::Flat);
                    assert_eq!(chromatic_index(l, a), chromatic_index(letter, accidental));
                }
            }
        }
    }

    #[test]
    fn test_normalize_rejects_illegal() {
        assert!(matches!(
            normalize_flat_to_sharp(NoteName::C, Accidental::Flat),
            Err(DrillError::IllegalAccidental { .. })
        ));
        assert!(normalize_flat_to_sharp(NoteName::B, Accidental::Sharp).is_err());
    }

    #[test]
    fn test_parse_letter() {
        assert_eq!(NoteName::try_from('g').unwrap(), NoteName::G);
        assert!(matches!(
            NoteName::try_from('H'),
            Err(DrillError::InvalidPitchLetter('H'))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(NoteName::F, Accidental::Sharp).to_string(), "F#");
        assert_eq!(Note::new(NoteName::E, Accidental::Flat).to_string(), "Eb");
        assert_eq!(Note::new(NoteName::D, Accidental::Natural).to_string(), "D");
    }

    #[test]
    fn test_standard_tuning() {
        let names: String = STANDARD_TUNING.iter().map(|n| n.as_char()).collect();
        assert_eq!(names, "EADGBE");
    }
}

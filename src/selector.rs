//! # Selector
//!
//! Random choice policy for each drill cycle: the next note letter, its
//! accidental, a string, a chord quality and a CAGED shape.
//!
//! ## No-Repeat Rule
//! Notes and strings never repeat back-to-back. The caller passes the
//! previous value in and keeps the returned one for the next call; the
//! selector itself holds nothing but its random source.
//!
//! ## Randomness
//! All entropy comes from a [`RandomSource`] handed to [`Selector::new`].
//! Every [`rand::Rng`] already is one, so the binary passes a seeded
//! `StdRng` and tests can pass a scripted source to assert exact sequences.

use crate::fretboard::MAJOR_SHAPE_COUNT;
use crate::pitch::{Accidental, NoteName, STRING_COUNT};
use log::debug;
use rand::Rng;

/// A source of uniform choices.
pub trait RandomSource {
    /// Uniform index in `0..n`. `n` is always at least 1.
    fn below(&mut self, n: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
}

impl ChordQuality {
    pub fn is_major(self) -> bool {
        self == ChordQuality::Major
    }
}

pub struct Selector<R: RandomSource> {
    source: R,
    string_pool: usize,
}

impl<R: RandomSource> Selector<R> {
    /// Create a selector drawing strings from all six strings.
    pub fn new(source: R) -> Self {
        Self {
            source,
            string_pool: STRING_COUNT,
        }
    }

    /// Restrict string choice to the lowest `pool` strings.
    ///
    /// Clamped to 2..=6 so the no-repeat rule always has somewhere to go.
    pub fn with_string_pool(mut self, pool: usize) -> Self {
        self.string_pool = pool.clamp(2, STRING_COUNT);
        self
    }

    /// Uniform index in `0..len`, skipping `previous`.
    fn next_excluding(&mut self, len: usize, previous: Option<usize>) -> usize {
        match previous {
            Some(prev) if prev < len => {
                // Draw from the len - 1 other slots and step over prev
                let pick = self.source.below(len - 1);
                if pick >= prev {
                    pick + 1
                } else {
                    pick
                }
            }
            _ => self.source.below(len),
        }
    }

    /// Next natural letter, never equal to `previous`.
    pub fn next_note(&mut self, previous: Option<NoteName>) -> NoteName {
        let prev = previous.and_then(|p| NoteName::ALL.iter().position(|n| *n == p));
        let letter = NoteName::ALL[self.next_excluding(NoteName::ALL.len(), prev)];
        debug!("next note {} (previous {:?})", letter, previous);
        letter
    }

    /// Next accidental for `letter`.
    ///
    /// Rolls uniformly over natural, sharp and flat, then falls back to
    /// natural when the roll can't be spelled on this letter.
    pub fn next_accidental(&mut self, letter: NoteName) -> Accidental {
        let rolled = Accidental::ALL[self.source.below(Accidental::ALL.len())];
        if rolled.is_legal_on(letter) {
            rolled
        } else {
            Accidental::Natural
        }
    }

    /// Next string index in the pool, never equal to `previous`.
    pub fn next_string(&mut self, previous: Option<usize>) -> usize {
        self.next_excluding(self.string_pool, previous)
    }

    /// Coin flip between major and minor.
    pub fn next_quality(&mut self) -> ChordQuality {
        if self.source.below(2) == 0 {
            ChordQuality::Major
        } else {
            ChordQuality::Minor
        }
    }

    /// Index into the chord shape table for the given quality.
    ///
    /// Majors occupy indices 0-4 and minors 5-9.
    pub fn next_chord_shape(&mut self, quality: ChordQuality) -> usize {
        let shape = self.source.below(MAJOR_SHAPE_COUNT);
        match quality {
            ChordQuality::Major => shape,
            ChordQuality::Minor => shape + MAJOR_SHAPE_COUNT,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TRIALS: usize = 2000;

    /// Replays a fixed list of picks, reduced modulo the requested range.
    pub(crate) struct ScriptedSource {
        picks: Vec<usize>,
        next: usize,
    }

    impl ScriptedSource {
        pub(crate) fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn below(&mut self, n: usize) -> usize {
            let pick = self.picks[self.next % self.picks.len()];
            self.next += 1;
            pick % n
        }
    }

    fn seeded() -> Selector<StdRng> {
        Selector::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_next_note_never_repeats() {
        let mut selector = seeded();
        for previous in NoteName::ALL {
            for _ in 0..TRIALS {
                assert_ne!(selector.next_note(Some(previous)), previous);
            }
        }
    }

    #[test]
    fn test_next_note_covers_other_letters() {
        let mut selector = seeded();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..TRIALS {
            seen.insert(selector.next_note(Some(NoteName::C)));
        }
        assert_eq!(seen.len(), 6);
        assert!(!seen.contains(&NoteName::C));
    }

    #[test]
    fn test_next_note_chained() {
        let mut selector = seeded();
        let mut previous = None;
        for _ in 0..TRIALS {
            let note = selector.next_note(previous);
            assert_ne!(Some(note), previous);
            previous = Some(note);
        }
    }

    #[test]
    fn test_next_accidental_always_legal() {
        let mut selector = seeded();
        for letter in NoteName::ALL {
            for _ in 0..TRIALS {
                let accidental = selector.next_accidental(letter);
                assert!(accidental.is_legal_on(letter), "{}{}", letter, accidental);
            }
        }
    }

    #[test]
    fn test_illegal_roll_becomes_natural() {
        // Pick 1 is sharp, pick 2 is flat
        let mut selector = Selector::new(ScriptedSource::new(&[1, 2, 1, 2]));
        assert_eq!(selector.next_accidental(NoteName::E), Accidental::Natural);
        assert_eq!(selector.next_accidental(NoteName::F), Accidental::Natural);
        assert_eq!(selector.next_accidental(NoteName::F), Accidental::Sharp);
        assert_eq!(selector.next_accidental(NoteName::B), Accidental::Flat);
    }

    #[test]
    fn test_scripted_note_sequence() {
        let mut selector = Selector::new(ScriptedSource::new(&[0, 0, 5, 3]));
        // No previous: pick 0 of 7 is A
        assert_eq!(selector.next_note(None), NoteName::A);
        // Previous A: pick 0 of the remaining six steps over A to B
        assert_eq!(selector.next_note(Some(NoteName::A)), NoteName::B);
        // Previous B: pick 5 of six is G
        assert_eq!(selector.next_note(Some(NoteName::B)), NoteName::G);
        // Previous D: pick 3 lands on D's slot and steps over to E
        assert_eq!(selector.next_note(Some(NoteName::D)), NoteName::E);
    }

    #[test]
    fn test_next_string_never_repeats() {
        let mut selector = seeded();
        let mut previous = None;
        for _ in 0..TRIALS {
            let string = selector.next_string(previous);
            assert!(string < STRING_COUNT);
            assert_ne!(Some(string), previous);
            previous = Some(string);
        }
    }

    #[test]
    fn test_string_pool_restricts_range() {
        let mut selector = seeded().with_string_pool(5);
        let mut previous = None;
        for _ in 0..TRIALS {
            let string = selector.next_string(previous);
            assert!(string < 5);
            previous = Some(string);
        }
    }

    #[test]
    fn test_string_pool_is_clamped() {
        // Below two, the pool still alternates between two strings
        let mut selector = seeded().with_string_pool(0);
        let mut previous = None;
        for _ in 0..TRIALS {
            let string = selector.next_string(previous);
            assert!(string < 2);
            previous = Some(string);
        }

        // Above six, the high E is the top of the range
        let mut selector = seeded().with_string_pool(9);
        let picks: Vec<usize> = (0..TRIALS).map(|_| selector.next_string(None)).collect();
        assert!(picks.iter().all(|s| *s < STRING_COUNT));
        assert!(picks.contains(&(STRING_COUNT - 1)));
    }

    #[test]
    fn test_chord_shape_halves() {
        let mut selector = seeded();
        for _ in 0..TRIALS {
            assert!(selector.next_chord_shape(ChordQuality::Major) < 5);
            let minor = selector.next_chord_shape(ChordQuality::Minor);
            assert!((5..10).contains(&minor));
        }
    }

    #[test]
    fn test_quality_coin_flip() {
        let mut selector = Selector::new(ScriptedSource::new(&[0, 1]));
        assert_eq!(selector.next_quality(), ChordQuality::Major);
        assert_eq!(selector.next_quality(), ChordQuality::Minor);

        let mut selector = seeded();
        let majors = (0..TRIALS)
            .filter(|_| selector.next_quality().is_major())
            .count();
        assert!(majors > 0 && majors < TRIALS);
    }
}

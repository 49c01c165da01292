pub mod config;
pub mod drill;
pub mod error;
pub mod fretboard;
pub mod pacer;
pub mod pitch;
pub mod render;
pub mod selector;

pub use config::DrillConfig;
pub use drill::{Drill, DrillEvent, DrillMode};
pub use error::*;
pub use fretboard::{
    chord_fingering, fret_for_note, fret_on_string, ChordShape, Fingering, Fret,
    HarmonicFunction, ShapeTone, CHORD_SHAPES,
};
pub use pacer::Pacer;
pub use pitch::{
    chromatic_index, normalize_flat_to_sharp, Accidental, Note, NoteName, STANDARD_TUNING,
};
pub use render::{render_event, RenderOptions};
pub use selector::{ChordQuality, RandomSource, Selector};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a drill from validated settings.
/// This is the main entry point for the library.
///
/// Seeds from `config.seed` when present, otherwise from the OS.
///
/// ```rust
/// use fretdrill::{new_drill, DrillConfig, DrillEvent, DrillMode};
///
/// let config = DrillConfig {
///     mode: DrillMode::String,
///     seed: Some(3),
///     ..DrillConfig::default()
/// };
/// let mut drill = new_drill(&config);
/// let event = drill.next_event()?;
/// assert!(matches!(event, DrillEvent::String { .. }));
/// # Ok::<(), fretdrill::DrillError>(())
/// ```
pub fn new_drill(config: &DrillConfig) -> Drill<StdRng> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let selector = Selector::new(rng).with_string_pool(config.string_pool);
    Drill::new(config.mode, selector)
}

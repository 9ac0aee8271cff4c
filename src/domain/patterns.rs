use std::collections::BTreeMap;

use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

use super::LiveSet;

/// Pattern registry errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown pattern '{name}' (available: {})", .available.join(", "))]
    Unknown { name: String, available: Vec<String> },
}

/// A named starting generation
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: LiveSet,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: &[(i64, i64)]) -> Self {
        Self { name, description, cells: LiveSet::from_cells(cells) }
    }
}

/// Immutable lookup from pattern name to starting generation.
/// Built once and handed to whoever needs it.
#[derive(Clone, Debug)]
pub struct PatternRegistry {
    patterns: BTreeMap<&'static str, Pattern>,
}

impl PatternRegistry {
    pub fn new(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        Self {
            patterns: patterns.into_iter().map(|p| (p.name, p)).collect(),
        }
    }

    /// Registry holding every preset
    pub fn builtin() -> Self {
        Self::new(presets::all_patterns())
    }

    pub fn get(&self, name: &str) -> Result<&Pattern, PatternError> {
        self.patterns.get(name).ok_or_else(|| PatternError::Unknown {
            name: name.to_owned(),
            available: self.names().map(str::to_owned).collect(),
        })
    }

    /// Pattern names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }
}

/// Random seed area of `width` x `height` cells anchored at the origin.
/// Each cell is alive with probability `density` (clamped to [0, 1]);
/// the same `seed` always produces the same generation.
pub fn soup(width: u32, height: u32, density: f64, seed: u64) -> LiveSet {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);

    (0..i64::from(height))
        .flat_map(|y| (0..i64::from(width)).map(move |x| (x, y)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "rpentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                (3, 2),
                (2, 3), (3, 3),
                (3, 4), (4, 4),
            ],
        )
    }

    /// Glider heading away from a block
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship leaving a still-life block behind",
            &[
                (-2, -2), (-1, -2),
                (-2, -1), (-1, -1),
                (1, 1), (2, 1), (3, 1),
                (3, 2),
                (2, 3),
            ],
        )
    }

    /// Square (block) - simplest still life
    pub fn square() -> Pattern {
        Pattern::new(
            "square",
            "Still life",
            &[
                (1, 1), (2, 1),
                (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            &[(1, 0), (2, 0), (3, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            &[
                (1, 1), (2, 1), (3, 1),
                (0, 0), (1, 0), (2, 0),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            &[
                (0, 3), (1, 3),
                (0, 2),
                (3, 1),
                (2, 0), (3, 0),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight Spaceship (period 4)",
            &[
                (1, 3), (4, 3),
                (0, 2),
                (0, 1), (4, 1),
                (0, 0), (1, 0), (2, 0), (3, 0),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                (1, 2),
                (3, 1),
                (0, 0), (1, 0), (4, 0), (5, 0), (6, 0),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            r_pentomino(),
            glider(),
            square(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            acorn(),
        ]
    }
}

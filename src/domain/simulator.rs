use thiserror::Error;
use tracing::debug;

use super::{LiveSet, stepper::step};

/// Simulation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("iteration count must be non-negative, got {0}")]
    NegativeIterations(i64),

    #[error("iteration count {0} is too large")]
    TooManyIterations(i64),
}

/// Unbounded stream of generations, starting with the seed itself.
/// A generation is only stepped when it is requested.
#[derive(Clone, Debug)]
pub struct Generations {
    seed: Option<LiveSet>,
    previous: Option<LiveSet>,
}

impl Iterator for Generations {
    type Item = LiveSet;

    fn next(&mut self) -> Option<LiveSet> {
        let current = match self.seed.take() {
            Some(seed) => seed,
            None => step(self.previous.as_ref()?),
        };
        self.previous = Some(current.clone());
        Some(current)
    }
}

/// Lazily iterate generations of `seed`. Generation 0 is the seed.
pub fn generations(seed: &LiveSet) -> Generations {
    Generations { seed: Some(seed.clone()), previous: None }
}

/// Number of generations a run of `iterations` steps produces, seed included
pub fn generation_count(iterations: i64) -> Result<usize, SimulationError> {
    let steps = usize::try_from(iterations).map_err(|_| {
        if iterations < 0 {
            SimulationError::NegativeIterations(iterations)
        } else {
            SimulationError::TooManyIterations(iterations)
        }
    })?;
    steps.checked_add(1).ok_or(SimulationError::TooManyIterations(iterations))
}

/// Run `iterations` steps and collect every generation, seed included.
///
/// Returns `iterations + 1` snapshots. A negative count is rejected
/// before any work is done. Use [`generations`] to stream long runs
/// instead of holding every snapshot.
pub fn simulate(seed: &LiveSet, iterations: i64) -> Result<Vec<LiveSet>, SimulationError> {
    let count = generation_count(iterations)?;
    let history: Vec<LiveSet> = generations(seed).take(count).collect();

    debug!(
        iterations,
        seed_population = seed.len(),
        final_population = history.last().map_or(0, LiveSet::len),
        "simulation finished"
    );
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patterns::presets;

    #[test]
    fn test_zero_iterations_returns_seed() {
        let seed = presets::r_pentomino().cells;
        assert_eq!(simulate(&seed, 0), Ok(vec![seed]));
    }

    #[test]
    fn test_length_is_iterations_plus_one() {
        let seed = presets::glider().cells;
        for n in [1, 2, 7, 30] {
            assert_eq!(simulate(&seed, n).map(|g| g.len()), Ok(n as usize + 1));
        }
    }

    #[test]
    fn test_negative_iterations_rejected() {
        let seed = presets::square().cells;
        assert_eq!(simulate(&seed, -1), Err(SimulationError::NegativeIterations(-1)));
    }

    #[test]
    fn test_generation_count() {
        assert_eq!(generation_count(0), Ok(1));
        assert_eq!(generation_count(41), Ok(42));
        assert_eq!(generation_count(i64::MAX), Ok(i64::MAX as usize + 1));
        assert_eq!(generation_count(i64::MIN), Err(SimulationError::NegativeIterations(i64::MIN)));
    }

    #[test]
    fn test_huge_run_streams_a_prefix() {
        let seed = presets::square().cells;
        let count = generation_count(i64::MAX).unwrap();
        let prefix: Vec<LiveSet> = generations(&seed).take(count).take(3).collect();
        assert_eq!(prefix, vec![seed.clone(), seed.clone(), seed]);
    }

    #[test]
    fn test_generations_step_only_on_demand() {
        let mut stream = generations(&presets::blinker().cells);
        assert_eq!(stream.next(), Some(presets::blinker().cells));
        assert_eq!(stream.previous, Some(presets::blinker().cells));
        assert_eq!(stream.next(), Some(step(&presets::blinker().cells)));
    }

    #[test]
    fn test_generations_follow_stepper() {
        let seed = presets::blinker().cells;
        let history = simulate(&seed, 4).unwrap();

        assert_eq!(history[0], seed);
        for pair in history.windows(2) {
            assert_eq!(step(&pair[0]), pair[1]);
        }
        assert_eq!(history[2], seed);
        assert_eq!(history[4], seed);
    }

    #[test]
    fn test_iterator_matches_simulate() {
        let seed = presets::r_pentomino().cells;
        let lazy: Vec<LiveSet> = generations(&seed).take(11).collect();
        assert_eq!(simulate(&seed, 10).unwrap(), lazy);
    }

    #[test]
    fn test_empty_seed_stays_empty() {
        let history = simulate(&LiveSet::new(), 5).unwrap();
        assert_eq!(history.len(), 6);
        assert!(history.iter().all(LiveSet::is_empty));
    }

    #[test]
    fn test_long_run_square_is_stable() {
        let seed = presets::square().cells;
        let history = simulate(&seed, 200).unwrap();
        assert_eq!(history.len(), 201);
        assert_eq!(history[200], seed);
    }
}

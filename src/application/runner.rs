use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use crate::domain::{LiveSet, PatternError, PatternRegistry, SimulationError, generation_count, generations, soup};
use crate::rendering::{Glyphs, Renderer};

/// Errors surfaced while running a simulation end to end
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Random starting area parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoupConfig {
    pub width: u32,
    pub height: u32,
    pub density: f64,
    pub seed: u64,
}

impl Default for SoupConfig {
    fn default() -> Self {
        Self { width: 16, height: 16, density: 0.35, seed: 0 }
    }
}

/// Where the first generation comes from
#[derive(Clone, Debug, PartialEq)]
pub enum SeedSource {
    /// Look the pattern up in the registry
    Named(String),
    /// Generate a random area
    Soup(SoupConfig),
}

/// Everything needed for one run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub source: SeedSource,
    pub iterations: i64,
    pub glyphs: Glyphs,
}

impl RunConfig {
    pub fn new(source: SeedSource, iterations: i64) -> Self {
        Self { source, iterations, glyphs: Glyphs::default() }
    }

    /// Start from a registry pattern
    pub fn named(pattern: impl Into<String>, iterations: i64) -> Self {
        Self::new(SeedSource::Named(pattern.into()), iterations)
    }

    /// Set the output glyphs (builder pattern)
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }
}

/// Outcome of a completed run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: usize,
    pub final_population: usize,
}

/// Runner coordinates seed lookup, simulation, and output.
/// This is the application layer that ties the domain to a writer.
pub struct Runner<'a> {
    registry: &'a PatternRegistry,
    config: RunConfig,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a PatternRegistry, config: RunConfig) -> Self {
        Self { registry, config }
    }

    /// Resolve the first generation
    pub fn seed(&self) -> Result<LiveSet, PatternError> {
        match &self.config.source {
            SeedSource::Named(name) => Ok(self.registry.get(name)?.cells.clone()),
            SeedSource::Soup(s) => Ok(soup(s.width, s.height, s.density, s.seed)),
        }
    }

    /// Simulate and write every rendered generation to `out` as soon as
    /// it is computed, each followed by a blank line. Nothing is written
    /// if the seed or iteration count is invalid.
    pub fn run(&self, out: &mut impl Write) -> Result<RunSummary, RunError> {
        let seed = self.seed()?;
        let count = generation_count(self.config.iterations)?;

        let renderer = Renderer::new(self.config.glyphs);
        let mut summary = RunSummary { generations: 0, final_population: 0 };
        for generation in generations(&seed).take(count) {
            writeln!(out, "{}", renderer.render(&generation))?;
            summary.generations += 1;
            summary.final_population = generation.len();
        }
        out.flush()?;

        info!(
            source = ?self.config.source,
            generations = summary.generations,
            final_population = summary.final_population,
            "run complete"
        );
        Ok(summary)
    }
}

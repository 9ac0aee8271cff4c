mod runner;

pub use runner::{RunConfig, RunError, RunSummary, Runner, SeedSource, SoupConfig};

//! Sparse Game of Life on the unbounded plane.
//!
//! Usage:
//!     sparse-life rpentomino 50
//!     sparse-life glider 30 --alive '#' --dead '.'
//!     sparse-life soup 100 --width 20 --height 10 --seed 42
//!     sparse-life --list

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sparse_life::application::{RunError, SoupConfig};
use sparse_life::{Glyphs, PatternRegistry, RunConfig, Runner, SeedSource};

/// Pattern name that selects a random starting area
const SOUP: &str = "soup";

/// Run Conway's Game of Life from a named pattern and print each generation
#[derive(Parser, Debug)]
#[command(name = "sparse-life")]
#[command(version)]
#[command(about = "Conway's Game of Life on an unbounded grid", long_about = None)]
struct Cli {
    /// Starting pattern (see --list), or "soup" for a random area
    #[arg(required_unless_present = "list")]
    pattern: Option<String>,

    /// Number of generations to compute after the starting one
    #[arg(required_unless_present = "list", allow_negative_numbers = true)]
    iterations: Option<i64>,

    /// Glyph for live cells
    #[arg(long, default_value_t = Glyphs::default().alive)]
    alive: char,

    /// Glyph for dead cells
    #[arg(long, default_value_t = Glyphs::default().dead)]
    dead: char,

    /// Soup width in cells
    #[arg(long, default_value_t = SoupConfig::default().width)]
    width: u32,

    /// Soup height in cells
    #[arg(long, default_value_t = SoupConfig::default().height)]
    height: u32,

    /// Probability that a soup cell starts alive
    #[arg(long, default_value_t = SoupConfig::default().density)]
    density: f64,

    /// Soup random seed
    #[arg(long, default_value_t = SoupConfig::default().seed)]
    seed: u64,

    /// List available patterns and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    /// Translate parsed arguments into a run configuration
    fn run_config(&self) -> Option<RunConfig> {
        let pattern = self.pattern.as_deref()?;
        let iterations = self.iterations?;

        let source = if pattern == SOUP {
            SeedSource::Soup(SoupConfig {
                width: self.width,
                height: self.height,
                density: self.density,
                seed: self.seed,
            })
        } else {
            SeedSource::Named(pattern.to_owned())
        };

        Some(
            RunConfig::new(source, iterations)
                .with_glyphs(Glyphs { alive: self.alive, dead: self.dead }),
        )
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_patterns(registry: &PatternRegistry) {
    println!("Available patterns:");
    for pattern in registry.iter() {
        println!("  {:<12} {}", pattern.name, pattern.description);
    }
    println!("  {:<12} {}", SOUP, "Random area (--width, --height, --density, --seed)");
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("error: {message}\n");
    eprintln!("{}", Cli::command().render_usage());
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let registry = PatternRegistry::builtin();

    if cli.list {
        print_patterns(&registry);
        return ExitCode::SUCCESS;
    }

    let Some(config) = cli.run_config() else {
        return usage_error("a pattern and an iteration count are required");
    };

    let mut stdout = io::stdout().lock();
    match Runner::new(&registry, config).run(&mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err @ (RunError::Pattern(_) | RunError::Simulation(_))) => usage_error(&err.to_string()),
        Err(RunError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_pattern() {
        let cli = Cli::try_parse_from(["sparse-life", "rpentomino", "50"]).unwrap();
        let config = cli.run_config().unwrap();
        assert_eq!(config, RunConfig::named("rpentomino", 50));
    }

    #[test]
    fn test_negative_iterations_parse() {
        let cli = Cli::try_parse_from(["sparse-life", "glider", "-3"]).unwrap();
        assert_eq!(cli.iterations, Some(-3));
    }

    #[test]
    fn test_non_integer_iterations_rejected() {
        assert!(Cli::try_parse_from(["sparse-life", "glider", "ten"]).is_err());
        assert!(Cli::try_parse_from(["sparse-life", "glider", "2.5"]).is_err());
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["sparse-life"]).is_err());
        assert!(Cli::try_parse_from(["sparse-life", "glider"]).is_err());
    }

    #[test]
    fn test_list_needs_no_positionals() {
        let cli = Cli::try_parse_from(["sparse-life", "--list"]).unwrap();
        assert!(cli.list);
        assert!(cli.run_config().is_none());
    }

    #[test]
    fn test_custom_glyphs() {
        let cli = Cli::try_parse_from(["sparse-life", "square", "2", "--alive", "#", "--dead", "."]).unwrap();
        assert_eq!(cli.run_config().unwrap().glyphs, Glyphs { alive: '#', dead: '.' });
    }

    #[test]
    fn test_soup_source() {
        let cli = Cli::try_parse_from([
            "sparse-life", "soup", "5", "--width", "8", "--height", "4", "--seed", "9",
        ])
        .unwrap();
        let SeedSource::Soup(soup) = cli.run_config().unwrap().source else {
            panic!("expected soup source");
        };
        assert_eq!((soup.width, soup.height, soup.seed), (8, 4, 9));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}

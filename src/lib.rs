// Domain layer - Core Life logic over sparse live-cell sets
pub mod domain;

// Application layer - Run coordination
pub mod application;

// Infrastructure layer - Text output
pub mod rendering;

// Re-exports for convenience
pub use domain::{
    BoundingBox, Coord, LiveSet, Pattern, PatternRegistry, bounding_box, living_neighbors_of,
    neighbors_of, presets, simulate, step, will_be_alive,
};
pub use application::{RunConfig, Runner, SeedSource, SoupConfig};
pub use rendering::{Glyphs, Renderer, render};

mod coord;
mod live_set;
mod bounds;
pub mod rules;
mod stepper;
mod simulator;
pub mod patterns;

pub use coord::Coord;
pub use live_set::LiveSet;
pub use bounds::{BoundingBox, bounding_box};
pub use rules::{ConwayRule, neighbors_of, living_neighbors_of, will_be_alive};
pub use stepper::step;
pub use simulator::{Generations, SimulationError, generation_count, generations, simulate};
pub use patterns::{Pattern, PatternError, PatternRegistry, presets, soup};

use super::{Coord, LiveSet};

/// Relative positions of the eight surrounding cells, top row first.
/// The cell's own position (0, 0) is excluded.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, 1), (0, 1), (1, 1),
    (-1, 0), /* self */ (1, 0),
    (-1, -1), (0, -1), (1, -1),
];

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl ConwayRule {
    /// Apply rule to compute next cell state:
    /// 1. Any cell with exactly 3 live neighbors is alive next generation
    /// 2. A live cell with exactly 2 live neighbors survives
    /// 3. All other cases result in death
    pub const fn evolve(alive: bool, neighbors: usize) -> bool {
        matches!((alive, neighbors), (_, 3) | (true, 2))
    }
}

/// The cells surrounding `cell`, in a fixed order.
/// Always eight, except on the edge of the i64 plane where the missing
/// positions cannot be represented and are skipped.
pub fn neighbors_of(cell: Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(dx, dy)| cell.checked_offset(dx, dy))
}

/// Neighbors of `cell` that are alive in `cells`
pub fn living_neighbors_of(cell: Coord, cells: &LiveSet) -> Vec<Coord> {
    neighbors_of(cell)
        .filter(|&neighbor| cells.contains(neighbor))
        .collect()
}

/// Whether `cell` is alive in the generation after `cells`
pub fn will_be_alive(cell: Coord, cells: &LiveSet) -> bool {
    let neighbors = living_neighbors_of(cell, cells).len();
    ConwayRule::evolve(cells.contains(cell), neighbors)
}

use tracing::trace;

use super::{BoundingBox, LiveSet, rules::will_be_alive};

/// Pure functional evolution - returns the next generation.
///
/// Only cells inside the current bounding box grown by one cell on each
/// side can change state; anything further out has no live neighbors.
pub fn step(cells: &LiveSet) -> LiveSet {
    let search = BoundingBox::of(cells).expand(1);

    let next: LiveSet = search
        .cells()
        .filter(|&cell| will_be_alive(cell, cells))
        .collect();

    trace!(scanned = search.area(), population = next.len(), "stepped generation");
    next
}

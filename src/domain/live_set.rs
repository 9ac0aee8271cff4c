use std::collections::HashSet;
use std::fmt;

use super::Coord;

/// LiveSet holds every live cell of one generation.
/// Duplicates collapse on construction; a generation is never edited after it is built.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Coord>,
}

impl LiveSet {
    /// Empty generation
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw (x, y) pairs
    pub fn from_cells(cells: &[(i64, i64)]) -> Self {
        cells.iter().copied().collect()
    }

    /// Membership test by exact coordinate equality
    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells ordered top row first, left to right within a row
    pub fn sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.iter().collect();
        cells.sort_by(|a, b| b.y.cmp(&a.y).then(a.x.cmp(&b.x)));
        cells
    }

    /// New generation with every cell shifted by (dx, dy).
    /// Cells pushed past the edge of the i64 plane are dropped.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        self.iter().filter_map(|cell| cell.checked_offset(dx, dy)).collect()
    }
}

impl FromIterator<Coord> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for LiveSet {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Coord::from).collect()
    }
}

impl fmt::Display for LiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::rendering::render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let set = LiveSet::from_cells(&[(1, 1), (1, 1), (2, 1)]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = LiveSet::from_cells(&[(1, 0), (2, 0), (3, 0)]);
        let b = LiveSet::from_cells(&[(3, 0), (1, 0), (2, 0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains() {
        let set = LiveSet::from_cells(&[(-1, 4)]);
        assert!(set.contains(Coord::new(-1, 4)));
        assert!(!set.contains(Coord::new(4, -1)));
        assert!(!LiveSet::new().contains(Coord::ORIGIN));
    }

    #[test]
    fn test_sorted_is_top_down_left_to_right() {
        let set = LiveSet::from_cells(&[(0, 0), (2, 1), (1, 1), (5, -3)]);
        assert_eq!(
            set.sorted(),
            vec![Coord::new(1, 1), Coord::new(2, 1), Coord::new(0, 0), Coord::new(5, -3)]
        );
    }

    #[test]
    fn test_translate_leaves_original_untouched() {
        let set = LiveSet::from_cells(&[(0, 0), (1, 2)]);
        let moved = set.translate(3, -1);
        assert_eq!(moved, LiveSet::from_cells(&[(3, -1), (4, 1)]));
        assert_eq!(set, LiveSet::from_cells(&[(0, 0), (1, 2)]));
    }

    #[test]
    fn test_translate_drops_cells_leaving_the_plane() {
        let set = LiveSet::from_cells(&[(i64::MAX, 0), (0, 0)]);
        assert_eq!(set.translate(1, 0), LiveSet::from_cells(&[(1, 0)]));
    }
}

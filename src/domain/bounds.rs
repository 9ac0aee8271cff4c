use super::{Coord, LiveSet};

/// Smallest axis-aligned rectangle covering a generation.
/// X and Y extents are reduced independently, so the corners need not be live cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BoundingBox {
    pub bottom_left: Coord,
    pub top_right: Coord,
}

impl BoundingBox {
    /// Compute the box of a generation. An empty generation yields the
    /// degenerate box with both corners at the origin.
    pub fn of(cells: &LiveSet) -> Self {
        let mut iter = cells.iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        iter.fold(Self { bottom_left: first, top_right: first }, |bounds, cell| Self {
            bottom_left: Coord::new(bounds.bottom_left.x.min(cell.x), bounds.bottom_left.y.min(cell.y)),
            top_right: Coord::new(bounds.top_right.x.max(cell.x), bounds.top_right.y.max(cell.y)),
        })
    }

    /// Grow the box by `margin` cells on every side, stopping at the edge of the i64 plane
    pub const fn expand(self, margin: i64) -> Self {
        Self {
            bottom_left: self.bottom_left.saturating_offset(-margin, -margin),
            top_right: self.top_right.saturating_offset(margin, margin),
        }
    }

    /// Number of columns covered (inclusive), saturating at `u64::MAX`
    pub const fn width(&self) -> u64 {
        self.top_right.x.abs_diff(self.bottom_left.x).saturating_add(1)
    }

    /// Number of rows covered (inclusive), saturating at `u64::MAX`
    pub const fn height(&self) -> u64 {
        self.top_right.y.abs_diff(self.bottom_left.y).saturating_add(1)
    }

    pub const fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub const fn contains(&self, cell: Coord) -> bool {
        cell.x >= self.bottom_left.x
            && cell.x <= self.top_right.x
            && cell.y >= self.bottom_left.y
            && cell.y <= self.top_right.y
    }

    /// Every coordinate inside the box, top row first, left to right
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let Self { bottom_left, top_right } = *self;
        (bottom_left.y..=top_right.y)
            .rev()
            .flat_map(move |y| (bottom_left.x..=top_right.x).map(move |x| Coord::new(x, y)))
    }
}

/// Free-function form of [`BoundingBox::of`]
pub fn bounding_box(cells: &LiveSet) -> BoundingBox {
    BoundingBox::of(cells)
}

/// Coord is a position on the unbounded Life plane.
/// Plain value type: two coordinates are the same cell iff both components match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy), or `None` past the edge of the i64 plane
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Position shifted by (dx, dy), clamped to the i64 plane
    pub const fn saturating_offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_componentwise() {
        assert_eq!(Coord::new(3, -2), Coord::from((3, -2)));
        assert_ne!(Coord::new(3, -2), Coord::new(-2, 3));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Coord::new(1, 1).checked_offset(-1, 2), Some(Coord::new(0, 3)));
        assert_eq!(Coord::ORIGIN.saturating_offset(0, 0), Coord::ORIGIN);
    }

    #[test]
    fn test_offset_at_plane_edge() {
        assert_eq!(Coord::new(i64::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Coord::new(0, i64::MIN).checked_offset(0, -1), None);
        assert_eq!(
            Coord::new(i64::MAX, i64::MIN).saturating_offset(1, -1),
            Coord::new(i64::MAX, i64::MIN)
        );
    }
}

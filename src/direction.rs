use enum_iterator::IntoEnumIterator;

use self::Direction::*;

/// The eight Moore-neighborhood directions around a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// The `(row, col)` offset of the neighbor in this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Right => (0, 1),
            UpRight => (-1, 1),
            Up => (-1, 0),
            UpLeft => (-1, -1),
            Left => (0, -1),
            DownLeft => (1, -1),
            Down => (1, 0),
            DownRight => (1, 1),
        }
    }

    /// The neighbor of `(row, col)` in this direction.
    ///
    /// Callers only offset interior coordinates, where every neighbor stays
    /// within the domain.
    #[inline]
    pub fn offset(self, row: usize, col: usize) -> (usize, usize) {
        let (dr, dc) = self.delta();
        ((row as isize + dr) as usize, (col as isize + dc) as usize)
    }
}

//! Board coordinates.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A (row, col) coordinate on the board.
///
/// Row 0 is White's back rank and rows increase in White's forward
/// direction; col 0 is the a-file. Coordinates outside `0..8` are
/// representable so that stepping past an edge yields a value that can be
/// checked with [`Coord::is_on_board`] instead of overflowing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Returns the coordinate shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, row_delta: i8, col_delta: i8) -> Self {
        Coord {
            row: self.row.saturating_add(row_delta),
            col: self.col.saturating_add(col_delta),
        }
    }

    /// Returns true if both row and col lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns `(row, col)` as array indices, or `None` when off the board.
    #[inline]
    pub const fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Parses a coordinate from algebraic notation (e.g., "e4" is row 3, col 4).
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Coord::new((rank - b'1') as i8, (file - b'a') as i8))
    }

    /// Returns the algebraic notation, or `None` when off the board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    /// Iterates over every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn coord_bounds() {
        assert!(Coord::new(0, 0).is_on_board());
        assert!(Coord::new(7, 7).is_on_board());
        assert!(!Coord::new(-1, 0).is_on_board());
        assert!(!Coord::new(0, 8).is_on_board());
        assert_eq!(Coord::new(8, 3).indices(), None);
        assert_eq!(Coord::new(2, 5).indices(), Some((2, 5)));
    }

    #[test]
    fn coord_offset() {
        assert_eq!(Coord::new(3, 3).offset(1, -2), Coord::new(4, 1));
        assert_eq!(Coord::new(0, 0).offset(-1, -1), Coord::new(-1, -1));
    }

    #[test]
    fn coord_from_algebraic() {
        assert_eq!(Coord::from_algebraic("a1"), Some(Coord::new(0, 0)));
        assert_eq!(Coord::from_algebraic("e4"), Some(Coord::new(3, 4)));
        assert_eq!(Coord::from_algebraic("H8"), Some(Coord::new(7, 7)));
        assert_eq!(Coord::from_algebraic("i1"), None);
        assert_eq!(Coord::from_algebraic("a9"), None);
        assert_eq!(Coord::from_algebraic(""), None);
    }

    #[test]
    fn coord_display() {
        assert_eq!(format!("{}", Coord::new(1, 4)), "e2");
        assert_eq!(format!("{}", Coord::new(-1, 4)), "(-1, 4)");
        assert_eq!(format!("{:?}", Coord::new(1, 4)), "Coord(1, 4)");
    }

    #[test]
    fn all_coords() {
        let all: Vec<Coord> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[9], Coord::new(1, 1));
        assert_eq!(all[63], Coord::new(7, 7));
    }

    proptest! {
        #[test]
        fn algebraic_is_consistent(row in 0i8..8, col in 0i8..8) {
            let coord = Coord::new(row, col);
            let text = coord.to_algebraic().unwrap();
            prop_assert_eq!(Coord::from_algebraic(&text), Some(coord));
        }
    }
}

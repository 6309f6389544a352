//! Fixed-capacity move list.

use chess_core::{CandidateMove, Coord};

/// A list of candidate moves for one piece.
///
/// A single piece never has more than 27 pseudo-legal destinations (a
/// centralized queen), so a fixed-size array avoids heap allocation.
#[derive(Clone)]
pub struct MoveList {
    moves: [CandidateMove; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Capacity of the list.
    pub const MAX_MOVES: usize = 32;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [CandidateMove::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: CandidateMove) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[CandidateMove] {
        &self.moves[..self.len]
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateMove> {
        self.as_slice().iter()
    }

    /// Returns the move landing on `to`, if any.
    pub fn find_to(&self, to: Coord) -> Option<&CandidateMove> {
        self.iter().find(|m| m.to == to)
    }

    /// Returns true if some move lands on `to`.
    #[inline]
    pub fn contains_to(&self, to: Coord) -> bool {
        self.find_to(to).is_some()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::ops::Index<usize> for MoveList {
    type Output = CandidateMove;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a CandidateMove;
    type IntoIter = std::slice::Iter<'a, CandidateMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(row: i8, col: i8) -> CandidateMove {
        CandidateMove::quiet(Coord::new(0, 0), Coord::new(row, col))
    }

    #[test]
    fn push_and_read() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.push(quiet(1, 0));
        list.push(quiet(2, 0));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], quiet(2, 0));
        assert_eq!(list.as_slice(), &[quiet(1, 0), quiet(2, 0)]);
    }

    #[test]
    fn find_by_destination() {
        let mut list = MoveList::new();
        list.push(quiet(1, 0));
        assert!(list.contains_to(Coord::new(1, 0)));
        assert!(!list.contains_to(Coord::new(0, 1)));
        assert_eq!(list.find_to(Coord::new(1, 0)), Some(&quiet(1, 0)));
    }

    #[test]
    fn equality_ignores_unused_slots() {
        let mut a = MoveList::new();
        let mut b = MoveList::new();
        a.push(quiet(3, 3));
        b.push(quiet(3, 3));
        assert_eq!(a, b);

        b.push(quiet(4, 4));
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let list = MoveList::new();
        let _ = list[0];
    }

    #[test]
    fn debug_lists_moves() {
        let mut list = MoveList::new();
        list.push(quiet(1, 0));
        assert_eq!(format!("{:?}", list), "[Move(a1a2)]");
    }
}

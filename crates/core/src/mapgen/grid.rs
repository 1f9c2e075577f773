//! Candidate grid adjacencies, including torus wrap edges, for spanning-tree construction.

use crate::topology::LocationIndex;
use crate::types::Direction;

/// Wrapping a side shorter than this would duplicate an existing neighbour pair.
const MIN_WRAP_SIDE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Candidate {
    pub(super) from: LocationIndex,
    pub(super) direction: Direction,
    pub(super) to: LocationIndex,
}

impl Candidate {
    pub(super) fn opening(self) -> (LocationIndex, Direction, LocationIndex) {
        (self.from, self.direction, self.to)
    }
}

/// Every east and south adjacency of the grid. With `wrap`, the last column links
/// back to the first and the last row links back to the top.
pub(super) fn candidate_edges(rows: usize, cols: usize, wrap: bool) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(2 * rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let from = row * cols + col;
            if col + 1 < cols {
                candidates.push(Candidate { from, direction: Direction::East, to: from + 1 });
            } else if wrap && cols >= MIN_WRAP_SIDE {
                candidates.push(Candidate { from, direction: Direction::East, to: row * cols });
            }
            if row + 1 < rows {
                candidates.push(Candidate { from, direction: Direction::South, to: from + cols });
            } else if wrap && rows >= MIN_WRAP_SIDE {
                candidates.push(Candidate { from, direction: Direction::South, to: col });
            }
        }
    }
    candidates
}

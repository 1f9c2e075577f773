//! Immutable dungeon graph: a flat row-major location store with per-direction links.
//! This module owns cave/tunnel classification and breadth-first hop distances.
//! It does not own entity placement or any mutable play state.

use std::collections::VecDeque;
use std::fmt;

use crate::types::{Direction, LocationKind, Pos};

/// Row-major index into the location store.
pub type LocationIndex = usize;

/// An undirected edge, recorded once from the endpoint whose opening points at `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Pos,
    pub direction: Direction,
    pub to: Pos,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-{}-> {}", self.from, self.direction, self.to)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    rows: usize,
    cols: usize,
    wrap: bool,
    links: Vec<[Option<LocationIndex>; 4]>,
    kinds: Vec<LocationKind>,
    edges: Vec<Edge>,
}

pub(crate) fn classify(degree: usize) -> LocationKind {
    if degree == 2 { LocationKind::Tunnel } else { LocationKind::Cave }
}

impl Topology {
    /// Builds the graph from accepted `(from, direction, to)` openings and classifies
    /// every location once. Openings are mirrored so edges are always symmetric.
    pub(crate) fn from_openings(
        rows: usize,
        cols: usize,
        wrap: bool,
        openings: &[(LocationIndex, Direction, LocationIndex)],
    ) -> Self {
        let mut links = vec![[None; 4]; rows * cols];
        let mut edges = Vec::with_capacity(openings.len());
        for &(from, direction, to) in openings {
            debug_assert_ne!(from, to, "self loops are never accepted");
            links[from][direction.slot()] = Some(to);
            links[to][direction.opposite().slot()] = Some(from);
            edges.push(Edge {
                from: index_to_pos(cols, from),
                direction,
                to: index_to_pos(cols, to),
            });
        }
        edges.sort_by_key(|edge| (edge.from, edge.direction));

        let kinds = links
            .iter()
            .map(|slots| classify(slots.iter().filter(|slot| slot.is_some()).count()))
            .collect();

        Self { rows, cols, wrap, links, kinds, edges }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn index(&self, pos: Pos) -> Option<LocationIndex> {
        (pos.row < self.rows && pos.col < self.cols).then_some(pos.row * self.cols + pos.col)
    }

    pub fn pos(&self, index: LocationIndex) -> Pos {
        index_to_pos(self.cols, index)
    }

    pub fn kind_at(&self, index: LocationIndex) -> LocationKind {
        self.kinds[index]
    }

    pub fn kind(&self, pos: Pos) -> Option<LocationKind> {
        self.index(pos).map(|index| self.kinds[index])
    }

    pub fn neighbor(&self, index: LocationIndex, direction: Direction) -> Option<LocationIndex> {
        self.links[index][direction.slot()]
    }

    pub fn open_directions(&self, index: LocationIndex) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| self.links[index][direction.slot()].is_some())
            .collect()
    }

    pub fn degree(&self, index: LocationIndex) -> usize {
        self.links[index].iter().filter(|slot| slot.is_some()).count()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn caves(&self) -> Vec<LocationIndex> {
        (0..self.len()).filter(|&index| self.kinds[index] == LocationKind::Cave).collect()
    }

    /// Hop distance from `origin` to every location; `None` when unreachable.
    pub fn distances_from(&self, origin: LocationIndex) -> Vec<Option<usize>> {
        let mut distances = vec![None; self.len()];
        let mut queue = VecDeque::new();
        distances[origin] = Some(0);
        queue.push_back(origin);

        while let Some(current) = queue.pop_front() {
            let next_distance = distances[current].map(|distance| distance + 1);
            for neighbor in self.links[current].iter().flatten() {
                if distances[*neighbor].is_none() {
                    distances[*neighbor] = next_distance;
                    queue.push_back(*neighbor);
                }
            }
        }

        distances
    }

    pub fn distance(&self, from: LocationIndex, to: LocationIndex) -> Option<usize> {
        self.distances_from(from)[to]
    }

    pub fn is_connected(&self) -> bool {
        self.is_empty() || self.distances_from(0).iter().all(Option::is_some)
    }
}

fn index_to_pos(cols: usize, index: LocationIndex) -> Pos {
    Pos { row: index / cols, col: index % cols }
}

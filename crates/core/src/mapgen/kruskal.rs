//! Disjoint-set union and randomized Kruskal spanning-tree selection.

use std::cmp::Ordering;

use super::grid::Candidate;

pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(len: usize) -> Self {
        Self { parent: (0..len).collect(), rank: vec![0; len], components: len }
    }

    pub(super) fn find(&mut self, item: usize) -> usize {
        let mut root = item;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = item;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Joins the sets holding `a` and `b`; false when they were already joined.
    pub(super) fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.components -= 1;
        true
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }
}

pub(super) struct SpanningForest {
    pub(super) tree: Vec<Candidate>,
    pub(super) leftovers: Vec<Candidate>,
}

/// Walks `candidates` in order, keeping each edge that joins two components.
/// Everything not kept lands in `leftovers`, in its original order.
pub(super) fn spanning_tree(location_count: usize, candidates: Vec<Candidate>) -> SpanningForest {
    let mut sets = DisjointSet::new(location_count);
    let mut tree = Vec::with_capacity(location_count.saturating_sub(1));
    let mut leftovers = Vec::new();

    for candidate in candidates {
        if sets.components() > 1 && sets.union(candidate.from, candidate.to) {
            tree.push(candidate);
        } else {
            leftovers.push(candidate);
        }
    }

    SpanningForest { tree, leftovers }
}

//! Graph construction: shuffled candidates, Kruskal tree, then extra cycle-forming edges.

use log::warn;

use crate::config::DungeonConfig;
use crate::random::{Randomness, sample, shuffle};
use crate::topology::Topology;

use super::grid::candidate_edges;
use super::kruskal::spanning_tree;

pub(super) fn build_topology(config: &DungeonConfig, rng: &mut impl Randomness) -> Topology {
    let mut candidates = candidate_edges(config.rows, config.cols, config.wrap);
    shuffle(rng, &mut candidates);

    let forest = spanning_tree(config.location_count(), candidates);

    let requested = config.extra_edges();
    if requested > forest.leftovers.len() {
        warn!(
            "requested {requested} extra edges but only {} remain outside the spanning tree",
            forest.leftovers.len()
        );
    }
    let extras = sample(rng, &forest.leftovers, requested);

    let openings: Vec<_> =
        forest.tree.iter().chain(extras.iter()).map(|candidate| candidate.opening()).collect();
    Topology::from_openings(config.rows, config.cols, config.wrap, &openings)
}

/// The graph every seed converges to once the extra edges cover all leftover adjacencies.
pub(super) fn saturated_topology(config: &DungeonConfig) -> Option<Topology> {
    let candidates = candidate_edges(config.rows, config.cols, config.wrap);
    let leftovers = candidates.len().saturating_sub(config.location_count().saturating_sub(1));
    if config.extra_edges() < leftovers {
        return None;
    }
    let openings: Vec<_> = candidates.iter().map(|candidate| candidate.opening()).collect();
    Some(Topology::from_openings(config.rows, config.cols, config.wrap, &openings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    fn config(rows: usize, cols: usize, interconnectivity: i64, wrap: bool) -> DungeonConfig {
        DungeonConfig { rows, cols, interconnectivity, wrap, ..DungeonConfig::default() }
    }

    #[test]
    fn tree_plus_requested_extras_sets_edge_count() {
        let mut rng = SeededRandom::new(41);
        let topology = build_topology(&config(5, 6, 4, false), &mut rng);
        assert_eq!(topology.edges().len(), 5 * 6 - 1 + 4);
        assert!(topology.is_connected());
    }

    #[test]
    fn extra_edges_clamp_to_available_candidates() {
        let mut rng = SeededRandom::new(5);
        let topology = build_topology(&config(3, 3, 1_000, false), &mut rng);
        assert_eq!(topology.edges().len(), 12, "a 3x3 grid has 12 adjacencies in total");
        assert!(topology.is_connected());
    }

    #[test]
    fn fully_wrapped_grid_gives_every_location_four_openings() {
        let mut rng = SeededRandom::new(8);
        let topology = build_topology(&config(4, 4, 1_000, true), &mut rng);
        assert_eq!(topology.edges().len(), 32);
        assert!((0..topology.len()).all(|index| topology.degree(index) == 4));
    }

    #[test]
    fn saturated_topology_matches_a_fully_connected_build() {
        let settings = config(3, 4, 1_000, false);
        let full = saturated_topology(&settings).expect("every leftover is requested");
        assert_eq!(full, build_topology(&settings, &mut SeededRandom::new(3)));
        assert_eq!(saturated_topology(&config(3, 4, 2, false)), None);
    }

    #[test]
    fn same_stream_builds_same_graph() {
        let settings = config(6, 7, 3, true);
        let left = build_topology(&settings, &mut SeededRandom::new(77));
        let right = build_topology(&settings, &mut SeededRandom::new(77));
        assert_eq!(left, right);
    }
}

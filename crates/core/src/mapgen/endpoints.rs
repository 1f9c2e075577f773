//! Start/end selection: a uniformly random ordered cave pair at least
//! `MIN_PATH_LENGTH` hops apart.

use std::collections::BTreeMap;

use log::debug;

use crate::config::MIN_PATH_LENGTH;
use crate::random::Randomness;
use crate::topology::{LocationIndex, Topology};

const ENDPOINT_SAMPLES: usize = 256;

fn far_enough(distance: Option<usize>) -> bool {
    distance.is_some_and(|hops| hops >= MIN_PATH_LENGTH)
}

/// Whether any cave pair is far enough apart. Stops at the first qualifying start.
pub(super) fn has_far_cave_pair(topology: &Topology) -> bool {
    let caves = topology.caves();
    caves.iter().any(|&start| {
        let distances = topology.distances_from(start);
        caves.iter().any(|&end| far_enough(distances[end]))
    })
}

/// Returns `(start, end)`, or `None` when no cave pair is far enough apart.
pub(super) fn choose_endpoints(
    topology: &Topology,
    rng: &mut impl Randomness,
) -> Option<(LocationIndex, LocationIndex)> {
    let caves = topology.caves();
    if caves.len() < 2 {
        return None;
    }

    let mut distance_cache: BTreeMap<LocationIndex, Vec<Option<usize>>> = BTreeMap::new();
    for _ in 0..ENDPOINT_SAMPLES {
        let start = caves[rng.below(caves.len())];
        let end = caves[rng.below(caves.len())];
        let distances =
            distance_cache.entry(start).or_insert_with(|| topology.distances_from(start));
        if far_enough(distances[end]) {
            return Some((start, end));
        }
    }

    // Rejection sampling is uniform over qualifying pairs, and so is this draw.
    debug!("endpoint sampling missed {ENDPOINT_SAMPLES} times, enumerating cave pairs");
    let qualifying: Vec<(LocationIndex, LocationIndex)> = caves
        .iter()
        .flat_map(|&start| {
            let distances = topology.distances_from(start);
            caves
                .iter()
                .filter(move |&&end| far_enough(distances[end]))
                .map(move |&end| (start, end))
                .collect::<Vec<_>>()
        })
        .collect();

    if qualifying.is_empty() {
        return None;
    }
    Some(qualifying[rng.below(qualifying.len())])
}

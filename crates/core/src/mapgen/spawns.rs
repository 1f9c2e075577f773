//! Otyugh, treasure, and arrow placement rules for generated dungeons.

use crate::config::DungeonConfig;
use crate::random::{Randomness, sample};
use crate::topology::{LocationIndex, Topology};
use crate::types::Gem;

use super::model::TreasureSpawn;

pub(super) struct SpawnContext<'a> {
    pub(super) config: &'a DungeonConfig,
    pub(super) topology: &'a Topology,
    pub(super) start: LocationIndex,
    pub(super) end: LocationIndex,
}

/// One Otyugh always guards the end; the rest take distinct caves other than the
/// start. `None` when the dungeon has too few caves for the requested count.
pub(super) fn generate_monster_spawns(
    context: &SpawnContext<'_>,
    rng: &mut impl Randomness,
) -> Option<Vec<LocationIndex>> {
    let others: Vec<LocationIndex> = context
        .topology
        .caves()
        .into_iter()
        .filter(|&cave| cave != context.start && cave != context.end)
        .collect();
    let remaining = context.config.monster_count.saturating_sub(1);
    if others.len() < remaining {
        return None;
    }

    let mut spawns = Vec::with_capacity(context.config.monster_count);
    spawns.push(context.end);
    spawns.extend(sample(rng, &others, remaining));
    Some(spawns)
}

/// Picks a rounded-up share of caves, each receiving a single random gem.
pub(super) fn generate_treasure_spawns(
    context: &SpawnContext<'_>,
    rng: &mut impl Randomness,
) -> Vec<TreasureSpawn> {
    let caves = context.topology.caves();
    let count = context.config.percentage_of(caves.len());
    sample(rng, &caves, count)
        .into_iter()
        .map(|location| TreasureSpawn { location, gem: Gem::ALL[rng.below(Gem::ALL.len())] })
        .collect()
}

/// Picks the same rounded-up share of all locations, caves and tunnels alike.
pub(super) fn generate_arrow_spawns(
    context: &SpawnContext<'_>,
    rng: &mut impl Randomness,
) -> Vec<LocationIndex> {
    let locations: Vec<LocationIndex> = (0..context.topology.len()).collect();
    let count = context.config.percentage_of(locations.len());
    sample(rng, &locations, count)
}

//! Procedural dungeon generation split into coherent submodules.

pub mod model;

mod endpoints;
mod generator;
mod grid;
mod kruskal;
mod layout;
mod spawns;

pub use generator::{DungeonGenerator, MAX_GENERATION_ATTEMPTS};
pub use model::{GeneratedDungeon, TreasureSpawn};

use crate::config::DungeonConfig;
use crate::error::{ConfigError, GameError};
use crate::random::Randomness;

use endpoints::has_far_cave_pair;
use layout::saturated_topology;

pub fn generate_dungeon(
    config: &DungeonConfig,
    rng: &mut impl Randomness,
) -> Result<GeneratedDungeon, GameError> {
    Ok(DungeonGenerator::new(config)?.generate(rng)?)
}

/// Rejects configs whose extra edges use up every adjacency of a grid too small for a
/// long enough start-to-end path. Sparser configs are settled by generation itself.
pub(crate) fn check_connectivity(config: &DungeonConfig) -> Result<(), ConfigError> {
    if saturated_topology(config).is_some_and(|full| !has_far_cave_pair(&full)) {
        return Err(ConfigError::TooConnected {
            rows: config.rows,
            cols: config.cols,
            interconnectivity: config.interconnectivity,
        });
    }
    Ok(())
}

//! High-level dungeon generation that composes layout, endpoints, and spawns,
//! restarting from a fresh graph whenever a layout cannot satisfy placement rules.

use log::{debug, info};

use crate::config::DungeonConfig;
use crate::error::{ConfigError, GenerationError};
use crate::random::Randomness;

use super::endpoints::choose_endpoints;
use super::layout::build_topology;
use super::model::GeneratedDungeon;
use super::spawns::{
    SpawnContext, generate_arrow_spawns, generate_monster_spawns, generate_treasure_spawns,
};

pub const MAX_GENERATION_ATTEMPTS: u32 = 256;

pub struct DungeonGenerator {
    config: DungeonConfig,
}

impl DungeonGenerator {
    pub fn new(config: &DungeonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config: config.clone() })
    }

    pub fn generate(
        &self,
        rng: &mut impl Randomness,
    ) -> Result<GeneratedDungeon, GenerationError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            if let Some(generated) = self.try_generate(rng) {
                info!(
                    "generated {}x{} dungeon on attempt {attempt}: {} edges, {} caves, start {} end {}",
                    self.config.rows,
                    self.config.cols,
                    generated.topology.edges().len(),
                    generated.topology.caves().len(),
                    generated.topology.pos(generated.start),
                    generated.topology.pos(generated.end),
                );
                return Ok(generated);
            }
        }
        Err(GenerationError::Exhausted { attempts: MAX_GENERATION_ATTEMPTS })
    }

    fn try_generate(&self, rng: &mut impl Randomness) -> Option<GeneratedDungeon> {
        let topology = build_topology(&self.config, rng);

        let Some((start, end)) = choose_endpoints(&topology, rng) else {
            debug!("no cave pair far enough apart, rebuilding graph");
            return None;
        };

        let context = SpawnContext { config: &self.config, topology: &topology, start, end };
        let Some(monster_spawns) = generate_monster_spawns(&context, rng) else {
            debug!(
                "{} caves cannot hold {} otyughs, rebuilding graph",
                topology.caves().len(),
                self.config.monster_count
            );
            return None;
        };
        let treasure_spawns = generate_treasure_spawns(&context, rng);
        let arrow_spawns = generate_arrow_spawns(&context, rng);

        Some(GeneratedDungeon { topology, start, end, monster_spawns, treasure_spawns, arrow_spawns })
    }
}

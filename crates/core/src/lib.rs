pub mod config;
pub mod error;
pub mod game;
pub mod mapgen;
pub mod random;
pub mod state;
pub mod topology;
pub mod types;

pub use config::DungeonConfig;
pub use error::{ActionError, ConfigError, GameError, GenerationError, StateError};
pub use game::{DungeonSummary, Game};
pub use mapgen::{DungeonGenerator, GeneratedDungeon, generate_dungeon};
pub use random::{Randomness, SeededRandom};
pub use state::Dungeon;
pub use topology::{Edge, LocationIndex, Topology};
pub use types::*;

//! Error taxonomy for dungeon construction and play.
//! Configuration and state errors are caller bugs; action errors are recoverable rejections.

use thiserror::Error;

use crate::config::{MAX_LOCATIONS, MIN_LOCATIONS, MIN_PATH_LENGTH, MIN_SIDE};
use crate::types::{Direction, GameStatus, ItemKind};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("dungeon must be at least {min}x{min}, got {rows}x{cols}", min = MIN_SIDE)]
    TooSmall { rows: usize, cols: usize },
    #[error("a {rows}x{cols} dungeon has fewer than {min} locations", min = MIN_LOCATIONS)]
    TooFewLocations { rows: usize, cols: usize },
    #[error("a {rows}x{cols} dungeon exceeds {max} locations", max = MAX_LOCATIONS)]
    TooLarge { rows: usize, cols: usize },
    #[error("interconnectivity must not be negative, got {0}")]
    NegativeInterconnectivity(i64),
    #[error("treasure percentage must be within 0..=100, got {0}")]
    PercentageOutOfRange(i64),
    #[error("at least one otyugh is required")]
    NoMonsters,
    #[error("{monster_count} otyughs do not fit in {locations} locations beside the start")]
    TooManyMonsters { monster_count: usize, locations: usize },
    #[error(
        "{interconnectivity} extra edges fill the {rows}x{cols} grid so no two caves are {min} hops apart",
        min = MIN_PATH_LENGTH
    )]
    TooConnected { rows: usize, cols: usize, interconnectivity: i64 },
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
    #[error("unknown item {0:?}")]
    UnknownItem(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("player does not exist for this game")]
    PlayerNotCreated,
    #[error("player is already created for this game")]
    PlayerAlreadyCreated,
    #[error("player has not entered the dungeon")]
    PlayerNotInDungeon,
    #[error("player is already in the dungeon")]
    PlayerAlreadyInDungeon,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("invalid move: no opening to the {0}")]
    InvalidMove(Direction),
    #[error("cannot pick up {requested} {item:?}, only {available} here")]
    InvalidPickup { item: ItemKind, requested: u32, available: u32 },
    #[error("arrow cannot travel {distance} hops to the {direction}")]
    ShotBlocked { direction: Direction, distance: usize },
    #[error("out of arrows")]
    OutOfArrows,
    #[error("game is over ({0:?})")]
    GameOver(GameStatus),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no usable dungeon after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl GameError {
    /// Whether the caller may retry the same game with corrected input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Action(_))
    }
}

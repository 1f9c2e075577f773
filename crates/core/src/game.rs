//! Turn-based play over a generated dungeon.
//! This file owns the player lifecycle, the active/dead/won state machine, and read-only queries.
//! Moves, pickups, shots, and sensing live in focused submodules.

use log::debug;

use crate::config::DungeonConfig;
use crate::error::{ActionError, GameError, StateError};
use crate::mapgen::generate_dungeon;
use crate::random::{Randomness, SeededRandom};
use crate::state::{Dungeon, Player};
use crate::topology::Edge;
use crate::types::*;

mod archery;
mod hash;
mod items;
mod movement;
mod senses;
mod summary;
#[cfg(test)]
mod test_support;

pub use summary::{DungeonSummary, OtyughSummary, StashSummary};

#[derive(Clone, Debug)]
enum PlayerSlot {
    Absent,
    Created(ItemCounts),
    InDungeon(Player),
}

/// One isolated play session: a dungeon, its randomness, and the single player.
pub struct Game<R: Randomness = SeededRandom> {
    dungeon: Dungeon,
    rng: R,
    player: PlayerSlot,
    status: GameStatus,
    log: Vec<LogEvent>,
}

impl Game<SeededRandom> {
    pub fn from_seed(config: &DungeonConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, SeededRandom::new(seed))
    }
}

impl<R: Randomness> Game<R> {
    /// Generates the dungeon. The player still has to be created and placed.
    pub fn new(config: &DungeonConfig, mut rng: R) -> Result<Self, GameError> {
        let generated = generate_dungeon(config, &mut rng)?;
        Ok(Self::with_dungeon(Dungeon::install(generated), rng))
    }

    /// Generates the dungeon and places a fresh player at the start.
    pub fn start(config: &DungeonConfig, rng: R) -> Result<Self, GameError> {
        let mut game = Self::new(config, rng)?;
        game.create_player()?;
        game.enter_dungeon()?;
        Ok(game)
    }

    pub(crate) fn with_dungeon(dungeon: Dungeon, rng: R) -> Self {
        Self { dungeon, rng, player: PlayerSlot::Absent, status: GameStatus::Active, log: Vec::new() }
    }

    pub fn create_player(&mut self) -> Result<(), GameError> {
        if !matches!(self.player, PlayerSlot::Absent) {
            return Err(StateError::PlayerAlreadyCreated.into());
        }
        self.player = PlayerSlot::Created(Player::starting_inventory());
        Ok(())
    }

    pub fn enter_dungeon(&mut self) -> Result<(), GameError> {
        let inventory = match &self.player {
            PlayerSlot::Absent => return Err(StateError::PlayerNotCreated.into()),
            PlayerSlot::InDungeon(_) => return Err(StateError::PlayerAlreadyInDungeon.into()),
            PlayerSlot::Created(inventory) => *inventory,
        };
        let start = self.dungeon.start();
        self.player = PlayerSlot::InDungeon(Player { location: start, inventory });
        let at = self.dungeon.topology().pos(start);
        debug!("player entered the dungeon at {at}");
        self.log.push(LogEvent::PlayerEntered { at });
        Ok(())
    }

    fn player(&self) -> Result<&Player, StateError> {
        match &self.player {
            PlayerSlot::InDungeon(player) => Ok(player),
            PlayerSlot::Created(_) => Err(StateError::PlayerNotInDungeon),
            PlayerSlot::Absent => Err(StateError::PlayerNotCreated),
        }
    }

    fn player_mut(&mut self) -> Result<&mut Player, StateError> {
        match &mut self.player {
            PlayerSlot::InDungeon(player) => Ok(player),
            PlayerSlot::Created(_) => Err(StateError::PlayerNotInDungeon),
            PlayerSlot::Absent => Err(StateError::PlayerNotCreated),
        }
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        match self.status {
            GameStatus::Active => Ok(()),
            finished => Err(ActionError::GameOver(finished)),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_player_dead(&self) -> bool {
        self.status == GameStatus::Dead
    }

    pub fn has_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Active
    }

    pub fn player_location(&self) -> Result<Pos, GameError> {
        let player = self.player()?;
        Ok(self.dungeon.topology().pos(player.location))
    }

    pub fn inventory(&self) -> Result<ItemCounts, GameError> {
        Ok(self.player()?.inventory)
    }

    /// What is lying at the player's location.
    pub fn items_here(&self) -> Result<ItemCounts, GameError> {
        let player = self.player()?;
        Ok(self.dungeon.location(player.location).items)
    }

    pub fn open_directions(&self) -> Result<Vec<Direction>, GameError> {
        let player = self.player()?;
        Ok(self.dungeon.topology().open_directions(player.location))
    }

    pub fn start_location(&self) -> Pos {
        self.dungeon.topology().pos(self.dungeon.start())
    }

    pub fn end_location(&self) -> Pos {
        self.dungeon.topology().pos(self.dungeon.end())
    }

    pub fn edges(&self) -> &[Edge] {
        self.dungeon.topology().edges()
    }

    pub fn location_kind(&self, pos: Pos) -> Option<LocationKind> {
        self.dungeon.topology().kind(pos)
    }

    /// Positions of every Otyugh still alive.
    pub fn monster_locations(&self) -> Vec<Pos> {
        let mut positions: Vec<Pos> = self
            .dungeon
            .live_monsters()
            .map(|otyugh| self.dungeon.topology().pos(otyugh.location))
            .collect();
        positions.sort();
        positions
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }
}

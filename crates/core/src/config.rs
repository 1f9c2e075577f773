//! Construction parameters for a dungeon and their validation rules.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mapgen::check_connectivity;

pub const MIN_SIDE: usize = 2;
/// Minimum hop distance between the start and end locations.
pub const MIN_PATH_LENGTH: usize = 5;
/// A path of `MIN_PATH_LENGTH` hops needs this many distinct locations.
pub const MIN_LOCATIONS: usize = MIN_PATH_LENGTH + 1;
/// Upper bound on `rows * cols`, which keeps every percentage product inside `usize`.
pub const MAX_LOCATIONS: usize = 1_000_000;
pub const STARTING_ARROWS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub rows: usize,
    pub cols: usize,
    /// Extra edges added on top of the spanning tree.
    pub interconnectivity: i64,
    pub wrap: bool,
    /// Percentage of caves given treasure, and of all locations given an arrow.
    pub treasure_percentage: i64,
    pub monster_count: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 8,
            interconnectivity: 2,
            wrap: false,
            treasure_percentage: 20,
            monster_count: 2,
        }
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_SIDE || self.cols < MIN_SIDE {
            return Err(ConfigError::TooSmall { rows: self.rows, cols: self.cols });
        }
        let locations = match self.rows.checked_mul(self.cols) {
            Some(locations) if locations <= MAX_LOCATIONS => locations,
            _ => return Err(ConfigError::TooLarge { rows: self.rows, cols: self.cols }),
        };
        if locations < MIN_LOCATIONS {
            return Err(ConfigError::TooFewLocations { rows: self.rows, cols: self.cols });
        }
        if self.interconnectivity < 0 {
            return Err(ConfigError::NegativeInterconnectivity(self.interconnectivity));
        }
        if !(0..=100).contains(&self.treasure_percentage) {
            return Err(ConfigError::PercentageOutOfRange(self.treasure_percentage));
        }
        if self.monster_count < 1 {
            return Err(ConfigError::NoMonsters);
        }
        // The start location never holds an Otyugh.
        if self.monster_count >= locations {
            let monster_count = self.monster_count;
            return Err(ConfigError::TooManyMonsters { monster_count, locations });
        }
        check_connectivity(self)
    }

    pub fn location_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub(crate) fn extra_edges(&self) -> usize {
        usize::try_from(self.interconnectivity).unwrap_or(0)
    }

    /// Share of `total` covered by the treasure percentage, rounded up.
    pub(crate) fn percentage_of(&self, total: usize) -> usize {
        let percentage = usize::try_from(self.treasure_percentage).unwrap_or(0);
        (total * percentage).div_ceil(100)
    }
}

//! Public data models for a generated dungeon before it is installed into play state.

use crate::topology::{LocationIndex, Topology};
use crate::types::{Direction, Gem, LocationKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreasureSpawn {
    pub location: LocationIndex,
    pub gem: Gem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedDungeon {
    pub topology: Topology,
    pub start: LocationIndex,
    pub end: LocationIndex,
    /// The end location is always first.
    pub monster_spawns: Vec<LocationIndex>,
    pub treasure_spawns: Vec<TreasureSpawn>,
    pub arrow_spawns: Vec<LocationIndex>,
}

impl GeneratedDungeon {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.topology.rows() as u32).to_le_bytes());
        bytes.extend((self.topology.cols() as u32).to_le_bytes());
        bytes.push(u8::from(self.topology.wraps()));
        for index in 0..self.topology.len() {
            let mut mask = 0_u8;
            for direction in self.topology.open_directions(index) {
                mask |= match direction {
                    Direction::North => 1,
                    Direction::East => 2,
                    Direction::South => 4,
                    Direction::West => 8,
                };
            }
            bytes.push(mask);
            bytes.push(match self.topology.kind_at(index) {
                LocationKind::Cave => 0,
                LocationKind::Tunnel => 1,
            });
        }
        bytes.extend((self.start as u32).to_le_bytes());
        bytes.extend((self.end as u32).to_le_bytes());

        bytes.extend((self.monster_spawns.len() as u32).to_le_bytes());
        for &location in &self.monster_spawns {
            bytes.extend((location as u32).to_le_bytes());
        }

        bytes.extend((self.treasure_spawns.len() as u32).to_le_bytes());
        for spawn in &self.treasure_spawns {
            bytes.extend((spawn.location as u32).to_le_bytes());
            bytes.push(match spawn.gem {
                Gem::Diamond => 0,
                Gem::Sapphire => 1,
                Gem::Ruby => 2,
            });
        }

        bytes.extend((self.arrow_spawns.len() as u32).to_le_bytes());
        for &location in &self.arrow_spawns {
            bytes.extend((location as u32).to_le_bytes());
        }

        bytes
    }
}

use slotmap::{SlotMap, new_key_type};

use crate::config::STARTING_ARROWS;
use crate::mapgen::GeneratedDungeon;
use crate::topology::{LocationIndex, Topology};
use crate::types::*;

new_key_type! {
    pub struct MonsterId;
}

#[derive(Clone, Debug)]
pub struct Otyugh {
    pub id: MonsterId,
    pub location: LocationIndex,
    pub health: Health,
}

/// Mutable contents of one location. Kind and openings live in the `Topology`.
#[derive(Clone, Debug, Default)]
pub struct Location {
    pub items: ItemCounts,
    pub monster: Option<MonsterId>,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub location: LocationIndex,
    pub inventory: ItemCounts,
}

impl Player {
    pub(crate) fn starting_inventory() -> ItemCounts {
        ItemCounts { arrows: STARTING_ARROWS, ..ItemCounts::default() }
    }
}

#[derive(Clone, Debug)]
pub struct Dungeon {
    topology: Topology,
    locations: Vec<Location>,
    monsters: SlotMap<MonsterId, Otyugh>,
    start: LocationIndex,
    end: LocationIndex,
}

impl Dungeon {
    pub(crate) fn install(generated: GeneratedDungeon) -> Self {
        let mut dungeon = Self {
            locations: vec![Location::default(); generated.topology.len()],
            topology: generated.topology,
            monsters: SlotMap::with_key(),
            start: generated.start,
            end: generated.end,
        };
        for spawn in generated.treasure_spawns {
            *dungeon.locations[spawn.location].items.slot_mut(spawn.gem.into()) += 1;
        }
        for location in generated.arrow_spawns {
            dungeon.locations[location].items.arrows += 1;
        }
        for location in generated.monster_spawns {
            dungeon.spawn_otyugh(location);
        }
        dungeon
    }

    pub(crate) fn spawn_otyugh(&mut self, location: LocationIndex) -> MonsterId {
        let id = self.monsters.insert(Otyugh {
            id: MonsterId::default(),
            location,
            health: Health::Healthy,
        });
        self.monsters[id].id = id;
        self.locations[location].monster = Some(id);
        id
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn start(&self) -> LocationIndex {
        self.start
    }

    pub fn end(&self) -> LocationIndex {
        self.end
    }

    pub fn location(&self, index: LocationIndex) -> &Location {
        &self.locations[index]
    }

    pub(crate) fn location_mut(&mut self, index: LocationIndex) -> &mut Location {
        &mut self.locations[index]
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Otyugh> {
        self.monsters.values()
    }

    pub fn live_monsters(&self) -> impl Iterator<Item = &Otyugh> {
        self.monsters.values().filter(|otyugh| otyugh.health.is_alive())
    }

    pub fn live_monster_at(&self, index: LocationIndex) -> Option<&Otyugh> {
        self.locations[index]
            .monster
            .and_then(|id| self.monsters.get(id))
            .filter(|otyugh| otyugh.health.is_alive())
    }

    pub(crate) fn live_monster_at_mut(&mut self, index: LocationIndex) -> Option<&mut Otyugh> {
        self.locations[index]
            .monster
            .and_then(|id| self.monsters.get_mut(id))
            .filter(|otyugh| otyugh.health.is_alive())
    }
}

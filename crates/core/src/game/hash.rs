//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

fn status_tag(status: GameStatus) -> u8 {
    match status {
        GameStatus::Active => 0,
        GameStatus::Dead => 1,
        GameStatus::Won => 2,
    }
}

fn write_counts(hasher: &mut Xxh3, counts: &ItemCounts) {
    hasher.write_u32(counts.diamonds);
    hasher.write_u32(counts.sapphires);
    hasher.write_u32(counts.rubies);
    hasher.write_u32(counts.arrows);
}

impl<R: Randomness> Game<R> {
    /// Hash of everything that can change during play. Two sessions built from the same seed
    /// and fed the same actions report the same value.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        let topology = self.dungeon.topology();
        hasher.write_usize(topology.rows());
        hasher.write_usize(topology.cols());
        for edge in topology.edges() {
            hasher.write_usize(edge.from.row);
            hasher.write_usize(edge.from.col);
            hasher.write_u8(edge.direction.slot() as u8);
        }
        hasher.write_usize(self.dungeon.start());
        hasher.write_usize(self.dungeon.end());

        for index in 0..topology.len() {
            let location = self.dungeon.location(index);
            write_counts(&mut hasher, &location.items);
            match location.monster.and_then(|id| self.dungeon.monsters().find(|m| m.id == id)) {
                Some(otyugh) => hasher.write_u8(otyugh.health.hit_points() + 1),
                None => hasher.write_u8(0),
            }
        }

        match &self.player {
            PlayerSlot::Absent => hasher.write_u8(0),
            PlayerSlot::Created(inventory) => {
                hasher.write_u8(1);
                write_counts(&mut hasher, inventory);
            }
            PlayerSlot::InDungeon(player) => {
                hasher.write_u8(2);
                hasher.write_usize(player.location);
                write_counts(&mut hasher, &player.inventory);
            }
        }
        hasher.write_u8(status_tag(self.status));
        hasher.finish()
    }
}

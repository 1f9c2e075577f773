//! Olfactory signal and nearest-monster distance, recomputed on every query.

use super::*;
use crate::state::Dungeon;
use crate::topology::LocationIndex;

pub(crate) fn smell_at(dungeon: &Dungeon, at: LocationIndex) -> Smell {
    let distances = dungeon.topology().distances_from(at);
    let mut adjacent = 0usize;
    let mut two_away = 0usize;
    for otyugh in dungeon.live_monsters() {
        match distances[otyugh.location] {
            Some(0 | 1) => adjacent += 1,
            Some(2) => two_away += 1,
            _ => {}
        }
    }
    if adjacent > 0 || two_away >= 2 {
        Smell::Strong
    } else if two_away == 1 {
        Smell::Weak
    } else {
        Smell::Absent
    }
}

impl<R: Randomness> Game<R> {
    pub fn smell(&self) -> Result<Smell, GameError> {
        let player = self.player()?;
        Ok(smell_at(&self.dungeon, player.location))
    }

    /// Hop distance to the closest live Otyugh reachable from the player.
    pub fn nearest_monster_distance(&self) -> Result<Option<usize>, GameError> {
        let player = self.player()?;
        let distances = self.dungeon.topology().distances_from(player.location);
        Ok(self.dungeon.live_monsters().filter_map(|otyugh| distances[otyugh.location]).min())
    }
}

//! Serializable snapshot of a session for external rendering.

use serde::Serialize;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtyughSummary {
    pub at: Pos,
    pub health: Health,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StashSummary {
    pub at: Pos,
    pub items: ItemCounts,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DungeonSummary {
    pub rows: usize,
    pub cols: usize,
    pub wrap: bool,
    pub start: Pos,
    pub end: Pos,
    pub edges: Vec<String>,
    pub caves: usize,
    pub tunnels: usize,
    pub otyughs: Vec<OtyughSummary>,
    pub stashes: Vec<StashSummary>,
    pub player: Option<Pos>,
    pub status: GameStatus,
}

impl<R: Randomness> Game<R> {
    pub fn summary(&self) -> DungeonSummary {
        let topology = self.dungeon.topology();
        let caves = topology.caves().len();

        let mut otyughs: Vec<OtyughSummary> = self
            .dungeon
            .monsters()
            .map(|otyugh| OtyughSummary { at: topology.pos(otyugh.location), health: otyugh.health })
            .collect();
        otyughs.sort_by_key(|otyugh| otyugh.at);

        let stashes = (0..topology.len())
            .filter(|&index| !self.dungeon.location(index).items.is_empty())
            .map(|index| StashSummary {
                at: topology.pos(index),
                items: self.dungeon.location(index).items,
            })
            .collect();

        DungeonSummary {
            rows: topology.rows(),
            cols: topology.cols(),
            wrap: topology.wraps(),
            start: self.start_location(),
            end: self.end_location(),
            edges: topology.edges().iter().map(ToString::to_string).collect(),
            caves,
            tunnels: topology.len() - caves,
            otyughs,
            stashes,
            player: self.player().ok().map(|player| topology.pos(player.location)),
            status: self.status,
        }
    }
}

//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating hand-built dungeon setup across many tests.
//! It does not own production gameplay logic.

use std::collections::VecDeque;

use super::*;
use crate::mapgen::GeneratedDungeon;
use crate::topology::{LocationIndex, Topology};

//  0    1    2    3 -- 4
//            |         |
//  5 -- 6 -- 7 -- 8 -- 9
//                      |
// 10   11   12   13   14
//
// 6, 8 and 4 are tunnels; 4 bends south-to-west. 0, 1, 10..13 are unreachable caves.
pub(crate) const CORRIDOR_WEST_END: LocationIndex = 5;
pub(crate) const WEST_TUNNEL: LocationIndex = 6;
pub(crate) const JUNCTION: LocationIndex = 7;
pub(crate) const NORTH_DEAD_END: LocationIndex = 2;
pub(crate) const EAST_TUNNEL: LocationIndex = 8;
pub(crate) const EAST_JUNCTION: LocationIndex = 9;
pub(crate) const BEND_TUNNEL: LocationIndex = 4;
pub(crate) const BEND_DEAD_END: LocationIndex = 3;
pub(crate) const CORRIDOR_SOUTH_END: LocationIndex = 14;

pub(crate) fn corridor_topology() -> Topology {
    let openings = [
        (5, Direction::East, 6),
        (6, Direction::East, 7),
        (7, Direction::East, 8),
        (8, Direction::East, 9),
        (2, Direction::South, 7),
        (4, Direction::South, 9),
        (3, Direction::East, 4),
        (9, Direction::South, 14),
    ];
    Topology::from_openings(3, 5, false, &openings)
}

/// Randomness whose coin flips are scripted; integer draws always return zero.
#[derive(Default)]
pub(crate) struct ScriptedRandom {
    flips: VecDeque<bool>,
}

impl ScriptedRandom {
    pub(crate) fn with_flips(flips: &[bool]) -> Self {
        Self { flips: flips.iter().copied().collect() }
    }
}

impl Randomness for ScriptedRandom {
    fn below(&mut self, _bound: usize) -> usize {
        0
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}

pub(crate) fn corridor_game_with<R: Randomness>(
    rng: R,
    start: LocationIndex,
    end: LocationIndex,
    monsters: &[LocationIndex],
) -> Game<R> {
    let generated = GeneratedDungeon {
        topology: corridor_topology(),
        start,
        end,
        monster_spawns: monsters.to_vec(),
        treasure_spawns: Vec::new(),
        arrow_spawns: Vec::new(),
    };
    let mut game = Game::with_dungeon(Dungeon::install(generated), rng);
    game.create_player().expect("fresh game has no player");
    game.enter_dungeon().expect("player was just created");
    game
}

pub(crate) fn corridor_game(
    start: LocationIndex,
    end: LocationIndex,
    monsters: &[LocationIndex],
) -> Game<ScriptedRandom> {
    corridor_game_with(ScriptedRandom::default(), start, end, monsters)
}

pub(crate) fn wound<R: Randomness>(game: &mut Game<R>, at: LocationIndex) {
    game.dungeon.live_monster_at_mut(at).expect("live otyugh at fixture location").health =
        Health::Wounded;
}

pub(crate) fn health_at<R: Randomness>(game: &Game<R>, at: LocationIndex) -> Option<Health> {
    let id = game.dungeon.location(at).monster?;
    game.dungeon.monsters().find(|otyugh| otyugh.id == id).map(|otyugh| otyugh.health)
}

pub(crate) fn put_items<R: Randomness>(
    game: &mut Game<R>,
    at: LocationIndex,
    item: ItemKind,
    count: u32,
) {
    *game.dungeon.location_mut(at).items.slot_mut(item) += count;
}

pub(crate) fn pos(index: LocationIndex) -> Pos {
    corridor_topology().pos(index)
}

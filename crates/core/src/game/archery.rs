//! Arrow ballistics and combat resolution.
//! Arrows keep their heading through caves and follow the bend of every tunnel they enter.

use super::*;
use crate::topology::{LocationIndex, Topology};

/// Where an arrow fired from `from` lands after exactly `distance` hops, if it gets there.
pub(crate) fn arrow_flight(
    topology: &Topology,
    from: LocationIndex,
    direction: Direction,
    distance: usize,
) -> Option<LocationIndex> {
    if distance == 0 {
        return None;
    }
    let mut at = from;
    let mut heading = direction;
    for hop in 0..distance {
        if hop > 0 && topology.kind_at(at) == LocationKind::Tunnel {
            let reverse = heading.opposite();
            heading = topology.open_directions(at).into_iter().find(|exit| *exit != reverse)?;
        }
        at = topology.neighbor(at, heading)?;
    }
    Some(at)
}

impl<R: Randomness> Game<R> {
    pub fn shoot_arrow(
        &mut self,
        direction: Direction,
        distance: usize,
    ) -> Result<ShotOutcome, GameError> {
        let player = self.player()?;
        let from = player.location;
        let arrows = player.inventory.arrows;
        self.ensure_active()?;

        if arrows == 0 {
            return Err(ActionError::OutOfArrows.into());
        }
        let Some(landed) = arrow_flight(self.dungeon.topology(), from, direction, distance) else {
            return Err(ActionError::ShotBlocked { direction, distance }.into());
        };

        self.player_mut()?.inventory.arrows -= 1;
        let outcome = match self.dungeon.live_monster_at_mut(landed) {
            Some(otyugh) => {
                otyugh.health = otyugh.health.hit();
                if otyugh.health.is_alive() { ShotOutcome::Wounded } else { ShotOutcome::Killed }
            }
            None => ShotOutcome::Miss,
        };

        let landed = self.dungeon.topology().pos(landed);
        debug!("arrow shot {direction} x{distance} landed at {landed}: {outcome:?}");
        self.log.push(LogEvent::ArrowShot { direction, distance, landed, outcome });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn arrow_bends_through_tunnels() {
        let topology = corridor_topology();
        assert_eq!(
            arrow_flight(&topology, CORRIDOR_SOUTH_END, Direction::North, 3),
            Some(BEND_DEAD_END)
        );
        assert_eq!(
            arrow_flight(&topology, CORRIDOR_SOUTH_END, Direction::North, 2),
            Some(BEND_TUNNEL)
        );
        assert_eq!(arrow_flight(&topology, BEND_DEAD_END, Direction::East, 2), Some(EAST_JUNCTION));
    }

    #[test]
    fn arrow_keeps_heading_through_caves() {
        let topology = corridor_topology();
        assert_eq!(arrow_flight(&topology, CORRIDOR_WEST_END, Direction::East, 4), Some(EAST_JUNCTION));
        assert_eq!(arrow_flight(&topology, NORTH_DEAD_END, Direction::South, 1), Some(JUNCTION));
        // Junction 7 has no southern exit.
        assert_eq!(arrow_flight(&topology, NORTH_DEAD_END, Direction::South, 2), None);
    }

    #[test]
    fn blocked_and_zero_distance_flights_fail() {
        let topology = corridor_topology();
        assert_eq!(arrow_flight(&topology, CORRIDOR_WEST_END, Direction::East, 6), None);
        assert_eq!(arrow_flight(&topology, CORRIDOR_WEST_END, Direction::West, 1), None);
        assert_eq!(arrow_flight(&topology, CORRIDOR_WEST_END, Direction::East, 0), None);
    }

    #[test]
    fn two_hits_through_a_tunnel_wound_then_kill() {
        let mut game =
            corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END, JUNCTION]);
        assert_eq!(game.shoot_arrow(Direction::East, 2), Ok(ShotOutcome::Wounded));
        assert_eq!(health_at(&game, JUNCTION), Some(Health::Wounded));
        assert_eq!(game.shoot_arrow(Direction::East, 2), Ok(ShotOutcome::Killed));
        assert_eq!(health_at(&game, JUNCTION), Some(Health::Dead));
        assert_eq!(game.inventory().unwrap().arrows, 1);
        assert_eq!(game.monster_locations(), vec![pos(CORRIDOR_SOUTH_END)]);
    }

    #[test]
    fn arrows_that_land_on_nothing_or_a_corpse_miss() {
        let mut game =
            corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END, JUNCTION]);
        assert_eq!(game.shoot_arrow(Direction::East, 1), Ok(ShotOutcome::Miss));
        assert_eq!(game.shoot_arrow(Direction::East, 3), Ok(ShotOutcome::Miss));
        assert_eq!(health_at(&game, JUNCTION), Some(Health::Healthy));
        assert_eq!(
            game.log().last(),
            Some(&LogEvent::ArrowShot {
                direction: Direction::East,
                distance: 3,
                landed: pos(EAST_TUNNEL),
                outcome: ShotOutcome::Miss,
            })
        );
    }

    #[test]
    fn blocked_shot_keeps_the_arrow() {
        let mut game = corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END]);
        assert_eq!(
            game.shoot_arrow(Direction::East, 6),
            Err(ActionError::ShotBlocked { direction: Direction::East, distance: 6 }.into())
        );
        assert_eq!(
            game.shoot_arrow(Direction::North, 1),
            Err(ActionError::ShotBlocked { direction: Direction::North, distance: 1 }.into())
        );
        assert_eq!(game.inventory().unwrap().arrows, 3);
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn empty_quiver_is_reported_before_the_path() {
        let mut game = corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END]);
        for _ in 0..3 {
            game.shoot_arrow(Direction::East, 1).unwrap();
        }
        assert_eq!(game.inventory().unwrap().arrows, 0);
        assert_eq!(game.shoot_arrow(Direction::East, 1), Err(ActionError::OutOfArrows.into()));
        assert_eq!(game.shoot_arrow(Direction::West, 1), Err(ActionError::OutOfArrows.into()));
    }

    #[test]
    fn arrow_count_drops_by_one_per_valid_shot() {
        let mut game = corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END]);
        put_items(&mut game, CORRIDOR_WEST_END, ItemKind::Arrow, 4);
        game.pick_up(ItemKind::Arrow, 4).unwrap();
        let shots = [(Direction::East, 1), (Direction::West, 1), (Direction::East, 9), (Direction::East, 4)];
        for (direction, distance) in shots {
            let before = game.inventory().unwrap().arrows;
            let valid = game.shoot_arrow(direction, distance).is_ok();
            let after = game.inventory().unwrap().arrows;
            assert_eq!(before - after, u32::from(valid));
        }
        assert_eq!(game.inventory().unwrap().arrows, 5);
    }
}

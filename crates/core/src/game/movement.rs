//! Player movement and Otyugh encounter resolution.

use super::*;
use crate::topology::LocationIndex;

impl<R: Randomness> Game<R> {
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        let from = self.player()?.location;
        self.ensure_active()?;

        let topology = self.dungeon.topology();
        let Some(to) = topology.neighbor(from, direction) else {
            return Err(ActionError::InvalidMove(direction).into());
        };
        let (from_pos, to_pos) = (topology.pos(from), topology.pos(to));

        self.player_mut()?.location = to;
        self.log.push(LogEvent::Moved { from: from_pos, to: to_pos, direction });

        let outcome = self.resolve_encounter(to);
        match outcome {
            MoveOutcome::Died => {
                debug!("player devoured at {to_pos}");
                self.status = GameStatus::Dead;
                self.log.push(LogEvent::DevouredByOtyugh { at: to_pos });
            }
            MoveOutcome::Survived if to == self.dungeon.end() => {
                debug!("player reached the end at {to_pos}");
                self.status = GameStatus::Won;
                self.log.push(LogEvent::ReachedEnd { at: to_pos });
            }
            MoveOutcome::Survived => {}
        }
        Ok(outcome)
    }

    /// A healthy Otyugh always eats the player; a wounded one does so on a coin flip.
    fn resolve_encounter(&mut self, at: LocationIndex) -> MoveOutcome {
        let Some(health) = self.dungeon.live_monster_at(at).map(|otyugh| otyugh.health) else {
            return MoveOutcome::Survived;
        };
        match health {
            Health::Healthy => MoveOutcome::Died,
            Health::Wounded if self.rng.coin_flip() => MoveOutcome::Died,
            Health::Wounded | Health::Dead => {
                self.log.push(LogEvent::SlippedPastOtyugh { at: self.dungeon.topology().pos(at) });
                MoveOutcome::Survived
            }
        }
    }
}

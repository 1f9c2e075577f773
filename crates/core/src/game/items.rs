//! Picking items up off the floor.

use super::*;

impl<R: Randomness> Game<R> {
    /// Moves `count` units of `item` from the player's location into the inventory.
    /// Rejected without mutation when the location holds fewer than `count` units, or when `count` is zero.
    pub fn pick_up(&mut self, item: ItemKind, count: u32) -> Result<(), GameError> {
        let location = self.player()?.location;
        self.ensure_active()?;

        let available = self.dungeon.location(location).items.get(item);
        if count == 0 || count > available {
            return Err(ActionError::InvalidPickup { item, requested: count, available }.into());
        }

        *self.dungeon.location_mut(location).items.slot_mut(item) -= count;
        *self.player_mut()?.inventory.slot_mut(item) += count;

        let at = self.dungeon.topology().pos(location);
        debug!("picked up {count} x {item:?} at {at}");
        self.log.push(LogEvent::PickedUp { item, count, at });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn pickup_moves_items_from_location_to_inventory() {
        let mut game = corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END]);
        put_items(&mut game, CORRIDOR_WEST_END, ItemKind::Diamond, 2);
        put_items(&mut game, CORRIDOR_WEST_END, ItemKind::Arrow, 1);

        game.pick_up(ItemKind::Diamond, 1).unwrap();
        game.pick_up(ItemKind::Arrow, 1).unwrap();

        let inventory = game.inventory().unwrap();
        assert_eq!(inventory.diamonds, 1);
        assert_eq!(inventory.arrows, 4);
        let here = game.items_here().unwrap();
        assert_eq!(here.diamonds, 1);
        assert_eq!(here.arrows, 0);
        assert_eq!(
            game.log().last(),
            Some(&LogEvent::PickedUp { item: ItemKind::Arrow, count: 1, at: pos(CORRIDOR_WEST_END) })
        );
    }

    #[test]
    fn asking_for_more_than_is_there_changes_nothing() {
        let mut game = corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END]);
        put_items(&mut game, CORRIDOR_WEST_END, ItemKind::Ruby, 2);
        let before = game.inventory().unwrap();

        assert_eq!(
            game.pick_up(ItemKind::Ruby, 5),
            Err(ActionError::InvalidPickup { item: ItemKind::Ruby, requested: 5, available: 2 }
                .into())
        );
        assert_eq!(game.inventory().unwrap(), before);
        assert_eq!(game.items_here().unwrap().rubies, 2);
    }

    #[test]
    fn zero_count_and_missing_items_are_rejected() {
        let mut game = corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END]);
        put_items(&mut game, CORRIDOR_WEST_END, ItemKind::Sapphire, 1);
        assert!(game.pick_up(ItemKind::Sapphire, 0).is_err());
        assert!(game.pick_up(ItemKind::Diamond, 1).is_err());
        assert_eq!(game.items_here().unwrap().sapphires, 1);
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn pickup_errors_are_recoverable() {
        let mut game = corridor_game(CORRIDOR_WEST_END, CORRIDOR_SOUTH_END, &[CORRIDOR_SOUTH_END]);
        let error = game.pick_up(ItemKind::Arrow, 1).unwrap_err();
        assert!(error.is_recoverable());
    }
}

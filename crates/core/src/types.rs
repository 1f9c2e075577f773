use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Grid coordinate of a location, row-major from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "e" | "east" => Ok(Direction::East),
            "s" | "south" => Ok(Direction::South),
            "w" | "west" => Ok(Direction::West),
            _ => Err(ConfigError::UnknownDirection(token.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Cave,
    Tunnel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gem {
    Diamond,
    Sapphire,
    Ruby,
}

impl Gem {
    pub const ALL: [Gem; 3] = [Gem::Diamond, Gem::Sapphire, Gem::Ruby];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Diamond,
    Sapphire,
    Ruby,
    Arrow,
}

impl From<Gem> for ItemKind {
    fn from(gem: Gem) -> Self {
        match gem {
            Gem::Diamond => ItemKind::Diamond,
            Gem::Sapphire => ItemKind::Sapphire,
            Gem::Ruby => ItemKind::Ruby,
        }
    }
}

impl FromStr for ItemKind {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "d" | "diamond" | "diamonds" => Ok(ItemKind::Diamond),
            "s" | "sapphire" | "sapphires" => Ok(ItemKind::Sapphire),
            "r" | "ruby" | "rubies" => Ok(ItemKind::Ruby),
            "a" | "arrow" | "arrows" => Ok(ItemKind::Arrow),
            _ => Err(ConfigError::UnknownItem(token.to_string())),
        }
    }
}

/// Item tallies, used both for what lies at a location and what the player carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemCounts {
    pub diamonds: u32,
    pub sapphires: u32,
    pub rubies: u32,
    pub arrows: u32,
}

impl ItemCounts {
    pub fn get(&self, item: ItemKind) -> u32 {
        match item {
            ItemKind::Diamond => self.diamonds,
            ItemKind::Sapphire => self.sapphires,
            ItemKind::Ruby => self.rubies,
            ItemKind::Arrow => self.arrows,
        }
    }

    pub(crate) fn slot_mut(&mut self, item: ItemKind) -> &mut u32 {
        match item {
            ItemKind::Diamond => &mut self.diamonds,
            ItemKind::Sapphire => &mut self.sapphires,
            ItemKind::Ruby => &mut self.rubies,
            ItemKind::Arrow => &mut self.arrows,
        }
    }

    pub fn treasure(&self) -> u32 {
        self.diamonds + self.sapphires + self.rubies
    }

    pub fn is_empty(&self) -> bool {
        self.treasure() == 0 && self.arrows == 0
    }
}

/// Otyugh health. Two hits kill; a dead Otyugh stays dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Health {
    Healthy,
    Wounded,
    Dead,
}

impl Health {
    pub fn hit(self) -> Self {
        match self {
            Health::Healthy => Health::Wounded,
            Health::Wounded | Health::Dead => Health::Dead,
        }
    }

    pub fn is_alive(self) -> bool {
        self != Health::Dead
    }

    pub fn hit_points(self) -> u8 {
        match self {
            Health::Healthy => 2,
            Health::Wounded => 1,
            Health::Dead => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Smell {
    Absent,
    Weak,
    Strong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Dead,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Survived,
    Died,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Miss,
    Wounded,
    Killed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PlayerEntered { at: Pos },
    Moved { from: Pos, to: Pos, direction: Direction },
    SlippedPastOtyugh { at: Pos },
    DevouredByOtyugh { at: Pos },
    ReachedEnd { at: Pos },
    PickedUp { item: ItemKind, count: u32, at: Pos },
    ArrowShot { direction: Direction, distance: usize, landed: Pos, outcome: ShotOutcome },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_tokens_parse_case_insensitively() {
        assert_eq!("N".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("east".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!(" South ".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!(
            "up".parse::<Direction>(),
            Err(ConfigError::UnknownDirection("up".to_string()))
        );
    }

    #[test]
    fn item_tokens_match_single_letter_shortcuts() {
        assert_eq!("R".parse::<ItemKind>().unwrap(), ItemKind::Ruby);
        assert_eq!("d".parse::<ItemKind>().unwrap(), ItemKind::Diamond);
        assert_eq!("S".parse::<ItemKind>().unwrap(), ItemKind::Sapphire);
        assert_eq!("a".parse::<ItemKind>().unwrap(), ItemKind::Arrow);
        assert!("x".parse::<ItemKind>().is_err());
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn health_steps_down_and_stays_dead() {
        assert_eq!(Health::Healthy.hit(), Health::Wounded);
        assert_eq!(Health::Wounded.hit(), Health::Dead);
        assert_eq!(Health::Dead.hit(), Health::Dead);
        assert!(!Health::Dead.is_alive());
        assert_eq!(Health::Healthy.hit_points(), 2);
    }
}

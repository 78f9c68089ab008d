// src/cave/cell.rs

use std::fmt;

use crate::error::CaveError;

/// The value held by one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    /// Open floor.
    #[default]
    Dead = 0,
    /// Wall or rock.
    Alive = 1,
    /// Floor marked as treasure.
    Treasure = 2,
    /// Floor marked as the player spawn.
    Player = 3,
}

impl Cell {
    /// Integer tag of this cell.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Only `Alive` counts as a wall; markings are floor.
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cell::Dead => "Dead",
            Cell::Alive => "Alive",
            Cell::Treasure => "Treasure",
            Cell::Player => "Player",
        }
    }

    /// Character used by the text rendering of a grid.
    pub fn glyph(self) -> char {
        match self {
            Cell::Dead => '.',
            Cell::Alive => '#',
            Cell::Treasure => '$',
            Cell::Player => '@',
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = CaveError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            2 => Ok(Cell::Treasure),
            3 => Ok(Cell::Player),
            other => Err(CaveError::InvalidCell(other)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Cell::Dead.tag(), 0);
        assert_eq!(Cell::Alive.tag(), 1);
        assert_eq!(Cell::Treasure.tag(), 2);
        assert_eq!(Cell::Player.tag(), 3);
        assert_eq!(Cell::try_from(2).unwrap(), Cell::Treasure);
        assert!(matches!(Cell::try_from(4), Err(CaveError::InvalidCell(4))));
    }

    #[test]
    fn test_only_alive_is_alive() {
        assert!(Cell::Alive.is_alive());
        assert!(!Cell::Dead.is_alive());
        assert!(!Cell::Treasure.is_alive());
        assert!(!Cell::Player.is_alive());
    }
}

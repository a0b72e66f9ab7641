use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::error::MazeError;

/// Les quatre points cardinaux d'une pièce.
///
/// L'ordre de déclaration est celui de l'itération : c'est lui qui décide
/// quel mur commun est choisi en premier quand on pose une porte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Toutes les directions, dans l'ordre North, East, South, West.
    pub fn all() -> impl Iterator<Item = Direction> {
        Direction::iter()
    }

    /// Tourne à gauche (par ex. North -> West)
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Tourne à droite (par ex. North -> East)
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Fait demi tour (par ex. North -> South )
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Code numérique de la direction (1 = North ... 4 = West).
    pub fn code(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 3,
            Direction::West => 4,
        }
    }

    pub(crate) fn index(self) -> usize {
        (self.code() - 1) as usize
    }
}

impl TryFrom<u8> for Direction {
    type Error = MazeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Direction::North),
            2 => Ok(Direction::East),
            3 => Ok(Direction::South),
            4 => Ok(Direction::West),
            other => Err(MazeError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    /// Accepte le nom (sans casse) ou l'initiale : "north", "N", "West"...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "east" | "e" => Ok(Direction::East),
            "south" | "s" => Ok(Direction::South),
            "west" | "w" => Ok(Direction::West),
            _ => Err(MazeError::InvalidDirection(s.to_string())),
        }
    }
}

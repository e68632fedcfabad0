use std::fmt;

use crate::error::{MapError, MapResult};

/// One of the four compass directions a corridor can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top of the map (negative y).
    North,
    /// Toward the right edge of the map (positive x).
    East,
    /// Toward the bottom of the map (positive y).
    South,
    /// Toward the left edge of the map (negative x).
    West,
}

impl Direction {
    /// All four directions, in the order traversal and branching visit them.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction pointing back the way you came.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit step on the grid. North is up, so y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// The glyph drawn at the midpoint of an edge running this way.
    pub fn connector(self) -> char {
        match self {
            Self::North | Self::South => '|',
            Self::East | Self::West => '-',
        }
    }

    /// Slot index into a room's adjacency row.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Parse a direction name, case-insensitively.
    pub fn parse(input: &str) -> MapResult<Self> {
        match input.to_lowercase().as_str() {
            "north" => Ok(Self::North),
            "east" => Ok(Self::East),
            "south" => Ok(Self::South),
            "west" => Ok(Self::West),
            other => Err(MapError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        write!(f, "{name}")
    }
}

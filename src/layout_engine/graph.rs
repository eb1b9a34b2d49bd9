use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::error::LayoutError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }

    pub fn is_horizontal(self) -> bool { self.orientation() == Orientation::Horizontal }
}

/// One of the two open ends of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum End {
    Left,
    Right,
}

impl End {
    /// Direction the end grows in right after the pivot is placed.
    pub fn initial_direction(self) -> Direction {
        match self {
            End::Left => Direction::Left,
            End::Right => Direction::Right,
        }
    }

    /// The only vertical direction this end ever wraps in.
    pub fn vertical(self) -> Direction {
        match self {
            End::Left => Direction::Down,
            End::Right => Direction::Up,
        }
    }

    pub fn can_head(self, direction: Direction) -> bool {
        direction.is_horizontal() || direction == self.vertical()
    }
}

impl FromStr for End {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(End::Left),
            "right" => Ok(End::Right),
            _ => Err(LayoutError::Configuration { placement: s.to_string() }),
        }
    }
}

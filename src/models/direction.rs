use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{LATITUDE_BOUND, LONGITUDE_BOUND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Magnitude of the open interval `(-bound, bound)` legal for this axis
    pub fn bound(&self) -> f64 {
        match self {
            Axis::Latitude => LATITUDE_BOUND,
            Axis::Longitude => LONGITUDE_BOUND,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        // NaN fails the comparison and is rejected
        value.abs() < self.bound()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Longitude => write!(f, "Longitude"),
        }
    }
}

/// Hemisphere letter attached to a coordinate value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Case-insensitive lookup of a hemisphere letter
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// Parse a single hemisphere letter, rejecting letters that belong to the other axis
    pub fn for_axis(text: &str, axis: Axis) -> Option<Self> {
        let mut chars = text.chars();
        let direction = Self::from_letter(chars.next()?)?;

        if chars.next().is_some() || direction.axis() != axis {
            return None;
        }

        Some(direction)
    }

    /// Hemisphere a signed value falls in, positive values map to North/East
    pub fn of_value(axis: Axis, value: f64) -> Self {
        match (axis, value < 0.0) {
            (Axis::Latitude, false) => Direction::North,
            (Axis::Latitude, true) => Direction::South,
            (Axis::Longitude, false) => Direction::East,
            (Axis::Longitude, true) => Direction::West,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Latitude,
            Direction::East | Direction::West => Axis::Longitude,
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Direction::South | Direction::West)
    }

    /// Sign a magnitude by hemisphere; any sign already on the value is discarded
    pub fn apply(&self, value: f64) -> f64 {
        if self.is_negative() {
            -value.abs()
        } else {
            value.abs()
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

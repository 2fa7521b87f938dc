use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::DEFAULT_LABEL;

/// The textual coordinate notations understood by the format chain, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Notation {
    /// `40.7128, -74.0060 label`
    PlainPair,
    /// `74.0060 W, 40.7128 N label`
    InvertedCompassPair,
    /// `40.7128 N, 74.0060 W label`
    CompassPair,
    /// `40.7128° N, 74.0060° W label`
    DegreeCompassPair,
    /// `40°42.768' N, 74°0.36' W label`
    DegreesMinutes,
    /// `40°42'45.99"N, 74°0'21.51"W (label)`
    DegreesMinutesSeconds,
}

impl Notation {
    pub const PRIORITY: [Notation; 6] = [
        Notation::PlainPair,
        Notation::InvertedCompassPair,
        Notation::CompassPair,
        Notation::DegreeCompassPair,
        Notation::DegreesMinutes,
        Notation::DegreesMinutesSeconds,
    ];

    /// Label used when the input carries none: empty for the compass pair,
    /// `"coordinate"` for every other notation.
    pub fn default_label(&self) -> &'static str {
        match self {
            Notation::CompassPair => "",
            _ => DEFAULT_LABEL,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Notation::PlainPair => "plain pair",
            Notation::InvertedCompassPair => "inverted compass pair",
            Notation::CompassPair => "compass pair",
            Notation::DegreeCompassPair => "degree-symbol compass pair",
            Notation::DegreesMinutes => "degrees-minutes",
            Notation::DegreesMinutesSeconds => "degrees-minutes-seconds",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        assert_eq!(Notation::CompassPair.default_label(), "");
        for notation in Notation::PRIORITY {
            if notation != Notation::CompassPair {
                assert_eq!(notation.default_label(), "coordinate");
            }
        }
    }

    #[test]
    fn test_priority_is_declaration_order() {
        let mut sorted = Notation::PRIORITY;
        sorted.sort();
        assert_eq!(sorted, Notation::PRIORITY);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the eight resize affordances along a window's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize edge: {0:?}")]
pub struct ParseEdgeError(pub String);

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::N,
        ResizeEdge::S,
        ResizeEdge::E,
        ResizeEdge::W,
        ResizeEdge::NE,
        ResizeEdge::NW,
        ResizeEdge::SE,
        ResizeEdge::SW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeEdge::N => "n",
            ResizeEdge::S => "s",
            ResizeEdge::E => "e",
            ResizeEdge::W => "w",
            ResizeEdge::NE => "ne",
            ResizeEdge::NW => "nw",
            ResizeEdge::SE => "se",
            ResizeEdge::SW => "sw",
        }
    }

    pub fn affects_north(&self) -> bool {
        matches!(self, ResizeEdge::N | ResizeEdge::NE | ResizeEdge::NW)
    }

    pub fn affects_south(&self) -> bool {
        matches!(self, ResizeEdge::S | ResizeEdge::SE | ResizeEdge::SW)
    }

    pub fn affects_east(&self) -> bool {
        matches!(self, ResizeEdge::E | ResizeEdge::NE | ResizeEdge::SE)
    }

    pub fn affects_west(&self) -> bool {
        matches!(self, ResizeEdge::W | ResizeEdge::NW | ResizeEdge::SW)
    }

    /// Combine the sides a point is close to into an affordance.
    /// South beats north and east beats west when a window is thin enough
    /// for both to match.
    pub fn from_sides(north: bool, south: bool, east: bool, west: bool) -> Option<Self> {
        let vertical = if south {
            Some(ResizeEdge::S)
        } else if north {
            Some(ResizeEdge::N)
        } else {
            None
        };
        let horizontal = if east {
            Some(ResizeEdge::E)
        } else if west {
            Some(ResizeEdge::W)
        } else {
            None
        };

        match (vertical, horizontal) {
            (Some(ResizeEdge::N), Some(ResizeEdge::E)) => Some(ResizeEdge::NE),
            (Some(ResizeEdge::N), Some(ResizeEdge::W)) => Some(ResizeEdge::NW),
            (Some(ResizeEdge::S), Some(ResizeEdge::E)) => Some(ResizeEdge::SE),
            (Some(ResizeEdge::S), Some(ResizeEdge::W)) => Some(ResizeEdge::SW),
            (Some(v), None) => Some(v),
            (None, Some(h)) => Some(h),
            _ => None,
        }
    }
}

impl fmt::Display for ResizeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeEdge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeEdge::ALL
            .into_iter()
            .find(|edge| edge.as_str() == s)
            .ok_or_else(|| ParseEdgeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for edge in ResizeEdge::ALL {
            assert_eq!(edge.as_str().parse::<ResizeEdge>(), Ok(edge));
        }
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let err = "north".parse::<ResizeEdge>().unwrap_err();
        assert_eq!(err, ParseEdgeError("north".into()));
        assert_eq!(err.to_string(), "unknown resize edge: \"north\"");
    }

    #[test]
    fn corners_combine_both_axes() {
        assert!(ResizeEdge::SE.affects_south() && ResizeEdge::SE.affects_east());
        assert!(ResizeEdge::NW.affects_north() && ResizeEdge::NW.affects_west());
        assert!(!ResizeEdge::E.affects_north() && !ResizeEdge::E.affects_south());
        assert!(!ResizeEdge::N.affects_east() && !ResizeEdge::N.affects_west());
    }

    #[test]
    fn from_sides_prefers_south_east_on_conflict() {
        assert_eq!(ResizeEdge::from_sides(true, true, false, false), Some(ResizeEdge::S));
        assert_eq!(ResizeEdge::from_sides(false, false, true, true), Some(ResizeEdge::E));
        assert_eq!(ResizeEdge::from_sides(true, false, false, true), Some(ResizeEdge::NW));
        assert_eq!(ResizeEdge::from_sides(false, false, false, false), None);
    }
}

//! Sides of an opening and the directions a measurement may travel.
//!
//! Measurements are constrained to run counter-clockwise around the
//! opening, so each side admits only a fixed subset of directions. The
//! legality table is total over all six sides, never empty for any of
//! them, and fixed at compile time.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The edge or face of an opening a measurement is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Bottom,
    Left,
    Right,
    Top,
    In,
    Out,
}

impl Side {
    /// All six sides, in counter-clockwise reading order.
    pub const ALL: [Side; 6] = [
        Side::Bottom,
        Side::Left,
        Side::Right,
        Side::Top,
        Side::In,
        Side::Out,
    ];

    /// The directions a measurement on this side may travel.
    pub fn legal_directions(self) -> &'static [Direction] {
        match self {
            Side::Bottom => &[Direction::Up, Direction::Down, Direction::Right],
            Side::Left => &[Direction::Down],
            Side::Right => &[Direction::Up],
            Side::Top => &[Direction::Up, Direction::Down, Direction::Left],
            Side::In => &[Direction::In],
            Side::Out => &[Direction::Out],
        }
    }

    /// Whether `direction` may be used on this side.
    pub fn admits(self, direction: Direction) -> bool {
        self.legal_directions().contains(&direction)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Side::Bottom => "Bottom",
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Top => "Top",
            Side::In => "In",
            Side::Out => "Out",
        };
        write!(f, "{token}")
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "top" => Ok(Side::Top),
            "in" => Ok(Side::In),
            "out" => Ok(Side::Out),
            _ => Err(format!("unknown side: {s}")),
        }
    }
}

/// The direction a measurement travels, read counter-clockwise around the
/// opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    In,
    Out,
}

impl Direction {
    /// All six directions.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::In,
        Direction::Out,
    ];

    /// The wire token for this direction.
    pub fn token(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::In => "in",
            Direction::Out => "out",
        }
    }

    /// Resolve an exact wire token. Unlike [`FromStr`](std::str::FromStr),
    /// no case folding is applied.
    pub fn from_token(token: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.token() == token)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_token(s.to_lowercase().as_str())
            .ok_or_else(|| format!("unknown direction: {s}"))
    }
}

/// Membership predicate over untrusted input.
///
/// True iff `value` is a string holding a direction token legal for `side`.
/// Non-string values (null, numbers, objects, ...) and unknown tokens are
/// `false`, never an error.
pub fn is_legal_direction(side: Side, value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|token| side.legal_directions().iter().any(|d| d.token() == token))
}

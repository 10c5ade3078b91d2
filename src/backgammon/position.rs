use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::backgammon::board::POINTS;

/// A place a checker can be moved from or to.
///
/// On the wire positions are 1-based point numbers, with `25` for the bar
/// and `0` for checkers borne off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Bar,
    Home,
    /// 0-based point index (0-23).
    Board(u8),
}

impl Position {
    pub const WIRE_BAR: u8 = 25;
    pub const WIRE_HOME: u8 = 0;

    /// Creates a Position on the board from a 1-based point number.
    pub fn point(number: u8) -> Option<Self> {
        (1..=POINTS as u8).contains(&number).then(|| Position::Board(number - 1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a board position")]
pub struct InvalidPosition(pub u8);

impl TryFrom<u8> for Position {
    type Error = InvalidPosition;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            Position::WIRE_HOME => Ok(Position::Home),
            Position::WIRE_BAR => Ok(Position::Bar),
            n => Position::point(n).ok_or(InvalidPosition(n)),
        }
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        match pos {
            Position::Home => Position::WIRE_HOME,
            Position::Bar => Position::WIRE_BAR,
            Position::Board(index) => index + 1,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Bar => write!(f, "the bar"),
            Position::Home => write!(f, "off"),
            Position::Board(index) => write!(f, "point {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_numbers() {
        assert_eq!(Position::try_from(0), Ok(Position::Home));
        assert_eq!(Position::try_from(25), Ok(Position::Bar));
        assert_eq!(Position::try_from(1), Ok(Position::Board(0)));
        assert_eq!(Position::try_from(24), Ok(Position::Board(23)));
        assert_eq!(Position::try_from(26), Err(InvalidPosition(26)));
        for n in 0..=25u8 {
            assert_eq!(u8::from(Position::try_from(n).unwrap()), n);
        }
    }

    #[test]
    fn test_serde_uses_wire_numbers() {
        assert_eq!(serde_json::to_string(&Position::Board(11)).unwrap(), "12");
        assert_eq!(serde_json::from_str::<Position>("25").unwrap(), Position::Bar);
        assert!(serde_json::from_str::<Position>("30").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::Board(6).to_string(), "point 7");
        assert_eq!(Position::Bar.to_string(), "the bar");
        assert_eq!(Position::Home.to_string(), "off");
    }
}

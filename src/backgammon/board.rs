use std::fmt::{self, Display};

use crate::backgammon::{Player, Position};

pub const POINTS: usize = 24;
pub const CHECKERS_PER_PLAYER: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("expected 24 points, got {0}")]
    PointCount(usize),
    #[error("point {point} holds {count} checkers")]
    Overfull { point: u8, count: i32 },
    #[error("{} has {total} checkers in play", .player.name())]
    TooManyCheckers { player: Player, total: u32 },
    #[error("invalid dice {0}/{1}")]
    Dice(u8, u8),
}

/// Snapshot of a Backgammon board as reported by the game service.
/// Positive values are White's checkers, negative values Black's. Index 0 is
/// point 1; White moves towards point 24, Black towards point 1.
/// The board is always kept from White's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [i8; POINTS],
    bar: [u8; 2],
    off: [u8; 2],
}

impl Board {
    /// Creates a new board with the default starting position.
    pub fn new() -> Self {
        Board {
            points: [2, 0, 0, 0, 0, -5, 0, -3, 0, 0, 0, 5, -5, 0, 0, 0, 3, 0, 5, 0, 0, 0, 0, -2],
            bar: [0, 0],
            off: [0, 0],
        }
    }

    /// Creates an empty board with no checkers on it.
    pub fn empty() -> Self {
        Board {
            points: [0; POINTS],
            bar: [0, 0],
            off: [0, 0],
        }
    }

    /// Builds a board from the raw values of a snapshot.
    /// Rejects snapshots that cannot describe a real table: wrong point count,
    /// or more than 15 checkers for one player.
    pub fn from_parts(points: &[i32], bar: [u8; 2], off: [u8; 2]) -> Result<Self, SnapshotError> {
        if points.len() != POINTS {
            return Err(SnapshotError::PointCount(points.len()));
        }

        let mut board = Board { points: [0; POINTS], bar, off };
        for (i, &count) in points.iter().enumerate() {
            if count.unsigned_abs() > CHECKERS_PER_PLAYER as u32 {
                return Err(SnapshotError::Overfull { point: i as u8 + 1, count });
            }
            board.points[i] = count as i8;
        }

        for player in Player::ALL {
            let total = board.board_total(player) + board.bar(player) as u32 + board.off(player) as u32;
            if total > CHECKERS_PER_PLAYER as u32 {
                return Err(SnapshotError::TooManyCheckers { player, total });
            }
        }

        Ok(board)
    }

    /// Signed number of checkers on a 0-based point index.
    pub fn checkers_on_position(&self, index: u8) -> i8 {
        self.points[index as usize]
    }

    pub fn owner(&self, index: u8) -> Option<Player> {
        match self.checkers_on_position(index) {
            0 => None,
            n if n > 0 => Some(Player::White),
            _ => Some(Player::Black),
        }
    }

    pub fn count(&self, index: u8) -> u8 {
        self.checkers_on_position(index).unsigned_abs()
    }

    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    pub fn off(&self, player: Player) -> u8 {
        self.off[player.index()]
    }

    /// Number of checkers `player` has on the 24 points.
    pub fn on_board(&self, player: Player) -> u8 {
        self.board_total(player) as u8
    }

    fn board_total(&self, player: Player) -> u32 {
        self.points
            .iter()
            .filter(|&&n| n.signum() == player.sign())
            .map(|n| n.unsigned_abs() as u32)
            .sum()
    }

    /// Whether `player` has a checker that could be picked up at `position`.
    pub fn has_checker_at(&self, position: Position, player: Player) -> bool {
        match position {
            Position::Bar => self.bar(player) > 0,
            Position::Home => false,
            Position::Board(index) => self.owner(index) == Some(player),
        }
    }
}

const TOP_ROW: [usize; POINTS / 2] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
const BOTTOM_ROW: [usize; POINTS / 2] = [12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23];

fn write_row(f: &mut fmt::Formatter<'_>, row: &[usize], bar: &str, cell: impl Fn(usize) -> i32) -> fmt::Result {
    for (n, &i) in row.iter().enumerate() {
        if n == 6 {
            write!(f, " |{bar:^3}|")?;
        }
        write!(f, "{:4}", cell(i))?;
    }
    Ok(())
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = |i: usize| i as i32 + 1;
        let checkers = |i: usize| self.points[i] as i32;

        write_row(f, &TOP_ROW, "W", number)?;
        writeln!(f)?;
        write_row(f, &TOP_ROW, &self.bar[0].to_string(), checkers)?;
        writeln!(f, "   off {}", self.off[1])?;
        writeln!(f, "{}", "=".repeat(54))?;
        write_row(f, &BOTTOM_ROW, &self.bar[1].to_string(), checkers)?;
        writeln!(f, "   off {}", self.off[0])?;
        write_row(f, &BOTTOM_ROW, "B", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(board: &Board) -> Vec<i32> {
        (0..POINTS as u8).map(|i| board.checkers_on_position(i) as i32).collect()
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        for player in Player::ALL {
            assert_eq!(board.on_board(player), CHECKERS_PER_PLAYER);
            assert_eq!(board.bar(player), 0);
            assert_eq!(board.off(player), 0);
        }
        assert_eq!(board.owner(0), Some(Player::White));
        assert_eq!(board.count(0), 2);
        assert_eq!(board.owner(5), Some(Player::Black));
        assert_eq!(board.count(5), 5);
        assert_eq!(board.owner(1), None);
    }

    #[test]
    fn test_from_parts_accepts_valid_snapshot() {
        let mut points = raw(&Board::new());
        points[0] = 1;
        let board = Board::from_parts(&points, [1, 0], [0, 0]).unwrap();
        assert_eq!(board.count(0), 1);
        assert_eq!(board.bar(Player::White), 1);
    }

    #[test]
    fn test_from_parts_rejects_malformed_snapshots() {
        assert_eq!(Board::from_parts(&[0; 23], [0, 0], [0, 0]), Err(SnapshotError::PointCount(23)));

        let mut points = vec![0; POINTS];
        points[3] = -16;
        assert_eq!(
            Board::from_parts(&points, [0, 0], [0, 0]),
            Err(SnapshotError::Overfull { point: 4, count: -16 })
        );

        let points = raw(&Board::new());
        assert_eq!(
            Board::from_parts(&points, [0, 1], [0, 0]),
            Err(SnapshotError::TooManyCheckers { player: Player::Black, total: 16 })
        );
    }

    #[test]
    fn test_has_checker_at() {
        let mut points = raw(&Board::new());
        points[0] = 1;
        let board = Board::from_parts(&points, [1, 0], [0, 0]).unwrap();
        assert!(board.has_checker_at(Position::Board(0), Player::White));
        assert!(!board.has_checker_at(Position::Board(0), Player::Black));
        assert!(!board.has_checker_at(Position::Board(1), Player::White));
        assert!(board.has_checker_at(Position::Bar, Player::White));
        assert!(!board.has_checker_at(Position::Bar, Player::Black));
        assert!(!board.has_checker_at(Position::Home, Player::White));
    }

    #[test]
    fn test_display_layout() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("  12  11"));
        assert!(lines[0].contains("| W |"));
        assert!(lines[4].contains("| B |"));
        assert!(lines[4].trim_end().ends_with("24"));
    }
}

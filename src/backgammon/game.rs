use crate::backgammon::{Board, CHECKERS_PER_PLAYER, Dice, Player};

/// Everything the game service reports about a game at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub dice: Option<Dice>,
    pub game_over: bool,
}

impl GameState {
    /// Placeholder shown before any game has been started.
    pub fn empty() -> Self {
        GameState {
            board: Board::empty(),
            current_player: Player::White,
            dice: None,
            game_over: false,
        }
    }

    /// The player who bore off all checkers, once the service has ended the game.
    pub fn winner(&self) -> Option<Player> {
        if !self.game_over {
            return None;
        }
        Player::ALL
            .into_iter()
            .find(|&player| self.board.off(player) == CHECKERS_PER_PLAYER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(off: [u8; 2], game_over: bool) -> GameState {
        let mut points = vec![0; 24];
        points[0] = (15 - off[0]) as i32;
        points[23] = -((15 - off[1]) as i32);
        GameState {
            board: Board::from_parts(&points, [0, 0], off).unwrap(),
            current_player: Player::White,
            dice: None,
            game_over,
        }
    }

    #[test]
    fn test_winner_requires_game_over() {
        assert_eq!(finished([15, 3], false).winner(), None);
        assert_eq!(finished([15, 3], true).winner(), Some(Player::White));
        assert_eq!(finished([2, 15], true).winner(), Some(Player::Black));
        assert_eq!(finished([2, 3], true).winner(), None);
    }
}

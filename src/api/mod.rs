//! The boundary to the game service. Everything that decides how the game
//! goes (rules, dice, the computer opponent) lives behind [`GameService`].

use std::fmt::{self, Display};

use crate::backgammon::{Dice, GameState};

mod error;
pub use error::ApiError;

mod http;
pub use http::{HttpGameService, decode_response};

mod wire;
pub use wire::{MoveRequest, ValidMove};

#[cfg(test)]
pub(crate) mod fake;

/// Session-scoped identifier the service hands out for each game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        GameId(id)
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub game_id: GameId,
    pub state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub state: GameState,
    pub dice: Dice,
}

pub trait GameService {
    /// Creates a game and returns its id with the starting position.
    fn new_game(&self) -> Result<Session, ApiError>;

    fn state(&self, game: &GameId) -> Result<GameState, ApiError>;

    fn roll(&self, game: &GameId) -> Result<Roll, ApiError>;

    /// Moves the service allows with the dice that are currently rolled.
    fn valid_moves(&self, game: &GameId) -> Result<Vec<ValidMove>, ApiError>;

    fn make_move(&self, game: &GameId, request: MoveRequest) -> Result<GameState, ApiError>;

    /// Lets the service's computer player move for Black.
    fn ai_move(&self, game: &GameId) -> Result<GameState, ApiError>;

    /// Discards `game` and starts a fresh one under a new id.
    fn refresh(&self, game: &GameId) -> Result<Session, ApiError>;
}

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{ApiError, GameId, GameService, MoveRequest, Roll, Session, ValidMove};
use crate::backgammon::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NewGame,
    State(String),
    Roll(String),
    ValidMoves(String),
    Move(String, MoveRequest),
    AiMove(String),
    Refresh(String),
}

type Queue<T> = RefCell<VecDeque<Result<T, ApiError>>>;

/// In-memory [`GameService`] that replays scripted responses and records
/// every call it receives. Unscripted calls fail with a server error.
#[derive(Default)]
pub struct FakeService {
    calls: RefCell<Vec<Call>>,
    sessions: Queue<Session>,
    states: Queue<GameState>,
    rolls: Queue<Roll>,
    valid_moves: Queue<Vec<ValidMove>>,
}

impl FakeService {
    pub fn new() -> Self {
        FakeService::default()
    }

    /// Scripts the next `new_game` or `refresh` response.
    pub fn with_session(self, response: Result<Session, ApiError>) -> Self {
        self.sessions.borrow_mut().push_back(response);
        self
    }

    /// Scripts the next `state`, `make_move` or `ai_move` response.
    pub fn with_state(self, response: Result<GameState, ApiError>) -> Self {
        self.states.borrow_mut().push_back(response);
        self
    }

    pub fn with_roll(self, response: Result<Roll, ApiError>) -> Self {
        self.rolls.borrow_mut().push_back(response);
        self
    }

    pub fn with_valid_moves(self, response: Result<Vec<ValidMove>, ApiError>) -> Self {
        self.valid_moves.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record<T>(&self, call: Call, queue: &Queue<T>) -> Result<T, ApiError> {
        self.calls.borrow_mut().push(call.clone());
        queue.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(ApiError::Server { status: 500, message: format!("unscripted call {call:?}") })
        })
    }
}

impl GameService for FakeService {
    fn new_game(&self) -> Result<Session, ApiError> {
        self.record(Call::NewGame, &self.sessions)
    }

    fn state(&self, game: &GameId) -> Result<GameState, ApiError> {
        self.record(Call::State(game.to_string()), &self.states)
    }

    fn roll(&self, game: &GameId) -> Result<Roll, ApiError> {
        self.record(Call::Roll(game.to_string()), &self.rolls)
    }

    fn valid_moves(&self, game: &GameId) -> Result<Vec<ValidMove>, ApiError> {
        self.record(Call::ValidMoves(game.to_string()), &self.valid_moves)
    }

    fn make_move(&self, game: &GameId, request: MoveRequest) -> Result<GameState, ApiError> {
        self.record(Call::Move(game.to_string(), request), &self.states)
    }

    fn ai_move(&self, game: &GameId) -> Result<GameState, ApiError> {
        self.record(Call::AiMove(game.to_string()), &self.states)
    }

    fn refresh(&self, game: &GameId) -> Result<Session, ApiError> {
        self.record(Call::Refresh(game.to_string()), &self.sessions)
    }
}

use hashbrown::HashSet;
use tracing::{debug, info, warn};

use crate::api::{ApiError, GameId, GameService, MoveRequest};
use crate::backgammon::{GameState, Player, Position};
use crate::client::Status;
use crate::render::Scene;

/// The side played from this client. The service's computer plays the other.
pub const HUMAN: Player = Player::White;

const NO_GAME: &str = "No game in progress. Press N to start one.";

/// Drives one table: keeps the last snapshot from the service, turns clicks
/// into requests and tracks what the player has selected.
///
/// Moving is a two-phase protocol once the dice are rolled: the first click
/// picks a source (a point or the bar), the second picks the destination and
/// sends the move. Clicking the source again drops the selection.
pub struct Coordinator<S> {
    service: S,
    game: Option<GameId>,
    state: GameState,
    selected: Option<Position>,
    destinations: HashSet<Position>,
    status: Status,
    opponent_pending: bool,
}

impl<S: GameService> Coordinator<S> {
    pub fn new(service: S) -> Self {
        Coordinator {
            service,
            game: None,
            state: GameState::empty(),
            selected: None,
            destinations: HashSet::new(),
            status: Status::info(NO_GAME),
            opponent_pending: false,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn game_id(&self) -> Option<&GameId> {
        self.game.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Destinations the service allows for the selected checker.
    pub fn destinations(&self) -> &HashSet<Position> {
        &self.destinations
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the service should be asked for the opponent's move.
    pub fn opponent_pending(&self) -> bool {
        self.opponent_pending
    }

    /// Starts a new game, replacing the current one if there is one.
    pub fn restart(&mut self) {
        let result = match &self.game {
            Some(game) => self.service.refresh(game),
            None => self.service.new_game(),
        };

        match result {
            Ok(session) => {
                info!(game_id = %session.game_id, "started new game");
                self.game = Some(session.game_id);
                self.clear_selection();
                self.status = Status::info("New game. Roll the dice to begin.");
                self.apply(session.state);
            }
            Err(ApiError::GameNotFound) if self.game.is_some() => {
                warn!("service no longer knows the current game, creating a new one");
                self.game = None;
                self.restart();
            }
            Err(err) => {
                self.opponent_pending = false;
                self.fail("start a new game", err);
            }
        }
    }

    /// Fetches the current snapshot again.
    pub fn reload(&mut self) {
        let Some(game) = self.game.clone() else {
            self.status = Status::info(NO_GAME);
            return;
        };

        match self.service.state(&game) {
            Ok(state) => {
                self.clear_selection();
                self.status = Status::info("Board reloaded");
                self.apply(state);
            }
            Err(err) => self.fail("reload the game", err),
        }
    }

    pub fn roll(&mut self) {
        let Some(game) = self.playable_game() else {
            return;
        };

        match self.service.roll(&game) {
            Ok(roll) => {
                info!(dice = %roll.dice, "rolled");
                self.clear_selection();
                self.status = Status::info(format!("Rolled {}, {} moves to play", roll.dice, roll.dice.moves().count()));
                let mut state = roll.state;
                state.dice.get_or_insert(roll.dice);
                self.apply(state);
            }
            Err(err) => self.fail("roll the dice", err),
        }
    }

    /// Handles a click on a point, the bar or the off tray.
    pub fn click(&mut self, position: Position) {
        let Some(game) = self.playable_game() else {
            return;
        };
        if self.state.dice.is_none() {
            self.status = Status::info("Roll the dice first");
            return;
        }

        match self.selected {
            None => self.select(&game, position),
            Some(source) if source == position => self.cancel_selection(),
            Some(source) => self.move_checker(&game, source, position),
        }
    }

    pub fn cancel_selection(&mut self) {
        if self.selected.is_some() {
            self.clear_selection();
            self.status = Status::info("Selection cleared");
        }
    }

    /// Asks the service to move for the opponent, if it is the opponent's turn.
    pub fn play_opponent(&mut self) {
        if !self.opponent_pending {
            return;
        }
        self.opponent_pending = false;
        let Some(game) = self.game.clone() else {
            return;
        };

        match self.service.ai_move(&game) {
            Ok(state) => {
                info!("opponent moved");
                let opponent = HUMAN.opposite().name();
                self.status = Status::info(format!("{opponent} moved. Your turn."));
                self.apply(state);
                if self.opponent_pending {
                    self.status = Status::info(format!("{opponent} moved, {opponent} to move again"));
                }
            }
            Err(err) => self.fail("get the opponent's move", err),
        }
    }

    pub fn scene(&self) -> Scene {
        let can_roll = self.game.is_some()
            && !self.state.game_over
            && !self.opponent_pending
            && self.state.current_player == HUMAN;
        Scene::build(&self.state, self.selected, &self.destinations, &self.status, can_roll)
    }

    /// Returns the game id if the player may act right now, otherwise
    /// explains why not in the status line.
    fn playable_game(&mut self) -> Option<GameId> {
        let Some(game) = self.game.clone() else {
            self.status = Status::info(NO_GAME);
            return None;
        };
        if self.state.game_over {
            self.status = self.result_status();
            return None;
        }
        if self.opponent_pending || self.state.current_player != HUMAN {
            self.status = Status::info("Waiting for the opponent to move");
            return None;
        }
        Some(game)
    }

    fn select(&mut self, game: &GameId, source: Position) {
        if source == Position::Home {
            self.status = Status::info("You cannot move a checker from the off tray");
            return;
        }
        if !self.state.board.has_checker_at(source, HUMAN) {
            self.status = Status::info(format!("Pick one of your checkers, there is none on {source}"));
            return;
        }

        match self.service.valid_moves(game) {
            Ok(moves) => {
                self.selected = Some(source);
                self.destinations = moves.iter().filter(|m| m.from == source).map(|m| m.to).collect();
                debug!(%source, destinations = self.destinations.len(), "selected");
                self.status = if self.destinations.is_empty() {
                    Status::info(format!("No moves from {source}"))
                } else {
                    Status::info(format!("Selected {source}, choose where to move"))
                };
            }
            Err(err) => self.fail("fetch the valid moves", err),
        }
    }

    fn move_checker(&mut self, game: &GameId, from: Position, to: Position) {
        let request = MoveRequest { from, to, color: HUMAN };
        match self.service.make_move(game, request) {
            Ok(state) => {
                info!(%from, %to, "moved");
                self.clear_selection();
                self.status = Status::info(format!("Moved {from} → {to}"));
                self.apply(state);
            }
            Err(ApiError::Rejected(reason)) => {
                warn!(%from, %to, %reason, "move rejected");
                self.status = Status::rejected(reason);
            }
            Err(err) => {
                self.clear_selection();
                self.fail("move", err);
            }
        }
    }

    fn apply(&mut self, state: GameState) {
        debug!("board:\n{}", state.board);
        self.state = state;
        if state.game_over {
            self.opponent_pending = false;
            self.status = self.result_status();
        } else {
            self.opponent_pending = state.current_player != HUMAN;
        }
    }

    fn result_status(&self) -> Status {
        match self.state.winner() {
            Some(player) => Status::info(format!("{} wins! Press N for a new game.", player.name())),
            None => Status::info("Game over. Press N for a new game."),
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.destinations.clear();
    }

    fn fail(&mut self, action: &str, err: ApiError) {
        warn!(error = %err, "could not {action}");
        self.status = match err {
            ApiError::Rejected(reason) => Status::rejected(reason),
            err => Status::failed(format!("Could not {action}: {err}")),
        };
    }
}

use serde::{Deserialize, Serialize};

use crate::api::{GameId, Roll, Session};
use crate::backgammon::{Board, Dice, GameState, Player, Position, SnapshotError};

/// A move the service considers legal for the current dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValidMove {
    pub from: Position,
    pub to: Position,
    #[serde(rename = "dice_value")]
    pub die: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
    pub color: Player,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PerPlayer {
    white: u8,
    black: u8,
}

impl PerPlayer {
    fn to_array(&self) -> [u8; 2] {
        [self.white, self.black]
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StateDto {
    board: Vec<i32>,
    current_player: Player,
    #[serde(default)]
    dice: Option<(u8, u8)>,
    bar: PerPlayer,
    off: PerPlayer,
    #[serde(default)]
    game_over: bool,
}

fn dice((die1, die2): (u8, u8)) -> Result<Dice, SnapshotError> {
    Dice::from_numbers(die1, die2).ok_or(SnapshotError::Dice(die1, die2))
}

impl TryFrom<StateDto> for GameState {
    type Error = SnapshotError;

    fn try_from(dto: StateDto) -> Result<Self, Self::Error> {
        Ok(GameState {
            board: Board::from_parts(&dto.board, dto.bar.to_array(), dto.off.to_array())?,
            current_player: dto.current_player,
            dice: dto.dice.map(dice).transpose()?,
            game_over: dto.game_over,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StateResponse {
    pub state: StateDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionResponse {
    game_id: String,
    state: StateDto,
}

impl TryFrom<SessionResponse> for Session {
    type Error = SnapshotError;

    fn try_from(response: SessionResponse) -> Result<Self, Self::Error> {
        Ok(Session {
            game_id: GameId::from(response.game_id),
            state: response.state.try_into()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RollResponse {
    state: StateDto,
    dice: (u8, u8),
}

impl TryFrom<RollResponse> for Roll {
    type Error = SnapshotError;

    fn try_from(response: RollResponse) -> Result<Self, Self::Error> {
        Ok(Roll {
            state: response.state.try_into()?,
            dice: dice(response.dice)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidMovesResponse {
    pub valid_moves: Vec<ValidMove>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

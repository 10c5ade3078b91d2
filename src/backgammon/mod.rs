mod board;
pub use board::Board;
pub use board::SnapshotError;
pub use board::{CHECKERS_PER_PLAYER, POINTS};

mod player;
pub use player::Player;

mod position;
pub use position::InvalidPosition;
pub use position::Position;

mod game;
pub use game::GameState;

mod dice;
pub use dice::Dice;

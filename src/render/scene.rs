use hashbrown::HashSet;

use crate::backgammon::{Dice, GameState, POINTS, Player, Position};
use crate::client::Status;

/// Most checkers drawn on one stack; taller stacks show a counter instead.
pub const MAX_STACK: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stack {
    pub owner: Option<Player>,
    pub count: u8,
}

impl Stack {
    pub fn new(owner: Player, count: u8) -> Self {
        Stack {
            owner: (count > 0).then_some(owner),
            count,
        }
    }

    /// Number of checkers actually drawn.
    pub fn visible(&self) -> u8 {
        self.count.min(MAX_STACK)
    }

    /// Total count to print on the outermost checker when the stack is capped.
    pub fn overflow(&self) -> Option<u8> {
        (self.count > MAX_STACK).then_some(self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointView {
    /// 0-based point index.
    pub index: u8,
    pub stack: Stack,
    pub selected: bool,
    pub highlighted: bool,
}

/// Everything the view draws for one frame, independent of window geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub points: Vec<PointView>,
    pub bar: [Stack; 2],
    pub bar_selected: bool,
    pub off: [u8; 2],
    pub off_highlighted: bool,
    pub dice: Option<Dice>,
    pub current_player: Player,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub status: Status,
    pub can_roll: bool,
}

impl Scene {
    pub fn build(
        state: &GameState,
        selected: Option<Position>,
        destinations: &HashSet<Position>,
        status: &Status,
        can_roll: bool,
    ) -> Self {
        let board = &state.board;
        let points = (0..POINTS as u8)
            .map(|index| {
                let position = Position::Board(index);
                PointView {
                    index,
                    stack: Stack {
                        owner: board.owner(index),
                        count: board.count(index),
                    },
                    selected: selected == Some(position),
                    highlighted: destinations.contains(&position),
                }
            })
            .collect();

        Scene {
            points,
            bar: Player::ALL.map(|player| Stack::new(player, board.bar(player))),
            bar_selected: selected == Some(Position::Bar),
            off: Player::ALL.map(|player| board.off(player)),
            off_highlighted: destinations.contains(&Position::Home),
            dice: state.dice,
            current_player: state.current_player,
            game_over: state.game_over,
            winner: state.winner(),
            status: status.clone(),
            can_roll,
        }
    }

    pub fn point(&self, index: u8) -> &PointView {
        &self.points[index as usize]
    }

    pub fn bar(&self, player: Player) -> Stack {
        self.bar[player.index()]
    }

    pub fn off(&self, player: Player) -> u8 {
        self.off[player.index()]
    }

    /// One-line description of whose turn it is or how the game ended.
    pub fn headline(&self) -> String {
        match (self.game_over, self.winner) {
            (true, Some(player)) => format!("{} wins", player.name()),
            (true, None) => "Game over".to_owned(),
            (false, _) => format!("{} to move", self.current_player.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backgammon::Board;

    fn scene_for(points: &[i32], bar: [u8; 2], off: [u8; 2], selected: Option<Position>, destinations: &[Position]) -> Scene {
        let state = GameState {
            board: Board::from_parts(points, bar, off).unwrap(),
            current_player: Player::White,
            dice: Dice::from_numbers(2, 6),
            game_over: false,
        };
        let destinations: HashSet<Position> = destinations.iter().copied().collect();
        Scene::build(&state, selected, &destinations, &Status::info("ready"), true)
    }

    #[test]
    fn test_stack_cap() {
        let stack = Stack::new(Player::White, 7);
        assert_eq!(stack.visible(), MAX_STACK);
        assert_eq!(stack.overflow(), Some(7));

        let stack = Stack::new(Player::Black, MAX_STACK);
        assert_eq!(stack.visible(), MAX_STACK);
        assert_eq!(stack.overflow(), None);

        let stack = Stack::new(Player::Black, 0);
        assert_eq!(stack, Stack::default());
        assert_eq!(stack.visible(), 0);
    }

    #[test]
    fn test_points_from_snapshot() {
        let mut points = vec![0; 24];
        points[0] = 9;
        points[12] = -6;
        points[18] = 3;
        let scene = scene_for(&points, [1, 0], [2, 0], None, &[]);

        assert_eq!(scene.points.len(), 24);
        assert_eq!(scene.point(0).stack, Stack { owner: Some(Player::White), count: 9 });
        assert_eq!(scene.point(0).stack.visible(), 5);
        assert_eq!(scene.point(0).stack.overflow(), Some(9));
        assert_eq!(scene.point(12).stack, Stack { owner: Some(Player::Black), count: 6 });
        assert_eq!(scene.point(18).stack.overflow(), None);
        assert_eq!(scene.point(5).stack, Stack::default());
        assert_eq!(scene.bar(Player::White), Stack::new(Player::White, 1));
        assert_eq!(scene.bar(Player::Black).count, 0);
        assert_eq!(scene.off(Player::White), 2);
        assert_eq!(scene.dice, Dice::from_numbers(2, 6));
        assert_eq!(scene.headline(), "White to move");
    }

    #[test]
    fn test_selection_and_highlights() {
        let board: Vec<i32> = (0..24).map(|i| Board::new().checkers_on_position(i) as i32).collect();
        let scene = scene_for(
            &board,
            [0, 0],
            [0, 0],
            Some(Position::Board(18)),
            &[Position::Board(20), Position::Home],
        );

        let selected: Vec<u8> = scene.points.iter().filter(|p| p.selected).map(|p| p.index).collect();
        let highlighted: Vec<u8> = scene.points.iter().filter(|p| p.highlighted).map(|p| p.index).collect();
        assert_eq!(selected, vec![18]);
        assert_eq!(highlighted, vec![20]);
        assert!(scene.off_highlighted);
        assert!(!scene.bar_selected);
    }

    #[test]
    fn test_bar_selection() {
        let mut points = vec![0; 24];
        points[0] = 14;
        let scene = scene_for(&points, [1, 0], [0, 0], Some(Position::Bar), &[Position::Board(2)]);
        assert!(scene.bar_selected);
        assert!(scene.point(2).highlighted);
        assert!(!scene.off_highlighted);
    }
}

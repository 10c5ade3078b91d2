use nannou::geom::{Point2, Rect};

use crate::backgammon::{Player, Position};
use crate::render::MAX_STACK;

/// Width of the side panel holding dice, status and buttons.
pub const PANEL_WIDTH: f32 = 280.0;

const COLUMNS: usize = 14;
const BAR_COLUMN: usize = 6;
const OFF_COLUMN: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Roll,
    NewGame,
}

/// What lies under a window coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Position(Position),
    Button(Button),
}

/// Window geometry of the table.
///
/// The board has 14 columns: six points, the bar, six points and the off
/// tray. The top row holds points 12 to 7 and 6 to 1, the bottom row points
/// 13 to 18 and 19 to 24, so White's home board is at the bottom right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub board: Rect,
    pub panel: Rect,
    pub tile_width: f32,
    pub tile_height: f32,
    pub checker_size: f32,
}

impl Layout {
    pub fn new(window: Rect) -> Self {
        let panel_width = PANEL_WIDTH.min(window.w() / 3.0);
        let board_width = window.w() - panel_width;
        let board = Rect::from_x_y_w_h(window.left() + board_width / 2.0, window.y(), board_width, window.h());
        let panel = Rect::from_x_y_w_h(window.right() - panel_width / 2.0, window.y(), panel_width, window.h());

        let tile_width = board.w() / COLUMNS as f32;
        let tile_height = 2.0 * board.h() / 5.0;
        let checker_size = (tile_width * 0.8).min(tile_height / MAX_STACK as f32);

        Layout { board, panel, tile_width, tile_height, checker_size }
    }

    /// Column and row of a 0-based point index.
    pub fn slot(index: u8) -> (usize, Row) {
        let index = index as usize;
        match index {
            0..=5 => (12 - index, Row::Top),
            6..=11 => (11 - index, Row::Top),
            12..=17 => (index - 12, Row::Bottom),
            _ => (index - 11, Row::Bottom),
        }
    }

    /// Inverse of [`Self::slot`] for point columns.
    fn point_at(column: usize, row: Row) -> u8 {
        let index = match (row, column) {
            (Row::Top, 0..=5) => 11 - column,
            (Row::Top, _) => 12 - column,
            (Row::Bottom, 0..=5) => 12 + column,
            (Row::Bottom, _) => 11 + column,
        };
        index as u8
    }

    pub fn column_x(&self, column: usize) -> f32 {
        self.board.left() + (column as f32 + 0.5) * self.tile_width
    }

    pub fn column_rect(&self, column: usize) -> Rect {
        Rect::from_x_y_w_h(self.column_x(column), self.board.y(), self.tile_width, self.board.h())
    }

    pub fn bar_rect(&self) -> Rect {
        self.column_rect(BAR_COLUMN)
    }

    pub fn off_rect(&self) -> Rect {
        self.column_rect(OFF_COLUMN)
    }

    /// Area of the triangle's bounding box for a point.
    pub fn point_rect(&self, index: u8) -> Rect {
        let (column, row) = Self::slot(index);
        let y = match row {
            Row::Top => self.board.top() - self.tile_height / 2.0,
            Row::Bottom => self.board.bottom() + self.tile_height / 2.0,
        };
        Rect::from_x_y_w_h(self.column_x(column), y, self.tile_width, self.tile_height)
    }

    /// Centre of the `slot`-th checker counted from the board edge.
    fn stack_center(&self, column: usize, row: Row, slot: u8) -> Point2 {
        let offset = self.checker_size / 2.0 + slot as f32 * self.checker_size;
        let y = match row {
            Row::Top => self.board.top() - offset,
            Row::Bottom => self.board.bottom() + offset,
        };
        Point2::new(self.column_x(column), y)
    }

    pub fn checker_center(&self, index: u8, slot: u8) -> Point2 {
        let (column, row) = Self::slot(index);
        self.stack_center(column, row, slot)
    }

    /// White waits on the upper half of the bar, next to its entry points.
    pub fn bar_checker_center(&self, player: Player, slot: u8) -> Point2 {
        let row = match player {
            Player::White => Row::Top,
            Player::Black => Row::Bottom,
        };
        let mut center = self.stack_center(BAR_COLUMN, row, slot);
        let gap = self.checker_size * 0.5;
        center.y += match row {
            Row::Top => -gap,
            Row::Bottom => gap,
        };
        center
    }

    /// Where the borne-off count of `player` is written.
    pub fn off_label_center(&self, player: Player) -> Point2 {
        let rect = self.off_rect();
        let y = match player {
            Player::White => rect.bottom() + self.tile_height / 2.0,
            Player::Black => rect.top() - self.tile_height / 2.0,
        };
        Point2::new(rect.x(), y)
    }

    pub fn button_rect(&self, button: Button) -> Rect {
        let lift = match button {
            Button::Roll => 130.0,
            Button::NewGame => 60.0,
        };
        Rect::from_x_y_w_h(self.panel.x(), self.panel.bottom() + lift, self.panel.w() - 40.0, 48.0)
    }

    pub fn hit(&self, point: Point2) -> Option<Hit> {
        for button in [Button::Roll, Button::NewGame] {
            if contains(&self.button_rect(button), point) {
                return Some(Hit::Button(button));
            }
        }
        if !contains(&self.board, point) {
            return None;
        }

        let column = (((point.x - self.board.left()) / self.tile_width) as usize).min(COLUMNS - 1);
        let position = match column {
            BAR_COLUMN => Position::Bar,
            OFF_COLUMN => Position::Home,
            column => {
                let row = if point.y >= self.board.y() { Row::Top } else { Row::Bottom };
                Position::Board(Self::point_at(column, row))
            }
        };
        Some(Hit::Position(position))
    }
}

pub fn contains(rect: &Rect, point: Point2) -> bool {
    point.x >= rect.left() && point.x <= rect.right() && point.y >= rect.bottom() && point.y <= rect.top()
}

//! Turning a game snapshot into pixels: a pure [`Scene`] of what to show,
//! the window [`Layout`] that places it, and the nannou drawing code.

mod draw;
pub use draw::draw_scene;

mod layout;
pub use layout::{Button, Hit, Layout, PANEL_WIDTH, Row};

mod scene;
pub use scene::{MAX_STACK, PointView, Scene, Stack};

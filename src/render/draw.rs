use nannou::color::{self, Rgba, rgba};
use nannou::draw::Draw;
use nannou::geom::{Point2, Rect};

use crate::backgammon::{Dice, Player};
use crate::client::Status;
use crate::render::{Button, Layout, Row, Scene, Stack};

fn selected_overlay() -> Rgba {
    rgba(1.0, 0.84, 0.0, 0.35)
}

fn highlight_overlay() -> Rgba {
    rgba(0.2, 0.9, 0.3, 0.35)
}

fn checker_color(player: Player) -> color::Srgb<u8> {
    match player {
        Player::White => color::WHITE,
        Player::Black => color::RED,
    }
}

fn label_color(player: Player) -> color::Srgb<u8> {
    match player {
        Player::White => color::BLACK,
        Player::Black => color::WHITE,
    }
}

/// Renders a whole frame of the table.
pub fn draw_scene(draw: &Draw, layout: &Layout, scene: &Scene) {
    draw_board(draw, layout, scene);
    draw_panel(draw, layout, scene);
}

fn fill(draw: &Draw, rect: Rect) -> nannou::draw::Drawing<'_, nannou::draw::primitive::Rect> {
    draw.rect().x_y(rect.x(), rect.y()).w_h(rect.w(), rect.h())
}

fn draw_board(draw: &Draw, layout: &Layout, scene: &Scene) {
    fill(draw, layout.board).color(color::BLUE);
    fill(draw, layout.bar_rect()).color(color::BLACK);
    fill(draw, layout.off_rect()).color(color::MIDNIGHTBLUE);

    for view in &scene.points {
        let rect = layout.point_rect(view.index);
        let (column, row) = Layout::slot(view.index);
        let (base, tip) = match row {
            Row::Top => (rect.top(), rect.bottom()),
            Row::Bottom => (rect.bottom(), rect.top()),
        };
        let color = if (column + (row == Row::Bottom) as usize) % 2 == 0 {
            color::DARKBLUE
        } else {
            color::BLACK
        };
        draw.polygon()
            .points([(rect.left(), base), (rect.right(), base), (rect.x(), tip)])
            .color(color);

        if view.selected {
            fill(draw, rect).color(selected_overlay());
        } else if view.highlighted {
            fill(draw, rect).color(highlight_overlay());
        }

        draw_stack(draw, layout, view.stack, |slot| layout.checker_center(view.index, slot));
    }

    if scene.bar_selected {
        fill(draw, layout.bar_rect()).color(selected_overlay());
    }
    for player in Player::ALL {
        draw_stack(draw, layout, scene.bar(player), |slot| layout.bar_checker_center(player, slot));
    }

    if scene.off_highlighted {
        fill(draw, layout.off_rect()).color(highlight_overlay());
    }
    for player in Player::ALL {
        let center = layout.off_label_center(player);
        draw.text(&format!("{}\noff\n{}", player.name(), scene.off(player)))
            .x_y(center.x, center.y)
            .w(layout.tile_width)
            .font_size((layout.tile_width / 5.0) as u32)
            .color(checker_color(player));
    }
}

fn draw_stack(draw: &Draw, layout: &Layout, stack: Stack, center: impl Fn(u8) -> Point2) {
    let Some(owner) = stack.owner else {
        return;
    };
    let size = layout.checker_size * 0.9;
    for slot in 0..stack.visible() {
        let c = center(slot);
        draw.ellipse()
            .x_y(c.x, c.y)
            .w_h(size, size)
            .color(checker_color(owner))
            .stroke(color::GRAY)
            .stroke_weight(1.5);
    }
    if let Some(total) = stack.overflow() {
        let c = center(stack.visible() - 1);
        draw.text(&total.to_string())
            .x_y(c.x, c.y)
            .font_size((size / 2.0) as u32)
            .color(label_color(owner));
    }
}

fn draw_panel(draw: &Draw, layout: &Layout, scene: &Scene) {
    let panel = layout.panel;
    fill(draw, panel).color(color::BLACK);

    let width = panel.w() - 20.0;
    let mut y = panel.top() - 50.0;
    draw.text(&scene.headline())
        .x_y(panel.x(), y)
        .w(width)
        .font_size(28)
        .color(color::WHITE);

    y -= 90.0;
    match scene.dice {
        Some(dice) => draw_dice(draw, Point2::new(panel.x(), y), dice),
        None => {
            draw.text("Dice not rolled")
                .x_y(panel.x(), y)
                .w(width)
                .font_size(16)
                .color(color::GRAY);
        }
    }

    y -= 100.0;
    let status_color = match scene.status {
        Status::Info(_) => color::WHITE,
        Status::Rejected(_) => color::ORANGE,
        Status::Failed(_) => color::RED,
    };
    draw.text(scene.status.text())
        .x_y(panel.x(), y)
        .w(width)
        .font_size(16)
        .color(status_color);

    draw_button(draw, layout.button_rect(Button::Roll), "Roll dice", scene.can_roll);
    draw_button(draw, layout.button_rect(Button::NewGame), "New game", true);
}

fn draw_dice(draw: &Draw, center: Point2, dice: Dice) {
    let size = 56.0;
    for (n, value) in [dice.die1(), dice.die2()].into_iter().enumerate() {
        let x = center.x + (n as f32 - 0.5) * (size + 20.0);
        draw.rect()
            .x_y(x, center.y)
            .w_h(size, size)
            .color(color::WHITE)
            .stroke(color::GRAY)
            .stroke_weight(2.0);
        draw.text(&value.to_string())
            .x_y(x, center.y)
            .font_size(30)
            .color(color::BLACK);
    }
    if dice.is_double() {
        draw.text("Double")
            .x_y(center.x, center.y - size)
            .font_size(14)
            .color(color::WHITE);
    }
}

fn draw_button(draw: &Draw, rect: Rect, label: &str, enabled: bool) {
    let color = if enabled { color::DARKGREEN } else { color::DIMGRAY };
    fill(draw, rect).color(color);
    draw.text(label)
        .x_y(rect.x(), rect.y())
        .w(rect.w())
        .font_size(20)
        .color(color::WHITE);
}

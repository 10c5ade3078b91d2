use std::sync::OnceLock;

use backgammon_client::api::HttpGameService;
use backgammon_client::client::Coordinator;
use backgammon_client::config::Config;
use backgammon_client::render::{Button, Hit, Layout, draw_scene};
use clap::Parser;
use nannou::event::{Key, MouseButton, Update};
use nannou::{App, Frame};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

static CONFIG: OnceLock<Config> = OnceLock::new();

fn config() -> &'static Config {
    CONFIG.get_or_init(Config::parse)
}

fn main() {
    init_logging(config());
    nannou::app(model).update(update).run();
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

struct Model {
    coordinator: Coordinator<HttpGameService>,
    opponent_delay: u8,
    state: State,
}

enum State {
    Idle,
    OpponentThinking(u8),
}

fn model(app: &App) -> Model {
    let config = config();
    app.set_exit_on_escape(false);

    let window = app
        .new_window()
        .title("Backgammon")
        .size(config.width, config.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build();
    if let Err(err) = window {
        error!(error = ?err, "could not open the window");
        std::process::exit(1);
    }

    let service = match HttpGameService::new(config.server.clone(), config.request_timeout()) {
        Ok(service) => service,
        Err(err) => {
            error!(error = %err, server = %config.server, "could not set up the game service client");
            std::process::exit(1);
        }
    };
    info!(server = %service.base(), "connecting to game service");

    let mut coordinator = Coordinator::new(service);
    coordinator.restart();

    Model {
        coordinator,
        opponent_delay: config.opponent_delay_frames,
        state: State::Idle,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    if !model.coordinator.opponent_pending() {
        model.state = State::Idle;
        return;
    }

    // Pause a few frames before the opponent replies.
    match model.state {
        State::Idle => model.state = State::OpponentThinking(0),
        State::OpponentThinking(n) if n >= model.opponent_delay => {
            model.coordinator.play_opponent();
            model.state = State::Idle;
        }
        State::OpponentThinking(n) => model.state = State::OpponentThinking(n + 1),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    let layout = Layout::new(app.window_rect());
    match layout.hit(app.mouse.position()) {
        Some(Hit::Position(position)) => model.coordinator.click(position),
        Some(Hit::Button(Button::Roll)) => model.coordinator.roll(),
        Some(Hit::Button(Button::NewGame)) => model.coordinator.restart(),
        None => (),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space | Key::R => model.coordinator.roll(),
        Key::N => model.coordinator.restart(),
        Key::F5 => model.coordinator.reload(),
        Key::Escape => model.coordinator.cancel_selection(),
        _ => (),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(nannou::color::BLACK);

    let layout = Layout::new(app.window_rect());
    draw_scene(&draw, &layout, &model.coordinator.scene());

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(error = ?err, "could not render frame");
    }
}

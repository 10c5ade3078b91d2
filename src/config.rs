use std::time::Duration;

use clap::Parser;
use url::Url;

/// Desktop client for a Backgammon game service.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Base URL of the game service; the API lives under `api/` below it.
    #[arg(long, env = "BACKGAMMON_SERVER", default_value = "http://127.0.0.1:5000/")]
    pub server: Url,

    /// Seconds to wait for a response from the service. Requests block the
    /// window while they run.
    #[arg(long, default_value_t = 4)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 760)]
    pub height: u32,

    /// Frames to wait before asking the service for the opponent's move.
    #[arg(long, default_value_t = 30)]
    pub opponent_delay_frames: u8,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["backgammon-client"]).unwrap();
        assert_eq!(config.server.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.request_timeout(), Duration::from_secs(4));
        assert_eq!((config.width, config.height), (1280, 760));
        assert_eq!(config.opponent_delay_frames, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "backgammon-client",
            "--server",
            "https://games.example.org/backgammon/",
            "--timeout-secs",
            "3",
            "--opponent-delay-frames",
            "0",
        ])
        .unwrap();
        assert_eq!(config.server.path(), "/backgammon/");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.opponent_delay_frames, 0);
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(Config::try_parse_from(["backgammon-client", "--server", "not a url"]).is_err());
    }
}

pub mod api;
pub mod backgammon;
pub mod client;
pub mod config;
pub mod render;

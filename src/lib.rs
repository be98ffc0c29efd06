// Public API for integration tests and potential library usage

pub mod app;
pub mod broadcast;
pub mod config;
pub mod game;
pub mod protocol;
pub mod state;
pub mod timer;
pub mod types;
pub mod words;
pub mod ws;

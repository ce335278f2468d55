//! Core engine types: teams, RNG, configuration, events and game state.
//!
//! These are the building blocks the round state machine in `rules`
//! works on. None of them perform I/O except `GameConfig::from_file`.

pub mod team;
pub mod rng;
pub mod config;
pub mod event;
pub mod state;

pub use team::{InvalidTeam, TeamId, TeamMap};
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig, DEFAULT_TARGET_SCORE, DEFAULT_WORDS_PATH};
pub use event::RoundEvent;
pub use state::{GameState, Phase};

//! # alias-engine
//!
//! Game-state engine for Alias, the two-team word-guessing party game.
//!
//! One team explains a word, the other guesses. A guessed word scores a
//! point, a skipped word scores nothing, and when the round timer runs out
//! play passes to the other team. The first team to reach the target score
//! (20 by default) wins; if the words run out first the game simply ends.
//!
//! ## Design
//!
//! - **Transport-agnostic**: the engine never talks to a chat service. A
//!   host calls [`AliasEngine::start_game`] and [`AliasEngine::advance`]
//!   and renders the returned [`RoundView`].
//! - **Single owned game**: exactly one live [`GameState`], owned by the
//!   engine value. Hosts that receive events concurrently wrap the engine
//!   in a mutex.
//! - **Explicit errors**: every call returns `Result<_, EngineError>`.
//! - **Reproducible draws**: word choice is random, but seedable.
//!
//! ## Modules
//!
//! - `core`: teams, RNG, configuration, events, game state
//! - `words`: word pool loading and draw policies
//! - `rules`: the round state machine and its views
//! - `error`: engine error types
//! - `telemetry`: tracing subscriber setup
//!
//! ## Example
//!
//! ```
//! use alias_engine::{AliasEngine, GameConfig, RoundEvent, RoundStatus};
//!
//! let mut engine = AliasEngine::new(GameConfig::new().with_seed(1));
//! let view = engine.start_game(b"cat\ndog\n").unwrap();
//! assert_eq!(view.status, RoundStatus::InProgress);
//!
//! let view = engine.advance(RoundEvent::Skip).unwrap();
//! assert!(view.current_word.is_some());
//!
//! let view = engine.advance(RoundEvent::Skip).unwrap();
//! assert_eq!(view.status, RoundStatus::Exhausted);
//! ```

pub mod core;
pub mod words;
pub mod rules;
pub mod error;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameState, Phase, RoundEvent, TeamId, TeamMap,
};

pub use crate::words::{normalize_word, UniformPicker, WordPicker, WordPool};

pub use crate::rules::{AliasEngine, RoundStatus, RoundView};

pub use crate::error::{EngineError, ErrorKind};

//! The round state machine.
//!
//! `AliasEngine` owns the one live game. The chat layer calls
//! `start_game` and then `advance` once per button press, rendering the
//! returned [`RoundView`] each time. Calls must be serialized by the
//! caller; the engine itself takes `&mut self` and does no locking.
//!
//! ```text
//! NotStarted --start ok--> InProgress
//! InProgress --Correct reaches target--> Finished(team)
//! InProgress --Correct/Skip/EndRound, draw ok--> InProgress
//! InProgress --Correct/Skip/EndRound, pool empty--> Exhausted
//! any --start ok--> InProgress (previous game discarded)
//! ```

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use super::view::RoundView;
use crate::core::{GameConfig, GameState, Phase, RoundEvent, TeamId};
use crate::error::EngineError;
use crate::words::{UniformPicker, WordPicker, WordPool};

/// Holder of the single live Alias game.
pub struct AliasEngine<P: WordPicker = UniformPicker> {
    config: GameConfig,
    picker: P,
    game: Option<GameState>,
}

impl AliasEngine<UniformPicker> {
    /// Engine with uniform random draws, seeded from `config.seed`.
    #[instrument(skip(config), fields(target_score = config.target_score))]
    pub fn new(config: GameConfig) -> Self {
        let picker = UniformPicker::from_seed(config.seed);
        debug!(seed = picker.seed(), "Word picker seeded");
        Self::with_picker(config, picker)
    }

    /// Seed in use for word draws.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.picker.seed()
    }
}

impl Default for AliasEngine<UniformPicker> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<P: WordPicker> AliasEngine<P> {
    /// Engine with a custom draw policy.
    pub fn with_picker(config: GameConfig, picker: P) -> Self {
        Self {
            config,
            picker,
            game: None,
        }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live game, if one was ever started.
    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.game.as_ref().map_or(Phase::NotStarted, GameState::phase)
    }

    /// View of the live game, for re-rendering without an event.
    pub fn view(&self) -> Result<RoundView, EngineError> {
        self.game
            .as_ref()
            .map(GameState::view)
            .ok_or(EngineError::GameNotRunning)
    }

    // === Starting ===

    /// Start a new game from raw word-source bytes.
    ///
    /// On any error the previous game, if any, is left untouched.
    #[instrument(skip(self, source), fields(bytes = source.len()))]
    pub fn start_game(&mut self, source: &[u8]) -> Result<RoundView, EngineError> {
        let pool = WordPool::load(source)?;
        self.start_with_pool(pool)
    }

    /// Start a new game from decoded lines.
    pub fn start_game_from_lines<I, S>(&mut self, lines: I) -> Result<RoundView, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pool = WordPool::from_lines(lines)?;
        self.start_with_pool(pool)
    }

    /// Start a new game from a word file.
    pub fn start_game_from_path(&mut self, path: impl AsRef<Path>) -> Result<RoundView, EngineError> {
        let pool = WordPool::from_path(path)?;
        self.start_with_pool(pool)
    }

    /// Start a new game from the configured word file.
    pub fn start_configured_game(&mut self) -> Result<RoundView, EngineError> {
        let path = self.config.words_path.clone();
        self.start_game_from_path(path)
    }

    fn start_with_pool(&mut self, pool: WordPool) -> Result<RoundView, EngineError> {
        let words = pool.len();
        let mut game = GameState::new(pool, self.config.target_score);
        game.serve_next(&mut self.picker)?;

        let view = game.view();
        self.game = Some(game);
        info!(words, target_score = self.config.target_score, "New game started");
        Ok(view)
    }

    // === Advancing ===

    /// Apply one event to the running game.
    ///
    /// Fails with `GameNotRunning` if no game is in progress. Running out of
    /// words is not an error: it yields an `Exhausted` view.
    #[instrument(skip(self), fields(phase = ?self.phase()))]
    pub fn advance(&mut self, event: RoundEvent) -> Result<RoundView, EngineError> {
        let game = match self.game.as_mut() {
            Some(game) if game.phase() == Phase::InProgress => game,
            _ => {
                debug!("Event ignored, no game in progress");
                return Err(EngineError::GameNotRunning);
            }
        };

        match event {
            RoundEvent::Correct => {
                let score = game.award_point();
                if score >= game.target_score() {
                    game.finish();
                    info!(winner = %game.active_team(), score, "Game won");
                    return Ok(game.view());
                }
            }
            RoundEvent::Skip => {}
            RoundEvent::EndRound => {
                game.rotate_team();
                debug!(team = %game.active_team(), "Round ended");
            }
        }

        Self::next_word(game, &mut self.picker)
    }

    /// Shared step after every non-winning event: serve a fresh word or
    /// close the game when none is left.
    fn next_word(game: &mut GameState, picker: &mut P) -> Result<RoundView, EngineError> {
        let served = game.serve_next(picker).map(|_| ());
        match served {
            Ok(()) => Ok(game.view()),
            Err(EngineError::PoolExhausted) => {
                game.exhaust();
                info!(
                    first = game.score(TeamId::FIRST),
                    second = game.score(TeamId::SECOND),
                    "Out of words"
                );
                Ok(game.view())
            }
            Err(err) => {
                warn!(error = %err, "Event processing failed");
                Err(match err {
                    EngineError::Internal { .. } => err,
                    other => EngineError::internal(other.to_string()),
                })
            }
        }
    }
}

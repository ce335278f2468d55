//! Game state for a single Alias game.
//!
//! ## Phase
//!
//! Where the engine is in its lifecycle:
//! `NotStarted -> InProgress -> Finished(winner) | Exhausted`.
//!
//! ## GameState
//!
//! Everything one game needs: active team, scores, the word on screen,
//! the win threshold and the game's own word pool. A `GameState` is built
//! fresh for every new game and only changed through the round state
//! machine in [`crate::rules`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::team::{TeamId, TeamMap};
use crate::error::EngineError;
use crate::rules::{RoundStatus, RoundView};
use crate::words::{WordPicker, WordPool};

/// Lifecycle phase of the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started.
    #[default]
    NotStarted,
    /// A word is on screen and events are accepted.
    InProgress,
    /// A team reached the target score.
    Finished(TeamId),
    /// The pool ran out of unused words.
    Exhausted,
}

impl Phase {
    /// True for `Finished` and `Exhausted`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Finished(_) | Phase::Exhausted)
    }
}

/// State of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    active_team: TeamId,
    scores: TeamMap<u32>,
    current_word: Option<String>,
    target_score: u32,
    pool: WordPool,
    phase: Phase,
}

impl GameState {
    /// Fresh game over `pool`: team 1 to play, both scores zero, no word yet.
    #[must_use]
    pub fn new(pool: WordPool, target_score: u32) -> Self {
        Self {
            active_team: TeamId::FIRST,
            scores: TeamMap::with_value(0),
            current_word: None,
            target_score,
            pool,
            phase: Phase::InProgress,
        }
    }

    /// Team currently explaining.
    #[must_use]
    pub fn active_team(&self) -> TeamId {
        self.active_team
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &TeamMap<u32> {
        &self.scores
    }

    /// One team's score.
    #[must_use]
    pub fn score(&self, team: TeamId) -> u32 {
        self.scores[team]
    }

    /// Word on screen.
    ///
    /// Still set after a win; cleared once the pool is exhausted.
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    /// Win threshold.
    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// This game's word pool.
    #[must_use]
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Current phase. Never `NotStarted`.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    // === Transitions ===

    /// Add one point to the active team and return its new score.
    pub(crate) fn award_point(&mut self) -> u32 {
        let score = &mut self.scores[self.active_team];
        *score += 1;
        *score
    }

    /// Hand play to the other team.
    pub(crate) fn rotate_team(&mut self) {
        self.active_team = self.active_team.other();
    }

    /// End the game with the active team as winner. The word stays put.
    pub(crate) fn finish(&mut self) {
        self.phase = Phase::Finished(self.active_team);
    }

    /// End the game for lack of words.
    pub(crate) fn exhaust(&mut self) {
        self.current_word = None;
        self.phase = Phase::Exhausted;
    }

    /// Draw the next word, record it as used and put it on screen.
    pub(crate) fn serve_next(&mut self, picker: &mut impl WordPicker) -> Result<&str, EngineError> {
        let word = self.pool.draw(picker)?;
        if !self.pool.mark_used(&word) {
            return Err(EngineError::internal(format!(
                "drawn word {} could not be recorded as used",
                word
            )));
        }
        debug!(team = %self.active_team, word = %word, "Serving word");
        Ok(self.current_word.insert(word).as_str())
    }

    // === Views ===

    /// Snapshot for the renderer.
    #[must_use]
    pub fn view(&self) -> RoundView {
        let (status, winner, current_word) = match self.phase {
            Phase::Finished(winner) => (RoundStatus::Finished, Some(winner), None),
            Phase::Exhausted => (RoundStatus::Exhausted, None, None),
            Phase::InProgress | Phase::NotStarted => {
                (RoundStatus::InProgress, None, self.current_word.clone())
            }
        };

        RoundView {
            active_team: self.active_team,
            current_word,
            scores: self.scores.clone(),
            status,
            winner,
        }
    }
}

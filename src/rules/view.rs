//! What the chat layer renders after every engine call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{RoundEvent, TeamId, TeamMap};

/// Status shown to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Finished,
    Exhausted,
}

/// Snapshot of a game after an engine call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Team explaining (or the winner, once finished).
    pub active_team: TeamId,
    /// Word to explain. `None` in terminal views.
    pub current_word: Option<String>,
    /// Running scores.
    pub scores: TeamMap<u32>,
    pub status: RoundStatus,
    /// Set only when `status` is `Finished`.
    pub winner: Option<TeamId>,
}

impl RoundView {
    /// True once the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// Events to offer as buttons. Empty for a finished game.
    pub fn actions(&self) -> Vec<RoundEvent> {
        if self.is_terminal() {
            Vec::new()
        } else {
            RoundEvent::iter().collect()
        }
    }
}

impl fmt::Display for RoundView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.scores[TeamId::FIRST];
        let second = self.scores[TeamId::SECOND];

        match (self.status, self.winner) {
            (RoundStatus::Finished, Some(winner)) => {
                write!(f, "🎉 {} wins! Score: {} : {}", winner, first, second)
            }
            (RoundStatus::Exhausted, _) | (RoundStatus::Finished, None) => {
                writeln!(f, "Out of words!")?;
                writeln!(f, "Current score:")?;
                writeln!(f, "{}: {}", TeamId::FIRST, first)?;
                write!(f, "{}: {}", TeamId::SECOND, second)
            }
            (RoundStatus::InProgress, _) => {
                writeln!(f, "{}, explain this word:", self.active_team)?;
                writeln!(f)?;
                writeln!(f, "👉 {}", self.current_word.as_deref().unwrap_or("?"))?;
                writeln!(f)?;
                write!(f, "Score: {} : {}", first, second)
            }
        }
    }
}

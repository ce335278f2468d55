//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe identifier for one of the two competing sides, numbered
//! `1` and `2` the way players call them at the table.
//!
//! ## TeamMap
//!
//! Fixed two-slot storage indexed by `TeamId`. Backs the score table,
//! so a score can never be recorded for a team that does not exist.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two teams, `1` or `2`.
///
/// Construct via the constants or `TryFrom<u8>`; the inner value is
/// always 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TeamId(u8);

impl TeamId {
    /// Team 1, which always opens a new game.
    pub const FIRST: TeamId = TeamId(1);

    /// Team 2.
    pub const SECOND: TeamId = TeamId(2);

    /// The team number as shown to players (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The opposing team.
    ///
    /// ```
    /// use alias_engine::core::TeamId;
    ///
    /// assert_eq!(TeamId::FIRST.other(), TeamId::SECOND);
    /// assert_eq!(TeamId::FIRST.other().other(), TeamId::FIRST);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self.0 {
            1 => TeamId::SECOND,
            _ => TeamId::FIRST,
        }
    }

    /// Both teams in turn order.
    pub fn all() -> impl Iterator<Item = TeamId> {
        [TeamId::FIRST, TeamId::SECOND].into_iter()
    }
}

impl Default for TeamId {
    fn default() -> Self {
        TeamId::FIRST
    }
}

impl TryFrom<u8> for TeamId {
    type Error = InvalidTeam;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 | 2 => Ok(TeamId(value)),
            other => Err(InvalidTeam(other)),
        }
    }
}

impl From<TeamId> for u8 {
    fn from(team: TeamId) -> Self {
        team.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// A team number outside `{1, 2}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid team number {_0}, expected 1 or 2")]
pub struct InvalidTeam(#[error(not(source))] pub u8);

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use alias_engine::core::{TeamId, TeamMap};
///
/// let mut scores: TeamMap<u32> = TeamMap::with_value(0);
/// scores[TeamId::SECOND] += 1;
///
/// assert_eq!(scores[TeamId::FIRST], 0);
/// assert_eq!(scores[TeamId::SECOND], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(TeamId) -> T) -> Self {
        Self {
            data: [factory(TeamId::FIRST), factory(TeamId::SECOND)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a team's entry.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's entry.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        TeamId::all().zip(self.data.iter())
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

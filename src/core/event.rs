//! Round events: the three things that can happen while a word is shown.
//!
//! Events arrive from the chat layer as button presses. Their wire names
//! (`correct`, `skip`, `end_round`) are the callback payloads the buttons
//! carry, so a transport can parse a press straight into a `RoundEvent`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// An external event that advances a running game.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoundEvent {
    /// The active team guessed the word: +1 point.
    Correct,
    /// The word is skipped: no points, same team continues.
    Skip,
    /// The timer ran out: no points, the other team takes over.
    EndRound,
}

impl RoundEvent {
    /// Button caption for this event.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RoundEvent::Correct => "✅ Guessed",
            RoundEvent::Skip => "⏭ Skip",
            RoundEvent::EndRound => "⏹ End round",
        }
    }

    /// All events in button order.
    pub fn iter() -> impl Iterator<Item = RoundEvent> {
        <RoundEvent as IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        assert_eq!(RoundEvent::Correct.to_string(), "correct");
        assert_eq!(RoundEvent::Skip.to_string(), "skip");
        assert_eq!(RoundEvent::EndRound.to_string(), "end_round");
    }

    #[test]
    fn test_parse_callback_data() {
        assert_eq!(RoundEvent::from_str("correct"), Ok(RoundEvent::Correct));
        assert_eq!(RoundEvent::from_str("skip"), Ok(RoundEvent::Skip));
        assert_eq!(RoundEvent::from_str("end_round"), Ok(RoundEvent::EndRound));
        assert!(RoundEvent::from_str("surrender").is_err());
    }

    #[test]
    fn test_iter_in_button_order() {
        let events: Vec<_> = RoundEvent::iter().collect();
        assert_eq!(
            events,
            vec![RoundEvent::Correct, RoundEvent::Skip, RoundEvent::EndRound]
        );
    }

    #[test]
    fn test_serde_matches_wire_names() {
        let json = serde_json::to_string(&RoundEvent::EndRound).unwrap();
        assert_eq!(json, "\"end_round\"");
    }
}

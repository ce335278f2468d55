//! Round state machine and the views it produces.
//!
//! `AliasEngine` applies `RoundEvent`s to the live `GameState` and returns
//! a `RoundView` for the chat layer to render.

pub mod engine;
pub mod view;

pub use engine::AliasEngine;
pub use view::{RoundStatus, RoundView};

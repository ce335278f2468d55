//! Word Pool: loading word sources and drawing words without repetition.
//!
//! The pool is owned by a single game and rebuilt for every new game.
//! Which unused word comes next is delegated to a `WordPicker`.

pub mod picker;
pub mod pool;

pub use picker::{UniformPicker, WordPicker};
pub use pool::{normalize_word, WordPool};

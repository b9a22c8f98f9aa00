//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod guess;
mod letter;
mod score;

pub use guess::{GuessRecord, GuessResult, keyboard_status};
pub use letter::LetterStatus;
pub use score::score;

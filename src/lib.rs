//! Neno - Swahili Wordle
//!
//! A single-session word-guessing game engine: guess scoring, the game state
//! machine, and rolling statistics persisted across sessions. Rendering is
//! left to the caller, which drives the engine and reacts to its return
//! values.
//!
//! # Quick Start
//!
//! ```rust
//! use neno::core::{LetterStatus, score};
//!
//! let result = score("kikapu", "kitabu");
//! assert_eq!(result.status_at(0), LetterStatus::Correct);
//! assert_eq!(result.status_at(2), LetterStatus::Absent);
//! ```

// Core domain types
pub mod core;

// Word list and definitions
pub mod dictionary;

// Game state machine and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Terminal output formatting
//!
//! Display utilities for the CLI front end.

pub mod display;

pub use display::{print_guess_row, print_keyboard, print_statistics};

//! Game state machine
//!
//! A [`Game`] owns one round: the hidden solution, the guess being composed,
//! the scored history, and the round status. It borrows the dictionary for
//! validity and definition lookups and owns a statistics store, which it
//! writes exactly once per completed game.

pub mod stats;

pub use stats::{FileStore, MemoryStore, STATS_KEY, Statistics, StatsStore, StoreError};

use crate::core::{GuessRecord, GuessResult, LetterStatus, keyboard_status, score};
use crate::dictionary::{Dictionary, DictionaryError};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default guess budget per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// A session checkpoint is written when this much time has passed
/// since the previous one.
const SESSION_CHECKPOINT_MS: u64 = 60 * 60 * 1000;

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of submitting a guess
///
/// This is the whole engine-to-UI contract for a submission: the caller
/// renders a message or a scored row and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The composed input is not a full-length word; state unchanged
    Incomplete,
    /// The word is not in the dictionary; state unchanged
    UnknownWord,
    /// Valid guess, round continues
    Continue(GuessResult),
    /// The guess is the solution
    Win(GuessResult),
    /// Final attempt spent without winning
    Lose {
        result: GuessResult,
        solution: String,
        definition: String,
    },
}

/// One round of the guessing game
pub struct Game<'a, S: StatsStore> {
    dictionary: &'a Dictionary,
    solution: String,
    word_len: usize,
    max_attempts: usize,
    attempts_used: usize,
    current_input: String,
    history: Vec<GuessRecord>,
    status: GameStatus,
    statistics: Statistics,
    store: S,
    last_save_error: Option<StoreError>,
}

impl<'a, S: StatsStore> Game<'a, S> {
    /// Start a round with the default attempt budget and the thread rng
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if the dictionary has no words.
    pub fn new(dictionary: &'a Dictionary, store: S) -> Result<Self, DictionaryError> {
        Self::with_rng(dictionary, store, DEFAULT_MAX_ATTEMPTS, &mut rand::rng())
    }

    /// Start a round with an explicit attempt budget and random source
    ///
    /// A seeded rng makes the solution deterministic, which tests rely on.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if the dictionary has no words.
    pub fn with_rng<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        store: S,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, DictionaryError> {
        debug_assert!(max_attempts >= 1, "at least one attempt is required");
        let solution = dictionary.random_word(rng)?.to_string();
        let word_len = solution.chars().count();
        let statistics = Statistics::load(&store);

        Ok(Self {
            dictionary,
            solution,
            word_len,
            max_attempts,
            attempts_used: 0,
            current_input: String::new(),
            history: Vec::new(),
            status: GameStatus::InProgress,
            statistics,
            store,
            last_save_error: None,
        })
    }

    /// Append one letter to the guess being composed
    ///
    /// No-op if the round is over, the input is already full length, or the
    /// character is not alphabetic. Input is normalized to lowercase.
    /// Returns the updated input for rendering.
    pub fn append_letter(&mut self, ch: char) -> &str {
        if self.status == GameStatus::InProgress
            && self.current_input.chars().count() < self.word_len
            && ch.is_ascii_alphabetic()
        {
            self.current_input.push(ch.to_ascii_lowercase());
        }
        &self.current_input
    }

    /// Remove the last letter of the guess being composed, if any
    ///
    /// Returns the updated input for rendering.
    pub fn delete_letter(&mut self) -> &str {
        if self.status == GameStatus::InProgress {
            self.current_input.pop();
        }
        &self.current_input
    }

    /// Drop the whole composed input
    ///
    /// Convenience for line-oriented callers that re-enter a fresh word
    /// after a rejected guess.
    pub fn clear_input(&mut self) {
        self.current_input.clear();
    }

    /// Submit the composed input as a guess
    ///
    /// Rejected submissions ([`Outcome::Incomplete`], [`Outcome::UnknownWord`])
    /// leave all state untouched. An accepted guess is scored, recorded, and
    /// either continues or ends the round; a completed round updates the
    /// persisted statistics exactly once.
    pub fn submit_guess(&mut self) -> Outcome {
        if self.status != GameStatus::InProgress
            || self.current_input.chars().count() != self.word_len
        {
            return Outcome::Incomplete;
        }
        if !self.dictionary.is_valid(&self.current_input) {
            return Outcome::UnknownWord;
        }

        let guess = std::mem::take(&mut self.current_input);
        let result = score(&guess, &self.solution);
        let won = guess == self.solution;
        self.history.push(GuessRecord::new(guess, result.clone()));
        self.attempts_used += 1;

        if won {
            self.status = GameStatus::Won;
            self.statistics.record_win();
            self.persist_statistics();
            return Outcome::Win(result);
        }

        if self.attempts_used == self.max_attempts {
            self.status = GameStatus::Lost;
            self.statistics.record_loss();
            self.persist_statistics();
            return Outcome::Lose {
                result,
                solution: self.solution.clone(),
                definition: self.dictionary.definition(&self.solution).to_string(),
            };
        }

        Outcome::Continue(result)
    }

    /// Start a fresh round, drawing a new solution from the dictionary
    ///
    /// Before the old state is discarded, the session checkpoint rule runs:
    /// if no checkpoint exists, or more than an hour has passed since the
    /// last one, `last_game_ms` is set to now and persisted. Counts are
    /// never touched here.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if the dictionary has no words.
    pub fn reset(&mut self) -> Result<(), DictionaryError> {
        self.reset_at(&mut rand::rng(), now_ms())
    }

    fn reset_at<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<(), DictionaryError> {
        let stale = self
            .statistics
            .last_game_ms
            .is_none_or(|last| now_ms.saturating_sub(last) > SESSION_CHECKPOINT_MS);
        if stale {
            self.statistics.last_game_ms = Some(now_ms);
            self.persist_statistics();
        }

        self.solution = self.dictionary.random_word(rng)?.to_string();
        self.word_len = self.solution.chars().count();
        self.attempts_used = 0;
        self.current_input.clear();
        self.history.clear();
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Write statistics back as one batch, after all in-memory updates.
    /// A failed write must not end the round; it is kept for the caller
    /// to surface.
    fn persist_statistics(&mut self) {
        self.last_save_error = self.statistics.save(&mut self.store).err();
    }

    /// Aggregate best-ever status per guessed letter, for keyboard display
    #[must_use]
    pub fn keyboard(&self) -> FxHashMap<char, LetterStatus> {
        keyboard_status(&self.history)
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The hidden solution (exposed for hint lookups and post-game display)
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Word length in play, derived from the solution
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Error from the most recent statistics write, if it failed
    ///
    /// Cleared by the next successful write. Callers should report this as
    /// "statistics not saved" instead of treating the round as failed.
    #[must_use]
    pub fn last_save_error(&self) -> Option<&StoreError> {
        self.last_save_error.as_ref()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

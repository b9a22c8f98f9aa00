//! Scored guesses and the keyboard aggregate view

use super::LetterStatus;
use rustc_hash::FxHashMap;

/// Positional feedback for one submitted guess
///
/// Holds one [`LetterStatus`] per position of the guess, aligned with the
/// guess left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult(Vec<LetterStatus>);

impl GuessResult {
    pub(crate) fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Status at a given position
    ///
    /// # Panics
    /// Panics if `position` is out of range for the guess.
    #[inline]
    #[must_use]
    pub fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Number of scored positions (the word length in play)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is [`LetterStatus::Correct`]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Render as an emoji share string like "🟩🟨⬜🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

/// One completed attempt: the guessed word and its scored result
///
/// Immutable once created; the game history is a sequence of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: String,
    result: GuessResult,
}

impl GuessRecord {
    pub(crate) fn new(word: String, result: GuessResult) -> Self {
        Self { word, result }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> &GuessResult {
        &self.result
    }

    /// Letters paired with their per-position status
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.word.chars().zip(self.result.statuses().iter().copied())
    }
}

/// Aggregate the best status ever observed for each guessed letter
///
/// Derived view over the full history, recomputed on every call rather than
/// cached, so it can never go stale. Letters never guessed are absent from
/// the map.
#[must_use]
pub fn keyboard_status(history: &[GuessRecord]) -> FxHashMap<char, LetterStatus> {
    let mut aggregate: FxHashMap<char, LetterStatus> = FxHashMap::default();

    for record in history {
        for (letter, status) in record.letters() {
            aggregate
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    aggregate
}

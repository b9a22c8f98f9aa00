//! Guess scoring against a hidden solution
//!
//! Implements the standard Wordle feedback rules, including proper handling
//! of duplicate letters: the number of Correct+Present markings a letter
//! receives never exceeds its occurrence count in the solution.

use super::{GuessResult, LetterStatus};
use rustc_hash::FxHashMap;

/// Score `guess` against `solution`, one status per position
///
/// Pure function with no side effects; both arguments must have the same
/// character length (the length in play is derived from the solution).
///
/// # Algorithm
/// 1. Build a letter multiset from the solution.
/// 2. First pass: mark exact-position matches Correct and decrement their
///    letter's remaining count.
/// 3. Second pass, left to right: mark a non-Correct position Present if its
///    letter still has remaining count, decrementing it; otherwise Absent.
///
/// Exact matches are never downgraded by the presence pass, and position
/// order decides which duplicate occurrence consumes a shared count first.
///
/// # Examples
/// ```
/// use neno::core::{LetterStatus, score};
///
/// // "bwam" vs "mbwa": every letter exists, none in place.
/// let result = score("bwam", "mbwa");
/// assert!(result.statuses().iter().all(|&s| s == LetterStatus::Present));
/// ```
///
/// # Panics
/// Panics in debug mode if the lengths differ.
#[must_use]
pub fn score(guess: &str, solution: &str) -> GuessResult {
    let guess_chars: Vec<char> = guess.chars().collect();
    let solution_chars: Vec<char> = solution.chars().collect();
    debug_assert_eq!(
        guess_chars.len(),
        solution_chars.len(),
        "guess and solution must have equal length"
    );

    let mut remaining: FxHashMap<char, u8> = FxHashMap::default();
    for &letter in &solution_chars {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    let mut statuses = vec![LetterStatus::Absent; guess_chars.len()];

    // First pass: exact matches
    for (i, &letter) in guess_chars.iter().enumerate() {
        if solution_chars[i] == letter {
            statuses[i] = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(&letter) {
                *count -= 1;
            }
        }
    }

    // Second pass: displaced matches from the remaining pool
    for (i, &letter) in guess_chars.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&letter)
            && *count > 0
        {
            statuses[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    GuessResult::new(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn statuses(guess: &str, solution: &str) -> Vec<LetterStatus> {
        score(guess, solution).statuses().to_vec()
    }

    #[test]
    fn solution_against_itself_is_all_correct() {
        for word in ["nyumba", "kitabu", "mbwa", "aaaaaa"] {
            let result = score(word, word);
            assert!(result.is_win(), "{word} vs itself must be all Correct");
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let result = score("mbwa", "kiti");
        assert!(
            result
                .statuses()
                .iter()
                .all(|&s| s == LetterStatus::Absent)
        );
    }

    #[test]
    fn correct_iff_positions_match() {
        let result = statuses("kikapu", "kitabu");
        assert_eq!(
            result,
            vec![
                LetterStatus::Correct, // k
                LetterStatus::Correct, // i
                LetterStatus::Absent,  // k - kitabu has only one k, already spent
                LetterStatus::Correct, // a
                LetterStatus::Absent,  // p
                LetterStatus::Correct, // u
            ]
        );
    }

    #[test]
    fn anagram_is_all_present() {
        let result = statuses("bwam", "mbwa");
        assert!(result.iter().all(|&s| s == LetterStatus::Present));
    }

    #[test]
    fn duplicate_guess_letters_consume_left_to_right() {
        // "paka" has two 'a's: the exact match at position 1 takes one, the
        // leftmost displaced 'a' takes the other, position 2 gets nothing.
        let result = statuses("aaap", "paka");
        assert_eq!(
            result,
            vec![
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Absent,
                LetterStatus::Present,
            ]
        );
    }

    #[test]
    fn exact_match_not_downgraded_by_earlier_duplicate() {
        // Guess "aabb" vs solution "cbab": the 'b' at position 3 is exact and
        // must stay Correct even though position 2's 'b' comes first.
        let result = statuses("aabb", "cbab");
        assert_eq!(result[3], LetterStatus::Correct);
        assert_eq!(result[2], LetterStatus::Present);
        assert_eq!(result[0], LetterStatus::Present);
        assert_eq!(result[1], LetterStatus::Absent);
    }

    #[test]
    fn scoring_is_deterministic() {
        let first = statuses("kikapu", "kitabu");
        let second = statuses("kikapu", "kitabu");
        assert_eq!(first, second);
    }

    /// Correct+Present markings for a letter never exceed its count in the
    /// solution, over randomly generated word pairs.
    #[test]
    fn multiset_conservation_over_random_pairs() {
        let mut rng = StdRng::seed_from_u64(42);
        // Small alphabet to force duplicate-letter collisions.
        let alphabet = ['a', 'b', 'c', 'd'];

        for _ in 0..500 {
            let len = rng.random_range(3..=8);
            let random_word = |rng: &mut StdRng| -> String {
                (0..len)
                    .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                    .collect()
            };
            let guess = random_word(&mut rng);
            let solution = random_word(&mut rng);
            let result = score(&guess, &solution);

            for &letter in &alphabet {
                let marked = guess
                    .chars()
                    .zip(result.statuses())
                    .filter(|&(g, &s)| g == letter && s != LetterStatus::Absent)
                    .count();
                let available = solution.chars().filter(|&c| c == letter).count();
                assert!(
                    marked <= available,
                    "letter {letter} marked {marked} times but appears \
                     {available} times in {solution} (guess {guess})"
                );
            }

            // Correct exactly where positions agree.
            for ((g, s), status) in guess
                .chars()
                .zip(solution.chars())
                .zip(result.statuses())
            {
                assert_eq!(*status == LetterStatus::Correct, g == s);
            }
        }
    }
}

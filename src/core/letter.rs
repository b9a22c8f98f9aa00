//! Per-letter feedback status

/// Feedback for a single letter of a guess
///
/// The derived ordering is the aggregation precedence used for keyboard
/// display: `Absent < Present < Correct`. A letter's aggregate status is the
/// maximum status it has ever received across all submitted guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not appear in the solution (or its occurrences are spent)
    Absent,
    /// Letter appears in the solution, but at a different position
    Present,
    /// Letter is at exactly this position in the solution
    Correct,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_precedence_order() {
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);
        assert_eq!(
            LetterStatus::Present.max(LetterStatus::Correct),
            LetterStatus::Correct
        );
    }
}

//! Word list parsing
//!
//! The word list format is UTF-8 text, one `word:definition` entry per line.
//! The first colon is the delimiter; blank lines and lines without a colon
//! are skipped, as are lines whose word part is empty after trimming.

/// Parse one `word:definition` line
///
/// Returns the lowercased, trimmed word and the trimmed definition, or `None`
/// for a line that carries no entry.
#[must_use]
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (word, definition) = trimmed.split_once(':')?;
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }

    Some((word, definition.trim().to_string()))
}

/// Parse a whole word list text into entries, skipping malformed lines
pub fn parse_entries(text: &str) -> impl Iterator<Item = (String, String)> + '_ {
    text.lines().filter_map(parse_line)
}

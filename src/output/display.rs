//! Colored rendering of guess rows, the keyboard, and statistics

use crate::core::{GuessRecord, LetterStatus};
use crate::game::Statistics;
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Keyboard rows, rendered one per line
const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::Correct => cell.black().on_green(),
        LetterStatus::Present => cell.black().on_yellow(),
        LetterStatus::Absent => cell.white().on_bright_black(),
    }
}

/// Print one scored guess as a row of colored tiles
pub fn print_guess_row(record: &GuessRecord) {
    let row: Vec<String> = record
        .letters()
        .map(|(letter, status)| tile(letter, status).to_string())
        .collect();
    println!("  {}", row.join(" "));
}

/// Print the aggregated keyboard, best status per letter
pub fn print_keyboard(aggregate: &FxHashMap<char, LetterStatus>) {
    for (i, row) in KEY_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| match aggregate.get(&letter) {
                Some(&status) => tile(letter, status).to_string(),
                None => format!(" {} ", letter.to_ascii_uppercase()),
            })
            .collect();
        println!("{}{}", "  ".repeat(i + 1), keys.join(""));
    }
}

/// Print the rolling statistics block
pub fn print_statistics(stats: &Statistics) {
    let win_rate = if stats.games_played == 0 {
        0.0
    } else {
        f64::from(stats.games_won) / f64::from(stats.games_played) * 100.0
    };

    println!("\n{}", "─".repeat(40).cyan());
    println!("  {}", "Statistics".bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  Played:         {}", stats.games_played);
    println!("  Won:            {} ({win_rate:.0}%)", stats.games_won);
    println!("  Current streak: {}", stats.current_streak);
    println!("  Max streak:     {}", stats.max_streak);
}

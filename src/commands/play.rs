//! Interactive CLI round
//!
//! Line-oriented front end over the game engine: one guess per line, with
//! `hint` and `quit` commands. The engine owns all game rules; this loop
//! only routes input and renders return values.

use crate::dictionary::Dictionary;
use crate::game::{FileStore, Game, Outcome};
use crate::output::{print_guess_row, print_keyboard, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run interactive rounds until the player quits
///
/// # Errors
/// Returns an error if no game can be started (empty dictionary) or if
/// reading from stdin fails.
pub fn run_play(
    dictionary: &Dictionary,
    stats_dir: &Path,
    max_attempts: usize,
    seed: Option<u64>,
) -> Result<()> {
    let store = FileStore::new(stats_dir);
    let mut game = match seed {
        Some(seed) => Game::with_rng(
            dictionary,
            store,
            max_attempts,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => Game::with_rng(dictionary, store, max_attempts, &mut rand::rng()),
    }
    .context("cannot start a game")?;

    println!("\n{}", "Neno - Swahili Wordle".bold().green());
    println!(
        "Guess the {}-letter word in {} attempts.",
        game.word_len(),
        game.max_attempts()
    );
    println!("Type a word and press Enter. Commands: 'hint', 'quit'.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(
            "[{}/{}] > ",
            game.attempts_used() + 1,
            game.max_attempts()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line.context("failed to read input")?.trim().to_lowercase();

        match input.as_str() {
            "quit" | "exit" => break,
            "hint" => {
                let hint = dictionary.hint(game.solution());
                if hint.is_empty() {
                    println!("No hint available for this word.");
                } else {
                    println!("Hint: {}", hint.bright_yellow());
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        game.clear_input();
        for ch in input.chars() {
            game.append_letter(ch);
        }
        // Overlong input would silently truncate at the word length; treat
        // it the same as a short guess.
        if input.chars().count() != game.word_len() {
            game.clear_input();
            println!("{}", "Not enough letters".red());
            continue;
        }

        match game.submit_guess() {
            Outcome::Incomplete => {
                game.clear_input();
                println!("{}", "Not enough letters".red());
            }
            Outcome::UnknownWord => {
                game.clear_input();
                println!("{}", "Word not in list".red());
            }
            Outcome::Continue(_) => {
                render_board(&game);
            }
            Outcome::Win(_) => {
                render_board(&game);
                println!(
                    "\n{}",
                    format!("You won in {} guesses!", game.attempts_used())
                        .green()
                        .bold()
                );
                report_save_error(&game);
                if !play_again(&mut game, &mut lines)? {
                    break;
                }
            }
            Outcome::Lose {
                solution,
                definition,
                ..
            } => {
                render_board(&game);
                println!(
                    "\n{}",
                    format!("Game Over! The word was {solution} ({definition})").red()
                );
                report_save_error(&game);
                if !play_again(&mut game, &mut lines)? {
                    break;
                }
            }
        }
    }

    print_statistics(game.statistics());
    Ok(())
}

fn render_board(game: &Game<'_, FileStore>) {
    println!();
    for record in game.history() {
        print_guess_row(record);
    }
    println!();
    print_keyboard(&game.keyboard());
}

fn report_save_error(game: &Game<'_, FileStore>) {
    if let Some(e) = game.last_save_error() {
        eprintln!("{}", format!("Warning: statistics not saved: {e}").yellow());
    }
}

fn play_again(
    game: &mut Game<'_, FileStore>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    print_statistics(game.statistics());
    print!("\nPlay again? [y/n] > ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => {
            if line?.trim().eq_ignore_ascii_case("y") {
                game.reset().context("cannot start a new round")?;
                println!(
                    "\nNew round: guess the {}-letter word.\n",
                    game.word_len()
                );
                Ok(true)
            } else {
                Ok(false)
            }
        }
        None => Ok(false),
    }
}

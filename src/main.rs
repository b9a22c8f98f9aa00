//! Neno - Swahili Wordle CLI
//!
//! Play in the terminal, inspect rolling statistics, or look up a word from
//! the kamusi.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use neno::commands::{run_play, run_stats};
use neno::dictionary::Dictionary;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "neno",
    about = "Swahili Wordle: guess the hidden word with per-letter feedback",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a word:definition list (default: the embedded kamusi)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for persisted statistics
    #[arg(long, global = true, default_value = ".neno")]
    stats_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive round (default)
    Play {
        /// Guess budget per round
        #[arg(short = 'a', long, default_value_t = 6)]
        attempts: usize,

        /// Seed the solution draw (deterministic games)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show persisted statistics
    Stats,

    /// Look up a word's definition and hint
    Define {
        /// Word to look up
        word: String,
    },
}

fn load_dictionary(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    let dictionary = match wordlist {
        Some(path) => Dictionary::load(path)
            .with_context(|| format!("cannot read word list {}", path.display()))?,
        None => Dictionary::embedded(),
    };
    ensure!(!dictionary.is_empty(), "word list contains no usable entries");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        attempts: 6,
        seed: None,
    });

    match command {
        Commands::Play { attempts, seed } => {
            ensure!(attempts >= 1, "at least one attempt is required");
            let dictionary = load_dictionary(cli.wordlist.as_ref())?;
            run_play(&dictionary, &cli.stats_dir, attempts, seed)
        }
        Commands::Stats => {
            run_stats(&cli.stats_dir);
            Ok(())
        }
        Commands::Define { word } => {
            let dictionary = load_dictionary(cli.wordlist.as_ref())?;
            if !dictionary.is_valid(&word) {
                println!("'{word}' is not in the word list");
                return Ok(());
            }
            println!("{word}: {}", dictionary.definition(&word));
            println!("hint: {}", dictionary.hint(&word));
            Ok(())
        }
    }
}

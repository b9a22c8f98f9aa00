//! Statistics display command

use crate::game::{FileStore, Statistics};
use crate::output::print_statistics;
use std::path::Path;

/// Print the persisted statistics
pub fn run_stats(stats_dir: &Path) {
    let store = FileStore::new(stats_dir);
    let stats = Statistics::load(&store);
    print_statistics(&stats);

    if let Some(last) = stats.last_game_ms {
        println!("  Last session:   {last} (epoch ms)");
    }
}

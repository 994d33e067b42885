use std::path::PathBuf;

use anyhow::Result;
use lineup::{load_json, sorted_tally, tally_performers, Lineup};

pub fn run(sources: Vec<PathBuf>) -> Result<()> {
    let mut decoded: Vec<Vec<Lineup>> = Vec::new();
    for path in &sources {
        let lineups: Vec<Lineup> = load_json(path)?;
        log::debug!("read {} lineups from {path:?}", lineups.len());
        decoded.push(lineups);
    }

    let counts = tally_performers(decoded.iter().map(Vec::as_slice));

    for (name, n) in sorted_tally(counts) {
        println!("{name:32} {n}");
    }

    Ok(())
}

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use picslide::catalog::Catalog;
use picslide::game::{self, Outcome};
use picslide_core::{GridSpec, ProgressStore, PuzzleSession, Shuffler};

#[derive(Parser, Debug)]
#[command(name = "picslide", version, about = "Sliding-tile picture puzzle in the terminal")]
struct Cli {
    /// Catalog metadata file
    #[arg(long, default_value = "res/puzzles.json")]
    catalog: PathBuf,

    /// Progress file
    #[arg(long, default_value = "res/puzzle_state")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog entries with their solved status
    List,
    /// Play a puzzle by catalog index
    Play {
        index: usize,

        /// Seed the scrambler for a reproducible start
        #[arg(long)]
        seed: Option<u64>,

        /// Override the catalog grid size
        #[arg(long)]
        size: Option<usize>,

        /// Presentation canvas edge in pixels; stands in for the decoded
        /// image dimensions when playing in the terminal
        #[arg(long, default_value_t = 960)]
        canvas: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let catalog = Catalog::load(&cli.catalog)?;
    let store = ProgressStore::new(&cli.state);

    match cli.command {
        Command::List => list(&catalog, &store),
        Command::Play { index, seed, size, canvas } => {
            play(&catalog, &store, index, seed, size, canvas)
        }
    }
}

fn list(catalog: &Catalog, store: &ProgressStore) -> Result<()> {
    let (solved, last_viewed) = store.load();
    for (i, meta) in catalog.entries().iter().enumerate() {
        let status = if solved.contains(&(i as i32)) {
            "Solved".green()
        } else {
            "Unsolved".red()
        };
        println!(
            "{:3}  {} by {}  [{}x{}, {}]  {}",
            i,
            meta.name.bold(),
            meta.artist,
            meta.block_size,
            meta.block_size,
            meta.difficulty,
            status
        );
    }
    println!("\n{} puzzles, last viewed index {}", catalog.len(), last_viewed);
    Ok(())
}

fn play(
    catalog: &Catalog,
    store: &ProgressStore,
    index: usize,
    seed: Option<u64>,
    size: Option<usize>,
    canvas: u32,
) -> Result<()> {
    let Some(meta) = catalog.get(index) else {
        bail!("no catalog entry at index {} (have {})", index, catalog.len());
    };
    let n = size.unwrap_or(meta.block_size);
    if n < 2 {
        bail!("grid size must be at least 2, got {}", n);
    }

    let spec = GridSpec::compute(canvas, canvas, n, n)?;
    let mut shuffler = Shuffler::new(seed);
    let arrangement = shuffler.shuffle(n, n);
    let mut session = PuzzleSession::new(meta.key(), spec, arrangement);

    let title = format!("{} by {} ({})", meta.name, meta.artist, meta.difficulty);
    let outcome = game::run(&mut session, &title)?;

    let (mut solved, _) = store.load();
    if outcome == Outcome::Solved {
        solved.insert(index as i32);
        println!("{} solved in {} moves", meta.name, session.moves());
    }
    if let Err(err) = store.save(&solved, index as i32) {
        // non-fatal: the run is over, only persistence is lost
        log::warn!("could not persist progress: {err:#}");
    }
    Ok(())
}

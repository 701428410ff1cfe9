//! alienctl — fight aliens, destroy cities.
//!
//! Loads a map file, completes its roads, drops the requested number of
//! aliens on it and runs the world to the end.  Events are written to the
//! output as `e>` lines while the world steps; once it terminates the
//! surviving map follows a `MAP STATE:` banner:
//!
//! ```text
//! e>"Bar" has been destroyed by some mad aliens: 
//!         [A1 A3]
//! e>city "Bee" left with no neighbors
//!
//! MAP STATE:
//! Baz east=Foo
//! Foo south=Qu-ux west=Baz
//! Qu-ux north=Foo
//! Yee
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use alien_map::print_map;
use alien_output::{CsvEventWriter, LinePrinter, Reporter};
use alien_sim::{WorldBuilder, event_channel};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "alienctl")]
#[command(about = "fight aliens, destroy cities!", long_about = None)]
pub struct Args {
    /// Path to the map file
    #[arg(short, long)]
    pub map_file: PathBuf,

    /// Number of aliens to spawn
    #[arg(short, long)]
    pub alien_count: usize,

    /// Seed for a repeatable run (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also log every event as a CSV row to this file
    #[arg(long)]
    pub events_csv: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// ── Run ───────────────────────────────────────────────────────────────────────

/// Run one game as described by `args`, writing events and the final map to
/// `out`.  Returns `out` once everything has been written.
pub fn run<W: Write + Send + 'static>(args: &Args, out: W) -> Result<W> {
    let mut builder = WorldBuilder::from_file(&args.map_file)
        .with_context(|| format!("failed to load map {}", args.map_file.display()))?;
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let csv = args
        .events_csv
        .as_deref()
        .map(CsvEventWriter::new)
        .transpose()
        .context("failed to create event log")?;

    let (tx, rx) = event_channel();
    let world = builder.events(tx).build()?;
    let reporter = Reporter::spawn(rx, (LinePrinter::new(out), csv));

    world.spawn(args.alien_count);
    let steps = world.run_to_end();
    let (printer, _) = reporter.join().context("failed to write events")?;

    let survivors = world.snapshot();
    info!(
        steps,
        aliens = world.aliens().len(),
        cities = survivors.len(),
        "game over",
    );

    let mut out = printer.into_inner();
    out.write_all(b"\nMAP STATE:\n")?;
    print_map(&mut out, &survivors)?;
    Ok(out)
}

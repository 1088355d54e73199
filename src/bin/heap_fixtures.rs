//! Generates heap test fixtures: an input command script and the output a
//! correct heap produces for it.
//!
//! Run with: cargo run --bin heap_fixtures -- --n 50 --t 80 --seed 42
//!
//! With `--replay <script>` the input is read from an existing script
//! instead of being generated, and only the expected output is written.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use slog::{Level, info, o};

use heapkit::command::parse_script;
use heapkit::fixture::{FixtureConfig, FixtureGenerator};
use heapkit::logging::terminal_logger;
use heapkit::simulator::HeapSimulator;

/// Generate random heap testcases and their expected outputs.
#[derive(Debug, Parser)]
#[command(name = "heap_fixtures")]
struct Args {
    /// Maximum number of elements in the heap (capacity)
    #[arg(long = "n", default_value_t = FixtureConfig::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Number of operations to generate
    #[arg(long = "t", default_value_t = FixtureConfig::DEFAULT_STEPS)]
    steps: usize,

    /// Random seed
    #[arg(long, default_value_t = FixtureConfig::DEFAULT_SEED)]
    seed: u64,

    /// Input filename to write
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Expected output filename to write
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Read commands from this script instead of generating them
    #[arg(long, conflicts_with_all = ["steps", "seed"])]
    replay: Option<PathBuf>,

    /// Log every applied command
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        Level::Debug
    } else {
        Level::Info
    };
    let log = terminal_logger(level).new(o!("capacity" => args.capacity));

    if let Some(script_path) = &args.replay {
        let text = fs::read_to_string(script_path)
            .with_context(|| format!("reading script {}", script_path.display()))?;
        let commands = parse_script(&text)
            .with_context(|| format!("parsing script {}", script_path.display()))?;
        let mut sim = HeapSimulator::with_logger(args.capacity, &log);
        let output: String = sim
            .run(&commands)
            .into_iter()
            .map(|line| line + "\n")
            .collect();
        fs::write(&args.output, output)
            .with_context(|| format!("writing {}", args.output.display()))?;
        info!(log, "replayed script";
            "script" => %script_path.display(),
            "commands" => commands.len(),
        );
        println!(
            "Replayed {} into {} (n={})",
            script_path.display(),
            args.output.display(),
            args.capacity
        );
        return Ok(());
    }

    let config = FixtureConfig::new(args.capacity, args.steps, args.seed);
    let generator =
        FixtureGenerator::try_with_logger(config, &log).context("invalid fixture configuration")?;
    let fixture = generator.generate().context("generating fixture")?;

    fs::write(&args.input, fixture.input_text())
        .with_context(|| format!("writing {}", args.input.display()))?;
    fs::write(&args.output, fixture.output_text())
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Generated {} and {} (n={}, t={}, seed={})",
        args.input.display(),
        args.output.display(),
        args.capacity,
        args.steps,
        args.seed
    );
    Ok(())
}

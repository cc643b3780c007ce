//! Crossword Engine - CLI
//!
//! Play generated crosswords in the terminal, print them, or benchmark the
//! generator.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crossword_engine::{
    commands::{GenerateConfig, generate_puzzle, run_benchmark},
    core::Level,
    output::{print_benchmark_result, print_puzzle},
    wordlists::WordBank,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "crossword_engine",
    about = "Crossword generator and terminal solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty level from 1 (5x5 grid) to 5 (13x13 grid)
    #[arg(short, long, global = true, default_value = "2", value_parser = parse_level)]
    level: Level,

    /// Word bank: 'embedded' (default) or path to a LEVEL|WORD|CLUE file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Seed for reproducible grids (random when absent)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Print one generated puzzle with its clues
    Generate {
        /// Fill the grid with the solution
        #[arg(long)]
        solution: bool,
    },

    /// Measure generator yield over many grids
    Benchmark {
        /// Number of grids to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Benchmark every level instead of only --level
        #[arg(long)]
        all_levels: bool,
    },
}

fn parse_level(value: &str) -> Result<Level, String> {
    let number: u8 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a level number"))?;
    Level::new(number).map_err(|e| e.to_string())
}

/// Load the word bank based on the -w flag
///
/// - "embedded": the bank compiled into the binary
/// - "<path>": a LEVEL|WORD|CLUE file; invalid lines are skipped
fn load_bank(words: &str) -> Result<WordBank> {
    let bank = match words {
        "embedded" => WordBank::embedded(),
        path => WordBank::from_file(path)
            .with_context(|| format!("failed to read word bank '{path}'"))?,
    };

    if bank.is_empty() {
        bail!("word bank '{words}' has no valid entries");
    }
    Ok(bank)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_bank(&cli.words)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(bank, cli.level, cli.seed),
        Commands::Generate { solution } => {
            run_generate_command(&bank, cli.level, cli.seed, solution);
            Ok(())
        }
        Commands::Benchmark { count, all_levels } => {
            run_benchmark_command(&bank, cli.level, count, cli.seed, all_levels);
            Ok(())
        }
    }
}

fn run_generate_command(bank: &WordBank, level: Level, seed: Option<u64>, solution: bool) {
    let mut config = GenerateConfig::new(level);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let result = generate_puzzle(bank, &config);
    print_puzzle(&result, solution);
}

fn run_benchmark_command(
    bank: &WordBank,
    level: Level,
    count: usize,
    seed: Option<u64>,
    all_levels: bool,
) {
    let base_seed = seed.unwrap_or_else(rand::random);
    let levels: Vec<Level> = if all_levels {
        Level::all().collect()
    } else {
        vec![level]
    };

    for level in levels {
        println!(
            "Running benchmark on {count} grids at level {level} ({} words in bank)...",
            bank.count_for(level)
        );
        let result = run_benchmark(bank, level, count, base_seed, true);
        print_benchmark_result(&result);
    }
}

fn run_play_command(bank: WordBank, level: Level, seed: Option<u64>) -> Result<()> {
    use crossword_engine::interactive::{App, run_tui};

    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let app = App::new(bank, level, rng);
    run_tui(app)
}

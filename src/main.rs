//! Pangram Game - CLI
//!
//! Picks a random pangram word from a word list and prints its distinct
//! letters scrambled and uppercased. The host variant also stores the word
//! so a later guess can be checked against it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pangram_game::{
    answer::DEFAULT_ANSWER_PATH,
    commands::{RoundConfig, check_guess, pick_round, run_bench, scan_list, store_answer},
    core::PangramCriteria,
    output::{
        print_answer_note, print_bench_report, print_check_verdict, print_puzzle,
        print_scan_report, print_search_diagnostics,
    },
    sampler::SearchLimit,
    wordlist::SYSTEM_DICTIONARY,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "pangram_game",
    about = "Finds a random pangram word and prints its letters scrambled",
    after_help = "The word list must contain at least one pangram word.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the list of words, one per line
    #[arg(short = 'f', long, global = true, default_value = SYSTEM_DICTIONARY)]
    file: PathBuf,

    /// Number of unique letters the pangram word must have
    #[arg(short = 'u', long, global = true, default_value_t = 7)]
    unique_letters: usize,

    /// Minimum length of the pangram word
    #[arg(short = 'l', long, global = true, default_value_t = 12)]
    length_min: usize,

    /// Set to print debug messages (the word, draw count, search time)
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    /// Stop the search after this many draws instead of running forever
    #[arg(long, global = true)]
    max_iterations: Option<u64>,

    /// Stop the search after this many seconds instead of running forever
    #[arg(long, global = true)]
    max_seconds: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a pangram word and print its scrambled letters (default)
    Pick,

    /// Pick a pangram word and store the answer for later checks
    Host {
        /// Where to store the answer word
        #[arg(short = 'a', long, default_value = DEFAULT_ANSWER_PATH)]
        answer_file: PathBuf,
    },

    /// Check a guess against the stored answer
    Check {
        /// The word to check
        guess: String,

        /// Where the answer word is stored
        #[arg(short = 'a', long, default_value = DEFAULT_ANSWER_PATH)]
        answer_file: PathBuf,
    },

    /// Count the words in the list that satisfy the criteria
    Scan,

    /// Measure the search over repeated rounds
    Bench {
        /// Number of rounds to run
        #[arg(short = 'n', long, default_value = "50")]
        rounds: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = round_config(&cli)?;

    // Default to Pick mode if no command given
    let command = cli.command.unwrap_or(Commands::Pick);

    match command {
        Commands::Pick => run_pick_command(&config),
        Commands::Host { answer_file } => run_host_command(&config, &answer_file),
        Commands::Check { guess, answer_file } => run_check_command(&guess, &answer_file),
        Commands::Scan => run_scan_command(&config),
        Commands::Bench { rounds } => run_bench_command(&config, rounds),
    }
}

/// Build the one immutable per-run configuration from the CLI
fn round_config(cli: &Cli) -> Result<RoundConfig> {
    let max_time = match cli.max_seconds {
        Some(seconds) => Some(
            Duration::try_from_secs_f64(seconds)
                .map_err(|e| anyhow::anyhow!("Invalid --max-seconds value: {e}"))?,
        ),
        None => None,
    };

    Ok(RoundConfig {
        list_path: cli.file.clone(),
        criteria: PangramCriteria::new(cli.unique_letters, cli.length_min),
        limit: SearchLimit {
            max_iterations: cli.max_iterations,
            max_time,
        },
        debug: cli.debug,
    })
}

fn run_pick_command(config: &RoundConfig) -> Result<()> {
    let round = pick_round(config).map_err(|e| anyhow::anyhow!(e))?;

    if config.debug {
        print_search_diagnostics(&round);
    }
    print_puzzle(&round.puzzle);
    Ok(())
}

fn run_host_command(config: &RoundConfig, answer_path: &Path) -> Result<()> {
    let round = pick_round(config).map_err(|e| anyhow::anyhow!(e))?;

    if config.debug {
        print_search_diagnostics(&round);
    }
    print_puzzle(&round.puzzle);

    // The answer is stored only after the puzzle is out
    store_answer(&round.word, answer_path).map_err(|e| anyhow::anyhow!(e))?;
    print_answer_note(answer_path);
    Ok(())
}

fn run_check_command(guess: &str, answer_path: &Path) -> Result<()> {
    let result = check_guess(guess, answer_path).map_err(|e| anyhow::anyhow!(e))?;
    print_check_verdict(&result);
    Ok(())
}

fn run_scan_command(config: &RoundConfig) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!(" Word List Scan ");
    println!("{}", "═".repeat(60));
    println!("\nScanning {}", config.list_path.display());
    println!(
        "Criteria: exactly {} unique letters, length >= {}\n",
        config.criteria.unique_letter_count, config.criteria.min_length
    );

    let report = scan_list(config).map_err(|e| anyhow::anyhow!(e))?;
    print_scan_report(&report);
    Ok(())
}

fn run_bench_command(config: &RoundConfig, rounds: u64) -> Result<()> {
    println!(
        "Running {rounds} search rounds against {}...",
        config.list_path.display()
    );

    let report = run_bench(config, rounds).map_err(|e| anyhow::anyhow!(e))?;
    print_bench_report(&report);
    Ok(())
}

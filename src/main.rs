//! Wordle Helper - CLI
//!
//! Suggests guesses, filters candidates and plays out games using the
//! entropy-based solver.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_helper::{
    commands::{analyze_word, filter_command, parse_history, solve_word, suggest_next},
    core::{Pattern, Word},
    output::{
        print_analysis_result, print_filter_result, print_pattern, print_presets,
        print_solve_result, print_suggestion,
    },
    solver::{Preset, ScoringStrategy, Solver, SolverConfig},
    wordlists::loader::{default_answers, default_guesses, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle assistant: next-guess suggestions by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Preset: fast, balanced (default), reference
    #[arg(short, long, global = true, default_value = "balanced")]
    preset: Preset,

    /// Override the preset's scoring strategy: entropy, statistical
    #[arg(short, long, global = true)]
    strategy: Option<ScoringStrategy>,

    /// Answer word list file (one word per line), instead of the embedded list
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Guess word list file, instead of the embedded list
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the feedback GUESS would get against TARGET
    Pattern { guess: String, target: String },

    /// List the answers consistent with the feedback so far
    Filter {
        /// Feedback records as GUESS=CODE, e.g. crane=XYGXX
        records: Vec<String>,
    },

    /// Suggest the next guess for the feedback so far
    Suggest {
        /// Feedback records as GUESS=CODE, e.g. crane=XYGXX
        records: Vec<String>,
    },

    /// Play a full game against a known target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Analyze the information content of a guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Feedback records as GUESS=CODE to analyze against
        records: Vec<String>,
    },

    /// List the presets and their values
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(cli.preset, cli.strategy)?;
    let length = config.word_length();

    match &cli.command {
        Commands::Pattern { guess, target } => return run_pattern_command(guess, target),
        Commands::Presets => {
            print_presets(cli.preset);
            return Ok(());
        }
        _ => {}
    }

    let answers = load_pool(cli.answers.as_deref(), length, default_answers)?;
    let guesses = load_pool(cli.guesses.as_deref(), length, default_guesses)?;
    let solver = Solver::new(&answers, &guesses, config)?;

    match cli.command {
        Commands::Filter { records } => {
            let history = parse_history(&records, length)?;
            print_filter_result(&filter_command(&solver, &history)?);
        }
        Commands::Suggest { records } => {
            let history = parse_history(&records, length)?;
            print_suggestion(&suggest_next(&solver, &history)?);
        }
        Commands::Solve { word } => {
            print_solve_result(&solve_word(&word, &solver)?, cli.verbose > 0);
        }
        Commands::Analyze { word, records } => {
            let history = parse_history(&records, length)?;
            print_analysis_result(&analyze_word(&word, &solver, &history)?);
        }
        Commands::Pattern { .. } | Commands::Presets => {}
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_config(preset: Preset, strategy: Option<ScoringStrategy>) -> Result<SolverConfig> {
    let mut builder = preset.builder();
    if let Some(strategy) = strategy {
        builder = builder.strategy(strategy);
    }
    Ok(builder.build()?)
}

/// Load a word pool from `path`, or the embedded list when no path is given
fn load_pool(
    path: Option<&Path>,
    length: usize,
    embedded: fn() -> Vec<Word>,
) -> Result<Vec<Word>> {
    let Some(path) = path else {
        return Ok(embedded());
    };

    let words = load_from_file(path, length)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    if words.is_empty() {
        bail!("word list {} has no valid {length}-letter words", path.display());
    }
    Ok(words)
}

fn run_pattern_command(guess: &str, target: &str) -> Result<()> {
    let guess = Word::parse(guess)?;
    let target = Word::with_length(target, guess.length())
        .with_context(|| format!("target must have {} letters like the guess", guess.length()))?;

    print_pattern(&guess, &target, Pattern::calculate(&guess, &target));
    Ok(())
}

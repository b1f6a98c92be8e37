//! Wordle Helper CLI
//!
//! Interactive command-line interface: recommends guesses, reads back the
//! feedback and narrows the candidates until one word is left.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;
use wordle_helper::cache::{load_scores, save_scores};
use wordle_helper::command::{parse_command, Command, CommandError};
use wordle_helper::dictionary::load_dictionary;
use wordle_helper::entropy::expected_remaining;
use wordle_helper::solver::initial_scores;
use wordle_helper::{Pattern, Solver, Status, Word, DEFAULT_TOP};

const HELP_TEXT: &str = "\
Commands:
  <word> <pattern>            report the feedback for a guess
  feedback <word> <pattern>   same as above
                              (the session ends once one word is left)
  top [n]                     show the n best guesses
  remaining                   list the remaining candidates
  state                       show what is known so far
  solve <word>                watch the solver play against a known word
  reset                       start over
  help                        show this text
  quit                        leave

Patterns have one symbol per letter:
  !  gray    letter absent (or no further copies)
  ?  yellow  letter present elsewhere
  =  green   letter in place
g/y/b and 2/1/0 are accepted too.";

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Word list, one five-letter word per line
    #[clap(long, default_value = "words.txt")]
    dict: PathBuf,

    /// JSON file with first-round scores; written when missing or stale
    #[clap(long)]
    cache: Option<PathBuf>,

    /// Number of guesses to recommend each round
    #[clap(long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Worker threads used for scoring (default: one per core)
    #[clap(long)]
    threads: Option<usize>,

    /// Solve for a known word instead of running interactively
    #[clap(long)]
    solve: Option<String>,
}

fn print_ranking(solver: &Solver, n: usize) {
    let ranking = solver.ranking();
    let top = ranking.top(n);

    if top.is_empty() {
        println!("No possible words remaining.");
        return;
    }

    println!();
    println!("Recommended ( {} / {} ):", top.len(), solver.remaining_count());
    println!("{:>4} {:>8} {:>8} {:>12}", "#", "Word", "Bits", "Exp. Remain");
    println!("{}", "-".repeat(36));
    for (i, scored) in top.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1}",
            i + 1,
            scored.word.to_string().to_uppercase(),
            scored.information,
            expected_remaining(solver.candidates(), &scored.word)
        );
    }
    println!();
}

fn print_remaining(solver: &Solver) {
    let remaining = solver.candidates();
    println!();
    println!("Remaining possibilities: {}", remaining.len());
    if remaining.len() <= 50 {
        for (i, word) in remaining.iter().enumerate() {
            if i > 0 && i % 10 == 0 {
                println!();
            }
            print!("{:>8}", word.to_string().to_uppercase());
        }
        println!();
    }
    println!();
}

fn print_solution(solver: &Solver, target: &Word) {
    let mut solver = solver.clone();
    solver.reset();

    println!();
    println!("Solving for: {}", target.to_string().to_uppercase());
    println!();

    let guesses = solver.solve_for(target);
    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {} {}",
            i + 1,
            guess.to_string().to_uppercase(),
            pattern.to_emoji_string(),
            pattern
        );
    }

    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_solved() => {
            println!("Solved in {} guesses.", guesses.len())
        }
        _ => println!("{} is not in the dictionary.", target),
    }
    println!();
}

/// Apply one round of feedback. Returns the session status afterwards.
fn apply_feedback(solver: &mut Solver, guess: &Word, pattern: Pattern, top: usize) -> Status {
    let prev_count = solver.remaining_count();
    let status = solver.advance(guess, pattern);
    let new_count = solver.remaining_count();

    println!();
    println!(
        "{} {}  eliminated {} words ({} → {})",
        guess.to_string().to_uppercase(),
        pattern.to_emoji_string(),
        prev_count - new_count,
        prev_count,
        new_count
    );

    if let Status::InProgress { .. } = status {
        let start = Instant::now();
        print_ranking(solver, top);
        log::debug!("round took {:.2?}", start.elapsed());
    }
    status
}

fn print_outcome(status: Status) {
    match status {
        Status::Solved(word) => {
            println!();
            println!("Word found: {}", word.to_string().to_uppercase());
            println!();
        }
        Status::Contradiction => {
            println!();
            println!("No candidate matches this feedback.");
            println!("Some feedback was probably mistyped.");
            println!();
        }
        Status::InProgress { .. } => {}
    }
}

/// Read commands until one word is left, the feedback contradicts every
/// candidate, or the input ends.
fn run_interactive(solver: &mut Solver, top: usize) -> Result<()> {
    println!("Loaded {} words.", solver.dictionary().len());
    if solver.status().is_finished() {
        print_outcome(solver.status());
        return Ok(());
    }
    println!("Type 'help' for commands. Enter each guess as: <word> <pattern>");
    print_ranking(solver, top);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err @ CommandError::Unknown(_)) => {
                println!("{}", err);
                println!("Type 'help' for available commands.");
                continue;
            }
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match command {
            Command::Help => println!("{}", HELP_TEXT),
            Command::Quit => break,
            Command::Top(n) => print_ranking(solver, n.unwrap_or(top)),
            Command::Remaining => print_remaining(solver),
            Command::State => {
                println!("{}", solver.state());
                for (guess, pattern) in solver.history() {
                    println!("  {} {}", guess, pattern.to_emoji_string());
                }
            }
            Command::Reset => {
                solver.reset();
                println!("Reset. {} words available.", solver.remaining_count());
                print_ranking(solver, top);
            }
            Command::Solve(target) => print_solution(solver, &target),
            Command::Feedback(guess, pattern) => {
                let status = apply_feedback(solver, &guess, pattern, top);
                if status.is_finished() {
                    print_outcome(status);
                    break;
                }
            }
        }
    }

    Ok(())
}

fn load_solver(dictionary: Vec<Word>, cache: Option<&Path>) -> Result<Solver> {
    let solver = Solver::new(dictionary);
    let path = match cache {
        Some(path) => path,
        None => return Ok(solver),
    };

    match load_scores(path) {
        Ok(Some(scores)) => match solver.clone().with_initial_scores(scores) {
            Ok(solver) => return Ok(solver),
            Err(err) => warn!("{}: {}, recomputing", path.display(), err),
        },
        Ok(None) => {}
        Err(err) => warn!("{}: {}, recomputing", path.display(), err),
    }

    println!("Scoring {} words...", solver.dictionary().len());
    let scores = initial_scores(solver.dictionary());
    save_scores(path, &scores)
        .with_context(|| format!("writing score cache {}", path.display()))?;
    Ok(solver.with_initial_scores(scores)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring scoring threads")?;
    }

    let dictionary = load_dictionary(&args.dict)
        .with_context(|| format!("loading dictionary {}", args.dict.display()))?;
    if dictionary.is_empty() {
        bail!("{} contains no five-letter words", args.dict.display());
    }

    if let Some(target) = &args.solve {
        let target: Word = target.parse()?;
        let solver = load_solver(dictionary, args.cache.as_deref())?;
        print_solution(&solver, &target);
        return Ok(());
    }

    let mut solver = load_solver(dictionary, args.cache.as_deref())?;
    run_interactive(&mut solver, args.top)
}

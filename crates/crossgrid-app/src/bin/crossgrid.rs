//! Crossgrid terminal application.
//!
//! `crossgrid generate` prints a puzzle; `crossgrid play` runs a line-driven
//! session on standard input.

use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
    process::ExitCode,
    thread,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use crossgrid_app::{
    action::{Action, ActionRequestQueue},
    app::{CrosswordApp, Effect},
    command::{self, Command},
    error::AppError,
    export,
    puzzle_factory::{self, PuzzleFactory},
    render,
};
use crossgrid_generator::PuzzleSeed;

#[derive(Debug, Parser)]
#[command(name = "crossgrid", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print one generated puzzle
    Generate {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Print the answers as well
        #[arg(long)]
        solution: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Solve puzzles interactively
    Play {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
}

#[derive(Debug, Args)]
struct PuzzleArgs {
    /// Seed of the first puzzle (64 hex digits)
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the seed of the first puzzle from a phrase
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Word file with one `ANSWER|clue` per line (defaults to the built-in riddles)
    #[arg(long, value_name = "FILE")]
    words: Option<PathBuf>,
}

impl PuzzleArgs {
    fn factory(&self) -> Result<PuzzleFactory, AppError> {
        let bank = puzzle_factory::load_bank(self.words.as_deref())?;
        let seed = self
            .seed
            .or_else(|| self.phrase.as_deref().map(PuzzleSeed::from_phrase));
        Ok(PuzzleFactory::new(bank, seed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        CliCommand::Generate {
            puzzle,
            solution,
            format,
        } => generate(&puzzle, solution, format),
        CliCommand::Play { puzzle } => play(&puzzle),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &PuzzleArgs, solution: bool, format: Format) -> Result<(), AppError> {
    let state = args.factory()?.next_puzzle();
    let mut stdout = io::stdout().lock();
    match format {
        Format::Text => write!(stdout, "{}", render::puzzle(&state, solution))?,
        Format::Json => writeln!(stdout, "{}", export::to_json(&state)?)?,
    }
    Ok(())
}

fn play(args: &PuzzleArgs) -> Result<(), AppError> {
    let mut app = CrosswordApp::new(args.factory()?);
    let mut action_queue = ActionRequestQueue::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n", command::HELP)?;
    write!(stdout, "{}", render::session(&app))?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(stdout, "{}", command::HELP)?;
                continue;
            }
            Ok(command) => command.request_into(&mut action_queue),
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        }

        for effect in app.handle_all(&mut action_queue) {
            match effect {
                Effect::ScheduleNewPuzzle { after } => {
                    write!(stdout, "{}", render::session(&app))?;
                    stdout.flush()?;
                    thread::sleep(after);
                    action_queue.request(Action::NewPuzzle);
                }
            }
        }
        app.handle_all(&mut action_queue);
        write!(stdout, "{}", render::session(&app))?;
    }
    Ok(())
}

//! degreefit - main entry point
//!
//! Opens the survey TUI by default; `questions` and `score` run headless.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use degreefit::app::App;
use degreefit::cli::{Cli, Commands};
use degreefit::config::{init_tracing, LogTarget, RunOptions};
use degreefit::report;
use degreefit::{questions_for, recommend, Response, StudentStatus};

fn main() {
    let cli = Cli::parse_args();

    let target = LogTarget::choose(cli.log_file.as_deref(), cli.is_interactive());
    if let Err(e) = init_tracing(&target, cli.verbose) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }
    info!("degreefit starting up");
    debug!(?cli, "CLI arguments parsed");

    let result = match cli.command {
        None => run_survey(RunOptions::default()),
        Some(Commands::Survey(args)) => run_survey(args.run_options()),
        Some(Commands::Questions { status, json }) => print_questions(status, json),
        Some(Commands::Score {
            status,
            responses,
            json,
        }) => score_file(status, &responses, json),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Run the interactive survey
fn run_survey(options: RunOptions) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(options);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.context("Survey terminated unexpectedly")
}

/// Print the statements for a status
fn print_questions(status: StudentStatus, json: bool) -> Result<()> {
    let items = questions_for(status);
    info!(%status, count = items.len(), "Listing survey statements");
    if json {
        println!("{}", report::to_json(&items)?);
    } else {
        print!("{}", report::format_questions(&items));
    }
    Ok(())
}

/// Score a saved response file
fn score_file(status: StudentStatus, path: &Path, json: bool) -> Result<()> {
    let response = Response::load_from_file(path)
        .with_context(|| format!("Failed to read responses from {}", path.display()))?;
    response.check_complete(status)?;

    let ranked = recommend(&response, status)?;
    info!(%status, programs = ranked.len(), "Scored response file");
    if json {
        println!("{}", report::to_json(&ranked)?);
    } else {
        print!("{}", report::format_recommendations(&ranked));
    }
    Ok(())
}

//! # CLI Layer
//!
//! One possible UI client for the recipe book. This is the only place that
//! reads stdin, writes stdout, sets up logging, or decides exit codes.
//!
//! Two modes:
//! - `recipeio <command line>` runs a single command and exits; an input
//!   error exits non-zero.
//! - `recipeio` alone starts an interactive session that reads one command
//!   per line until `bye`, `exit`, or end of input.

mod print;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use log::{info, warn};
use print::{print_error, print_messages, print_recipes};
use recipeio::api::{CmdMessage, RecipeApi};
use recipeio::config::RecipeConfig;
use recipeio::error::{RecipeError, Result};
use recipeio::parser::parse_command;
use recipeio::store::fs::FileStore;
use setup::Cli;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "RECIPEIO_HOME";
const UNREADABLE_LINE_MESSAGE: &str = "Sorry, that line is not valid text. Please type it again.";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;
    match cli.command_line() {
        Some(line) => run_once(&mut api, &line),
        None => run_session(&mut api),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "recipeio", "recipeio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Store("Could not determine a data directory".to_string()))
}

fn init_api(cli: &Cli) -> Result<RecipeApi<FileStore>> {
    let dir = data_dir(cli)?;
    let config = RecipeConfig::load(&dir)?;
    let store = FileStore::new(dir).with_data_file(&config.data_file);
    let path = store.data_path();

    let api = RecipeApi::load(store, config.max_recipes)?;
    info!(
        "loaded {} recipes from {}",
        api.book().len(),
        path.display()
    );
    Ok(api)
}

/// Executes and renders one line. `Ok(false)` means the session should end.
fn handle_line(api: &mut RecipeApi<FileStore>, line: &str) -> Result<bool> {
    let (command, _) = parse_command(line);
    match api.execute(line) {
        Ok(result) => {
            print_recipes(&command, &result.listed_recipes);
            print_messages(&result.messages);
            Ok(!result.exit)
        }
        Err(e) if e.is_user_error() => {
            print_error(&command, &e);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn run_once(api: &mut RecipeApi<FileStore>, line: &str) -> Result<()> {
    match handle_line(api, line) {
        Ok(_) => Ok(()),
        Err(e) if e.is_user_error() => std::process::exit(1),
        Err(e) => Err(e),
    }
}

fn run_session(api: &mut RecipeApi<FileStore>) -> Result<()> {
    println!("Welcome to RecipeIO! Type `help` to see what you can do.");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!("skipping a line that is not valid UTF-8");
            print_messages(&[CmdMessage::error(UNREADABLE_LINE_MESSAGE)]);
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        match handle_line(api, line) {
            Ok(true) => {}
            Ok(false) => break,
            // Already rendered.
            Err(e) if e.is_user_error() => {}
            Err(e) => return Err(e),
        }
    }

    println!("Bye! Happy cooking.");
    Ok(())
}

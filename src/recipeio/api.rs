//! # API Facade
//!
//! The single entry point for recipe book operations. `RecipeApi` owns the
//! store and the in-memory [`RecipeBook`], dispatches a raw input line to the
//! matching command, and persists the book after a successful mutation.
//!
//! Commands run to completion one at a time: validate, act, persist. A save
//! failure does not undo the change in memory and is not returned as an
//! error; it is reported as a warning message on the result.
//!
//! `RecipeApi<S: RecipeStore>` is generic over storage:
//! - Production: `RecipeApi<FileStore>`
//! - Testing: `RecipeApi<InMemoryStore>`

use crate::book::RecipeBook;
use crate::commands;
use crate::error::Result;
use crate::parser::{parse_command, CommandKind};
use crate::store::RecipeStore;
use log::{debug, warn};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub const UNSUCCESSFUL_SAVE_MESSAGE: &str =
    "Save unsuccessful: your change is kept for this session but was not written to disk.";

pub struct RecipeApi<S: RecipeStore> {
    store: S,
    book: RecipeBook,
}

impl<S: RecipeStore> RecipeApi<S> {
    /// Loads the book from `store`.
    pub fn load(store: S, max_recipes: usize) -> Result<Self> {
        let recipes = store.load()?;
        Ok(Self {
            store,
            book: RecipeBook::new(recipes, max_recipes),
        })
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs one full input line.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let (command, _) = parse_command(line);
        debug!("dispatching {:?} ({} recipes)", command, self.book.len());

        let result = match command {
            CommandKind::List => self.list(),
            CommandKind::Detail => self.detail(line),
            CommandKind::Add => self.add(line),
            CommandKind::Delete => self.delete(line),
            CommandKind::Find => self.find(line),
            CommandKind::Filter => self.filter(line),
            CommandKind::Help => Ok(self.help()),
            CommandKind::Exit => Ok(CmdResult {
                exit: true,
                ..CmdResult::default()
            }),
            CommandKind::Unknown(keyword) => Ok(commands::help::unrecognized(&keyword)),
        }?;

        Ok(self.persist_if_mutated(result))
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn detail(&self, input: &str) -> Result<CmdResult> {
        commands::detail::run(&self.book, input)
    }

    /// Unlike [`execute`](Self::execute), does not save.
    pub fn add(&mut self, input: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.book, input)
    }

    /// Unlike [`execute`](Self::execute), does not save.
    pub fn delete(&mut self, input: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, input)
    }

    pub fn find(&self, input: &str) -> Result<CmdResult> {
        commands::find::run(&self.book, input)
    }

    pub fn filter(&self, input: &str) -> Result<CmdResult> {
        commands::filter::run(&self.book, input)
    }

    pub fn help(&self) -> CmdResult {
        commands::help::run()
    }

    /// Writes the book to the store; failures become a warning on the result.
    pub fn save(&mut self, result: &mut CmdResult) {
        if let Err(e) = self.store.save(self.book.recipes()) {
            warn!("saving recipes failed: {}", e);
            result.add_message(CmdMessage::warning(UNSUCCESSFUL_SAVE_MESSAGE));
        }
    }

    fn persist_if_mutated(&mut self, mut result: CmdResult) -> CmdResult {
        if result.mutated {
            self.save(&mut result);
        }
        result
    }
}

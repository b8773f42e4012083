//! # Command Layer
//!
//! One module per user command. Each exposes a `run` function that takes the
//! [`RecipeBook`](crate::book::RecipeBook) and the raw input line, validates,
//! acts, and returns a [`CmdResult`]. Commands never print and never persist;
//! they set [`CmdResult::mutated`] and the API layer saves.

use crate::book::RecipeBook;
use crate::index::DisplayRecipe;
use crate::model::Recipe;

pub mod add;
pub mod delete;
pub mod detail;
pub mod filter;
pub mod find;
pub mod help;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Recipes added or removed by the command.
    pub affected_recipes: Vec<Recipe>,
    /// Recipes to show, with their positions in the book.
    pub listed_recipes: Vec<DisplayRecipe>,
    pub messages: Vec<CmdMessage>,
    /// The book changed and must be persisted.
    pub mutated: bool,
    /// The session should end.
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }
}

pub(crate) fn book_size_message(book: &RecipeBook) -> CmdMessage {
    let plural = if book.len() == 1 { "" } else { "s" };
    CmdMessage::info(format!("You now have {} recipe{}", book.len(), plural))
}

use crate::parser::CommandKind;
use thiserror::Error;

/// Problems with what the user typed. Detected before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Parameter cannot be parsed as an integer: '{0}'")]
    NotAnInteger(String),

    #[error("Parameter cannot be parsed as a word: '{0}'")]
    NotAWord(String),

    #[error("Invalid meal category: '{0}'")]
    InvalidMealCategory(String),

    #[error("Parameter cannot be parsed as a date: '{0}'")]
    InvalidDate(String),

    #[error("Sorry, there is no recipe at index: {index} (you currently have {size} recipes)")]
    OutOfRange { index: i64, size: usize },

    #[error("The {command} function takes {}, got {found}", .command.usage())]
    WrongArity { command: CommandKind, found: usize },

    #[error("The add function accepts 6 comma-separated parameters, got {found}")]
    WrongFieldCount { found: usize },

    #[error("Recipe name cannot be empty")]
    EmptyName,

    #[error("Unknown find type: '{0}' (expected kw, date or meal)")]
    UnknownFindType(String),
}

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Recipe book is full ({max} recipes), delete one before adding more")]
    CapacityExceeded { max: usize },

    #[error("There are no recipes in your book yet")]
    EmptyBook,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl RecipeError {
    /// True for errors caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RecipeError::Input(_) | RecipeError::CapacityExceeded { .. } | RecipeError::EmptyBook
        )
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

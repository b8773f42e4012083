//! # RecipeIO Architecture
//!
//! RecipeIO is a small recipe book driven by one-line text commands
//! (`add`, `list`, `detail`, `delete`, `find`, `filter`, `help`). The library
//! holds all the logic; the binary is a thin client that reads lines and
//! renders results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap args, interactive session, colored output           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Detects the command keyword and dispatches               │
//! │  - Persists the book after add/delete                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → act on the RecipeBook → CmdResult             │
//! │  - parser.rs / validator.rs turn text into typed values     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore trait                                        │
//! │  - FileStore (JSON file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Bad input is expected, so it is never a panic: the parser and validator
//! return [`error::InputError`], which the CLI renders together with usage
//! examples. A full book is [`error::RecipeError::CapacityExceeded`]. Save
//! failures are reported on the command's result and never abort a session.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: one module per command
//! - [`parser`]: keyword detection and `add` field splitting
//! - [`validator`]: per-command input checks
//! - [`book`]: the bounded, 1-indexed recipe collection
//! - [`index`]: recipes paired with their display positions
//! - [`model`]: `Recipe` and `MealCategory`
//! - [`store`]: persistence
//! - [`config`]: per-data-directory configuration
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod store;
pub mod validator;

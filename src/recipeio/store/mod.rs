//! # Storage Layer
//!
//! The recipe book is persisted wholesale: loaded once at startup and
//! rewritten after every mutating command. The [`RecipeStore`] trait keeps
//! that contract separate from the file format.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a pretty-printed JSON array
//!   (`recipes.json` by default) inside the data directory. Writes go to a
//!   temporary file first and are renamed into place.
//! - [`memory::InMemoryStore`]: no persistence, for tests. Can be told to
//!   fail saves so the "save unsuccessful" path can be exercised.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── recipes.json   # [{ "name": ..., "date_added": "2024-03-28", "category": "dinner", ... }]
//! └── config.json    # RecipeConfig
//! ```

use crate::error::Result;
use crate::model::Recipe;

pub mod fs;
pub mod memory;

pub trait RecipeStore {
    /// Load the whole collection. A store with nothing saved yet yields an empty list.
    fn load(&self) -> Result<Vec<Recipe>>;

    /// Replace the persisted collection with `recipes`.
    fn save(&mut self, recipes: &[Recipe]) -> Result<()>;
}

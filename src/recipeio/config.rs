use crate::book::MAX_RECIPES;
use crate::error::{RecipeError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for recipeio, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    /// Name of the recipe file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Upper bound on the number of recipes in the book
    #[serde(default = "default_max_recipes")]
    pub max_recipes: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_max_recipes() -> usize {
    MAX_RECIPES
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            max_recipes: default_max_recipes(),
        }
    }
}

impl RecipeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let mut config: RecipeConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        config.max_recipes = config.max_recipes.max(1);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RecipeConfig::default();
        assert_eq!(config.data_file, "recipes.json");
        assert_eq!(config.max_recipes, MAX_RECIPES);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RecipeConfig::load(dir.path()).unwrap();
        assert_eq!(config, RecipeConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let dir = TempDir::new().unwrap();
        let config = RecipeConfig {
            data_file: "book.json".to_string(),
            max_recipes: 5,
        };
        let content = serde_json::to_string_pretty(&config).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), content).unwrap();

        let loaded = RecipeConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"max_recipes": 3}"#).unwrap();

        let loaded = RecipeConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.max_recipes, 3);
        assert_eq!(loaded.data_file, "recipes.json");
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"max_recipes": 0}"#).unwrap();
        assert_eq!(RecipeConfig::load(dir.path()).unwrap().max_recipes, 1);
    }
}

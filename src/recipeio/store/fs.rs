use super::RecipeStore;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "recipes.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RecipeError::Io)?;
        }
        Ok(())
    }
}

impl RecipeStore for FileStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        let path = self.data_path();
        if !path.exists() {
            debug!("no recipe file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(RecipeError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        debug!("loaded {} recipes from {}", recipes.len(), path.display());
        Ok(recipes)
    }

    fn save(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(recipes).map_err(RecipeError::Serialization)?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".recipes-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(RecipeError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.data_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RecipeError::Io(e));
        }

        debug!("saved {} recipes to {}", recipes.len(), self.data_path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_recipes;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        let recipes = sample_recipes();

        store.save(&recipes).unwrap();
        assert_eq!(store.load().unwrap(), recipes);
    }

    #[test]
    fn custom_data_file_name() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).with_data_file("book.json");
        store.save(&sample_recipes()).unwrap();
        assert!(dir.path().join("book.json").exists());
    }

    #[test]
    fn no_tmp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save(&sample_recipes()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        // A directory in place of the data file makes the rename fail.
        fs::create_dir(dir.path().join(DEFAULT_DATA_FILE)).unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        assert!(matches!(store.save(&sample_recipes()), Err(RecipeError::Io(_))));
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "Found leftover tmp files: {:?}", leftovers);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_DATA_FILE), "not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(store.load(), Err(RecipeError::Serialization(_))));
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ScoutError;
use crate::filter::{estimate_time_bucket, TimeBucket};
use crate::model::Recipe;

/// The persisted projection of a favorited recipe. The time bucket is
/// computed once at save time and stored, not re-derived later.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub time: TimeBucket,
    pub thumbnail: String,
}

impl FavoriteEntry {
    fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            time: estimate_time_bucket(recipe),
            thumbnail: recipe.thumbnail.clone(),
        }
    }
}

/// Storage behind the favorites store: read the whole collection, write the
/// whole collection. Reads are defensive (unreadable or corrupt data is an
/// empty collection); only writes can fail.
pub trait FavoritesBackend {
    fn read_all(&self) -> Vec<FavoriteEntry>;
    fn write_all(&mut self, entries: &[FavoriteEntry]) -> Result<(), ScoutError>;
}

/// Favorites persisted as one JSON array in a file, rewritten wholesale on
/// every mutation.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesBackend for JsonFileBackend {
    fn read_all(&self) -> Vec<FavoriteEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "favorites file {} is corrupt ({}), treating as empty",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn write_all(&mut self, entries: &[FavoriteEntry]) -> Result<(), ScoutError> {
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesBackend for MemoryBackend {
    fn read_all(&self) -> Vec<FavoriteEntry> {
        self.entries.clone()
    }

    fn write_all(&mut self, entries: &[FavoriteEntry]) -> Result<(), ScoutError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

/// An ordered, keyed set of favorite recipes over an injected backend.
///
/// Entries keep insertion order (oldest first). Mutations take `&mut self`;
/// callers sharing a store across threads wrap it in a mutex.
pub struct FavoritesStore {
    backend: Box<dyn FavoritesBackend>,
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Open the favorites file at `path`, treating a missing or corrupt
    /// file as an empty collection.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_backend(Box::new(JsonFileBackend::new(path.as_ref())))
    }

    pub fn with_backend(backend: Box<dyn FavoritesBackend>) -> Self {
        let entries = backend.read_all();
        Self { backend, entries }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Remove the entry for `recipe` if present, otherwise append one built
    /// from the record as it is now. Returns whether the recipe is a
    /// favorite after the call.
    pub fn toggle_favorite(&mut self, recipe: &Recipe) -> Result<bool, ScoutError> {
        let now_favorite = if self.is_favorite(&recipe.id) {
            self.entries.retain(|e| e.id != recipe.id);
            false
        } else {
            self.entries.push(FavoriteEntry::from_recipe(recipe));
            true
        };
        self.backend.write_all(&self.entries)?;
        Ok(now_favorite)
    }

    /// Remove by identifier; a no-op when absent.
    pub fn remove_favorite(&mut self, id: &str) -> Result<(), ScoutError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.backend.write_all(&self.entries)?;
        }
        Ok(())
    }

    /// All entries in insertion order, oldest first.
    pub fn list(&self) -> &[FavoriteEntry] {
        &self.entries
    }
}

use autocat::{
    error::AutoCatError,
    filter::Filter,
    model::{GameId, ReviewStats},
    processor::{Processor, RunSummary},
    storage::{GameDatabase, MapCategoryRegistry, StorageError},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::game_info::GameInfo;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid library file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game {0} is listed twice")]
    DuplicateGame(GameId),
}

/// Review statistics of one game, as stored in the library file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseEntry {
    pub id: GameId,
    pub review_positive_percentage: i32,
    pub review_total: i32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    games: Vec<GameInfo>,
    #[serde(default)]
    database: Vec<DatabaseEntry>,
    #[serde(default)]
    filters: Vec<Filter>,
}

/// Review statistics loaded alongside the library.
#[derive(Debug, Clone, Default)]
pub struct LibraryDatabase {
    entries: HashMap<GameId, ReviewStats>,
}

impl LibraryDatabase {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn to_entries(&self) -> Vec<DatabaseEntry> {
        let mut entries: Vec<DatabaseEntry> = self
            .entries
            .iter()
            .map(|(&id, stats)| DatabaseEntry {
                id,
                review_positive_percentage: stats.positive_percentage,
                review_total: stats.total_reviews,
            })
            .collect();
        entries.sort_by_key(|e| e.id);
        entries
    }
}

impl FromIterator<DatabaseEntry> for LibraryDatabase {
    fn from_iter<T: IntoIterator<Item = DatabaseEntry>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|e| (e.id, ReviewStats::new(e.review_positive_percentage, e.review_total)))
                .collect(),
        }
    }
}

impl GameDatabase for LibraryDatabase {
    fn contains(&self, game_id: GameId) -> Result<Option<ReviewStats>, StorageError> {
        Ok(self.entries.get(&game_id).copied())
    }
}

/// The user's games together with their categories and saved filters.
#[derive(Debug, Default)]
pub struct GameLibrary {
    games: BTreeMap<GameId, GameInfo>,
    categories: MapCategoryRegistry,
    filters: Vec<Filter>,
}

impl GameLibrary {
    pub fn load(path: &Path) -> Result<(Self, LibraryDatabase), LibraryError> {
        let contents = fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let (library, database) = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            games = library.games.len(),
            database_entries = database.len(),
            "Loaded game library"
        );
        Ok((library, database))
    }

    pub fn from_json_str(contents: &str) -> Result<(Self, LibraryDatabase), LibraryError> {
        let file: LibraryFile = serde_json::from_str(contents)?;

        let mut library = GameLibrary {
            filters: file.filters,
            ..Self::default()
        };
        for game in file.games {
            for category in &game.categories {
                library.categories.get_or_create(category.name());
            }
            let id = game.id;
            if library.games.insert(id, game).is_some() {
                return Err(LibraryError::DuplicateGame(id));
            }
        }

        Ok((library, file.database.into_iter().collect()))
    }

    pub fn to_json_string(&self, database: &LibraryDatabase) -> Result<String, LibraryError> {
        let file = LibraryFile {
            games: self.games.values().cloned().collect(),
            database: database.to_entries(),
            filters: self.filters.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn save(&self, path: &Path, database: &LibraryDatabase) -> Result<(), LibraryError> {
        fs::write(path, self.to_json_string(database)?).map_err(|source| LibraryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), games = self.games.len(), "Saved game library");
        Ok(())
    }

    pub fn game(&self, id: GameId) -> Option<&GameInfo> {
        self.games.get(&id)
    }

    pub fn games(&self) -> impl Iterator<Item = &GameInfo> {
        self.games.values()
    }

    pub fn categories(&self) -> &MapCategoryRegistry {
        &self.categories
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Runs `processor` over every game in the library.
    pub fn categorize(&mut self, processor: &Processor) -> Result<RunSummary, AutoCatError> {
        debug!(
            autocat = %processor.categorizer().autocat().name,
            games = self.games.len(),
            "Categorizing library"
        );
        processor.run_all(&mut self.games, &self.filters, &mut self.categories)
    }
}

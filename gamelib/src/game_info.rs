use autocat::filter::Filter;
use autocat::model::{Category, GameId};
use autocat::storage::GameRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A game as stored in the library file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub categories: BTreeSet<Category>,
}

impl GameInfo {
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hidden: false,
            categories: BTreeSet::new(),
        }
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name() == name)
    }
}

impl GameRecord for GameInfo {
    fn id(&self) -> GameId {
        self.id
    }

    fn include_game(&self, filter: Option<&Filter>) -> bool {
        match filter {
            Some(filter) => filter.admits(&self.categories, self.hidden),
            None => true,
        }
    }

    fn add_category(&mut self, category: Category) {
        self.categories.insert(category);
    }
}

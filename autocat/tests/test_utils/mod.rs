#![allow(dead_code)]

pub mod mocks;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use autocat::{
    categorizer::UserScoreCategorizer,
    filter::Filter,
    model::{AutoCatUserScore, Category, GameId, ReviewStats, UserScoreRule},
    storage::{GameDatabase, GameRecord, StorageError},
};

// Game record used by the categorizer tests
#[derive(Debug, Clone, Default)]
pub struct TestGame {
    pub id: GameId,
    pub hidden: bool,
    pub categories: BTreeSet<Category>,
}

impl TestGame {
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn hidden(id: GameId) -> Self {
        Self {
            id,
            hidden: true,
            ..Self::default()
        }
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name()).collect()
    }
}

impl GameRecord for TestGame {
    fn id(&self) -> GameId {
        self.id
    }

    fn include_game(&self, filter: Option<&Filter>) -> bool {
        filter.is_none_or(|f| f.admits(&self.categories, self.hidden))
    }

    fn add_category(&mut self, category: Category) {
        self.categories.insert(category);
    }
}

/// Fixed review statistics keyed by game id.
#[derive(Debug, Default)]
pub struct StaticDatabase {
    entries: HashMap<GameId, ReviewStats>,
}

impl StaticDatabase {
    pub fn with_entries(entries: &[(GameId, i32, i32)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|&(id, pct, total)| (id, ReviewStats::new(pct, total)))
                .collect(),
        }
    }
}

impl GameDatabase for StaticDatabase {
    fn contains(&self, game_id: GameId) -> Result<Option<ReviewStats>, StorageError> {
        Ok(self.entries.get(&game_id).copied())
    }
}

pub fn database(entries: &[(GameId, i32, i32)]) -> Option<Arc<dyn GameDatabase>> {
    Some(Arc::new(StaticDatabase::with_entries(entries)))
}

pub fn single_rule_autocat(rule: UserScoreRule) -> AutoCatUserScore {
    AutoCatUserScore::new("User Score").with_rules(vec![rule])
}

pub fn categorizer(
    autocat: AutoCatUserScore,
    database: Option<Arc<dyn GameDatabase>>,
) -> UserScoreCategorizer {
    UserScoreCategorizer::new(autocat, database, tracing::info_span!("autocat_test"))
}

use crate::filter::Filter;
use crate::model::*;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("game database is not loaded")]
    NotLoaded,

    #[error("game database lookup failed for {game_id}: {message}")]
    Lookup { game_id: GameId, message: String },
}

/// Read-only source of review statistics, keyed by game id.
pub trait GameDatabase: Send + Sync {
    /// `Ok(None)` when the game has no entry.
    fn contains(&self, game_id: GameId) -> Result<Option<ReviewStats>, StorageError>;
}

/// A game in the user's library. The categorizer only ever adds categories.
pub trait GameRecord {
    fn id(&self) -> GameId;
    fn include_game(&self, filter: Option<&Filter>) -> bool;
    fn add_category(&mut self, category: Category);
}

/// Hands out categories by name, creating them on first use.
pub trait CategoryRegistry {
    fn get_category(&mut self, name: &str) -> Category;
}

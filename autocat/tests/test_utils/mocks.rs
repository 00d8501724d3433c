use autocat::{
    model::{GameId, ReviewStats},
    storage::{GameDatabase, StorageError},
};
use mockall::mock;

mock! {
    pub GameDatabase {}

    impl GameDatabase for GameDatabase {
        fn contains(&self, game_id: GameId) -> Result<Option<ReviewStats>, StorageError>;
    }
}

/// Mock database that answers every lookup with `stats` and expects `calls` lookups.
pub fn create_mock_database(stats: Option<ReviewStats>, calls: usize) -> MockGameDatabase {
    let mut database = MockGameDatabase::new();
    database
        .expect_contains()
        .times(calls)
        .returning(move |_| Ok(stats));
    database
}

/// Mock database whose lookups always fail.
pub fn create_failing_database() -> MockGameDatabase {
    let mut database = MockGameDatabase::new();
    database.expect_contains().returning(|game_id| {
        Err(StorageError::Lookup {
            game_id,
            message: "connection reset".to_string(),
        })
    });
    database
}

/// Mock database that was never loaded.
pub fn create_unloaded_database() -> MockGameDatabase {
    let mut database = MockGameDatabase::new();
    database
        .expect_contains()
        .times(1)
        .returning(|_| Err(StorageError::NotLoaded));
    database
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use autocat::{
    autocat_serde::read_profile,
    categorizer::UserScoreCategorizer,
    model::{AutoCatUserScore, UserScoreRule},
    processor::Processor,
    storage::GameDatabase,
};
use common::test_helpers::write_scratch_file;
use gamelib::library::{GameLibrary, LibraryDatabase, LibraryError};

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn processor(autocat: AutoCatUserScore, database: &Arc<LibraryDatabase>) -> Processor {
    let database: Arc<dyn GameDatabase> = database.clone();
    Processor::new(UserScoreCategorizer::new(
        autocat,
        Some(database),
        tracing::info_span!("library_test"),
    ))
}

fn category_names(library: &GameLibrary, id: i64) -> Vec<String> {
    library
        .game(id)
        .unwrap()
        .categories
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}

#[test]
fn test_sample_profile_categorizes_sample_library() {
    let (mut library, database) = GameLibrary::load(&data_path("library.json")).unwrap();
    let database = Arc::new(database);
    let profile = std::fs::read_to_string(data_path("autocats.xml")).unwrap();
    let autocats = read_profile(&profile).unwrap();
    assert_eq!(autocats.len(), 2);

    let steam = library
        .categorize(&processor(autocats[0].clone(), &database))
        .unwrap();
    assert_eq!(steam.success, 4);
    assert_eq!(steam.filtered, 1);
    assert_eq!(steam.not_in_database, 1);

    let wilson = library
        .categorize(&processor(autocats[1].clone(), &database))
        .unwrap();
    assert_eq!(wilson.success, 5);
    assert_eq!(wilson.not_in_database, 1);

    assert!(category_names(&library, 10).contains(&"Reviews: Overwhelmingly Positive".to_string()));
    assert!(category_names(&library, 10).contains(&"Confidence: Proven".to_string()));
    assert!(category_names(&library, 12345).contains(&"Reviews: Positive".to_string()));
    assert!(category_names(&library, 12345).contains(&"Confidence: Unproven".to_string()));
    assert_eq!(category_names(&library, 99999), vec!["Confidence: Unproven".to_string()]);
    assert!(category_names(&library, 424242).is_empty());
}

#[test]
fn test_existing_categories_are_registered_and_kept() {
    let (library, _) = GameLibrary::load(&data_path("library.json")).unwrap();
    assert!(library.categories().get("Shooter").is_some());
    assert!(library.categories().get("Singleplayer").is_some());
    assert!(library.game(220).unwrap().has_category("Singleplayer"));
}

#[test]
fn test_save_and_reload() {
    let json = r#"{
        "games": [{ "id": 1, "name": "One" }],
        "database": [{ "id": 1, "review_positive_percentage": 85, "review_total": 1000 }]
    }"#;
    let (mut library, database) = GameLibrary::from_json_str(json).unwrap();
    let database = Arc::new(database);
    let autocat = AutoCatUserScore::new("Score")
        .with_rules(vec![UserScoreRule::new("Good", 80, 100, 1, 0)]);
    library.categorize(&processor(autocat, &database)).unwrap();

    let path = write_scratch_file("library.json", "");
    library.save(&path, &database).unwrap();
    let (reloaded, reloaded_database) = GameLibrary::load(&path).unwrap();

    assert_eq!(category_names(&reloaded, 1), vec!["Good".to_string()]);
    assert_eq!(reloaded_database.len(), 1);
    assert!(reloaded.filters().is_empty());
}

#[test]
fn test_duplicate_games_are_rejected() {
    let json = r#"{ "games": [{ "id": 1, "name": "A" }, { "id": 1, "name": "B" }] }"#;
    assert!(matches!(
        GameLibrary::from_json_str(json),
        Err(LibraryError::DuplicateGame(1))
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let err = GameLibrary::load(Path::new("/no/such/library.json")).unwrap_err();
    assert!(err.to_string().contains("/no/such/library.json"));
}

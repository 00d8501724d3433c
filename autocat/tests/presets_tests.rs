use autocat::{
    model::{AutoCatUserScore, UserScoreRule},
    presets::generate_steam_rules,
};

#[test]
fn test_steam_ladder_is_literal() {
    let mut rules = Vec::new();
    generate_steam_rules(&mut rules);

    let expected = vec![
        UserScoreRule::new("Overwhelmingly Positive", 95, 100, 500, 0),
        UserScoreRule::new("Very Positive", 85, 100, 50, 0),
        UserScoreRule::new("Positive", 80, 100, 1, 0),
        UserScoreRule::new("Mostly Positive", 70, 79, 1, 0),
        UserScoreRule::new("Mixed", 40, 69, 1, 0),
        UserScoreRule::new("Mostly Negative", 20, 39, 1, 0),
        UserScoreRule::new("Overwhelmingly Negative", 0, 19, 500, 0),
        UserScoreRule::new("Very Negative", 0, 19, 50, 0),
        UserScoreRule::new("Negative", 0, 19, 1, 0),
    ];
    assert_eq!(rules, expected);
}

#[test]
fn test_generator_appends() {
    let mut rules = vec![UserScoreRule::new("Existing", 0, 100, 0, 0)];
    generate_steam_rules(&mut rules);
    assert_eq!(rules.len(), 10);
    assert_eq!(rules[0].name, "Existing");
}

#[test]
fn test_ladder_labels_games_like_the_store() {
    let autocat = AutoCatUserScore::steam_preset("Steam");
    let label = |score, reviews| autocat.find_rule(score, reviews).map(|r| r.name.as_str());

    assert_eq!(label(97, 10_000), Some("Overwhelmingly Positive"));
    assert_eq!(label(97, 499), Some("Very Positive"));
    assert_eq!(label(97, 20), Some("Positive"));
    assert_eq!(label(75, 20), Some("Mostly Positive"));
    assert_eq!(label(55, 20), Some("Mixed"));
    assert_eq!(label(25, 20), Some("Mostly Negative"));
    assert_eq!(label(5, 600), Some("Overwhelmingly Negative"));
    assert_eq!(label(5, 60), Some("Very Negative"));
    assert_eq!(label(5, 6), Some("Negative"));
    assert_eq!(label(97, 0), None);
}

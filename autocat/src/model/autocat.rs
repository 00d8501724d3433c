use crate::model::UserScoreRule;
use crate::presets;

/// Element name and default display name of a user-score autocat.
pub const TYPE_ID: &str = "AutoCatUserScore";

/// Settings of a user-score autocat: which rules to apply and how to name the
/// resulting categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCatUserScore {
    pub name: String,
    /// Name of the inclusion filter to apply; `None` admits every game.
    pub filter: Option<String>,
    /// Prepended to every category name when non-empty.
    pub prefix: String,
    pub use_wilson_score: bool,
    /// Evaluated in order, first match wins.
    pub rules: Vec<UserScoreRule>,
}

impl AutoCatUserScore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filter: None,
            prefix: String::new(),
            use_wilson_score: false,
            rules: Vec::new(),
        }
    }

    /// An autocat preloaded with the Steam store's review-label ladder.
    pub fn steam_preset(name: impl Into<String>) -> Self {
        let mut autocat = Self::new(name);
        presets::generate_steam_rules(&mut autocat.rules);
        autocat
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_wilson_score(mut self, use_wilson_score: bool) -> Self {
        self.use_wilson_score = use_wilson_score;
        self
    }

    pub fn with_rules(mut self, rules: Vec<UserScoreRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn get_category_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}{}", self.prefix, name)
        }
    }

    /// First rule matching `score` and `reviews`, in list order.
    pub fn find_rule(&self, score: i32, reviews: i32) -> Option<&UserScoreRule> {
        self.rules.iter().find(|rule| rule.matches(score, reviews))
    }
}

impl Default for AutoCatUserScore {
    fn default() -> Self {
        Self::new(TYPE_ID)
    }
}

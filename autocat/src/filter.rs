use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::Category;

/// How a boolean game attribute takes part in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterState {
    #[default]
    Ignore,
    /// Games with the attribute set are rejected.
    Exclude,
    /// Only games with the attribute set pass.
    Require,
}

impl FilterState {
    fn admits(self, flag: bool) -> bool {
        match self {
            FilterState::Ignore => true,
            FilterState::Exclude => !flag,
            FilterState::Require => flag,
        }
    }
}

/// Named inclusion filter over a game's categories and visibility.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    #[serde(default)]
    pub uncategorized: FilterState,
    #[serde(default)]
    pub hidden: FilterState,
    /// The game needs at least one of these categories (ignored when empty).
    #[serde(default)]
    pub allow: BTreeSet<String>,
    /// The game needs all of these categories.
    #[serde(default)]
    pub require: BTreeSet<String>,
    /// The game must have none of these categories.
    #[serde(default)]
    pub exclude: BTreeSet<String>,
}

impl Filter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn admits(&self, categories: &BTreeSet<Category>, hidden: bool) -> bool {
        if !self.uncategorized.admits(categories.is_empty()) || !self.hidden.admits(hidden) {
            return false;
        }

        let has = |name: &String| categories.iter().any(|c| c.name() == name);

        if !self.allow.is_empty() && !self.allow.iter().any(has) {
            return false;
        }
        self.require.iter().all(has) && !self.exclude.iter().any(has)
    }
}

/// Looks up the filter an autocat refers to by name.
pub fn resolve_filter<'a>(name: Option<&str>, filters: &'a [Filter]) -> Option<&'a Filter> {
    let name = name?;
    filters.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> BTreeSet<Category> {
        names.iter().map(|n| Category::new(*n)).collect()
    }

    #[test]
    fn empty_filter_admits_everything() {
        let filter = Filter::new("All");
        assert!(filter.admits(&categories(&[]), true));
        assert!(filter.admits(&categories(&["Action"]), false));
    }

    #[test]
    fn hidden_states() {
        let mut filter = Filter::new("Visible");
        filter.hidden = FilterState::Exclude;
        assert!(!filter.admits(&categories(&[]), true));
        assert!(filter.admits(&categories(&[]), false));

        filter.hidden = FilterState::Require;
        assert!(filter.admits(&categories(&[]), true));
        assert!(!filter.admits(&categories(&[]), false));
    }

    #[test]
    fn uncategorized_states() {
        let mut filter = Filter::new("Sorted");
        filter.uncategorized = FilterState::Exclude;
        assert!(!filter.admits(&categories(&[]), false));
        assert!(filter.admits(&categories(&["RPG"]), false));

        filter.uncategorized = FilterState::Require;
        assert!(filter.admits(&categories(&[]), false));
        assert!(!filter.admits(&categories(&["RPG"]), false));
    }

    #[test]
    fn allow_require_exclude() {
        let mut filter = Filter::new("Mixed");
        filter.allow = ["RPG", "Strategy"].iter().map(|s| s.to_string()).collect();
        filter.require.insert("Singleplayer".to_string());
        filter.exclude.insert("Early Access".to_string());

        assert!(filter.admits(&categories(&["RPG", "Singleplayer"]), false));
        assert!(!filter.admits(&categories(&["Puzzle", "Singleplayer"]), false));
        assert!(!filter.admits(&categories(&["RPG"]), false));
        assert!(!filter.admits(&categories(&["RPG", "Singleplayer", "Early Access"]), false));
    }

    #[test]
    fn resolve_by_name() {
        let filters = vec![Filter::new("A"), Filter::new("B")];
        assert_eq!(resolve_filter(Some("B"), &filters).map(|f| f.name.as_str()), Some("B"));
        assert!(resolve_filter(Some("C"), &filters).is_none());
        assert!(resolve_filter(None, &filters).is_none());
    }
}

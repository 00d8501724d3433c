use std::collections::BTreeMap;

use crate::model::Category;
use crate::storage::CategoryRegistry;

/// Map-backed category registry; asking twice for a name returns the same category.
#[derive(Debug, Clone, Default)]
pub struct MapCategoryRegistry {
    categories: BTreeMap<String, Category>,
}

impl MapCategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, name: &str) -> Category {
        self.categories
            .entry(name.to_string())
            .or_insert_with(|| Category::new(name))
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl CategoryRegistry for MapCategoryRegistry {
    fn get_category(&mut self, name: &str) -> Category {
        self.get_or_create(name)
    }
}

//! Predicate filtering over the item list. All active constraints are ANDed;
//! no ranking, store order (newest-first) is preserved.

use crate::model::{Category, Item, ItemStatus, Location};

/// A combination of optional constraints. `None` (or a blank term) means
/// no constraint on that field.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub status: Option<ItemStatus>,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub term: Option<String>,
}

impl ItemFilter {
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        if let Some(location) = self.location {
            if item.location != location {
                return false;
            }
        }
        if let Some(term) = &self.term {
            let term = term.trim().to_lowercase();
            if !term.is_empty() && !text_matches(item, &term) {
                return false;
            }
        }
        true
    }

    /// Applies the filter, keeping the input order.
    pub fn apply(&self, items: Vec<Item>) -> Vec<Item> {
        items.into_iter().filter(|i| self.matches(i)).collect()
    }
}

fn text_matches(item: &Item, term: &str) -> bool {
    item.title.to_lowercase().contains(term)
        || item.description.to_lowercase().contains(term)
        || item.category.name().to_lowercase().contains(term)
        || item.location.name().to_lowercase().contains(term)
}

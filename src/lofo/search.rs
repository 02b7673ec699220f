//! The smart search engine: scores categories and items against a free-text
//! query and returns a ranked top-N list.
//!
//! Purely a function of (query, items, the closed category set). Navigation
//! on selection is a caller concern.

use crate::model::{Category, Item};

/// Ranked result lists are truncated to this length.
pub const MAX_RESULTS: usize = 10;

/// Relevance weights. Category weights are exclusive; item field bonuses
/// are independent and sum.
const EXACT_CATEGORY: u8 = 100;
const PARTIAL_CATEGORY: u8 = 80;
const TITLE_BONUS: u8 = 60;
const DESCRIPTION_BONUS: u8 = 40;
const CATEGORY_BONUS: u8 = 30;
const LOCATION_BONUS: u8 = 20;

/// A single ranked search result: either a category suggestion or a
/// matching item, each carrying its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit {
    Category { category: Category, relevance: u8 },
    Item { item: Item, relevance: u8 },
}

impl SearchHit {
    pub fn relevance(&self) -> u8 {
        match self {
            SearchHit::Category { relevance, .. } => *relevance,
            SearchHit::Item { relevance, .. } => *relevance,
        }
    }
}

/// Scores every category and item against `query` and returns the top
/// [`MAX_RESULTS`] hits, descending by relevance. Ties keep encounter
/// order: categories before items, original order within each.
///
/// An empty or whitespace-only query yields no results. Items with no
/// matching field are excluded, not scored zero.
pub fn smart_search(query: &str, items: &[Item]) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    // 1. Exact category match first.
    let exact = Category::ALL
        .into_iter()
        .find(|c| c.name().to_lowercase() == query);
    if let Some(category) = exact {
        hits.push(SearchHit::Category {
            category,
            relevance: EXACT_CATEGORY,
        });
    }

    // 2. Partial category matches, excluding the exact one.
    for category in Category::ALL {
        if Some(category) != exact && category.name().to_lowercase().contains(&query) {
            hits.push(SearchHit::Category {
                category,
                relevance: PARTIAL_CATEGORY,
            });
        }
    }

    // 3. Item field bonuses sum independently.
    for item in items {
        let mut relevance = 0u8;
        if item.title.to_lowercase().contains(&query) {
            relevance += TITLE_BONUS;
        }
        if item.description.to_lowercase().contains(&query) {
            relevance += DESCRIPTION_BONUS;
        }
        if item.category.name().to_lowercase().contains(&query) {
            relevance += CATEGORY_BONUS;
        }
        if item.location.name().to_lowercase().contains(&query) {
            relevance += LOCATION_BONUS;
        }
        if relevance > 0 {
            hits.push(SearchHit::Item {
                item: item.clone(),
                relevance,
            });
        }
    }

    // slice::sort_by is stable, so equal scores keep encounter order.
    hits.sort_by(|a, b| b.relevance().cmp(&a.relevance()));
    hits.truncate(MAX_RESULTS);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDraft, ItemStatus, Location};

    fn item(title: &str, description: &str, category: Category, location: Location) -> Item {
        Item::new(
            ItemDraft {
                title: title.to_string(),
                description: description.to_string(),
                category,
                location,
                status: ItemStatus::Lost,
                phone: "9876543210".to_string(),
                image: None,
            },
            "22BCE9126".to_string(),
        )
    }

    #[test]
    fn empty_query_yields_nothing() {
        let items = vec![item("iPhone", "black", Category::Electronics, Location::Ab1Block)];
        assert!(smart_search("", &items).is_empty());
        assert!(smart_search("   ", &items).is_empty());
    }

    #[test]
    fn exact_category_ranks_above_item_hits() {
        let items = vec![item(
            "Electronics kit",
            "spare parts",
            Category::Others,
            Location::Ab1Block,
        )];
        let hits = smart_search("Electronics", &items);
        // Category at 100, item at 60 (title only).
        assert!(matches!(
            hits[0],
            SearchHit::Category {
                category: Category::Electronics,
                relevance: 100
            }
        ));
        assert_eq!(hits[1].relevance(), 60);
    }

    #[test]
    fn partial_category_scores_80() {
        let hits = smart_search("elect", &[]);
        assert_eq!(
            hits,
            vec![SearchHit::Category {
                category: Category::Electronics,
                relevance: 80
            }]
        );
    }

    #[test]
    fn title_match_scores_at_least_60() {
        let items = vec![
            item("iPhone 15 Pro", "lost near AB-1", Category::Electronics, Location::Ab1Block),
            item("Water bottle", "steel, blue", Category::Others, Location::FoodStreet),
        ];
        let hits = smart_search("iphone", &items);
        assert_eq!(hits.len(), 1);
        match &hits[0] {
            SearchHit::Item { item, relevance } => {
                assert_eq!(item.title, "iPhone 15 Pro");
                assert!(*relevance >= 60);
            }
            other => panic!("expected item hit, got {:?}", other),
        }
    }

    #[test]
    fn field_bonuses_sum() {
        let items = vec![item(
            "Keys",
            "bunch of keys",
            Category::Keys,
            Location::RockPlaza,
        )];
        let hits = smart_search("keys", &items);
        // Item sums title 60 + description 40 + category 30 = 130 and
        // outranks the exact category hit at 100.
        assert_eq!(hits[0].relevance(), 130);
        assert_eq!(hits[1].relevance(), 100);
    }

    #[test]
    fn location_only_match_scores_20() {
        let items = vec![item(
            "Calculator",
            "scientific",
            Category::Electronics,
            Location::RockPlaza,
        )];
        let hits = smart_search("rock plaza", &items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].relevance(), 20);
    }

    #[test]
    fn results_are_capped_at_ten() {
        let items: Vec<Item> = (0..15)
            .map(|i| {
                item(
                    &format!("Umbrella {}", i),
                    "plain",
                    Category::Others,
                    Location::FoodStreet,
                )
            })
            .collect();
        let hits = smart_search("umbrella", &items);
        assert_eq!(hits.len(), MAX_RESULTS);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let items = vec![
            item("Charger A", "white", Category::Electronics, Location::Ab1Block),
            item("Charger B", "black", Category::Electronics, Location::Ab2Block),
        ];
        let hits = smart_search("charger", &items);
        let titles: Vec<&str> = hits
            .iter()
            .map(|h| match h {
                SearchHit::Item { item, .. } => item.title.as_str(),
                _ => panic!("unexpected category hit"),
            })
            .collect();
        assert_eq!(titles, vec!["Charger A", "Charger B"]);
    }
}

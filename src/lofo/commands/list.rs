use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::ItemFilter;
use crate::store::ItemStore;

/// Lists items through a filter. The store guarantees newest-first order,
/// so the filtered list stays recency-sorted without re-sorting here.
pub fn run<S: ItemStore>(store: &S, filter: &ItemFilter) -> Result<CmdResult> {
    let items = filter.apply(store.list_items()?);
    Ok(CmdResult::default().with_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ItemStatus, Location};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn unfiltered_list_returns_everything_newest_first() {
        let fx = StoreFixture::new()
            .with_item("First", "22BCE9126")
            .with_item("Second", "22BCE9126");

        let result = run(&fx.store, &ItemFilter::default()).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].title, "Second");
        assert_eq!(result.items[1].title, "First");
    }

    #[test]
    fn status_and_category_constraints_combine() {
        let fx = StoreFixture::new()
            .with_item_in(
                "Lost laptop",
                Category::Electronics,
                Location::Ab1Block,
                ItemStatus::Lost,
                "22BCE9126",
            )
            .with_item_in(
                "Found charger",
                Category::Electronics,
                Location::Ab1Block,
                ItemStatus::Found,
                "22BCE9126",
            )
            .with_item_in(
                "Lost bag",
                Category::Bags,
                Location::Ab1Block,
                ItemStatus::Lost,
                "22BCE9126",
            );

        let filter = ItemFilter::default()
            .with_status(ItemStatus::Lost)
            .with_category(Category::Electronics);
        let result = run(&fx.store, &filter).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].title, "Lost laptop");
    }
}

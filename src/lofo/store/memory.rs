use super::ItemStore;
use crate::error::Result;
use crate::model::Item;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    session: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryStore {
    fn save_item(&mut self, item: &Item) -> Result<()> {
        self.items.retain(|i| i.id != item.id);
        self.items.insert(0, item.clone());
        Ok(())
    }

    fn get_item(&self, id: &Uuid) -> Result<Option<Item>> {
        Ok(self.items.iter().find(|i| &i.id == id).cloned())
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    fn delete_item(&mut self, id: &Uuid) -> Result<()> {
        self.items.retain(|i| &i.id != id);
        Ok(())
    }

    fn session(&self) -> Result<Option<String>> {
        Ok(self.session.clone())
    }

    fn set_session(&mut self, reg_no: &str) -> Result<()> {
        self.session = Some(reg_no.to_string());
        Ok(())
    }

    fn clear_session(&mut self) -> Result<()> {
        self.session = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, ItemDraft, ItemStatus, Location};

    pub fn draft(title: &str) -> ItemDraft {
        ItemDraft {
            title: title.to_string(),
            description: format!("Description for {}", title),
            category: Category::Electronics,
            location: Location::Ab1Block,
            status: ItemStatus::Lost,
            phone: "9876543210".to_string(),
            image: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn logged_in(mut self, reg_no: &str) -> Self {
            self.store.set_session(reg_no).unwrap();
            self
        }

        pub fn with_item(mut self, title: &str, reg_no: &str) -> Self {
            let item = Item::new(draft(title), reg_no.to_string());
            self.store.save_item(&item).unwrap();
            self
        }

        pub fn with_item_in(
            mut self,
            title: &str,
            category: Category,
            location: Location,
            status: ItemStatus,
            reg_no: &str,
        ) -> Self {
            let mut d = draft(title);
            d.category = category;
            d.location = location;
            d.status = status;
            let item = Item::new(d, reg_no.to_string());
            self.store.save_item(&item).unwrap();
            self
        }
    }
}

//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all lofo operations, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that lives in `commands/*.rs`), I/O,
//! and presentation concerns.
//!
//! ## Generic Over ItemStore
//!
//! `LofoApi<S: ItemStore>` is generic over the storage backend:
//! - Production: `LofoApi<FileStore>`
//! - Testing: `LofoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::filter::ItemFilter;
use crate::model::ItemDraft;
use crate::store::ItemStore;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The main API facade for lofo operations.
///
/// Generic over `ItemStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct LofoApi<S: ItemStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: ItemStore> LofoApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn delete_item(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_items(&self, filter: &ItemFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn recent_items(&self, limit: usize) -> Result<commands::CmdResult> {
        commands::recent::run(&self.store, limit)
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn session(&mut self, action: SessionAction) -> Result<commands::CmdResult> {
        commands::session::run(&mut self.store, action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::session::SessionAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ItemStatus, Location};
    use crate::store::memory::InMemoryStore;

    fn api() -> LofoApi<InMemoryStore> {
        LofoApi::new(InMemoryStore::new(), PathBuf::from("/nonexistent"))
    }

    fn draft(title: &str) -> ItemDraft {
        ItemDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            category: Category::Electronics,
            location: Location::Ab1Block,
            status: ItemStatus::Lost,
            phone: "9876543210".to_string(),
            image: None,
        }
    }

    #[test]
    fn full_post_and_delete_flow() {
        let mut api = api();
        api.session(SessionAction::Login("22BCE9126".into())).unwrap();

        let created = api.add_item(draft("Wallet")).unwrap().items.remove(0);
        assert_eq!(api.list_items(&ItemFilter::default()).unwrap().items.len(), 1);

        api.delete_item(&created.id).unwrap();
        assert!(api.list_items(&ItemFilter::default()).unwrap().items.is_empty());
    }

    #[test]
    fn search_dispatches_to_engine() {
        let mut api = api();
        api.session(SessionAction::Login("22BCE9126".into())).unwrap();
        api.add_item(draft("iPhone 15 Pro")).unwrap();

        let result = api.search("iphone").unwrap();
        assert_eq!(result.hits.len(), 1);
    }
}

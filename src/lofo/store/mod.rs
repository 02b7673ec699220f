//! # Storage Layer
//!
//! This module defines the storage abstraction for lofo. The [`ItemStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (hosted document database, etc.) without
//!   changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole item collection in `items.json` (one JSON array)
//!   - The logged-in registration number in `session.json`
//!   - Every mutation rewrites the collection file; the whole list is the
//!     unit of persistence
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Ordering Contract
//!
//! [`ItemStore::list_items`] always returns items newest-first (descending
//! `created_at`). The store owns this convention; callers never re-sort.
//!
//! ## Failure Policy
//!
//! A missing or unreadable collection on read degrades to an empty store.
//! Deleting an absent id is a no-op. Neither is an error.

use crate::error::Result;
use crate::model::Item;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for item and session storage.
pub trait ItemStore {
    /// Save an item. An existing item with the same id is replaced.
    fn save_item(&mut self, item: &Item) -> Result<()>;

    /// Get an item by id, `None` if absent.
    fn get_item(&self, id: &Uuid) -> Result<Option<Item>>;

    /// List all items, newest first.
    fn list_items(&self) -> Result<Vec<Item>>;

    /// Delete an item. Idempotent: an absent id is a no-op.
    fn delete_item(&mut self, id: &Uuid) -> Result<()>;

    /// The logged-in registration number, if any.
    fn session(&self) -> Result<Option<String>>;

    /// Persist the logged-in registration number.
    fn set_session(&mut self, reg_no: &str) -> Result<()>;

    /// Clear the logged-in registration number. Idempotent.
    fn clear_session(&mut self) -> Result<()>;
}

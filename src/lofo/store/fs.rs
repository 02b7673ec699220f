use super::ItemStore;
use crate::error::{LofoError, Result};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const ITEMS_FILENAME: &str = "items.json";
const SESSION_FILENAME: &str = "session.json";

/// File-based storage: the whole collection in one JSON document, the
/// session registration number in another. Mirrors the two fixed keys of
/// the original local-storage layout.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn items_path(&self) -> PathBuf {
        self.data_dir.join(ITEMS_FILENAME)
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(LofoError::Io)?;
        }
        Ok(())
    }

    /// Load the full collection. A missing or unparseable file is treated as
    /// an empty store, never an error.
    fn load_items(&self) -> Result<Vec<Item>> {
        let path = self.items_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(LofoError::Io)?;
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_items(&self, items: &[Item]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items).map_err(LofoError::Serialization)?;
        fs::write(self.items_path(), content).map_err(LofoError::Io)?;
        Ok(())
    }
}

impl ItemStore for FileStore {
    fn save_item(&mut self, item: &Item) -> Result<()> {
        let mut items = self.load_items()?;
        items.retain(|i| i.id != item.id);
        items.insert(0, item.clone());
        self.save_items(&items)
    }

    fn get_item(&self, id: &Uuid) -> Result<Option<Item>> {
        Ok(self.load_items()?.into_iter().find(|i| &i.id == id))
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        let mut items = self.load_items()?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    fn delete_item(&mut self, id: &Uuid) -> Result<()> {
        let mut items = self.load_items()?;
        items.retain(|i| &i.id != id);
        self.save_items(&items)
    }

    fn session(&self) -> Result<Option<String>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(LofoError::Io)?;
        Ok(serde_json::from_str(&content).unwrap_or(None))
    }

    fn set_session(&mut self, reg_no: &str) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string(&Some(reg_no)).map_err(LofoError::Serialization)?;
        fs::write(self.session_path(), content).map_err(LofoError::Io)?;
        Ok(())
    }

    fn clear_session(&mut self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(path).map_err(LofoError::Io)?;
        }
        Ok(())
    }
}

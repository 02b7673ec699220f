use lofo::model::{Category, Item, ItemDraft, ItemStatus, Location};
use lofo::store::fs::FileStore;
use lofo::store::ItemStore;
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

fn make_item(title: &str) -> Item {
    Item::new(
        ItemDraft {
            title: title.to_string(),
            description: "black leather, contains ID card".to_string(),
            category: Category::Accessories,
            location: Location::CentralBlock,
            status: ItemStatus::Lost,
            phone: "9876543210".to_string(),
            image: Some("https://example.com/wallet.jpg".to_string()),
        },
        "22BCE9126".to_string(),
    )
}

#[test]
fn test_save_and_reload_round_trip() {
    let (dir, mut store) = setup();
    let item = make_item("Wallet");
    store.save_item(&item).unwrap();

    // A fresh store over the same directory sees an equal item.
    let reopened = FileStore::new(dir.path().to_path_buf());
    let loaded = reopened.get_item(&item.id).unwrap().unwrap();
    assert_eq!(loaded, item);
}

#[test]
fn test_collection_is_one_json_document() {
    let (dir, mut store) = setup();
    store.save_item(&make_item("A")).unwrap();
    store.save_item(&make_item("B")).unwrap();

    let raw = fs::read_to_string(dir.path().join("items.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_list_is_newest_first() {
    let (_dir, mut store) = setup();
    let a = make_item("Older");
    let b = make_item("Newer");
    // Save out of order; the store sorts by created_at on read.
    store.save_item(&b).unwrap();
    store.save_item(&a).unwrap();

    let titles: Vec<String> = store
        .list_items()
        .unwrap()
        .into_iter()
        .map(|i| i.title)
        .collect();
    assert_eq!(titles, vec!["Newer".to_string(), "Older".to_string()]);
}

#[test]
fn test_delete_is_idempotent() {
    let (_dir, mut store) = setup();
    let item = make_item("Wallet");
    store.save_item(&item).unwrap();

    store.delete_item(&item.id).unwrap();
    assert!(store.get_item(&item.id).unwrap().is_none());

    // Absent ids are a no-op, including ids never stored.
    store.delete_item(&item.id).unwrap();
    store.delete_item(&Uuid::new_v4()).unwrap();
}

#[test]
fn test_corrupt_collection_degrades_to_empty() {
    let (dir, mut store) = setup();
    store.save_item(&make_item("Wallet")).unwrap();

    fs::write(dir.path().join("items.json"), "{not json!").unwrap();
    assert!(store.list_items().unwrap().is_empty());

    // And the store stays usable: the next save starts a fresh collection.
    let item = make_item("Keys");
    store.save_item(&item).unwrap();
    assert_eq!(store.list_items().unwrap().len(), 1);
}

#[test]
fn test_missing_files_mean_empty_store() {
    let (_dir, store) = setup();
    assert!(store.list_items().unwrap().is_empty());
    assert!(store.session().unwrap().is_none());
}

#[test]
fn test_session_round_trip() {
    let (dir, mut store) = setup();
    store.set_session("22BCE9126").unwrap();

    let reopened = FileStore::new(dir.path().to_path_buf());
    assert_eq!(reopened.session().unwrap().as_deref(), Some("22BCE9126"));

    let mut reopened = reopened;
    reopened.clear_session().unwrap();
    assert!(reopened.session().unwrap().is_none());
    // Clearing twice is fine.
    reopened.clear_session().unwrap();
}

#[test]
fn test_taxonomy_names_survive_serialization() {
    let (dir, mut store) = setup();
    let mut item = make_item("ID card");
    item.category = Category::IdCard;
    item.location = Location::Mh4Hostel;
    store.save_item(&item).unwrap();

    // Canonical human-readable names on disk, not variant identifiers.
    let raw = fs::read_to_string(dir.path().join("items.json")).unwrap();
    assert!(raw.contains("\"ID Card\""));
    assert!(raw.contains("\"MH-4 Hostel\""));

    let loaded = store.get_item(&item.id).unwrap().unwrap();
    assert_eq!(loaded.category, Category::IdCard);
    assert_eq!(loaded.location, Location::Mh4Hostel);
}

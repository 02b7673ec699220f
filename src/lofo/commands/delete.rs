use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LofoError, Result};
use crate::store::ItemStore;
use uuid::Uuid;

/// Deletes an item owned by the logged-in poster. An absent id is treated
/// as success (idempotent delete); a foreign item is refused.
pub fn run<S: ItemStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let reg_no = store.session()?.ok_or(LofoError::NotLoggedIn)?;

    let mut result = CmdResult::default();
    match store.get_item(id)? {
        None => {
            result.add_message(CmdMessage::info("Item is already gone."));
        }
        Some(item) if !item.reg_no.eq_ignore_ascii_case(&reg_no) => {
            return Err(LofoError::NotOwner);
        }
        Some(item) => {
            store.delete_item(id)?;
            result.add_message(CmdMessage::success(format!("Item deleted: {}", item.title)));
            result.items.push(item);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::fixtures::{draft, StoreFixture};

    #[test]
    fn owner_can_delete() {
        let mut fx = StoreFixture::new().logged_in("22BCE9126");
        let created = add::run(&mut fx.store, draft("Wallet")).unwrap().items.remove(0);

        run(&mut fx.store, &created.id).unwrap();
        assert!(fx.store.get_item(&created.id).unwrap().is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut fx = StoreFixture::new().logged_in("22BCE9126");
        let created = add::run(&mut fx.store, draft("Wallet")).unwrap().items.remove(0);

        run(&mut fx.store, &created.id).unwrap();
        // Second delete of the same id is a no-op, not an error.
        let result = run(&mut fx.store, &created.id).unwrap();
        assert!(result.items.is_empty());
    }

    #[test]
    fn non_owner_is_refused() {
        let mut fx = StoreFixture::new()
            .logged_in("22BCE9126")
            .with_item("Foreign wallet", "23CS1234");
        let id = fx.store.list_items().unwrap()[0].id;

        let err = run(&mut fx.store, &id).unwrap_err();
        assert!(matches!(err, LofoError::NotOwner));
        assert!(fx.store.get_item(&id).unwrap().is_some());
    }

    #[test]
    fn requires_login() {
        let mut fx = StoreFixture::new().with_item("Wallet", "22BCE9126");
        let id = fx.store.list_items().unwrap()[0].id;
        assert!(matches!(
            run(&mut fx.store, &id).unwrap_err(),
            LofoError::NotLoggedIn
        ));
    }
}

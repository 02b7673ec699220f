use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ItemStore;

/// The `limit` most recently posted items. The store lists newest-first,
/// so this is a plain prefix.
pub fn run<S: ItemStore>(store: &S, limit: usize) -> Result<CmdResult> {
    let mut items = store.list_items()?;
    items.truncate(limit);
    Ok(CmdResult::default().with_items(items))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::smart_search;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S, term: &str) -> Result<CmdResult> {
    let items = store.list_items()?;
    let hits = smart_search(term, &items);

    let mut result = CmdResult::default().with_hits(hits);
    if result.hits.is_empty() {
        result.add_message(CmdMessage::info(format!("No matches for \"{}\".", term)));
    }
    Ok(result)
}

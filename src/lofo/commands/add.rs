use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LofoError, Result};
use crate::model::{Item, ItemDraft};
use crate::store::ItemStore;
use crate::validate::check_phone;

pub fn run<S: ItemStore>(store: &mut S, draft: ItemDraft) -> Result<CmdResult> {
    let reg_no = store.session()?.ok_or(LofoError::NotLoggedIn)?;

    if draft.title.trim().is_empty() {
        return Err(LofoError::Validation("Title is required".to_string()));
    }
    if draft.description.trim().is_empty() {
        return Err(LofoError::Validation("Description is required".to_string()));
    }
    let phone = check_phone(&draft.phone);
    if let Some(advice) = phone.advice() {
        return Err(LofoError::Validation(format!(
            "Phone number must contain exactly 10 digits ({})",
            advice
        )));
    }

    let item = Item::new(draft, reg_no);
    store.save_item(&item)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Posted {} item: {}",
        item.status, item.title
    )));
    result.items.push(item);
    Ok(result)
}

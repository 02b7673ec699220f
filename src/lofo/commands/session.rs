use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LofoError, Result};
use crate::store::ItemStore;
use crate::validate::is_valid_registration_number;

#[derive(Debug, Clone)]
pub enum SessionAction {
    Login(String),
    Logout,
    Show,
}

pub fn run<S: ItemStore>(store: &mut S, action: SessionAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        SessionAction::Login(reg_no) => {
            if !is_valid_registration_number(&reg_no) {
                return Err(LofoError::Validation(format!(
                    "Invalid registration number: {} (expected e.g. 22BCE9126)",
                    reg_no.trim()
                )));
            }
            let normalized = reg_no.trim().to_uppercase();
            store.set_session(&normalized)?;
            result.add_message(CmdMessage::success(format!("Logged in as {}", normalized)));
            result.session = Some(normalized);
        }
        SessionAction::Logout => {
            store.clear_session()?;
            result.add_message(CmdMessage::info("Logged out."));
        }
        SessionAction::Show => {
            result.session = store.session()?;
            if result.session.is_none() {
                result.add_message(CmdMessage::info("Not logged in."));
            }
        }
    }
    Ok(result)
}

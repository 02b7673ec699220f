use crate::config::LofoConfig;
use crate::model::Item;
use crate::search::SearchHit;

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod recent;
pub mod search;
pub mod session;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command: the data a UI needs to render, never
/// pre-formatted text.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created, listed, or otherwise affected, newest first.
    pub items: Vec<Item>,
    /// Ranked search hits (search command only).
    pub hits: Vec<SearchHit>,
    /// The active session registration number, when a session command asked.
    pub session: Option<String>,
    pub config: Option<LofoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_session(mut self, session: Option<String>) -> Self {
        self.session = session;
        self
    }

    pub fn with_config(mut self, config: LofoConfig) -> Self {
        self.config = Some(config);
        self
    }
}

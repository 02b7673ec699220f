use thiserror::Error;

#[derive(Error, Debug)]
pub enum LofoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Not logged in. Run `lofo login <reg-no>` first")]
    NotLoggedIn,

    #[error("Only the poster can delete this item")]
    NotOwner,

    #[error("{0}")]
    Validation(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LofoError>;

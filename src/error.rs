use thiserror::Error;

use crate::SchemeQuery;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("failed to register change listener for {query:?}: {reason}")]
    Registration { query: SchemeQuery, reason: String },

    #[error(transparent)]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WatchError>;

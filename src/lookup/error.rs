// src/lookup/error.rs
// Repository-list failures. These are logged, never shown to the user.

use thiserror::Error;

use crate::github::FetchError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryFetchError {
    #[error(transparent)]
    Transport(#[from] FetchError),

    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    #[error("could not decode repository list: {0}")]
    Decode(String),
}

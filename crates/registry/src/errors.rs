//! Error types for the translation registry.

use telmap_types::{DictHandle, NumberFormatError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown dictionary handle {handle}")]
    UnknownHandle { handle: DictHandle },

    #[error("invalid phone number: {0}")]
    InvalidNumber(#[from] NumberFormatError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

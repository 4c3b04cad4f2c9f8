//! Dictionary handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one translation dictionary inside a registry.
///
/// Handles are allocated by the owning registry, starting at zero and counting
/// up. A handle is never reassigned: once its dictionary is deleted it stays
/// invalid for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DictHandle(u64);

impl DictHandle {
    /// Wrap a raw handle value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DictHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! A single translation table.

use crate::resolution::{follow_chain, ChainResolution};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use telmap_types::PhoneNumber;

/// One phone-number translation table.
///
/// Maps each source number to at most one destination number. These methods
/// are the unchecked fast path: they operate on already-validated
/// [`PhoneNumber`]s and never fail. The checked, string-level surface lives on
/// [`TelRegistry`](crate::TelRegistry).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    entries: HashMap<PhoneNumber, PhoneNumber>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Map `src` to `dst`, replacing any previous mapping for `src`.
    pub fn insert(&mut self, src: PhoneNumber, dst: PhoneNumber) {
        self.entries.insert(src, dst);
    }

    /// Remove the mapping for `src`. Returns whether one existed.
    pub fn erase(&mut self, src: &PhoneNumber) -> bool {
        self.entries.remove(src).is_some()
    }

    /// Single-step lookup of `src`.
    pub fn lookup(&self, src: &PhoneNumber) -> Option<&PhoneNumber> {
        self.entries.get(src)
    }

    /// Whether `src` has a mapping.
    pub fn contains(&self, src: &PhoneNumber) -> bool {
        self.entries.contains_key(src)
    }

    /// Follow the translation chain starting at `src`.
    ///
    /// See [`follow_chain`] for the walk and its cycle policy.
    pub fn resolve(&self, src: &PhoneNumber) -> ChainResolution {
        follow_chain(self, src)
    }

    /// Number of mappings held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

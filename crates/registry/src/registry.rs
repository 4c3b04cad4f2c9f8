//! Handle-keyed registry of translation dictionaries.

use crate::dictionary::Dictionary;
use crate::errors::{RegistryError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use telmap_types::{DictHandle, PhoneNumber};
use tracing::{debug, trace};

/// Registry of independent translation dictionaries.
///
/// Owns every dictionary it creates and addresses them by [`DictHandle`].
/// Handles are allocated monotonically from zero and never reused, so a
/// deleted handle stays invalid for the lifetime of the registry. Any number
/// of registries may coexist in one process; each is fully independent.
///
/// A single coarse lock guards the handle counter and the dictionary table.
/// Mutating operations take the write lock, lookups the read lock, which
/// makes the registry usable as-is behind an [`Arc`](std::sync::Arc).
#[derive(Debug, Default)]
pub struct TelRegistry {
    inner: RwLock<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_handle: u64,
    dictionaries: HashMap<DictHandle, Dictionary>,
}

impl TelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new empty dictionary and return its handle.
    pub fn create(&self) -> DictHandle {
        let mut inner = self.inner.write();
        let handle = DictHandle::new(inner.next_handle);
        inner.next_handle += 1;
        inner.dictionaries.insert(handle, Dictionary::new());

        debug!(target: "telmap", %handle, "created dictionary");
        handle
    }

    /// Delete the dictionary behind `handle`, dropping all of its entries.
    ///
    /// The handle is permanently invalid afterwards; it is never reassigned.
    pub fn delete(&self, handle: DictHandle) -> Result<()> {
        let mut inner = self.inner.write();
        inner
            .dictionaries
            .remove(&handle)
            .ok_or(RegistryError::UnknownHandle { handle })?;

        debug!(target: "telmap", %handle, "deleted dictionary");
        Ok(())
    }

    /// Map `src` to `dst` in the dictionary behind `handle`, replacing any
    /// previous mapping for `src`.
    pub fn insert(&self, handle: DictHandle, src: &str, dst: &str) -> Result<()> {
        let src = PhoneNumber::parse(src)?;
        let dst = PhoneNumber::parse(dst)?;

        let mut inner = self.inner.write();
        let dictionary = inner
            .dictionaries
            .get_mut(&handle)
            .ok_or(RegistryError::UnknownHandle { handle })?;

        debug!(target: "telmap", %handle, %src, %dst, "inserted mapping");
        dictionary.insert(src, dst);
        Ok(())
    }

    /// Remove the mapping for `src` from the dictionary behind `handle`.
    ///
    /// Returns whether a mapping was removed; erasing an absent mapping is a
    /// no-op, not an error.
    pub fn erase(&self, handle: DictHandle, src: &str) -> Result<bool> {
        let src = PhoneNumber::parse(src)?;

        let mut inner = self.inner.write();
        let dictionary = inner
            .dictionaries
            .get_mut(&handle)
            .ok_or(RegistryError::UnknownHandle { handle })?;

        let removed = dictionary.erase(&src);
        debug!(target: "telmap", %handle, %src, removed, "erased mapping");
        Ok(removed)
    }

    /// Resolve `src` through the dictionary behind `handle` by following the
    /// translation chain.
    ///
    /// A number without a mapping resolves to itself; a cyclic chain resolves
    /// back to `src`. See [`follow_chain`](crate::resolution::follow_chain)
    /// for the exact walk.
    pub fn resolve(&self, handle: DictHandle, src: &str) -> Result<PhoneNumber> {
        let src = PhoneNumber::parse(src)?;

        let inner = self.inner.read();
        let dictionary = inner
            .dictionaries
            .get(&handle)
            .ok_or(RegistryError::UnknownHandle { handle })?;

        let resolution = dictionary.resolve(&src);
        trace!(
            target: "telmap",
            %handle,
            %src,
            dst = %resolution.number,
            hops = resolution.hops,
            cycled = resolution.cycled,
            "resolved number"
        );
        Ok(resolution.number)
    }

    /// Whether `handle` currently addresses a dictionary.
    pub fn is_valid(&self, handle: DictHandle) -> bool {
        self.inner.read().dictionaries.contains_key(&handle)
    }

    /// Number of live dictionaries.
    pub fn dictionary_count(&self) -> usize {
        self.inner.read().dictionaries.len()
    }

    /// Number of mappings in the dictionary behind `handle`.
    pub fn entry_count(&self, handle: DictHandle) -> Result<usize> {
        let inner = self.inner.read();
        let dictionary = inner
            .dictionaries
            .get(&handle)
            .ok_or(RegistryError::UnknownHandle { handle })?;
        Ok(dictionary.len())
    }

    /// Whether the dictionary behind `handle` maps `src` to anything.
    pub fn contains(&self, handle: DictHandle, src: &str) -> Result<bool> {
        let src = PhoneNumber::parse(src)?;

        let inner = self.inner.read();
        let dictionary = inner
            .dictionaries
            .get(&handle)
            .ok_or(RegistryError::UnknownHandle { handle })?;
        Ok(dictionary.contains(&src))
    }
}

//! Phone-number translation registry.
//!
//! A [`TelRegistry`] owns a collection of independent translation
//! dictionaries, each addressed by a [`DictHandle`]. Every dictionary maps
//! phone numbers to phone numbers; resolving a number follows the mapping
//! chain hop by hop until it ends, and falls back to the original input when
//! the chain turns out to be cyclic.

pub mod dictionary;
pub mod errors;
pub mod registry;
pub mod resolution;

pub use dictionary::Dictionary;
pub use errors::{RegistryError, Result};
pub use registry::TelRegistry;
pub use resolution::{follow_chain, ChainResolution};
pub use telmap_types::{DictHandle, NumberFormatError, PhoneNumber};

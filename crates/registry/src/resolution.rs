//! Chain-following translation with cycle detection.

use crate::dictionary::Dictionary;
use std::collections::HashSet;
use telmap_types::PhoneNumber;
use tracing::debug;

/// Outcome of one chain walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainResolution {
    /// The resolved number: the end of the chain, or the original input when
    /// the walk ran into a cycle.
    pub number: PhoneNumber,
    /// How many translations were applied before the walk stopped.
    pub hops: usize,
    /// Whether the walk was cut short by a cycle.
    pub cycled: bool,
}

/// Walk the translation chain starting at `src`.
///
/// Each step replaces the current number with its mapping, until a number
/// with no mapping is reached; that number is the result. A `src` with no
/// mapping at all resolves to itself. If a step would revisit a number seen
/// earlier in the walk, the chain is cyclic and the result reverts to the
/// original `src`, not the last number before the cycle, and it is not an
/// error.
///
/// Terminates after at most `dictionary.len() + 1` lookups: every iteration
/// either stops or adds a previously unseen number to the visited set, and
/// the dictionary holds only finitely many distinct numbers.
pub fn follow_chain<'a>(dictionary: &'a Dictionary, src: &'a PhoneNumber) -> ChainResolution {
    let mut visited: HashSet<&PhoneNumber> = HashSet::new();
    visited.insert(src);

    let mut current = src;
    let mut hops = 0;

    loop {
        let Some(next) = dictionary.lookup(current) else {
            return ChainResolution {
                number: current.clone(),
                hops,
                cycled: false,
            };
        };

        if visited.contains(next) {
            debug!(target: "telmap", %src, hops, "cycle detected, reverting to input");
            return ChainResolution {
                number: src.clone(),
                hops,
                cycled: true,
            };
        }

        visited.insert(next);
        current = next;
        hops += 1;
    }
}

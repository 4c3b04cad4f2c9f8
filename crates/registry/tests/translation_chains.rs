//! Integration tests for the translation registry.
//! Exercises the full surface end to end: dictionary lifecycle, chain
//! resolution, cycle fallback, erase semantics, and handle isolation.
//!
//! Run with: cargo test -p telmap-registry --test translation_chains

use telmap_registry::{RegistryError, TelRegistry};

/// Helper to install a chain of mappings into one dictionary.
fn insert_chain(registry: &TelRegistry, handle: telmap_registry::DictHandle, hops: &[(&str, &str)]) {
    for (src, dst) in hops {
        registry.insert(handle, src, dst).unwrap();
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn resolve_follows_chains_and_identity() {
    init_tracing();
    let registry = TelRegistry::new();
    let handle = registry.create();

    // Nothing inserted yet: every number resolves to itself.
    assert_eq!(registry.resolve(handle, "5551234").unwrap().as_str(), "5551234");

    insert_chain(&registry, handle, &[("111", "222"), ("222", "333")]);

    assert_eq!(registry.resolve(handle, "111").unwrap().as_str(), "333");
    assert_eq!(registry.resolve(handle, "222").unwrap().as_str(), "333");
    assert_eq!(registry.resolve(handle, "333").unwrap().as_str(), "333");

    // Extending the chain moves the endpoint for every upstream number.
    registry.insert(handle, "333", "444").unwrap();
    assert_eq!(registry.resolve(handle, "111").unwrap().as_str(), "444");
}

#[test]
fn cycles_fall_back_to_the_original_input() {
    init_tracing();
    let registry = TelRegistry::new();
    let handle = registry.create();

    insert_chain(
        &registry,
        handle,
        &[("111", "222"), ("222", "333"), ("333", "111")],
    );

    // Every entry point of the cycle resolves to itself, untransformed.
    for number in ["111", "222", "333"] {
        assert_eq!(registry.resolve(handle, number).unwrap().as_str(), number);
    }

    // A chain that merely leads into the cycle falls back to its own start.
    registry.insert(handle, "999", "222").unwrap();
    assert_eq!(registry.resolve(handle, "999").unwrap().as_str(), "999");

    // Breaking the cycle restores plain chain resolution.
    assert!(registry.erase(handle, "333").unwrap());
    assert_eq!(registry.resolve(handle, "999").unwrap().as_str(), "333");
    assert_eq!(registry.resolve(handle, "111").unwrap().as_str(), "333");
}

#[test]
fn erase_reverts_to_identity_or_next_hop() {
    init_tracing();
    let registry = TelRegistry::new();
    let handle = registry.create();

    insert_chain(&registry, handle, &[("111", "222"), ("222", "333")]);
    assert!(registry.erase(handle, "111").unwrap());

    // 111 is unmapped again; the rest of the chain is untouched.
    assert_eq!(registry.resolve(handle, "111").unwrap().as_str(), "111");
    assert_eq!(registry.resolve(handle, "222").unwrap().as_str(), "333");

    // Erasing a mapping that never existed is a quiet no-op.
    assert!(!registry.erase(handle, "777").unwrap());
}

#[test]
fn overwrite_keeps_only_the_latest_mapping() {
    init_tracing();
    let registry = TelRegistry::new();
    let handle = registry.create();

    registry.insert(handle, "111", "222").unwrap();
    registry.insert(handle, "111", "333").unwrap();

    assert_eq!(registry.resolve(handle, "111").unwrap().as_str(), "333");
    assert_eq!(registry.entry_count(handle).unwrap(), 1);
}

#[test]
fn deleting_one_dictionary_leaves_the_rest_intact() {
    init_tracing();
    let registry = TelRegistry::new();

    let first = registry.create();
    let second = registry.create();
    insert_chain(&registry, first, &[("111", "222")]);
    insert_chain(&registry, second, &[("111", "555"), ("555", "666")]);

    registry.delete(first).unwrap();

    assert!(!registry.is_valid(first));
    assert!(registry.is_valid(second));
    assert_eq!(registry.dictionary_count(), 1);
    assert_eq!(registry.resolve(second, "111").unwrap().as_str(), "666");

    assert!(matches!(
        registry.resolve(first, "111"),
        Err(RegistryError::UnknownHandle { .. })
    ));
}

#[test]
fn handles_stay_monotonic_across_interleaved_deletes() {
    init_tracing();
    let registry = TelRegistry::new();

    let mut seen = Vec::new();
    for _ in 0..3 {
        let handle = registry.create();
        seen.push(handle);
        registry.delete(handle).unwrap();
    }
    let last = registry.create();
    seen.push(last);

    for window in seen.windows(2) {
        assert!(window[0].as_u64() < window[1].as_u64());
    }
}

#[test]
fn malformed_numbers_are_rejected_everywhere() {
    init_tracing();
    let registry = TelRegistry::new();
    let handle = registry.create();

    let over_limit = "1".repeat(23);
    for bad in ["", "12-34", "abc", over_limit.as_str()] {
        assert!(matches!(
            registry.insert(handle, bad, "111"),
            Err(RegistryError::InvalidNumber(_))
        ));
        assert!(matches!(
            registry.insert(handle, "111", bad),
            Err(RegistryError::InvalidNumber(_))
        ));
        assert!(matches!(
            registry.erase(handle, bad),
            Err(RegistryError::InvalidNumber(_))
        ));
        assert!(matches!(
            registry.resolve(handle, bad),
            Err(RegistryError::InvalidNumber(_))
        ));
        assert!(matches!(
            registry.contains(handle, bad),
            Err(RegistryError::InvalidNumber(_))
        ));
    }

    assert_eq!(registry.entry_count(handle).unwrap(), 0);
}

//! Configuration Tests.
//!
//! Defaults, JSON loading with per-field fallbacks, file loading, capacity
//! sizing, and validation.

use std::io::Write;

use nbcache_core::{CacheConfig, ConfigError, ReplacementPolicy, SetAssociativeCache};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

// ══════════════════════════════════════════════════════════
// 1. Defaults
// ══════════════════════════════════════════════════════════

#[test]
fn default_config() {
    let config = CacheConfig::default();
    assert_eq!(config.name, "default_cache");
    assert_eq!(config.ways, 4);
    assert_eq!(config.sets, 64);
    assert_eq!(config.policy, ReplacementPolicy::Lru);
    assert_eq!(config.mshr_entries, 16);
    assert_eq!(config.mshr_max_merge, 32);
    assert_eq!(config.capacity_bytes(), 16 * 1024);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_object_is_the_default() {
    assert_eq!(CacheConfig::from_json("{}").unwrap(), CacheConfig::default());
}

#[test]
fn partial_json_fills_missing_fields() {
    let config = CacheConfig::from_json(r#"{ "name": "l2", "sets": 512 }"#).unwrap();
    assert_eq!(
        config,
        CacheConfig {
            name: "l2".to_owned(),
            sets: 512,
            ..CacheConfig::default()
        }
    );
}

#[rstest]
#[case("LRU", ReplacementPolicy::Lru)]
#[case("Lru", ReplacementPolicy::Lru)]
#[case("FIFO", ReplacementPolicy::Fifo)]
#[case("Fifo", ReplacementPolicy::Fifo)]
fn policy_names_and_aliases(#[case] name: &str, #[case] expected: ReplacementPolicy) {
    let config = CacheConfig::from_json(&format!(r#"{{ "policy": "{name}" }}"#)).unwrap();
    assert_eq!(config.policy, expected);
}

#[test]
fn serializes_policy_in_uppercase() {
    let json = serde_json::to_value(CacheConfig::default()).unwrap();
    assert_eq!(json["policy"], "LRU");
    assert_eq!(json["mshr_max_merge"], 32);
}

#[rstest]
#[case("not json")]
#[case(r#"{ "ways": "four" }"#)]
#[case(r#"{ "ways": -1 }"#)]
#[case(r#"{ "policy": "RANDOM" }"#)]
fn malformed_json_is_a_parse_error(#[case] json: &str) {
    assert!(matches!(CacheConfig::from_json(json), Err(ConfigError::Parse(_))));
}

// ══════════════════════════════════════════════════════════
// 2. File Loading
// ══════════════════════════════════════════════════════════

#[test]
fn loads_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "name": "l1d", "ways": 8, "sets": 32, "mshr_entries": 4, "mshr_max_merge": 2 }}"#
    )
    .unwrap();

    let config = CacheConfig::from_file(file.path()).unwrap();
    assert_eq!(config.name, "l1d");
    assert_eq!(config.ways, 8);
    assert_eq!(config.sets, 32);
    assert_eq!(config.mshr_entries, 4);
    assert_eq!(config.mshr_max_merge, 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CacheConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// ══════════════════════════════════════════════════════════
// 3. Capacity Sizing
// ══════════════════════════════════════════════════════════

#[test]
fn from_capacity_derives_sets_and_mshr() {
    let config = CacheConfig::from_capacity(4, 16 * 1024).unwrap();
    assert_eq!(config.name, "default cache");
    assert_eq!(config.ways, 4);
    assert_eq!(config.sets, 64);
    assert_eq!(config.policy, ReplacementPolicy::Lru);
    assert_eq!(config.mshr_entries, 196);
    assert_eq!(config.mshr_max_merge, 16);
    assert_eq!(config.capacity_bytes(), 16 * 1024);
}

#[rstest]
#[case(4, 100)] // not whole lines
#[case(3, 1024)] // 16 lines, not divisible by 3 ways
#[case(8, 256)] // 4 lines, fewer than 8 ways
#[case(4, 0)]
fn from_capacity_rejects_uneven_geometry(#[case] ways: usize, #[case] total_bytes: usize) {
    assert!(matches!(
        CacheConfig::from_capacity(ways, total_bytes),
        Err(ConfigError::CapacityNotDivisible { .. })
    ));
}

#[test]
fn from_capacity_rejects_zero_ways() {
    assert!(matches!(CacheConfig::from_capacity(0, 4096), Err(ConfigError::ZeroWays)));
}

// ══════════════════════════════════════════════════════════
// 4. Validation
// ══════════════════════════════════════════════════════════

#[test]
fn zero_geometry_is_rejected() {
    let zero_ways = CacheConfig { ways: 0, ..CacheConfig::default() };
    assert!(matches!(zero_ways.validate(), Err(ConfigError::ZeroWays)));

    let zero_sets = CacheConfig { sets: 0, ..CacheConfig::default() };
    assert!(matches!(zero_sets.validate(), Err(ConfigError::ZeroSets)));
    assert!(SetAssociativeCache::new(&zero_sets).is_err());
}

#[test]
fn zero_mshr_capacity_is_allowed() {
    let config = CacheConfig {
        mshr_entries: 0,
        mshr_max_merge: 0,
        ..CacheConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn fifo_is_rejected_at_construction() {
    let config = CacheConfig {
        policy: ReplacementPolicy::Fifo,
        ..CacheConfig::default()
    };
    let err = SetAssociativeCache::new(&config).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedPolicy(ReplacementPolicy::Fifo)));
    assert!(err.to_string().contains("only LRU is supported"));
}

#[test]
fn cache_takes_name_and_geometry_from_config() {
    let config = CacheConfig::from_json(r#"{ "name": "l1d", "ways": 2, "sets": 8 }"#).unwrap();
    let cache = SetAssociativeCache::new(&config).unwrap();
    assert_eq!(cache.name(), "l1d");
    assert_eq!(cache.size(), (8, 2));
    assert!(cache.is_clear());
}

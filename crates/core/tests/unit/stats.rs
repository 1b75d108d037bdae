//! Statistics Tests.

use nbcache_core::{AccessOutcome, AccessType, CacheStats, Statistics};
use pretty_assertions::assert_eq;

use crate::common::harness::small_cache;

fn stats(hits: u64, misses: u64, hits_on_reserved: u64, reservation_failures: u64) -> Statistics {
    Statistics {
        hits,
        misses,
        hits_on_reserved,
        reservation_failures,
    }
}

#[test]
fn record_bumps_the_matching_counter() {
    let mut s = Statistics::default();
    s.record(AccessOutcome::Hit);
    s.record(AccessOutcome::Hit);
    s.record(AccessOutcome::Miss);
    s.record(AccessOutcome::HitOnReserved);
    s.record(AccessOutcome::ReservationFailed);
    assert_eq!(s, stats(2, 1, 1, 1));
    assert_eq!(s.accesses(), 5);
}

/// Reservation failures are retried, so they do not dilute the hit rate.
#[test]
fn hit_rate_ignores_reservation_failures() {
    assert!((stats(3, 1, 0, 10).hit_rate() - 0.75).abs() < 1e-12);
    assert!((stats(1, 2, 1, 0).hit_rate() - 0.25).abs() < 1e-12);
}

#[test]
fn hit_rate_of_nothing_is_zero() {
    assert!(Statistics::default().hit_rate().abs() < f64::EPSILON);
    assert!(stats(0, 0, 0, 7).hit_rate().abs() < f64::EPSILON);
}

#[test]
fn total_sums_both_buckets() {
    let cache_stats = CacheStats {
        read: stats(1, 2, 3, 4),
        write: stats(10, 20, 30, 40),
    };
    assert_eq!(cache_stats.total(), stats(11, 22, 33, 44));
    assert_eq!(*cache_stats.get(AccessType::Write), stats(10, 20, 30, 40));
}

#[test]
fn report_lists_every_counter_per_type() {
    let mut cache = small_cache();
    let _ = cache.access(0x0, AccessType::Read, 0);
    let _ = cache.access(0x0, AccessType::Read, 0);
    let _ = cache.access(0x40, AccessType::Write, 0);

    let report = cache.stats().to_string();
    let read_at = report.find("[read]").unwrap();
    let write_at = report.find("[write]").unwrap();
    assert!(read_at < write_at);
    for label in ["num_hit", "num_miss", "num_hit_reserved", "num_res_fail", "hit_rate"] {
        let rows = report
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(label))
            .count();
        assert_eq!(rows, 2, "{label}");
    }
    assert!(report[..write_at].contains("num_hit_reserved     1"));
}

#[test]
fn exports_as_json_with_field_names() {
    let cache_stats = CacheStats {
        read: stats(1, 2, 3, 4),
        write: Statistics::default(),
    };
    let json = serde_json::to_value(cache_stats).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "read": { "hits": 1, "misses": 2, "hits_on_reserved": 3, "reservation_failures": 4 },
            "write": { "hits": 0, "misses": 0, "hits_on_reserved": 0, "reservation_failures": 0 },
        })
    );
    let back: CacheStats = serde_json::from_value(json).unwrap();
    assert_eq!(back, cache_stats);
}

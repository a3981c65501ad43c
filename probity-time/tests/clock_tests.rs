//! Clock override behaviour as seen from test code.

use chrono::{TimeZone, Utc};
use probity_assert::logically_equal;
use probity_core::TestCase;
use probity_time::{now, set_now_fn_for_testing, set_now_for_testing, Timestamp, MILLISECOND};

#[test]
fn test_set_now_fn() {
    let t = TestCase::new("now-fn");
    let some_time = Utc
        .with_ymd_and_hms(2009, 11, 17, 20, 34, 58)
        .single()
        .map(|ts| ts + chrono::Duration::nanoseconds(651_387_237))
        .unwrap();
    set_now_fn_for_testing(&t, move || some_time);
    assert_eq!(now(), some_time);
    assert_eq!(now(), some_time);
}

#[test]
fn test_set_now_value() {
    let t = TestCase::new("now-value");
    let frozen = set_now_for_testing(&t);
    assert_eq!(now(), frozen);
    assert_eq!(now(), frozen);
}

#[test]
fn test_now_without_override_tracks_wall_clock() {
    let before = Utc::now();
    let observed = now();
    let diff = (Utc::now() - before).to_std().unwrap_or_default();
    assert!(observed >= before);
    assert!(diff < 5 * MILLISECOND);
}

#[test]
fn test_override_removed_when_test_ends() {
    let pinned = Utc.timestamp_opt(0, 0).unwrap();
    {
        let t = TestCase::new("scoped");
        set_now_fn_for_testing(&t, move || pinned);
        assert_eq!(now(), pinned);
    }
    assert_ne!(now(), pinned);
}

#[test]
fn test_advancing_clock() {
    let t = TestCase::new("advancing");
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let ticks = std::cell::Cell::new(0i64);
    set_now_fn_for_testing(&t, move || {
        let n = ticks.get();
        ticks.set(n + 1);
        start + chrono::Duration::seconds(n)
    });
    assert_eq!(now(), start);
    assert_eq!(now(), start + chrono::Duration::seconds(1));
}

#[test]
fn test_clock_pinned_to_generated_timestamp() {
    let t = TestCase::new("generated");
    let generated: Timestamp = probity_rand::new_from_seed(&t, 1234);
    set_now_fn_for_testing(&t, move || generated);
    assert!(logically_equal(&t, &now(), &generated));
    assert_eq!(generated.timestamp_nanos_opt(), Some(6_739_209_190_713_855_597));
}

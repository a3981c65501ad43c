//! Filler behaviour against literal draw sequences and fixture shapes.

use probity_assert::logically_equal;
use probity_core::{active_config, set_active_config, ConfigError, Failure, TestCase};
use probity_rand::{fill_from_seed, new, new_from_seed, set_max_container_size, Filler};
use probity_test_utils::fixtures::{Account, Credentials, Ledger, Sample};
use probity_test_utils::generators::arb_seed;
use probity_test_utils::{d, recording};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::panic::{catch_unwind, AssertUnwindSafe};

// ============================================================================
// LITERAL DRAW SEQUENCES
// ============================================================================

#[test]
fn test_signed_integers_take_low_bits_of_one_draw() {
    let t = TestCase::new("signed");
    assert_eq!(new_from_seed::<i64>(&t, 1234), 6_739_209_190_713_855_597);
    assert_eq!(new_from_seed::<i8>(&t, 1234), 109);
    assert_eq!(new_from_seed::<i16>(&t, 1234), 3693);
    assert_eq!(new_from_seed::<i32>(&t, 1234), -1_752_428_947);
}

#[test]
fn test_unsigned_integers_take_low_bits_of_one_draw() {
    let t = TestCase::new("unsigned");
    assert_eq!(new_from_seed::<u64>(&t, 1234), 13_478_418_381_427_711_195);
    assert_eq!(new_from_seed::<u8>(&t, 1234), 219);
    assert_eq!(new_from_seed::<u16>(&t, 1234), 7387);
    assert_eq!(new_from_seed::<u32>(&t, 1234), 790_109_403);
}

#[test]
fn test_wide_integers_use_two_draws() {
    let t = TestCase::new("wide");
    assert_eq!(
        new_from_seed::<i128>(&t, 1234),
        124_316_467_200_289_759_155_707_582_488_142_439_716
    );
    assert_eq!(
        new_from_seed::<u128>(&t, 1234),
        248_632_934_400_579_518_318_925_021_575_293_986_084
    );
}

#[test]
fn test_bool() {
    let t = TestCase::new("bool");
    assert!(!new_from_seed::<bool>(&t, 1233));
    assert!(!new_from_seed::<bool>(&t, 1234));
}

#[test]
fn test_string_is_sixteen_hex_digits() {
    let t = TestCase::new("string");
    assert_eq!(new_from_seed::<String>(&t, 1222), "d729a3d075ecbc91");
}

#[test]
fn test_floats() {
    let t = TestCase::new("floats");
    assert_eq!(new_from_seed::<f64>(&t, 1135), 0.546_353_758_563_359_7);
    assert_eq!(new_from_seed::<f32>(&t, 1134), 0.395_407_617_092_132_57);
}

#[test]
fn test_complex_draws_real_then_imaginary() {
    let t = TestCase::new("complex");
    let c: probity_core::Complex64 = new_from_seed(&t, 50);
    assert_eq!(c.re, 0.730_590_985_173_717_3);
    assert_eq!(c.im, 0.577_810_229_611_623);
}

#[test]
fn test_arrays_keep_their_length() {
    let t = TestCase::new("arrays");
    assert_eq!(
        new_from_seed::<[i64; 4]>(&t, 1234),
        [
            6_739_209_190_713_855_597,
            5_468_443_737_350_222_482,
            1_864_346_700_640_948_973,
            2_824_074_695_851_659_289,
        ]
    );
    assert_eq!(new_from_seed::<[[u8; 2]; 2]>(&t, 1234), [[219, 36], [218, 51]]);
}

#[test]
fn test_record_private_fields_are_filled_in_order() {
    let t = TestCase::new("record");
    let creds: Credentials = new_from_seed(&t, 1235);
    assert_eq!(creds.user(), "f973b37b85701082");
    assert_eq!(creds.token(), "6e56d7ddb8ddbd93");
}

#[test]
fn test_optional_is_allocated_then_filled() {
    let t = TestCase::new("optional");
    assert_eq!(new_from_seed::<Option<i16>>(&t, 1234), Some(3693));

    let mut present = Some(0i16);
    fill_from_seed(&t, &mut present, 1234);
    assert_eq!(present, Some(3693));
}

#[test]
fn test_boxed_value_is_filled_through_pointer() {
    let t = TestCase::new("boxed");
    let boxed: Box<i8> = new_from_seed(&t, 1234);
    assert_eq!(*boxed, 109);
}

// ============================================================================
// CONTAINERS
// ============================================================================

#[test]
fn test_map_size_then_key_then_value() {
    let t = TestCase::new("map");
    set_max_container_size(&t, 7);
    let map: HashMap<i8, bool> = new_from_seed(&t, 2345);
    let expected: HashMap<i8, bool> = [
        (76, true),
        (-95, true),
        (-87, false),
        (83, true),
        (64, true),
        (125, true),
        (10, true),
    ]
    .into_iter()
    .collect();
    assert_eq!(map, expected);
}

#[test]
fn test_fresh_sequence_length_is_drawn_first() {
    let t = TestCase::new("sequence");
    set_max_container_size(&t, 5);
    assert_eq!(new_from_seed::<Vec<u8>>(&t, 77), vec![84, 236, 187]);
}

#[test]
fn test_existing_elements_are_refilled_in_place() {
    let t = TestCase::new("existing");
    let mut values = vec![0i32; 3];
    fill_from_seed(&t, &mut values, 5);
    assert_eq!(values, vec![1_371_857_325, -909_403_268, 137_748_643]);
}

#[test]
fn test_reserved_capacity_sets_length() {
    let t = TestCase::new("capacity");
    let mut values: Vec<String> = Vec::with_capacity(2);
    fill_from_seed(&t, &mut values, 31);
    assert_eq!(values, vec!["d7599677879feaea", "bcd4dd2543bf3fd8"]);
}

#[test]
fn test_zero_sized_elements_draw_a_bounded_length() {
    let t = TestCase::new("zero-sized");
    set_max_container_size(&t, 6);
    for seed in [1, 2, 77, 1234] {
        let units: Vec<()> = new_from_seed(&t, seed);
        assert!((1..=6).contains(&units.len()), "seed {}: {}", seed, units.len());
    }

    let mut reserved: Vec<()> = Vec::with_capacity(100);
    fill_from_seed(&t, &mut reserved, 5);
    assert!((1..=6).contains(&reserved.len()));
}

#[test]
fn test_existing_map_keys_are_kept_and_values_redrawn_in_key_order() {
    let t = TestCase::new("existing-map");

    let mut tree = BTreeMap::from([(3u8, 0u16), (1u8, 0u16)]);
    fill_from_seed(&t, &mut tree, 9);
    assert_eq!(tree, BTreeMap::from([(1, 24_676), (3, 60_002)]));

    let mut hashed = HashMap::from([(3u8, 0u16), (1u8, 0u16)]);
    fill_from_seed(&t, &mut hashed, 9);
    assert_eq!(hashed, HashMap::from([(1, 24_676), (3, 60_002)]));
}

#[test]
fn test_zero_max_generates_empty_containers() {
    let t = TestCase::new("zero");
    set_max_container_size(&t, 0);
    let ledger: Ledger = new_from_seed(&t, 3);
    assert!(ledger.accounts.is_empty());
    assert!(ledger.totals().is_empty());
    assert_eq!(ledger.name.len(), 16);
}

#[test]
fn test_existing_ledger_keeps_shape() {
    let t = TestCase::new("ledger");
    let mut ledger = probity_test_utils::fixtures::small_ledger();
    fill_from_seed(&t, &mut ledger, 42);

    assert_eq!(ledger.accounts.len(), 3);
    let mut owners: Vec<&String> = ledger.totals().keys().collect();
    owners.sort();
    assert_eq!(owners, vec!["alice", "bob"]);
    for account in &ledger.accounts {
        assert_eq!(account.owner().len(), 16);
        assert!(account.overdraft().is_some());
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_negative_max_container_size_is_fatal() {
    let t = recording();
    let result = catch_unwind(AssertUnwindSafe(|| set_max_container_size(&t, -1)));
    assert!(result.is_err());
    assert_eq!(
        t.failures(),
        vec![Failure::Config(ConfigError::NegativeContainerSize {
            value: -1
        })]
    );
}

#[test]
fn test_max_container_size_is_restored_by_cleanup() {
    let before = active_config().map(|c| c.max_container_size).ok();
    {
        let t = TestCase::new("scoped");
        set_max_container_size(&t, 2);
        assert_eq!(active_config().map(|c| c.max_container_size).ok(), Some(2));
    }
    assert_eq!(active_config().map(|c| c.max_container_size).ok(), before);
}

#[test]
fn test_unseeded_fill_uses_configured_seed() {
    let t = TestCase::new("pinned");
    let pinned = active_config()
        .unwrap_or_default()
        .with_seed(1234);
    let previous = set_active_config(Some(pinned));
    let value: i64 = new(&t);
    set_active_config(previous);
    assert_eq!(value, 6_739_209_190_713_855_597);
}

#[test]
fn test_unseeded_fill_populates() {
    probity_core::init_test_logging();
    let t = TestCase::new("unseeded");
    let account: Account = new(&t);
    assert_eq!(account.id.len(), 16);
    assert_eq!(account.owner().len(), 16);
    assert!(account.overdraft().is_some());
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_same_seed_same_ledger(seed in arb_seed()) {
        let t = TestCase::new("determinism");
        let a: Ledger = new_from_seed(&t, seed);
        let b: Ledger = new_from_seed(&t, seed);
        prop_assert!(logically_equal(&t, &a, &b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_same_seed_same_sample(seed in arb_seed()) {
        let t = TestCase::new("determinism");
        let a: Sample = new_from_seed(&t, seed);
        let b: Sample = new_from_seed(&t, seed);
        prop_assert_eq!(&a, &b);
        prop_assert!((0.0..1.0).contains(&a.value));
        prop_assert!((0.0..1.0).contains(&a.phase.re));
    }

    #[test]
    fn prop_fresh_containers_respect_bound(seed in arb_seed(), max in 1i64..12) {
        let t = TestCase::new("bound");
        set_max_container_size(&t, max);
        let values: Vec<u32> = new_from_seed(&t, seed);
        let map: HashMap<String, u8> = new_from_seed(&t, seed);
        prop_assert!((1..=max as usize).contains(&values.len()));
        prop_assert!((1..=max as usize).contains(&map.len()));
    }

    #[test]
    fn prop_reused_filler_matches_fresh_first_value(seed in arb_seed()) {
        let mut filler = Filler::from_seed(seed);
        let first: Account = filler.generate();
        let t = TestCase::new("fresh");
        let fresh: Account = new_from_seed(&t, seed);
        prop_assert_eq!(first, fresh);
    }

    #[test]
    fn prop_generated_balances_are_non_negative(seed in arb_seed()) {
        let t = TestCase::new("balances");
        let account: Account = new_from_seed(&t, seed);
        prop_assert!(account.balance() >= d(0.0));
    }
}

// tests/unit/test_vesting.rs
// ============================================================================
// VESTING MODULE UNIT TESTS
// ============================================================================

use proptest::prelude::*;
use unlockfi::{unlocked_fraction, VestingKind, VestingTerms};

fn terms(cliff: u32, duration: u32, linear: bool) -> VestingTerms {
    if linear {
        VestingTerms::linear(cliff, duration)
    } else {
        VestingTerms {
            cliff_months: cliff,
            duration_months: duration,
            kind: VestingKind::Cliff,
        }
    }
}

#[test]
fn test_linear_reference_points() {
    let t = VestingTerms::linear(6, 30);

    assert_eq!(unlocked_fraction(&t, 6.0), 0.0);
    assert_eq!(unlocked_fraction(&t, 30.0), 1.0);
    assert!((unlocked_fraction(&t, 18.0) - 0.5).abs() < 1e-12);
    assert_eq!(unlocked_fraction(&t, 120.0), 1.0);
}

#[test]
fn test_cliff_is_a_step() {
    let t = VestingTerms::cliff(9);

    assert_eq!(unlocked_fraction(&t, 9.0 - 1e-6), 0.0);
    assert_eq!(unlocked_fraction(&t, 9.0), 1.0);
    assert_eq!(unlocked_fraction(&t, 40.0), 1.0);
}

#[test]
fn test_duration_equal_to_cliff() {
    // one-month ramp right after the cliff
    let t = VestingTerms::linear(12, 12);

    assert_eq!(unlocked_fraction(&t, 12.0), 0.0);
    assert!((unlocked_fraction(&t, 12.5) - 0.5).abs() < 1e-12);
    assert_eq!(unlocked_fraction(&t, 13.0), 1.0);
    assert_eq!(t.completion_month(), 13);
}

#[test]
fn test_unlocked_amount_rounds() {
    let t = VestingTerms::linear(0, 3);

    assert_eq!(t.unlocked_amount(100, 1.0), 33);
    assert_eq!(t.unlocked_amount(100, 2.0), 67);
    assert_eq!(t.unlocked_amount(100, 3.0), 100);
}

#[test]
fn test_invalid_elapsed_time_unlocks_nothing() {
    let t = VestingTerms::cliff(0);

    assert_eq!(unlocked_fraction(&t, -1.0), 0.0);
    assert_eq!(unlocked_fraction(&t, f64::NAN), 0.0);
}

proptest! {
    #[test]
    fn prop_fraction_is_monotonic(
        cliff in 0u32..60,
        duration in 0u32..120,
        linear in any::<bool>(),
        t1 in 0.0f64..200.0,
        dt in 0.0f64..50.0,
    ) {
        let v = terms(cliff, duration, linear);
        prop_assert!(unlocked_fraction(&v, t1) <= unlocked_fraction(&v, t1 + dt));
    }

    #[test]
    fn prop_fraction_is_bounded(
        cliff in 0u32..60,
        duration in 0u32..120,
        linear in any::<bool>(),
        t in -10.0f64..500.0,
    ) {
        let f = unlocked_fraction(&terms(cliff, duration, linear), t);
        prop_assert!((0.0..=1.0).contains(&f));
    }

    #[test]
    fn prop_fully_unlocked_at_completion(
        cliff in 0u32..60,
        duration in 0u32..120,
        linear in any::<bool>(),
    ) {
        let v = terms(cliff, duration, linear);
        prop_assert_eq!(unlocked_fraction(&v, f64::from(v.completion_month())), 1.0);
    }
}

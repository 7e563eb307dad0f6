use strata_program::components::{mul_div_down, mul_div_up};
use strata_program::utils::StrataError;

// --- rounding direction ---

#[test]
fn down_floors_the_quotient() {
    // 7 * 3 / 2 = 10.5 → 10
    assert_eq!(mul_div_down(7, 3, 2).unwrap(), 10);
}

#[test]
fn up_ceils_the_quotient() {
    // 7 * 3 / 2 = 10.5 → 11
    assert_eq!(mul_div_up(7, 3, 2).unwrap(), 11);
}

#[test]
fn exact_quotient_identical_both_ways() {
    // 6 * 4 / 8 = 3 exactly
    assert_eq!(mul_div_down(6, 4, 8).unwrap(), 3);
    assert_eq!(mul_div_up(6, 4, 8).unwrap(), 3);
}

#[test]
fn up_exceeds_down_by_at_most_one() {
    for (a, b, c) in [(1u64, 1u64, 3u64), (999, 1_000, 7), (123_456_789, 987_654_321, 1_000_000)] {
        let down = mul_div_down(a, b, c).unwrap();
        let up = mul_div_up(a, b, c).unwrap();
        assert!(up == down || up == down + 1);
    }
}

// --- widening ---

#[test]
fn intermediate_wider_than_u64() {
    // u64::MAX * 2 overflows u64 but the halved result fits
    assert_eq!(mul_div_down(u64::MAX, 2, 4).unwrap(), u64::MAX / 2);
}

#[test]
fn full_scale_identity() {
    // a * P / P = a at the 10^9 scale
    assert_eq!(
        mul_div_down(u64::MAX, 1_000_000_000, 1_000_000_000).unwrap(),
        u64::MAX
    );
}

// --- failure cases ---

#[test]
fn result_above_u64_overflows() {
    assert!(matches!(
        mul_div_down(u64::MAX, 2, 1),
        Err(StrataError::MathOverflow)
    ));
}

#[test]
fn up_result_above_u64_overflows() {
    assert!(matches!(
        mul_div_up(u64::MAX, 3, 2),
        Err(StrataError::MathOverflow)
    ));
}

#[test]
fn zero_divisor_rejected() {
    assert!(matches!(
        mul_div_down(1, 1, 0),
        Err(StrataError::DivisionByZero)
    ));
    assert!(matches!(mul_div_up(1, 1, 0), Err(StrataError::DivisionByZero)));
}

#[test]
fn zero_factor_gives_zero() {
    assert_eq!(mul_div_down(0, u64::MAX, 3).unwrap(), 0);
    assert_eq!(mul_div_up(0, u64::MAX, 3).unwrap(), 0);
}

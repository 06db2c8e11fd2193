//! Decimal rounding.
//!
//! Payoffs and chart coordinates are published with two decimals. Rounding
//! acts on the exact binary value and breaks exact ties to even, so
//! `round2(1.125)` is `1.12` and `round2(1.13 * 9.5)` is `10.73` (the product
//! lies just below `10.735`).

/// Rounds `value` to `decimals` decimal places.
///
/// # Examples
///
/// ```
/// use stimulus_core::math::round_to;
///
/// assert_eq!(round_to(4.7749, 2), 4.77);
/// assert_eq!(round_to(-10.0 * 0.25, 2), -2.5);
/// assert_eq!(round_to(0.125, 2), 0.12);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Float formatting rounds the exact value, ties to even.
    let rounded = format!("{:.*}", decimals as usize, value)
        .parse::<f64>()
        .unwrap_or(value);
    // Avoid publishing "-0.00".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounds `value` to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round2_basic() {
        assert_eq!(round2(1.1925), 1.19);
        assert_eq!(round2(2.0 * 4.79), 9.58);
        assert_eq!(round2(20.0 * 0.25), 5.0);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        assert_eq!(round2(4.5 * 0.25), 1.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-1.125), -1.12);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn test_near_ties_follow_binary_value() {
        // 1.13 is stored just below 1.13, so the product is below 10.735.
        assert_eq!(round2(1.13 * 9.5), 10.73);
        assert_eq!(round2(1.06 * 9.5), 10.07);
    }

    #[test]
    fn test_negative_zero_normalised() {
        let r = round2(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_round2_idempotent(x in -1.0e6f64..1.0e6) {
            let once = round2(x);
            prop_assert_eq!(round2(once), once);
        }

        #[test]
        fn prop_round2_within_half_cent(x in -1.0e6f64..1.0e6) {
            prop_assert!((round2(x) - x).abs() <= 0.005 + 1e-9);
        }
    }
}

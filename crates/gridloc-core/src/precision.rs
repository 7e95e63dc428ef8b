//! Decimal precision derived from a lattice step.
//!
//! Every coordinate that enters a grid is rounded to the precision of the
//! grid's step, so that lattice points produced by different arithmetic
//! paths (`0.1 + 0.2` versus `0.3`) hash and compare as the same point.

/// Largest precision that still changes an `f64` when rounding.
///
/// Beyond 17 significant decimal digits rounding is the identity, and the
/// scale factor would start to overflow for absurd inputs.
const MAX_PRECISION: u32 = 17;

/// Number of digits after the decimal point in the shortest round-trip
/// representation of `step`.
///
/// An integral step yields `0`. Zero, negative, and non-finite steps are
/// outside the contract; the result for them is unspecified but this
/// function never panics.
///
/// # Examples
///
/// ```
/// use gridloc_core::precision_of;
///
/// assert_eq!(precision_of(0.1), 1);
/// assert_eq!(precision_of(0.01), 2);
/// assert_eq!(precision_of(0.25), 2);
/// assert_eq!(precision_of(1.0), 0);
/// ```
pub fn precision_of(step: f64) -> u32 {
    let repr = step.to_string();
    match repr.split_once('.') {
        Some((_, fraction)) => fraction.len() as u32,
        None => 0,
    }
}

/// 2^50. Below it, scaling a rounded value back up lands within a quarter
/// of the original integer, so a second rounding cannot move it.
const EXACT_SCALED_LIMIT: f64 = 1_125_899_906_842_624.0;

/// Round `value` to `precision` decimal places, half away from zero.
///
/// `-0.0` is normalised to `0.0` so that the result hashes consistently.
/// When `value * 10^precision` reaches 2^50 the value is returned
/// unchanged: `f64` has no spare digits left at that scale, and this keeps
/// rounding idempotent for high precisions.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() || precision > MAX_PRECISION {
        return normalise_zero(value);
    }
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if scaled.abs() >= EXACT_SCALED_LIMIT {
        return normalise_zero(value);
    }
    normalise_zero(scaled.round() / scale)
}

fn normalise_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Render a float with at least one fractional digit (`1.0`, `2.5`).
///
/// This is the textual form used for every coordinate written to disk.
pub fn format_float(value: f64) -> String {
    let repr = value.to_string();
    if !value.is_finite() || repr.contains('.') {
        repr
    } else {
        format!("{repr}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── precision_of ────────────────────────────────────────────

    #[test]
    fn precision_of_decimal_steps() {
        assert_eq!(precision_of(0.1), 1);
        assert_eq!(precision_of(0.2), 1);
        assert_eq!(precision_of(0.01), 2);
        assert_eq!(precision_of(0.05), 2);
        assert_eq!(precision_of(0.001), 3);
    }

    #[test]
    fn precision_of_integral_step_is_zero() {
        assert_eq!(precision_of(1.0), 0);
        assert_eq!(precision_of(5.0), 0);
    }

    #[test]
    fn precision_of_tiny_step_has_no_exponent_form() {
        assert_eq!(precision_of(1e-7), 7);
    }

    #[test]
    fn precision_of_out_of_contract_does_not_panic() {
        let _ = precision_of(f64::NAN);
        let _ = precision_of(f64::INFINITY);
        let _ = precision_of(0.0);
        assert_eq!(precision_of(-0.5), 1);
    }

    // ── round_to ────────────────────────────────────────────────

    #[test]
    fn round_to_removes_accumulation_noise() {
        assert_eq!(round_to(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to(1.0000000000000002, 0), 1.0);
        assert_eq!(round_to(-41.29999999999, 1), -41.3);
    }

    #[test]
    fn round_to_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn round_to_normalises_negative_zero() {
        let r = round_to(-0.04, 1);
        assert_eq!(r.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn round_to_high_precision_is_identity_past_exact_range() {
        let noisy = 0.1 + 0.2;
        for p in 15..=17 {
            let once = round_to(noisy, p);
            assert_eq!(round_to(once, p).to_bits(), once.to_bits());
        }
        assert_eq!(round_to(174.7, 17).to_bits(), 174.7f64.to_bits());
    }

    #[test]
    fn round_to_passes_through_non_finite() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    // ── format_float ────────────────────────────────────────────

    #[test]
    fn format_float_always_has_fraction() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-48.0), "-48.0");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(174.7), "174.7");
    }

    proptest! {
        #[test]
        fn round_to_is_idempotent(v in -180.0f64..180.0, p in 0u32..=MAX_PRECISION) {
            let once = round_to(v, p);
            prop_assert_eq!(round_to(once, p).to_bits(), once.to_bits());
        }

        #[test]
        fn format_float_round_trips(v in -180.0f64..180.0) {
            let parsed: f64 = format_float(v).parse().unwrap();
            prop_assert_eq!(parsed.to_bits(), v.to_bits());
        }
    }
}

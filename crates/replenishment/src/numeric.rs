//! Shared numeric helpers for quantities and rates.

/// Tolerance subtracted before rounding a quantity *up*.
///
/// Floating-point arithmetic leaves residue such as `0.1 + 0.2 =
/// 0.30000000000000004`; scaled by 100 that is a hair above `30` and a bare
/// `ceil` would report `0.31`. Anything closer than this to the next lower
/// step is treated as sitting exactly on it.
///
/// Measured in quantity units, before scaling: the residue grows with the
/// magnitude of the scaled value, so a fixed margin applied after scaling
/// stops covering it for quantities in the tens of thousands.
pub const ROUNDING_TOLERANCE: f64 = 1e-9;

/// `true` for finite values strictly greater than zero.
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round up to `decimals` places, absorbing float residue within
/// [`ROUNDING_TOLERANCE`] of the lower step.
pub fn ceil_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    ((value - ROUNDING_TOLERANCE) * factor).ceil() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positivity_rejects_zero_negative_and_non_finite() {
        assert!(is_positive_finite(0.01));
        assert!(!is_positive_finite(0.0));
        assert!(!is_positive_finite(-1.0));
        assert!(!is_positive_finite(f64::NAN));
        assert!(!is_positive_finite(f64::INFINITY));
    }

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(7.0, 2), 7.0);
        assert_eq!(round_to(0.1 + 0.2, 2), 0.3);
        assert_eq!(round_to(2.345_6, 2), 2.35);
        assert_eq!(round_to(2.4, 1), 2.4);
    }

    #[test]
    fn ceil_to_does_not_overshoot_exact_boundaries() {
        let raw = 0.1 + 0.2;
        assert!(raw * 100.0 > 30.0, "residue expected for this input");
        assert_eq!(ceil_to(raw, 2), 0.3);
        assert_eq!(ceil_to(10.5 - 1.2, 2), 9.3);
        assert_eq!(ceil_to(9.301, 2), 9.31);
        assert_eq!(ceil_to(2.0, 2), 2.0);
    }

    #[test]
    fn ceil_to_holds_exact_boundaries_for_large_quantities() {
        // 95803.3 / 30 * 21 + 14152.6 is exactly 81214.91.
        let raw = 95_803.3 / 30.0 * 21.0 + 14_152.6;
        assert_eq!(ceil_to(raw, 2), 81_214.91);
        assert_eq!(ceil_to(81_214.911, 2), 81_214.92);
        assert_eq!(ceil_to(1_234_567.89, 2), 1_234_567.89);
    }

    #[test]
    fn tolerance_is_far_below_one_hundredth() {
        // One cent of a unit must always win over the tolerance.
        assert_eq!(ceil_to(0.001, 2), 0.01);
        assert!(ROUNDING_TOLERANCE < 1e-6);
    }
}

use super::{BrightnessSpec, ClampMode, Error, LEGACY_UPPER_BOUND, Result, Sign};

/// Computes the brightness to write back to the device
/// using the legacy clamp.
///
/// See [`compute_with`].
pub fn compute(spec: BrightnessSpec, current: i32, max: i32) -> Result<i32> {
    compute_with(spec, current, max, ClampMode::Legacy)
}

/// Computes the brightness to write back to the device.
///
/// Percentages are relative to `max` and rounded half away from zero.
/// The result never drops below zero.
/// What happens at the top end depends on `clamp`.
///
/// Fails if `max` is not a positive value.
pub fn compute_with(
    spec: BrightnessSpec,
    current: i32,
    max: i32,
    clamp: ClampMode,
) -> Result<i32> {
    if max <= 0 {
        return Err(Error::Compute { current, max });
    }

    // wide enough for any `u64` magnitude, including percentages of `i32::MAX`
    let delta = if spec.is_percentage {
        (spec.magnitude as f64 / 100.0 * f64::from(max)).round() as i128
    } else {
        i128::from(spec.magnitude)
    };

    let current = i128::from(current);
    let value = match spec.sign {
        Sign::Increment => current + delta,
        Sign::Decrement => current - delta,
        Sign::Absolute => delta,
    };

    let upper_bound = match clamp {
        ClampMode::Legacy => LEGACY_UPPER_BOUND,
        ClampMode::Device => i64::from(max),
    };

    let value = if value < 0 {
        0
    } else if value > i128::from(upper_bound) {
        i128::from(max)
    } else {
        value
    };

    // either within 0..=255 or equal to max
    Ok(i32::try_from(value).unwrap_or(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn spec(sign: Sign, magnitude: u64, is_percentage: bool) -> BrightnessSpec {
        BrightnessSpec::new(sign, magnitude, is_percentage)
    }

    #[test]
    fn absolute() {
        let spec = spec(Sign::Absolute, 50, false);
        assert_eq!(compute(spec, 10, 100), Ok(50));
    }

    #[test]
    fn increment() {
        let spec = spec(Sign::Increment, 1, false);
        assert_eq!(compute(spec, 2, 3), Ok(3));
    }

    #[test]
    fn decrement() {
        let spec = spec(Sign::Decrement, 1, false);
        assert_eq!(compute(spec, 2, 3), Ok(1));
    }

    #[test]
    fn increment_percentage() {
        let spec = spec(Sign::Increment, 10, true);
        assert_eq!(compute(spec, 20, 200), Ok(40));
    }

    #[test]
    fn decrement_percentage() {
        let spec = spec(Sign::Decrement, 25, true);
        assert_eq!(compute(spec, 100, 200), Ok(50));
    }

    #[test]
    fn absolute_percentage() {
        assert_eq!(compute(spec(Sign::Absolute, 50, true), 0, 3), Ok(2));
        assert_eq!(compute(spec(Sign::Absolute, 100, true), 0, 3), Ok(3));
        assert_eq!(compute(spec(Sign::Absolute, 0, true), 2, 3), Ok(0));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 1% of 250 is exactly 2.5
        assert_eq!(compute(spec(Sign::Absolute, 1, true), 0, 250), Ok(3));
        assert_eq!(compute(spec(Sign::Increment, 1, true), 10, 250), Ok(13));
        assert_eq!(compute(spec(Sign::Decrement, 1, true), 10, 250), Ok(7));
    }

    #[test]
    fn clamps_to_zero() {
        assert_eq!(compute(spec(Sign::Decrement, 1000, false), 5, 100), Ok(0));
        assert_eq!(compute(spec(Sign::Decrement, 200, true), 5, 100), Ok(0));
    }

    #[test]
    fn legacy_clamps_above_255_to_max() {
        assert_eq!(compute(spec(Sign::Absolute, 300, false), 0, 120), Ok(120));
        assert_eq!(compute(spec(Sign::Increment, 250, false), 10, 3), Ok(3));
        assert_eq!(compute(spec(Sign::Absolute, 256, false), 0, 1000), Ok(1000));
    }

    #[test]
    fn legacy_passes_values_between_max_and_255() {
        assert_eq!(compute(spec(Sign::Absolute, 200, false), 0, 100), Ok(200));
        assert_eq!(compute(spec(Sign::Absolute, 255, false), 0, 3), Ok(255));
    }

    #[test]
    fn device_clamps_to_max() {
        let clamp = ClampMode::Device;

        let spec_200 = spec(Sign::Absolute, 200, false);
        assert_eq!(compute_with(spec_200, 0, 100, clamp), Ok(100));

        let spec_inc = spec(Sign::Increment, 1, false);
        assert_eq!(compute_with(spec_inc, 3, 3, clamp), Ok(3));

        let spec_400 = spec(Sign::Absolute, 400, false);
        assert_eq!(compute_with(spec_400, 0, 1000, clamp), Ok(400));

        let spec_dec = spec(Sign::Decrement, 10, false);
        assert_eq!(compute_with(spec_dec, 3, 3, clamp), Ok(0));
    }

    #[test]
    fn magnitudes_beyond_32_bits() {
        let absolute = "5000000000".parse().unwrap();
        assert_eq!(compute(absolute, 0, 100), Ok(100));

        let percentage = "+5000000000%".parse().unwrap();
        assert_eq!(compute(percentage, 10, 100), Ok(100));

        let decrement = "-5000000000".parse().unwrap();
        assert_eq!(compute(decrement, 10, 100), Ok(0));
    }

    #[test]
    fn huge_magnitudes_do_not_overflow() {
        let max = i32::MAX;

        let increment = spec(Sign::Increment, u64::MAX, false);
        assert_eq!(compute(increment, max, max), Ok(max));

        let increment = spec(Sign::Increment, u64::MAX, true);
        assert_eq!(compute(increment, max, max), Ok(max));

        let decrement = spec(Sign::Decrement, u64::MAX, true);
        assert_eq!(compute(decrement, 0, max), Ok(0));
    }

    #[test]
    fn invalid_maximum() {
        let zero = Error::Compute { current: 0, max: 0 };
        assert_eq!(compute(spec(Sign::Absolute, 1, false), 0, 0), Err(zero));

        let negative = Error::Compute {
            current: 2,
            max: -1,
        };
        let spec = spec(Sign::Increment, 1, false);
        assert_eq!(compute(spec, 2, -1), Err(negative));
    }
}

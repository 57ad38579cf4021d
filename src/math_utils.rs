/// Small numeric helpers shared by the simulation tests.

/// Assert that the deviation between two values is less than a threshold
///
/// Calculates the percentage deviation between `actual` and `expected`,
/// then asserts that it is less than `max_deviation`.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {{
        let actual_val = $actual;
        let expected_val = $expected;
        let max_dev = $max_deviation;
        let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

        if actual_deviation >= max_dev {
            panic!(
                "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                actual_deviation, max_dev, actual_val, expected_val
            );
        }
    }};
}

/// Calculate the percentage deviation between two values
///
/// Returns the percentage difference of `actual` from `expected`, using
/// the expected value as the reference for the percentage calculation.
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        // Avoid division by zero - if expected is 0, return 0 if actual is also 0
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deviation() {
        assert_eq!(deviation(105.0, 100.0), 5.0);
        assert_eq!(deviation(95.0, 100.0), 5.0);
        assert_eq!(deviation(100.0, 100.0), 0.0);

        // Edge cases
        assert_eq!(deviation(0.0, 0.0), 0.0);
        assert_eq!(deviation(10.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_assert_deviation_macro() {
        assert_deviation!(105.0, 100.0, 10.0); // 5% < 10%
        assert_deviation!(95.0, 100.0, 10.0); // 5% < 10%
        assert_deviation!(100.0, 100.0, 1.0); // 0% < 1%
    }

    #[test]
    #[should_panic(expected = "assertion failed: deviation")]
    fn test_assert_deviation_macro_fails() {
        assert_deviation!(120.0, 100.0, 10.0); // 20% >= 10%
    }
}

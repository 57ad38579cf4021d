//! Utilities for converting between temperature, relative humidity
//! and absolute water-vapor density.
//!
//! All functions here are pure and total over their real-valued domains;
//! callers are expected to supply physically sensible temperatures
//! (typical atmospheric range), no domain check is performed.

use crate::constants::{
    MAGNUS_COEFF_A, MAGNUS_COEFF_B_C, MAGNUS_PRESSURE_HPA, TO_KELVIN, VAPOR_PRESSURE_TO_DENSITY,
};

/// Saturation vapor pressure in hPa for a temperature in °C
/// (Magnus approximation).
pub fn saturation_vapor_pressure_hpa(temperature_c: f64) -> f64 {
    MAGNUS_PRESSURE_HPA
        * ((MAGNUS_COEFF_A * temperature_c) / (MAGNUS_COEFF_B_C + temperature_c)).exp()
}

/// Water-vapor density at 100% relative humidity in g/m³.
///
/// # Arguments
/// - `temperature_c`: Air temperature in °C
///
/// # Returns
/// Maximum vapor density the air can hold before condensation occurs
pub fn saturation_vapor_density(temperature_c: f64) -> f64 {
    let e_s = saturation_vapor_pressure_hpa(temperature_c); // hPa
    let t_k = temperature_c + TO_KELVIN; // Kelvin
    VAPOR_PRESSURE_TO_DENSITY * e_s / t_k
}

/// Absolute vapor density in g/m³ from relative humidity (%) and
/// temperature (°C).
pub fn absolute_vapor_density(relative_humidity_pct: f64, temperature_c: f64) -> f64 {
    (relative_humidity_pct / 100.0) * saturation_vapor_density(temperature_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use more_asserts::assert_gt;

    #[test]
    fn test_saturation_pressure_reference_points() {
        // Magnus at 0 °C is the leading coefficient itself
        assert_abs_diff_eq!(saturation_vapor_pressure_hpa(0.0), 6.112, epsilon = 1e-9);
        // ~23.3 hPa at room temperature
        assert_abs_diff_eq!(saturation_vapor_pressure_hpa(20.0), 23.33, epsilon = 0.05);
    }

    #[test]
    fn test_saturation_density_reference_points() {
        // 4.85 g/m³ at freezing, 17.24 g/m³ at 20 °C
        assert_abs_diff_eq!(saturation_vapor_density(0.0), 4.85, epsilon = 0.01);
        assert_abs_diff_eq!(saturation_vapor_density(20.0), 17.24, epsilon = 0.01);
    }

    #[test]
    fn test_saturation_density_positive_and_monotonic() {
        let mut previous = 0.0;
        for t in -10..=40 {
            let rho = saturation_vapor_density(t as f64);
            assert_gt!(rho, 0.0, "density must be positive at {}°C", t);
            assert_gt!(rho, previous, "density must increase with temperature");
            previous = rho;
        }
    }

    #[test]
    fn test_absolute_density_scales_with_humidity() {
        let t = 20.0;
        let sat = saturation_vapor_density(t);

        assert_abs_diff_eq!(absolute_vapor_density(0.0, t), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(absolute_vapor_density(50.0, t), sat * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(absolute_vapor_density(100.0, t), sat, epsilon = 1e-12);
    }
}

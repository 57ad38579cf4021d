use serde::{Deserialize, Serialize};

/// One recorded (time, density) point of the simulated trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time_min: f64,
    pub vapor_density_g_per_m3: f64,
}

/// Outcome of a completed simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One sample per step, including the initial sample at t = 0.
    pub time_series: Vec<Sample>,
    /// Present iff the target density was reached within the horizon.
    /// Target-not-reached is a valid outcome, not an error.
    pub time_to_target_min: Option<f64>,
    pub final_injected_mass_g: f64,
    pub final_condensed_mass_g: f64,
    pub saturation_density_g_per_m3: f64,
}

impl SimulationResult {
    pub fn target_reached(&self) -> bool {
        self.time_to_target_min.is_some()
    }

    /// Converts a recorded density to relative humidity in percent.
    pub fn relative_humidity_pct(&self, vapor_density_g_per_m3: f64) -> f64 {
        if self.saturation_density_g_per_m3 > 0.0 {
            vapor_density_g_per_m3 / self.saturation_density_g_per_m3 * 100.0
        } else {
            0.0
        }
    }

    /// The trajectory as (time [min], relative humidity [%]) pairs, the
    /// form the presentation layer charts against the target line.
    pub fn relative_humidity_series(&self) -> Vec<(f64, f64)> {
        self.time_series
            .iter()
            .map(|sample| {
                (
                    sample.time_min,
                    self.relative_humidity_pct(sample.vapor_density_g_per_m3),
                )
            })
            .collect()
    }

    pub fn final_relative_humidity_pct(&self) -> f64 {
        self.time_series
            .last()
            .map(|sample| self.relative_humidity_pct(sample.vapor_density_g_per_m3))
            .unwrap_or(0.0)
    }

    /// Last simulated time; may be slightly less than the configured
    /// horizon when the step division is inexact.
    pub fn final_time_min(&self) -> f64 {
        self.time_series
            .last()
            .map(|sample| sample.time_min)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_result() -> SimulationResult {
        SimulationResult {
            time_series: vec![
                Sample {
                    time_min: 0.0,
                    vapor_density_g_per_m3: 0.0,
                },
                Sample {
                    time_min: 0.5,
                    vapor_density_g_per_m3: 8.62,
                },
                Sample {
                    time_min: 1.0,
                    vapor_density_g_per_m3: 17.24,
                },
            ],
            time_to_target_min: Some(1.0),
            final_injected_mass_g: 3.3,
            final_condensed_mass_g: 0.4,
            saturation_density_g_per_m3: 17.24,
        }
    }

    #[test]
    fn test_relative_humidity_series() {
        let result = sample_result();
        let series = result.relative_humidity_series();

        assert_eq!(series.len(), 3);
        assert_abs_diff_eq!(series[0].1, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(series[1].1, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(series[2].1, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_final_accessors() {
        let result = sample_result();
        assert!(result.target_reached());
        assert_abs_diff_eq!(result.final_time_min(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.final_relative_humidity_pct(), 100.0, epsilon = 1e-9);
    }
}

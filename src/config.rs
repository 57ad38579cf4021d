use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_AIR_CHANGES_PER_HOUR, DEFAULT_CONDENSATION_COEFFICIENT, DEFAULT_EXTERIOR_RH_PCT,
    DEFAULT_INITIAL_RH_PCT, DEFAULT_INJECTION_RATE_G_PER_MIN, DEFAULT_MAX_SIMULATION_TIME_MIN,
    DEFAULT_TARGET_RH_PCT, DEFAULT_TEMPERATURE_C, DEFAULT_TIME_STEP_MIN, DEFAULT_VOLUME_M3,
};

/// How condensation removes vapor mass from the enclosure air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CondensationMode {
    /// Constant-rate sink in g/min that cannot drive the vapor mass negative.
    Fixed,
    /// Sink proportional to the excess of the current density over saturation;
    /// zero while the enclosure is below the saturation ceiling.
    Proportional,
}

/// Rejected configuration, surfaced before any stepping occurs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("enclosure volume must be positive, got {0} m³")]
    NonPositiveVolume(f64),
    #[error("time step must be positive, got {0} min")]
    NonPositiveTimeStep(f64),
    #[error("maximum simulation time must be positive, got {0} min")]
    NonPositiveMaxTime(f64),
    #[error("injection rate must be non-negative, got {0} g/min")]
    NegativeInjectionRate(f64),
    #[error("air changes per hour must be non-negative, got {0}")]
    NegativeAirChanges(f64),
    #[error("condensation coefficient must be non-negative, got {0}")]
    NegativeCondensationCoefficient(f64),
    #[error("{field} must be within [0, 100] %, got {value}")]
    RelativeHumidityOutOfRange { field: &'static str, value: f64 },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable parameters for one simulation run.
///
/// Units follow the mass-balance model: grams, minutes, m³, °C,
/// air changes per hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Volume of the modeled enclosure [m³].
    pub volume_m3: f64,
    /// Mass flow contributed by the humidifying device [g/min].
    pub injection_rate_g_per_min: f64,
    /// Interior temperature, assumed constant for the run [°C].
    pub temperature_c: f64,
    /// Relative humidity inside the enclosure at t = 0 [%].
    pub initial_relative_humidity_pct: f64,
    /// Relative humidity of the exterior air, at the same temperature [%].
    pub exterior_relative_humidity_pct: f64,
    /// Ventilation exchange rate [1/h].
    pub air_changes_per_hour: f64,
    /// Condensation sink strength; units depend on `condensation_mode`
    /// (g/min for `Fixed`, 1/min per g/m³ of excess for `Proportional`).
    pub condensation_coefficient: f64,
    pub condensation_mode: CondensationMode,
    /// Integration step [min]. Must be small relative to the system's time
    /// constants for numerical stability; no stability check is performed,
    /// that is the caller's responsibility.
    pub time_step_min: f64,
    /// Relative humidity at which the run stops early [%]. The reachable
    /// ceiling is saturation, i.e. 100%.
    pub target_relative_humidity_pct: f64,
    /// Simulated-time horizon [min]; this is not a wall-clock bound.
    pub max_simulation_time_min: f64,
}

impl SimulationConfig {
    /// Checks the validity constraints on every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.volume_m3 > 0.0) {
            return Err(ConfigError::NonPositiveVolume(self.volume_m3));
        }
        if !(self.time_step_min > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step_min));
        }
        if !(self.max_simulation_time_min > 0.0) {
            return Err(ConfigError::NonPositiveMaxTime(self.max_simulation_time_min));
        }
        if self.injection_rate_g_per_min < 0.0 {
            return Err(ConfigError::NegativeInjectionRate(
                self.injection_rate_g_per_min,
            ));
        }
        if self.air_changes_per_hour < 0.0 {
            return Err(ConfigError::NegativeAirChanges(self.air_changes_per_hour));
        }
        if self.condensation_coefficient < 0.0 {
            return Err(ConfigError::NegativeCondensationCoefficient(
                self.condensation_coefficient,
            ));
        }
        for (field, value) in [
            (
                "initial_relative_humidity_pct",
                self.initial_relative_humidity_pct,
            ),
            (
                "exterior_relative_humidity_pct",
                self.exterior_relative_humidity_pct,
            ),
            (
                "target_relative_humidity_pct",
                self.target_relative_humidity_pct,
            ),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::RelativeHumidityOutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json_str = std::fs::read_to_string(path.as_ref())?;
        let config: SimulationConfig = serde_json::from_str(&json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of integration steps that fit in the simulated horizon.
    ///
    /// The final simulated time may be slightly less than
    /// `max_simulation_time_min` when the division is inexact.
    pub fn max_steps(&self) -> usize {
        (self.max_simulation_time_min / self.time_step_min).floor() as usize
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            volume_m3: DEFAULT_VOLUME_M3,
            injection_rate_g_per_min: DEFAULT_INJECTION_RATE_G_PER_MIN,
            temperature_c: DEFAULT_TEMPERATURE_C,
            initial_relative_humidity_pct: DEFAULT_INITIAL_RH_PCT,
            exterior_relative_humidity_pct: DEFAULT_EXTERIOR_RH_PCT,
            air_changes_per_hour: DEFAULT_AIR_CHANGES_PER_HOUR,
            condensation_coefficient: DEFAULT_CONDENSATION_COEFFICIENT,
            condensation_mode: CondensationMode::Fixed,
            time_step_min: DEFAULT_TIME_STEP_MIN,
            target_relative_humidity_pct: DEFAULT_TARGET_RH_PCT,
            max_simulation_time_min: DEFAULT_MAX_SIMULATION_TIME_MIN,
        }
    }
}

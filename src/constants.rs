// Magnus-formula coefficients for saturation vapor pressure over water.
// Pressure comes out in hPa for a temperature in °C.
pub const MAGNUS_PRESSURE_HPA: f64 = 6.112;
pub const MAGNUS_COEFF_A: f64 = 17.62;
pub const MAGNUS_COEFF_B_C: f64 = 243.12;

// Ideal-gas conversion from vapor pressure (hPa) to vapor density (g/m³)
// when divided by the absolute temperature in Kelvin.
pub const VAPOR_PRESSURE_TO_DENSITY: f64 = 216.7;

pub const TO_KELVIN: f64 = 273.15;
pub const MINUTES_PER_HOUR: f64 = 60.0;

// default sim start settings:
pub const DEFAULT_VOLUME_M3: f64 = 0.2;
pub const DEFAULT_INJECTION_RATE_G_PER_MIN: f64 = 3.3;
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;
pub const DEFAULT_INITIAL_RH_PCT: f64 = 0.0;
pub const DEFAULT_EXTERIOR_RH_PCT: f64 = 40.0;
pub const DEFAULT_AIR_CHANGES_PER_HOUR: f64 = 1.0;
pub const DEFAULT_CONDENSATION_COEFFICIENT: f64 = 0.15;
pub const DEFAULT_TIME_STEP_MIN: f64 = 0.01;
pub const DEFAULT_TARGET_RH_PCT: f64 = 100.0;
pub const DEFAULT_MAX_SIMULATION_TIME_MIN: f64 = 60.0;

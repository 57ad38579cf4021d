use crate::config::{CondensationMode, ConfigError, SimulationConfig};
use crate::constants::MINUTES_PER_HOUR;
use crate::saturation::{absolute_vapor_density, saturation_vapor_density};
use crate::sim::result::{Sample, SimulationResult};

/// Mutable accumulator state owned by a running [`Simulation`].
///
/// `vapor_density_g_per_m3` always stays within
/// `[0, saturation_density(temperature_c)]`; the cumulative masses are
/// monotonically non-decreasing (condensation is irreversible removal
/// from the vapor phase in this model).
#[derive(Debug, Clone, Copy)]
pub struct SimulationState {
    pub elapsed_time_min: f64,
    pub vapor_density_g_per_m3: f64,
    pub cumulative_injected_mass_g: f64,
    pub cumulative_condensed_mass_g: f64,
}

/// Mass breakdown of a single integration step.
///
/// `injected_g - ventilation_loss_g - condensation_loss_g` accounts
/// exactly for the pre-clamp mass change; `clamp_condensed_g` is the
/// supersaturation excess reclassified as condensate afterwards.
#[derive(Debug, Clone, Copy)]
pub struct StepRecord {
    pub time_min: f64,
    pub injected_g: f64,
    /// Negative when the exterior air is more humid than the enclosure
    /// (net gain through ventilation, intended physical behavior).
    pub ventilation_loss_g: f64,
    pub condensation_loss_g: f64,
    pub clamp_condensed_g: f64,
    pub vapor_density_g_per_m3: f64,
}

/// Fixed-step explicit-Euler integrator for the vapor mass balance
///
///   d(rho_v)/dt = injection/V - a*(rho_v - rho_out) - condensation/V
///
/// with a hard physical ceiling at the saturation density. Owns the
/// run's [`SimulationState`]; single-threaded, deterministic, no I/O.
pub struct Simulation {
    config: SimulationConfig,
    saturation_density: f64,
    exterior_density: f64,
    target_density: f64,
    state: SimulationState,
    samples: Vec<Sample>,
    step: usize,
    max_steps: usize,
    time_to_target_min: Option<f64>,
}

impl Simulation {
    /// Validates the configuration, derives the density setpoints and
    /// records the initial sample at t = 0.
    pub fn new(config: SimulationConfig) -> Result<Simulation, ConfigError> {
        config.validate()?;

        let saturation_density = saturation_vapor_density(config.temperature_c);
        let initial_density =
            absolute_vapor_density(config.initial_relative_humidity_pct, config.temperature_c);
        let exterior_density =
            absolute_vapor_density(config.exterior_relative_humidity_pct, config.temperature_c);
        let target_density = (config.target_relative_humidity_pct / 100.0) * saturation_density;
        let max_steps = config.max_steps();

        let state = SimulationState {
            elapsed_time_min: 0.0,
            vapor_density_g_per_m3: initial_density,
            cumulative_injected_mass_g: 0.0,
            cumulative_condensed_mass_g: 0.0,
        };
        let samples = vec![Sample {
            time_min: 0.0,
            vapor_density_g_per_m3: initial_density,
        }];
        // Target already met at the first sample reports a zero arrival time.
        let time_to_target_min = (initial_density >= target_density).then_some(0.0);

        Ok(Simulation {
            config,
            saturation_density,
            exterior_density,
            target_density,
            state,
            samples,
            step: 0,
            max_steps,
            time_to_target_min,
        })
    }

    /// Advances the state by one time step and returns the step's mass
    /// breakdown.
    pub fn step(&mut self) -> StepRecord {
        let dt = self.config.time_step_min;
        let volume = self.config.volume_m3;
        let t = (self.step as f64 + 1.0) * dt;

        let injected = self.config.injection_rate_g_per_min * dt;

        let density = self.state.vapor_density_g_per_m3;
        let current_mass = density * volume;

        // Volumetric exchange with the exterior air [m³/min].
        let flow = self.config.air_changes_per_hour * volume / MINUTES_PER_HOUR;
        let ventilation_loss = flow * (density - self.exterior_density) * dt;

        let condensation_loss = match self.config.condensation_mode {
            CondensationMode::Fixed => {
                (self.config.condensation_coefficient * dt).min(current_mass.max(0.0))
            }
            // Excess over saturation is evaluated at the pre-step density
            // (explicit Euler ordering; the trajectory depends on it).
            CondensationMode::Proportional => {
                (density - self.saturation_density).max(0.0)
                    * volume
                    * self.config.condensation_coefficient
                    * dt
            }
        };

        let new_mass = current_mass + injected - ventilation_loss - condensation_loss;
        let mut new_density = (new_mass / volume).max(0.0);

        // Physical ceiling: any supersaturation condenses out instantly.
        let mut clamp_condensed = 0.0;
        if new_density > self.saturation_density {
            clamp_condensed = (new_density - self.saturation_density) * volume;
            new_density = self.saturation_density;
        }

        self.state.cumulative_injected_mass_g += injected;
        self.state.cumulative_condensed_mass_g += condensation_loss + clamp_condensed;
        self.state.vapor_density_g_per_m3 = new_density;
        self.state.elapsed_time_min = t;
        self.step += 1;

        self.samples.push(Sample {
            time_min: t,
            vapor_density_g_per_m3: new_density,
        });

        if self.time_to_target_min.is_none() && new_density >= self.target_density {
            self.time_to_target_min = Some(t);
        }

        StepRecord {
            time_min: t,
            injected_g: injected,
            ventilation_loss_g: ventilation_loss,
            condensation_loss_g: condensation_loss,
            clamp_condensed_g: clamp_condensed,
            vapor_density_g_per_m3: new_density,
        }
    }

    /// True once the target was reached or the horizon is exhausted.
    pub fn is_done(&self) -> bool {
        self.time_to_target_min.is_some() || self.step >= self.max_steps
    }

    /// Runs the step loop to completion and assembles the result.
    pub fn run(&mut self) -> SimulationResult {
        while !self.is_done() {
            self.step();
        }
        self.result()
    }

    /// Snapshot of the run's outcome so far.
    pub fn result(&self) -> SimulationResult {
        SimulationResult {
            time_series: self.samples.clone(),
            time_to_target_min: self.time_to_target_min,
            final_injected_mass_g: self.state.cumulative_injected_mass_g,
            final_condensed_mass_g: self.state.cumulative_condensed_mass_g,
            saturation_density_g_per_m3: self.saturation_density,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn saturation_density_g_per_m3(&self) -> f64 {
        self.saturation_density
    }

    pub fn target_density_g_per_m3(&self) -> f64 {
        self.target_density
    }

    pub fn exterior_density_g_per_m3(&self) -> f64 {
        self.exterior_density
    }

    /// Current relative humidity of the enclosure in percent.
    pub fn relative_humidity_pct(&self) -> f64 {
        self.state.vapor_density_g_per_m3 / self.saturation_density * 100.0
    }

    pub fn time_to_target_min(&self) -> Option<f64> {
        self.time_to_target_min
    }
}

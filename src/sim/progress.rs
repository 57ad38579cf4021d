use colored::Colorize;

use crate::sim::result::SimulationResult;
use crate::sim::simulation::Simulation;

/// Intermittent console progress updates during a simulation run.
///
/// Holds no simulation state; the demo drivers thread it through their
/// step loop.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    /// Report every N steps.
    pub report_interval: usize,
}

impl ProgressReporter {
    pub fn new(report_interval: usize) -> Self {
        Self {
            report_interval: report_interval.max(1),
        }
    }

    pub fn report_start(&self, sim: &Simulation) {
        println!("{}", "Starting humidity simulation...".bold());
        println!(
            "   enclosure: {:.2} m³ at {:.1} °C, injection {:.2} g/min, ACH {:.1}",
            sim.config().volume_m3,
            sim.config().temperature_c,
            sim.config().injection_rate_g_per_min,
            sim.config().air_changes_per_hour
        );
        println!(
            "   saturation density: {:.3} g/m³, target density: {:.3} g/m³",
            sim.saturation_density_g_per_m3(),
            sim.target_density_g_per_m3()
        );
    }

    pub fn report_step(&self, sim: &Simulation) {
        if sim.current_step() % self.report_interval == 0 {
            println!(
                "   step {:>6}: t = {:>7.2} min, RH = {:>6.2}%",
                sim.current_step(),
                sim.state().elapsed_time_min,
                sim.relative_humidity_pct()
            );
        }
    }

    pub fn report_end(&self, result: &SimulationResult) {
        match result.time_to_target_min {
            Some(t) => println!(
                "{} target reached after {:.1} s ({:.2} min)",
                "done:".green().bold(),
                t * 60.0,
                t
            ),
            None => println!(
                "{} target not reached within the simulated horizon ({:.1} min)",
                "done:".yellow().bold(),
                result.final_time_min()
            ),
        }
        println!(
            "   injected mass:  {:.3} g",
            result.final_injected_mass_g
        );
        println!(
            "   condensed mass: {:.3} g",
            result.final_condensed_mass_g
        );
        println!(
            "   final RH:       {:.2}%",
            result.final_relative_humidity_pct()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_interval_never_zero() {
        assert_eq!(ProgressReporter::new(0).report_interval, 1);
        assert_eq!(ProgressReporter::new(25).report_interval, 25);
    }
}

//! Sweeps the air-exchange rate over the reference enclosure and tabulates
//! how the time to reach the target humidity responds. Each run is an
//! independent computation; they are executed sequentially here.
use colored::Colorize;
use humidifier_sim_rust::config::{CondensationMode, SimulationConfig};
use humidifier_sim_rust::sim::Simulation;

fn main() {
    println!("{}", "ACH sweep over the reference enclosure".bold());
    println!("{:>6} | {:>16} | {:>12} | {:>13}", "ACH", "time to 100% RH", "injected [g]", "condensed [g]");
    println!("{}", "-".repeat(56));

    for ach in [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 15.0, 20.0, 30.0] {
        let config = SimulationConfig {
            volume_m3: 0.2,
            injection_rate_g_per_min: 3.3,
            temperature_c: 20.0,
            initial_relative_humidity_pct: 0.0,
            exterior_relative_humidity_pct: 20.0,
            air_changes_per_hour: ach,
            condensation_coefficient: 0.55,
            condensation_mode: CondensationMode::Fixed,
            time_step_min: 0.05,
            target_relative_humidity_pct: 100.0,
            max_simulation_time_min: 60.0,
        };

        let mut sim = Simulation::new(config).expect("sweep configuration is valid");
        let result = sim.run();

        let arrival = match result.time_to_target_min {
            Some(t) => format!("{:>10.1} s", t * 60.0),
            None => "not reached".to_string(),
        };
        println!(
            "{:>6.1} | {:>16} | {:>12.2} | {:>13.2}",
            ach, arrival, result.final_injected_mass_g, result.final_condensed_mass_g
        );
    }
}

//! Reference fill-time scenario: a small 0.2 m³ enclosure at 20 °C with a
//! 3.3 g/min humidifier, ACH 10 exchange against 20% exterior air and a
//! fixed 0.55 g/min condensation sink. Reports how long it takes to reach
//! 100% relative humidity and writes the trajectory to a CSV file.
use humidifier_sim_rust::config::{CondensationMode, SimulationConfig};
use humidifier_sim_rust::sim::Simulation;
use humidifier_sim_rust::sim::csv_writer::write_time_series_csv;
use humidifier_sim_rust::sim::progress::ProgressReporter;

fn main() {
    let config = SimulationConfig {
        volume_m3: 0.2,
        injection_rate_g_per_min: 3.3,
        temperature_c: 20.0,
        initial_relative_humidity_pct: 0.0,
        exterior_relative_humidity_pct: 20.0,
        air_changes_per_hour: 10.0,
        condensation_coefficient: 0.55,
        condensation_mode: CondensationMode::Fixed,
        time_step_min: 0.05,
        target_relative_humidity_pct: 100.0,
        max_simulation_time_min: 60.0,
    };

    let mut sim = Simulation::new(config).expect("reference configuration is valid");
    let reporter = ProgressReporter::new(5);

    reporter.report_start(&sim);
    while !sim.is_done() {
        sim.step();
        reporter.report_step(&sim);
    }
    let result = sim.result();
    reporter.report_end(&result);

    let csv_path = "fill_time.csv";
    match write_time_series_csv(&result, csv_path) {
        Ok(()) => println!("   time series written to {}", csv_path),
        Err(e) => eprintln!("Warning: failed to write {}: {}", csv_path, e),
    }
}

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::sim::result::SimulationResult;

/// Writes the recorded time series to a CSV file (created/overwritten).
///
/// Columns:
/// - time_min: simulated time in minutes
/// - vapor_density_g_per_m3: recorded vapor density
/// - relative_humidity_pct: density relative to saturation
pub fn write_time_series_csv<P: AsRef<Path>>(
    result: &SimulationResult,
    path: P,
) -> Result<(), std::io::Error> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path.as_ref())?;

    writeln!(file, "time_min,vapor_density_g_per_m3,relative_humidity_pct")?;
    for sample in &result.time_series {
        writeln!(
            file,
            "{:.4},{:.6},{:.3}",
            sample.time_min,
            sample.vapor_density_g_per_m3,
            result.relative_humidity_pct(sample.vapor_density_g_per_m3)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::sim::simulation::Simulation;
    use std::fs;

    #[test]
    fn test_csv_writer_creates_file() {
        let test_file = "test_time_series.csv";
        let _ = fs::remove_file(test_file);

        let mut sim = Simulation::new(SimulationConfig {
            max_simulation_time_min: 0.35,
            time_step_min: 0.1,
            ..SimulationConfig::default()
        })
        .unwrap();
        let result = sim.run();

        write_time_series_csv(&result, test_file).expect("CSV write should succeed");

        let content = fs::read_to_string(test_file).expect("should read CSV back");
        let lines: Vec<&str> = content.lines().collect();

        // Header + initial sample + 3 steps
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("time_min,"));
        assert!(lines[1].starts_with("0.0000,"));
        assert!(lines[4].starts_with("0.3000,"));

        let _ = fs::remove_file(test_file);
    }
}

pub mod csv_writer;
pub mod progress;
pub mod result;
pub mod simulation;

pub use result::{Sample, SimulationResult};
pub use simulation::{Simulation, SimulationState, StepRecord};

//! The per-step summary record returned by a simulation run.

use epigrid_grid::CompartmentMeans;

/// One step's summary: simulated time and the local compartment means.
///
/// A full run returns exactly one record per step, in step order, with
/// `time` values `0, dt, 2·dt, …, (T-1)·dt`. The means describe the grid
/// *after* that step's update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    /// Simulated time: step index × the model's `dt`.
    pub time: f64,
    /// Mean susceptible share across local cells.
    pub mean_s: f64,
    /// Mean infected share across local cells.
    pub mean_i: f64,
    /// Mean recovered share across local cells.
    pub mean_r: f64,
}

impl StepRecord {
    /// Assemble a record from a time value and grid means.
    pub fn new(time: f64, means: CompartmentMeans) -> Self {
        Self {
            time,
            mean_s: means.s,
            mean_i: means.i,
            mean_r: means.r,
        }
    }
}

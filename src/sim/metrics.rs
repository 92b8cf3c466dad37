use average::{Estimate, Mean, Variance};
use serde::Serialize;

use crate::core::{Process, SimError};
use crate::scheduler::Run;

/// Aggregate performance indicators for one policy run.
///
/// | Metric | Definition |
/// |--------|-----------|
/// | Average wait time | mean time spent runnable but off-CPU |
/// | Average turnaround time | mean of wait + burst |
/// | Throughput | processes completed per tick of makespan |
/// | Unfairness | population std deviation of wait times (lower is fairer) |
/// | Context switches | CPU handoffs between different processes |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub average_wait_time: f64,
    pub average_turnaround_time: f64,
    pub throughput: f64,
    /// Dispersion of wait times, not a normalized index: 0 means every
    /// process waited equally long.
    pub unfairness: f64,
    pub context_switches: u64,
}

impl Metrics {
    /// Aggregates a run against the workload it was produced from. The
    /// wait-time map must cover exactly the input process set.
    pub fn calculate(run: &Run, processes: &[Process]) -> Result<Self, SimError> {
        if processes.is_empty() {
            return Err(SimError::EmptyWorkload);
        }
        if run.wait_times.len() != processes.len() {
            return Err(SimError::ArityMismatch {
                expected: processes.len(),
                got: run.wait_times.len(),
            });
        }

        let mut waits = Variance::new();
        let mut turnarounds = Mean::new();
        for process in processes {
            let wait = run
                .wait_times
                .get(&process.id)
                .copied()
                .ok_or(SimError::ArityMismatch {
                    expected: processes.len(),
                    got: run.wait_times.len(),
                })?;
            waits.add(wait as f64);
            turnarounds.add((wait + process.burst_time) as f64);
        }

        Ok(Self {
            average_wait_time: waits.mean(),
            average_turnaround_time: turnarounds.estimate(),
            throughput: processes.len() as f64 / run.makespan as f64,
            unfairness: waits.population_variance().sqrt(),
            context_switches: run.context_switches,
        })
    }
}

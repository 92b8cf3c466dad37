use tracing::debug;

use super::metrics::Metrics;
use crate::core::{Process, SimError};
use crate::scheduler::{Run, Scheduler};

/// Orchestrates policy runs over one process set and keeps the metrics of
/// the most recent run.
///
/// The process set is immutable input to each run (policies clone their
/// working copies), so the same `Sim` can compare several policies on the
/// same workload without resetting anything in between.
#[derive(Debug, Default)]
pub struct Sim {
    processes: Vec<Process>,
    metrics: Option<Metrics>,
}

impl Sim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    pub fn set_processes(&mut self, processes: Vec<Process>) {
        self.processes = processes;
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Runs `policy` over the current process set, stores the derived
    /// metrics (overwriting the previous run's), and hands the raw run
    /// (trace included) back to the caller.
    pub fn run(&mut self, policy: &dyn Scheduler) -> Result<Run, SimError> {
        let run = policy.schedule(&self.processes)?;
        let metrics = Metrics::calculate(&run, &self.processes)?;
        debug!(
            policy = policy.name(),
            processes = self.processes.len(),
            makespan = run.makespan,
            context_switches = run.context_switches,
            "run complete"
        );
        self.metrics = Some(metrics);
        Ok(run)
    }

    /// Metrics of the most recent successful run.
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Fcfs, MultiLevelQueue, RoundRobin};

    fn demo() -> Vec<Process> {
        vec![Process::new(1, 0, 3), Process::new(2, 1, 2)]
    }

    #[test]
    fn stores_metrics_for_the_latest_run() {
        let mut sim = Sim::new();
        for process in demo() {
            sim.add_process(process);
        }

        sim.run(&Fcfs).unwrap();
        let fcfs_metrics = sim.metrics().unwrap().clone();

        sim.run(&RoundRobin::new(1).unwrap()).unwrap();
        let rr_metrics = sim.metrics().unwrap();

        assert_eq!(fcfs_metrics.average_wait_time, 1.0);
        assert_ne!(fcfs_metrics, *rr_metrics);
    }

    #[test]
    fn same_workload_is_reusable_across_policies() {
        let mut sim = Sim::new();
        sim.set_processes(demo());

        let first = sim.run(&Fcfs).unwrap();
        // FCFS again on the same set must be bit-identical: the run did
        // not consume the workload's burst times.
        let second = sim.run(&Fcfs).unwrap();
        assert_eq!(first, second);

        assert!(sim.run(&MultiLevelQueue::new(2).unwrap()).is_ok());
        assert_eq!(sim.processes(), demo());
    }

    #[test]
    fn empty_process_set_is_rejected() {
        let mut sim = Sim::new();
        assert_eq!(sim.run(&Fcfs), Err(SimError::EmptyWorkload));
        assert!(sim.metrics().is_none());
    }
}

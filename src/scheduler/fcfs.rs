use super::{Run, Scheduler};
use crate::core::{observer, validate_workload, Process, RunState, SimError};

/// First-Come-First-Served: non-preemptive, arrival order, each process
/// runs its whole burst in one segment. The CPU idles through arrival
/// gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Run, SimError> {
        validate_workload(processes)?;

        let mut state = RunState::new(processes);
        for process in processes {
            state.advance_to(process.arrival_time);
            state.dispatch(process.id, process.burst_time);
        }

        let run = state.finish();
        observer::audit(processes, &run);
        Ok(run)
    }
}

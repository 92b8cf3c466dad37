use std::collections::VecDeque;

use super::{Run, Scheduler};
use crate::core::{observer, validate_workload, Process, RunState, SimError, Ticks};

/// Round Robin: preemptive, fixed-quantum, cyclic dispatch among all
/// arrived, unfinished processes.
///
/// An unfinished process re-enters the queue just before the first entry
/// that has not yet arrived, so late arrivals interleave with the cycle
/// instead of the re-queued process always landing at the tail.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Result<Self, SimError> {
        if quantum == 0 {
            return Err(SimError::ZeroQuantum);
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

/// Reinsert `process` before the first queued entry that arrives after
/// `now`, else at the tail.
pub(super) fn requeue(queue: &mut VecDeque<Process>, process: Process, now: Ticks) {
    let position = queue
        .iter()
        .position(|queued| queued.arrival_time > now)
        .unwrap_or(queue.len());
    queue.insert(position, process);
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RoundRobin"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Run, SimError> {
        validate_workload(processes)?;

        let mut state = RunState::new(processes);
        let mut queue: VecDeque<Process> = processes.iter().cloned().collect();

        while let Some(mut process) = queue.pop_front() {
            // The head has the earliest arrival among pending entries, so
            // an early head implies an idle CPU, not a skipped process.
            state.advance_to(process.arrival_time);

            let slice = process.burst_time.min(self.quantum);
            state.dispatch(process.id, slice);
            process.burst_time -= slice;

            if process.burst_time > 0 {
                requeue(&mut queue, process, state.now());
            }
        }

        let run = state.finish();
        observer::audit(processes, &run);
        Ok(run)
    }
}

use rustc_hash::FxHashMap;
use tracing::trace;

use super::process::{Process, ProcessId, Ticks};
use super::trace::StepLog;
use crate::scheduler::Run;

/// Per-run bookkeeping shared by every policy: the simulation clock,
/// context-switch counting, wait-time accrual, and the owned step log.
///
/// The clock only moves forward. Wait time accrues per dispatch as the gap
/// between now and the last time the process held the CPU (`last_end`,
/// seeded with the arrival time so the first dispatch charges the initial
/// queueing delay).
#[derive(Debug)]
pub struct RunState {
    now: Ticks,
    context_switches: u64,
    last_dispatched: Option<ProcessId>,
    wait_times: FxHashMap<ProcessId, Ticks>,
    last_end: FxHashMap<ProcessId, Ticks>,
    trace: StepLog,
}

impl RunState {
    pub fn new(processes: &[Process]) -> Self {
        let wait_times = processes.iter().map(|p| (p.id, 0)).collect();
        let last_end = processes.iter().map(|p| (p.id, p.arrival_time)).collect();
        Self {
            now: 0,
            context_switches: 0,
            last_dispatched: None,
            wait_times,
            last_end,
            trace: StepLog::new(),
        }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Idle the CPU until `t`. No-op if the clock is already at or past it.
    pub fn advance_to(&mut self, t: Ticks) {
        if self.now < t {
            trace!(from = self.now, to = t, "cpu idle");
            self.now = t;
        }
    }

    /// Idle the CPU for `delta` ticks.
    pub fn idle(&mut self, delta: Ticks) {
        trace!(from = self.now, delta, "cpu idle");
        self.now = self.now.saturating_add(delta);
    }

    /// Give the CPU to `id` for `run_for` ticks starting now.
    ///
    /// Records the step, charges wait time accrued since the process last
    /// left the CPU, advances the clock, and counts a context switch when
    /// the CPU moves to a different process than the previous dispatch
    /// (the first dispatch of a run is not a switch).
    pub fn dispatch(&mut self, id: ProcessId, run_for: Ticks) {
        debug_assert!(run_for > 0, "dispatch of {id} must make progress");
        debug_assert!(
            self.last_end.contains_key(&id),
            "dispatch of unknown process {id}"
        );

        if self.last_dispatched != Some(id) {
            if self.last_dispatched.is_some() {
                self.context_switches += 1;
            }
            self.last_dispatched = Some(id);
        }

        let waited = self.now - self.last_end[&id];
        *self.wait_times.entry(id).or_default() += waited;

        trace!(id, start = self.now, size = run_for, waited, "dispatch");
        self.trace.add_step(id, self.now, run_for);
        self.now += run_for;
        self.last_end.insert(id, self.now);
    }

    /// Consume the bookkeeping into a run record: the makespan is the
    /// clock's final position.
    pub fn finish(self) -> Run {
        Run {
            context_switches: self.context_switches,
            makespan: self.now,
            wait_times: self.wait_times,
            trace: self.trace,
        }
    }
}

use rustc_hash::FxHashMap;

use super::process::{Process, Ticks};
use crate::scheduler::Run;

/// Debug-build sweep over a finished run's invariants. Called by every
/// policy before returning; compiles away in release builds.
///
/// Checked invariants:
/// - steps are globally ordered by start time and never overlap
/// - per process, the step sizes sum to exactly the original burst time
/// - the makespan covers the last step
/// - the wait-time map covers exactly the input process set
pub fn audit(processes: &[Process], run: &Run) {
    let mut executed: FxHashMap<_, Ticks> = FxHashMap::default();
    let mut prev_end: Ticks = 0;

    for step in run.trace.raw() {
        debug_assert!(step.size > 0, "zero-sized step for process {}", step.id);
        debug_assert!(
            step.start >= prev_end,
            "step for process {} at t={} overlaps the previous segment ending at t={}",
            step.id,
            step.start,
            prev_end
        );
        prev_end = step.end();
        *executed.entry(step.id).or_default() += step.size;
    }

    debug_assert!(
        run.makespan >= prev_end,
        "makespan {} ends before the last step at t={}",
        run.makespan,
        prev_end
    );

    for process in processes {
        debug_assert_eq!(
            executed.get(&process.id).copied().unwrap_or(0),
            process.burst_time,
            "process {} executed a different amount than its burst time",
            process.id
        );
        debug_assert!(
            run.wait_times.contains_key(&process.id),
            "process {} missing from the wait-time map",
            process.id
        );
    }
    debug_assert_eq!(
        run.wait_times.len(),
        processes.len(),
        "wait-time map does not match the process set"
    );
}

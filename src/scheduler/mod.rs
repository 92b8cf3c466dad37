pub mod fcfs;
pub mod mlq;
pub mod round_robin;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::{Process, ProcessId, SimError, StepLog, Ticks};
pub use fcfs::Fcfs;
pub use mlq::MultiLevelQueue;
pub use round_robin::RoundRobin;

/// The raw output of one policy run: the dispatch trace plus the totals
/// the metrics layer aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub context_switches: u64,
    pub makespan: Ticks,
    pub wait_times: FxHashMap<ProcessId, Ticks>,
    pub trace: StepLog,
}

/// A dispatch policy: a pure function from an arrival-sorted workload to a
/// completed [`Run`].
///
/// Implementations hold configuration only (e.g. the quantum) and no
/// per-run state; `schedule` clones its working copies and builds a fresh
/// trace each call, so the caller's processes survive unmodified and runs
/// never mix. Input is validated before any simulation work.
pub trait Scheduler {
    fn name(&self) -> &'static str;

    fn schedule(&self, processes: &[Process]) -> Result<Run, SimError>;
}

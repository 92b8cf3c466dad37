use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::SimError;

pub type ProcessId = u64;
pub type Ticks = u64;

/// Dispatch tier for the multilevel queue policy. Other policies ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Low,
}

/// A schedulable unit of work.
///
/// `burst_time` is the total CPU time the process needs. Policies never
/// mutate caller-owned processes; each `schedule` call clones its own
/// working copies and decrements their remaining burst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
}

impl Process {
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: Priority::Low,
        }
    }

    pub fn with_priority(
        id: ProcessId,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Boundary validation run on entry to every `schedule` call.
///
/// A zero burst would never reach completion and a duplicate id corrupts
/// the wait-time accounting, so both are rejected before any simulation
/// work. Policies assume arrival order and do not re-sort, so unsorted
/// input is rejected as well.
pub fn validate_workload(processes: &[Process]) -> Result<(), SimError> {
    if processes.is_empty() {
        return Err(SimError::EmptyWorkload);
    }

    let mut seen = FxHashSet::default();
    let mut prev_arrival = 0;
    for process in processes {
        if process.burst_time == 0 {
            return Err(SimError::ZeroBurst { id: process.id });
        }
        if !seen.insert(process.id) {
            return Err(SimError::DuplicateId { id: process.id });
        }
        if process.arrival_time < prev_arrival {
            return Err(SimError::UnsortedArrivals { id: process.id });
        }
        prev_arrival = process.arrival_time;
    }

    Ok(())
}

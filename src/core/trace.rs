use serde::{Deserialize, Serialize};

use super::process::{ProcessId, Ticks};

/// One uninterrupted execution segment: process `id` ran from `start` for
/// `size` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: ProcessId,
    pub start: Ticks,
    pub size: Ticks,
}

impl Step {
    pub fn new(id: ProcessId, start: Ticks, size: Ticks) -> Self {
        Self { id, start, size }
    }

    pub fn end(&self) -> Ticks {
        self.start + self.size
    }
}

/// Append-only execution trace of a single run.
///
/// Steps are appended verbatim, one per dispatch. Compaction happens only
/// on read: [`StepLog::compacted`] merges runs of steps that share an id
/// and are contiguous in time, which turns e.g. five back-to-back 1-tick
/// dispatches of the same process into one 5-tick timeline segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, id: ProcessId, start: Ticks, size: Ticks) {
        self.steps.push(Step::new(id, start, size));
    }

    /// The raw dispatch sequence, one step per dispatch, in append order.
    pub fn raw(&self) -> &[Step] {
        &self.steps
    }

    /// Run-length merged view of the trace. Adjacent steps merge iff they
    /// have the same id and the next starts exactly where the previous
    /// ended; nothing else coalesces. The raw log is left untouched, so
    /// repeated calls return identical output.
    pub fn compacted(&self) -> Vec<Step> {
        let mut combined: Vec<Step> = Vec::new();
        for step in &self.steps {
            match combined.last_mut() {
                Some(last) if last.id == step.id && step.start == last.end() => {
                    last.size += step.size;
                }
                _ => combined.push(*step),
            }
        }
        combined
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

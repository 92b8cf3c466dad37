use thiserror::Error;

use super::process::ProcessId;

/// Validation failures raised at the API boundary, before any simulation
/// work. A run never returns partial results on invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("quantum must be a positive number of ticks")]
    ZeroQuantum,

    #[error("process {id} has zero burst time and would never complete")]
    ZeroBurst { id: ProcessId },

    #[error("duplicate process id {id}")]
    DuplicateId { id: ProcessId },

    #[error("process {id} arrives out of order; workload must be sorted by arrival time")]
    UnsortedArrivals { id: ProcessId },

    #[error("workload is empty")]
    EmptyWorkload,

    #[error("wait-time arity mismatch: {expected} processes but {got} wait entries")]
    ArityMismatch { expected: usize, got: usize },
}

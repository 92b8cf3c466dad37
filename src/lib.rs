//! Discrete-event simulation of CPU scheduling policies.
//!
//! Three dispatch policies (FCFS, Round Robin, Multilevel Queue) run over
//! an arrival-sorted process set, producing an execution trace suitable
//! for timeline rendering and aggregate metrics for cross-policy
//! comparison. The simulation is pure and single-threaded: a run is a
//! deterministic function of its input.

pub mod core;
pub mod scheduler;
pub mod sim;
pub mod workload;

pub use crate::core::{Priority, Process, ProcessId, SimError, Step, StepLog, Ticks};
pub use crate::scheduler::{Fcfs, MultiLevelQueue, RoundRobin, Run, Scheduler};
pub use crate::sim::{Metrics, Sim};

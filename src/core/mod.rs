pub mod error;
pub mod observer;
pub mod process;
pub mod state;
pub mod trace;

pub use error::SimError;
pub use process::{validate_workload, Priority, Process, ProcessId, Ticks};
pub use state::RunState;
pub use trace::{Step, StepLog};

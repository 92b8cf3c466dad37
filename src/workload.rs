use rand::prelude::*;

use crate::core::{Priority, Process, Ticks};

/// Parameters for [`random_processes`]. Bursts are drawn uniformly from
/// `min_burst..=max_burst`, priority is high with probability `p_high`,
/// and consecutive arrivals are separated by a uniform gap of
/// `0..=max_gap` ticks.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadConfig {
    pub num_processes: usize,
    pub min_burst: Ticks,
    pub max_burst: Ticks,
    pub p_high: f64,
    pub max_gap: Ticks,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            num_processes: 100,
            min_burst: 1,
            max_burst: 80,
            p_high: 0.2,
            max_gap: 25,
        }
    }
}

/// Generates a synthetic workload from a seeded RNG: same seed and config,
/// same processes. Output is arrival-sorted by construction with ids
/// numbered from 1.
pub fn random_processes(config: &WorkloadConfig, seed: u64) -> Vec<Process> {
    assert!(config.num_processes > 0, "workload must have processes");
    assert!(
        config.min_burst >= 1 && config.min_burst <= config.max_burst,
        "burst range must be non-empty and positive"
    );
    assert!(
        (0.0..=1.0).contains(&config.p_high),
        "p_high must be a probability"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::with_capacity(config.num_processes);
    let mut arrival: Ticks = 0;

    for i in 0..config.num_processes {
        let burst = rng.random_range(config.min_burst..=config.max_burst);
        let priority = if rng.random::<f64>() < config.p_high {
            Priority::High
        } else {
            Priority::Low
        };

        processes.push(Process::with_priority(
            i as u64 + 1,
            arrival,
            burst,
            priority,
        ));

        arrival += rng.random_range(0..=config.max_gap);
    }

    processes
}

/// The fixed four-process comparison set used by the demo binary and the
/// policy walkthroughs.
pub fn demo_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 2),
        Process::with_priority(2, 2, 4, Priority::High),
        Process::new(3, 2, 3),
        Process::with_priority(4, 10, 4, Priority::High),
    ]
}

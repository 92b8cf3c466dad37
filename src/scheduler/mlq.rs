use std::collections::VecDeque;

use super::{round_robin::requeue, Run, Scheduler};
use crate::core::{
    observer, validate_workload, Priority, Process, RunState, SimError, Ticks,
};

/// Multilevel Queue: two tiers with strict priority.
///
/// The high tier runs Round Robin with the configured quantum. The low
/// tier runs one tick at a time and re-enters at the front of its queue,
/// so it keeps the CPU between ticks but yields to any high-priority
/// process within one tick of its arrival. A high arrival never interrupts
/// a tick in progress; preemption latency is bounded at one tick.
#[derive(Debug, Clone, Copy)]
pub struct MultiLevelQueue {
    quantum: Ticks,
}

impl MultiLevelQueue {
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

fn eligible(queue: &VecDeque<Process>, now: Ticks) -> bool {
    queue
        .front()
        .is_some_and(|process| process.arrival_time <= now)
}

impl Scheduler for MultiLevelQueue {
    fn name(&self) -> &'static str {
        "MLQ"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Run, SimError> {
        validate_workload(processes)?;

        let mut state = RunState::new(processes);
        let mut high: VecDeque<Process> = VecDeque::new();
        let mut low: VecDeque<Process> = VecDeque::new();
        for process in processes {
            match process.priority {
                Priority::High => high.push_back(process.clone()),
                Priority::Low => low.push_back(process.clone()),
            }
        }

        while !high.is_empty() || !low.is_empty() {
            if eligible(&high, state.now()) {
                let mut process = high.pop_front().expect("eligible queue has a head");
                let slice = process.burst_time.min(self.quantum);
                state.dispatch(process.id, slice);
                process.burst_time -= slice;
                if process.burst_time > 0 {
                    requeue(&mut high, process, state.now());
                }
            } else if eligible(&low, state.now()) {
                // One tick at a time so high-priority eligibility is
                // re-checked at every tick boundary.
                let mut process = low.pop_front().expect("eligible queue has a head");
                state.dispatch(process.id, 1);
                process.burst_time -= 1;
                if process.burst_time > 0 {
                    low.push_front(process);
                }
            } else {
                state.idle(1);
            }
        }

        let run = state.finish();
        observer::audit(processes, &run);
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::Step;

    fn mlq(quantum: Ticks) -> MultiLevelQueue {
        MultiLevelQueue::new(quantum).unwrap()
    }

    #[test]
    fn rejects_zero_quantum() {
        assert_eq!(
            MultiLevelQueue::new(0).unwrap_err(),
            SimError::ZeroQuantum
        );
    }

    #[test]
    fn high_arrival_preempts_low_within_one_tick() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::with_priority(2, 2, 1, Priority::High),
        ];
        let run = mlq(2).schedule(&processes).unwrap();

        let p2_start = run
            .trace
            .raw()
            .iter()
            .find(|step| step.id == 2)
            .map(|step| step.start)
            .unwrap();
        assert!(
            (2..=3).contains(&p2_start),
            "high-priority process started at t={p2_start}, expected within one tick of arrival"
        );

        // P2 completes before P1 resumes.
        let p1_resume = run
            .trace
            .raw()
            .iter()
            .filter(|step| step.id == 1)
            .map(|step| step.start)
            .find(|&start| start > p2_start)
            .unwrap();
        assert!(p1_resume >= p2_start + 1);

        assert_eq!(
            run.trace.compacted(),
            vec![Step::new(1, 0, 2), Step::new(2, 2, 1), Step::new(1, 3, 3)]
        );
        assert_eq!(run.makespan, 6);
        assert_eq!(run.wait_times[&2], 0);
        assert_eq!(run.wait_times[&1], 1);
    }

    #[test]
    fn low_tier_keeps_the_cpu_between_ticks() {
        // No high tier at all: the single low process runs tick by tick
        // but compacts to one contiguous segment with no self-switches.
        let processes = vec![Process::new(1, 0, 4)];
        let run = mlq(2).schedule(&processes).unwrap();

        assert_eq!(run.trace.raw().len(), 4);
        assert_eq!(run.trace.compacted(), vec![Step::new(1, 0, 4)]);
        assert_eq!(run.context_switches, 0);
    }

    #[test]
    fn high_tier_round_robins_with_quantum() {
        let processes = vec![
            Process::with_priority(1, 0, 4, Priority::High),
            Process::with_priority(2, 0, 4, Priority::High),
        ];
        let run = mlq(2).schedule(&processes).unwrap();

        let order: Vec<_> = run.trace.raw().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![1, 2, 1, 2]);
        assert_eq!(run.wait_times[&1], run.wait_times[&2]);
    }

    #[test]
    fn low_runs_only_when_no_high_is_eligible() {
        let processes = vec![
            Process::with_priority(1, 0, 2, Priority::High),
            Process::new(2, 0, 2),
            Process::with_priority(3, 5, 2, Priority::High),
        ];
        let run = mlq(1).schedule(&processes).unwrap();

        assert_eq!(
            run.trace.compacted(),
            vec![
                Step::new(1, 0, 2),
                Step::new(2, 2, 2),
                Step::new(3, 5, 2),
            ]
        );
        assert_eq!(run.makespan, 7);
    }

    #[test]
    fn idles_until_the_first_arrival() {
        let processes = vec![
            Process::with_priority(1, 3, 1, Priority::High),
            Process::new(2, 4, 2),
        ];
        let run = mlq(1).schedule(&processes).unwrap();

        assert_eq!(
            run.trace.compacted(),
            vec![Step::new(1, 3, 1), Step::new(2, 4, 2)]
        );
        assert_eq!(run.makespan, 6);
    }

    #[test]
    fn demo_workload_matches_known_timeline() {
        // The original four-process comparison set.
        let processes = vec![
            Process::new(1, 0, 2),
            Process::with_priority(2, 2, 4, Priority::High),
            Process::new(3, 2, 3),
            Process::with_priority(4, 10, 4, Priority::High),
        ];
        let run = mlq(1).schedule(&processes).unwrap();

        assert_eq!(
            run.trace.compacted(),
            vec![
                Step::new(1, 0, 2),
                Step::new(2, 2, 4),
                Step::new(3, 6, 3),
                Step::new(4, 10, 4),
            ]
        );
        assert_eq!(run.makespan, 14);
        assert_eq!(run.wait_times[&1], 0);
        assert_eq!(run.wait_times[&2], 0);
        assert_eq!(run.wait_times[&3], 4);
        assert_eq!(run.wait_times[&4], 0);
    }

    #[test]
    fn does_not_mutate_caller_processes() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::with_priority(2, 2, 1, Priority::High),
        ];
        let before = processes.clone();
        mlq(2).schedule(&processes).unwrap();
        assert_eq!(processes, before);
    }
}

use schedsim::workload::{demo_processes, random_processes, WorkloadConfig};
use schedsim::{Fcfs, MultiLevelQueue, RoundRobin, Scheduler, Sim, SimError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fcfs = Fcfs::new();
    let rr = RoundRobin::new(2)?;
    let mlq = MultiLevelQueue::new(1)?;
    let policies: [&dyn Scheduler; 3] = [&fcfs, &rr, &mlq];

    println!("== Demo workload ==");
    let mut sim = Sim::new();
    sim.set_processes(demo_processes());
    for policy in policies {
        let run = sim.run(policy)?;
        println!("{} timeline:", policy.name());
        for step in run.trace.compacted() {
            println!(
                "  P{} ran {:>3}..{:<3} ({} ticks)",
                step.id,
                step.start,
                step.end(),
                step.size
            );
        }
        print_metrics(&sim);
    }

    println!("== Random workload (seed 1) ==");
    let config = WorkloadConfig::default();
    sim.set_processes(random_processes(&config, 1));
    for policy in policies {
        sim.run(policy)?;
        println!("{}:", policy.name());
        print_metrics(&sim);
    }

    Ok(())
}

fn print_metrics(sim: &Sim) {
    let Some(metrics) = sim.metrics() else {
        return;
    };
    println!("  average wait time:       {:.2}", metrics.average_wait_time);
    println!(
        "  average turnaround time: {:.2}",
        metrics.average_turnaround_time
    );
    println!("  throughput:              {:.4}", metrics.throughput);
    println!("  unfairness:              {:.2}", metrics.unfairness);
    println!("  context switches:        {}", metrics.context_switches);
    println!();
}

/*!
 * First-Come-First-Served
 */

use crate::process::{Process, ScheduleResult};
use crate::scheduler::config::StartTimeMode;
use crate::scheduler::gantt::TimelineBuilder;
use crate::scheduler::schedule::Schedule;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;
use tracing::debug;

/// Runs processes to completion in arrival order
///
/// Results come back in execution order (arrival, ties by input order).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn simulate(&self, processes: &[Process], _start_time: StartTimeMode) -> Schedule {
        let mut order = processes.to_vec();
        // Stable: equal arrivals keep input order
        order.sort_by_key(|p| p.arrival);

        let mut timeline = TimelineBuilder::new();
        let mut results = Vec::with_capacity(order.len());
        let mut now = 0;

        for process in &mut order {
            let start = now.max(process.arrival);
            let completion = start + process.run_for(process.burst);
            debug!(pid = process.pid, start, completion, "dispatch");

            timeline.record(process.pid, start, completion);
            results.push(ScheduleResult::completed(process, start, completion, false));
            now = completion;
        }

        Schedule::new(results, timeline.finish(now))
    }
}

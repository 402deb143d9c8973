/*!
 * Round-Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::next_arrival;
use crate::core::types::Ticks;
use crate::process::{Process, ScheduleResult};
use crate::scheduler::config::StartTimeMode;
use crate::scheduler::gantt::TimelineBuilder;
use crate::scheduler::schedule::Schedule;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::{Algorithm, TimeQuantum};
use std::collections::VecDeque;
use tracing::debug;

/// Round-Robin over a queue of indices into the working process array
///
/// Every dispatch produces its own Gantt segment, even when the same pid runs
/// again immediately after being re-queued.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(TimeQuantum::default())
    }
}

/// Enqueue, in input order, every process that has arrived by `now` and has
/// never been queued
fn admit_arrivals(
    processes: &[Process],
    admitted: &mut [bool],
    queue: &mut VecDeque<usize>,
    now: Ticks,
) {
    for (idx, process) in processes.iter().enumerate() {
        if !admitted[idx] && process.is_ready(now) {
            admitted[idx] = true;
            queue.push_back(idx);
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn simulate(&self, processes: &[Process], start_time: StartTimeMode) -> Schedule {
        let quantum = self.quantum.ticks();
        let mut working = processes.to_vec();
        let mut admitted = vec![false; working.len()];
        let mut first_dispatch: Vec<Option<Ticks>> = vec![None; working.len()];
        let mut queue = VecDeque::with_capacity(working.len());
        let mut timeline = TimelineBuilder::new();
        let mut results = Vec::with_capacity(working.len());
        let mut now = 0;

        admit_arrivals(&working, &mut admitted, &mut queue, now);

        while results.len() < working.len() {
            let Some(idx) = queue.pop_front() else {
                match next_arrival(&working, now) {
                    Some(arrival) => {
                        now = arrival;
                        admit_arrivals(&working, &mut admitted, &mut queue, now);
                        continue;
                    }
                    None => break,
                }
            };

            let start = now;
            let dispatched = *first_dispatch[idx].get_or_insert(start);
            now += working[idx].run_for(quantum);

            let pid = working[idx].pid;
            debug!(pid, start, end = now, remaining = working[idx].remaining, "quantum");
            timeline.record(pid, start, now);

            // Newcomers queue ahead of the process that was just preempted
            admit_arrivals(&working, &mut admitted, &mut queue, now);

            let process = &working[idx];
            if process.is_complete() {
                let start = match start_time {
                    StartTimeMode::FirstDispatch => dispatched,
                    StartTimeMode::Arrival => process.arrival,
                };
                results.push(ScheduleResult::completed(process, start, now, false));
            } else {
                queue.push_back(idx);
            }
        }

        results.sort_by_key(|r| r.pid);
        Schedule::new(results, timeline.finish(now))
    }
}

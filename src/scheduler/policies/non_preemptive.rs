/*!
 * Non-Preemptive Driver
 * Event-driven loop shared by SJF and non-preemptive priority
 */

use super::{next_arrival, select_ready};
use crate::process::{Process, ScheduleResult};
use crate::scheduler::gantt::TimelineBuilder;
use crate::scheduler::schedule::Schedule;
use tracing::debug;

/// At each decision point run the ready process with the smallest key to
/// completion, then jump to its completion time
///
/// When nothing has arrived the clock jumps to the next arrival. Results are
/// ordered by pid.
pub(crate) fn run_to_completion<K, F>(processes: &[Process], key: F, with_priority: bool) -> Schedule
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut working = processes.to_vec();
    let mut timeline = TimelineBuilder::new();
    let mut results = Vec::with_capacity(working.len());
    let mut now = 0;

    while results.len() < working.len() {
        let Some(idx) = select_ready(&working, now, &key) else {
            match next_arrival(&working, now) {
                Some(arrival) => {
                    now = arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = &mut working[idx];
        let start = now;
        let completion = start + process.run_for(process.burst);
        debug!(pid = process.pid, start, completion, "dispatch");

        timeline.record(process.pid, start, completion);
        results.push(ScheduleResult::completed(process, start, completion, with_priority));
        now = completion;
    }

    results.sort_by_key(|r| r.pid);
    Schedule::new(results, timeline.finish(now))
}

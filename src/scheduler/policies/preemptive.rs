/*!
 * Preemptive Driver
 * Unit-step loop shared by SRTF and preemptive priority
 */

use super::{next_arrival, select_ready};
use crate::core::types::Ticks;
use crate::process::{Process, ScheduleResult};
use crate::scheduler::config::StartTimeMode;
use crate::scheduler::gantt::TimelineBuilder;
use crate::scheduler::schedule::Schedule;
use tracing::{debug, trace};

/// Reselect the ready process with the smallest key on every tick
///
/// The running process is preempted as soon as another ready process has a
/// strictly smaller key, or an equal key and an earlier input position.
/// Results are ordered by pid.
pub(crate) fn run_unit_steps<K, F>(
    processes: &[Process],
    key: F,
    with_priority: bool,
    start_time: StartTimeMode,
) -> Schedule
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut working = processes.to_vec();
    let mut first_dispatch: Vec<Option<Ticks>> = vec![None; working.len()];
    let mut timeline = TimelineBuilder::new();
    let mut results = Vec::with_capacity(working.len());
    let mut now = 0;

    while results.len() < working.len() {
        let Some(idx) = select_ready(&working, now, &key) else {
            timeline.idle(now);
            match next_arrival(&working, now) {
                Some(arrival) => {
                    trace!(from = now, to = arrival, "cpu idle");
                    now = arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = &mut working[idx];
        let previous = timeline.running();
        if timeline.tick(process.pid, now) {
            debug!(pid = process.pid, preempted = ?previous, time = now, "context switch");
        }
        let dispatched = *first_dispatch[idx].get_or_insert(now);

        process.run_for(1);
        now += 1;

        if process.is_complete() {
            let start = match start_time {
                StartTimeMode::FirstDispatch => dispatched,
                StartTimeMode::Arrival => process.arrival,
            };
            debug!(pid = process.pid, completion = now, "completed");
            results.push(ScheduleResult::completed(process, start, now, with_priority));
        }
    }

    results.sort_by_key(|r| r.pid);
    Schedule::new(results, timeline.finish(now))
}

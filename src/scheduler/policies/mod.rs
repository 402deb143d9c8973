/*!
 * Scheduling Policies
 * The six simulated policies and the selection helpers they share
 */

use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::{Priority, Ticks};
use crate::process::Process;

mod fcfs;
mod non_preemptive;
mod preemptive;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;
pub use srtf::ShortestRemainingTimeFirst;

/// Index of the ready process with the smallest key at `now`
///
/// Ties go to the earliest process in input order (`min_by_key` keeps the
/// first minimum).
pub(crate) fn select_ready<K, F>(processes: &[Process], now: Ticks, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready(now))
        .min_by_key(|(_, p)| key(p))
        .map(|(idx, _)| idx)
}

/// Earliest arrival after `now` among incomplete processes
pub(crate) fn next_arrival(processes: &[Process], now: Ticks) -> Option<Ticks> {
    processes
        .iter()
        .filter(|p| !p.is_complete() && p.arrival > now)
        .map(|p| p.arrival)
        .min()
}

/// Selection key for priority policies (lower wins)
#[inline]
pub(crate) fn priority_key(process: &Process) -> Priority {
    process.priority.unwrap_or(DEFAULT_PRIORITY)
}

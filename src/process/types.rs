/*!
 * Process Types
 * Input descriptors, working copies, and per-process results
 */

use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};

/// Caller-supplied process descriptor
///
/// Fields are signed so malformed input reaches validation instead of
/// failing inside the deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival: i64,
    pub burst: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ProcessSpec {
    pub fn new(pid: Pid, arrival: i64, burst: i64) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Build descriptors numbered P1..Pn in input order
    pub fn sequential(rows: &[(i64, i64, Option<Priority>)]) -> Vec<Self> {
        rows.iter()
            .zip(1..)
            .map(|(&(arrival, burst, priority), pid)| Self {
                pid,
                arrival,
                burst,
                priority,
            })
            .collect()
    }
}

/// Working copy of a process inside one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Option<Priority>,
    pub remaining: Ticks,
}

impl Process {
    /// Create a fresh process with `remaining = burst`
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks, priority: Option<Priority>) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
            remaining: burst,
        }
    }

    /// Eligible for selection at `now`
    #[inline]
    pub fn is_ready(&self, now: Ticks) -> bool {
        self.arrival <= now && self.remaining > 0
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Consume up to `ticks` of CPU time, returning how much was used
    pub fn run_for(&mut self, ticks: Ticks) -> Ticks {
        let used = ticks.min(self.remaining);
        self.remaining -= used;
        used
    }
}

/// Timing outcome of one completed process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleResult {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Present only for priority-based policies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub start: Ticks,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
}

impl ScheduleResult {
    /// Derive turnaround and waiting from a finished process
    ///
    /// Requires `completion >= arrival + burst`, which every policy guarantees.
    pub(crate) fn completed(
        process: &Process,
        start: Ticks,
        completion: Ticks,
        with_priority: bool,
    ) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            pid: process.pid,
            arrival: process.arrival,
            burst: process.burst,
            priority: if with_priority { process.priority } else { None },
            start,
            completion,
            turnaround,
            waiting: turnaround - process.burst,
        }
    }
}

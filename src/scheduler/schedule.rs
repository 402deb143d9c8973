/*!
 * Simulation Output
 * Ordered per-process results plus the Gantt timeline of one run
 */

use super::gantt::GanttSegment;
use crate::core::types::{Pid, Ticks};
use crate::process::ScheduleResult;
use serde::{Deserialize, Serialize};

/// Output of one policy run; immutable once produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub results: Vec<ScheduleResult>,
    pub gantt: Vec<GanttSegment>,
}

impl Schedule {
    pub fn new(results: Vec<ScheduleResult>, gantt: Vec<GanttSegment>) -> Self {
        Self { results, gantt }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn result(&self, pid: Pid) -> Option<&ScheduleResult> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Pids ordered by completion time (ties by pid)
    pub fn completion_order(&self) -> Vec<Pid> {
        let mut finished: Vec<_> = self.results.iter().map(|r| (r.completion, r.pid)).collect();
        finished.sort_unstable();
        finished.into_iter().map(|(_, pid)| pid).collect()
    }

    /// Total CPU time `pid` received across all its segments
    pub fn busy_time(&self, pid: Pid) -> Ticks {
        self.gantt
            .iter()
            .filter(|s| s.pid == pid)
            .map(GanttSegment::duration)
            .sum()
    }

    /// Latest completion time, zero for an empty run
    pub fn total_time(&self) -> Ticks {
        self.results.iter().map(|r| r.completion).max().unwrap_or(0)
    }
}

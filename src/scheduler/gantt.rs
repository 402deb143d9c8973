/*!
 * Gantt Timeline
 * Accumulates contiguous execution segments during a simulation
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// One uninterrupted span of CPU occupancy, `end > start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    pub pid: Pid,
    pub start: Ticks,
    pub end: Ticks,
}

impl GanttSegment {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// CPU occupancy while the timeline is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpuState {
    Idle,
    Running { pid: Pid, since: Ticks },
}

/// Segment builder
///
/// Unit-step policies call [`TimelineBuilder::tick`] once per simulated tick;
/// consecutive ticks of the same pid extend one open segment, which is closed
/// on a switch to another pid, on [`TimelineBuilder::idle`], or on
/// [`TimelineBuilder::finish`]. Whole-dispatch policies call
/// [`TimelineBuilder::record`] and never merge.
#[derive(Debug)]
pub struct TimelineBuilder {
    segments: Vec<GanttSegment>,
    state: CpuState,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            state: CpuState::Idle,
        }
    }

    /// `pid` occupies the CPU for `[now, now + 1)`
    ///
    /// Returns `true` when this tick is a context switch.
    pub fn tick(&mut self, pid: Pid, now: Ticks) -> bool {
        match self.state {
            CpuState::Running { pid: current, .. } if current == pid => false,
            CpuState::Running { .. } => {
                self.close(now);
                self.state = CpuState::Running { pid, since: now };
                true
            }
            CpuState::Idle => {
                self.state = CpuState::Running { pid, since: now };
                true
            }
        }
    }

    /// The CPU has nothing to run from `now`
    pub fn idle(&mut self, now: Ticks) {
        self.close(now);
    }

    /// Record a complete dispatch span
    pub fn record(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        self.close(start);
        if end > start {
            self.segments.push(GanttSegment { pid, start, end });
        }
    }

    /// Pid owning the open segment, if any
    pub fn running(&self) -> Option<Pid> {
        match self.state {
            CpuState::Running { pid, .. } => Some(pid),
            CpuState::Idle => None,
        }
    }

    /// Close any open segment at `now` and return the timeline
    pub fn finish(mut self, now: Ticks) -> Vec<GanttSegment> {
        self.close(now);
        self.segments
    }

    fn close(&mut self, now: Ticks) {
        if let CpuState::Running { pid, since } = self.state {
            if now > since {
                self.segments.push(GanttSegment {
                    pid,
                    start: since,
                    end: now,
                });
            }
            self.state = CpuState::Idle;
        }
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/*!
 * Scheduler Types
 * Algorithm identifiers and time quantum
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::{SchedulerResult, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Job-First (non-preemptive)
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive)
    Srtf,
    /// Round-Robin with a fixed time quantum
    RoundRobin,
    /// Priority-based preemptive scheduling
    PriorityPreemptive,
    /// Priority-based non-preemptive scheduling
    PriorityNonPreemptive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::RoundRobin,
        Self::PriorityPreemptive,
        Self::PriorityNonPreemptive,
    ];

    /// Canonical identifier
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RR",
            Self::PriorityPreemptive => "Priority_Preemptive",
            Self::PriorityNonPreemptive => "Priority_NonPreemptive",
        }
    }

    /// Human-readable name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve (FCFS)",
            Self::Sjf => "Shortest Job First (SJF)",
            Self::Srtf => "Shortest Remaining Time First (SRTF)",
            Self::RoundRobin => "Round Robin (RR)",
            Self::PriorityPreemptive => "Priority (Preemptive)",
            Self::PriorityNonPreemptive => "Priority (Non-Preemptive)",
        }
    }

    /// Simulated with unit time steps and may interrupt a running process
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PriorityPreemptive
        )
    }

    pub const fn uses_priority(&self) -> bool {
        matches!(
            self,
            Self::PriorityPreemptive | Self::PriorityNonPreemptive
        )
    }

    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "fifo" | "first_come_first_serve" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "priority_preemptive" | "prio_preemptive" => Ok(Self::PriorityPreemptive),
            "priority_nonpreemptive" | "priority_non_preemptive" | "prio_nonpreemptive" => {
                Ok(Self::PriorityNonPreemptive)
            }
            _ => Err(SchedulerError::Configuration(format!(
                "unknown algorithm '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-Robin time slice, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    pub const DEFAULT: Self = Self(DEFAULT_QUANTUM);

    /// Create a new time quantum
    pub fn new(ticks: i64) -> SchedulerResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::Validation(format!(
                "Time quantum must be positive, got {}",
                ticks
            )));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/*!
 * Simulation Configuration
 *
 * Parameters passed explicitly into every dispatch.
 */

use super::types::TimeQuantum;
use crate::core::errors::SchedulerError;
use crate::core::limits::{ENV_QUANTUM, ENV_START_TIME};
use crate::core::types::SchedulerResult;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What `ScheduleResult::start` reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTimeMode {
    /// Time the process was first given the CPU
    #[default]
    FirstDispatch,
    /// Arrival time for preemptive policies and Round-Robin; non-preemptive
    /// policies still report their dispatch time
    Arrival,
}

impl FromStr for StartTimeMode {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first_dispatch" | "dispatch" => Ok(Self::FirstDispatch),
            "arrival" => Ok(Self::Arrival),
            other => Err(SchedulerError::Configuration(format!(
                "invalid start time mode '{}'. Valid: first_dispatch, arrival",
                other
            ))),
        }
    }
}

/// Per-run simulation parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimulationConfig {
    /// Round-Robin quantum; falls back to `DEFAULT_QUANTUM` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    pub start_time: StartTimeMode,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.quantum = Some(quantum);
        self
    }

    pub fn with_start_time(mut self, mode: StartTimeMode) -> Self {
        self.start_time = mode;
        self
    }

    /// Quantum to use for Round-Robin
    pub fn quantum_or_default(&self) -> TimeQuantum {
        self.quantum.unwrap_or_default()
    }

    /// Load overrides from the environment
    ///
    /// Environment variables:
    /// - SCHEDSIM_QUANTUM: Round-Robin quantum in ticks
    /// - SCHEDSIM_START_TIME: `first_dispatch` (default) or `arrival`
    pub fn from_env() -> SchedulerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> SchedulerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_QUANTUM) {
            let ticks: i64 = raw.trim().parse().map_err(|_| {
                SchedulerError::Configuration(format!("{} is not an integer: '{}'", ENV_QUANTUM, raw))
            })?;
            config.quantum = Some(TimeQuantum::new(ticks)?);
        }

        if let Some(raw) = lookup(ENV_START_TIME) {
            config.start_time = raw.parse()?;
        }

        Ok(config)
    }
}

/*!
 * Workload Files
 * JSON description of a simulation request
 */

use super::config::{SimulationConfig, StartTimeMode};
use super::types::{Algorithm, TimeQuantum};
use crate::core::errors::SchedulerError;
use crate::core::types::SchedulerResult;
use crate::process::ProcessSpec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A simulation request as read from disk or stdin
///
/// ```json
/// { "algorithm": "RR", "quantum": 2,
///   "processes": [{ "pid": 1, "arrival": 0, "burst": 5 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Workload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<StartTimeMode>,
    pub processes: Vec<ProcessSpec>,
}

/// On-disk shape; the algorithm stays a raw identifier until after decoding
#[derive(Debug, Deserialize)]
struct WorkloadDocument {
    #[serde(default)]
    algorithm: Option<String>,
    #[serde(default)]
    quantum: Option<TimeQuantum>,
    #[serde(default)]
    start_time: Option<StartTimeMode>,
    processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Parse a workload
    ///
    /// Malformed JSON and bad field values are validation errors. An unknown
    /// algorithm identifier is a configuration error, as with [`Algorithm::from_str`].
    pub fn from_json(raw: &str) -> SchedulerResult<Self> {
        let document: WorkloadDocument = serde_json::from_str(raw)
            .map_err(|e| SchedulerError::Validation(format!("malformed workload: {}", e)))?;

        let algorithm = document
            .algorithm
            .as_deref()
            .map(Algorithm::from_str)
            .transpose()?;

        Ok(Self {
            algorithm,
            quantum: document.quantum,
            start_time: document.start_time,
            processes: document.processes,
        })
    }

    /// Layer the workload's own settings over `base`
    pub fn config(&self, base: SimulationConfig) -> SimulationConfig {
        SimulationConfig {
            quantum: self.quantum.or(base.quantum),
            start_time: self.start_time.unwrap_or(base.start_time),
        }
    }
}

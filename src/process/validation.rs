/*!
 * Process Descriptor Validation
 * Reject malformed input before any simulation state is built
 */

use super::types::{Process, ProcessSpec};
use crate::core::errors::SchedulerError;
use crate::core::types::{SchedulerResult, Ticks};
use std::collections::HashSet;

/// Validate one descriptor and convert it into a fresh working process
pub(crate) fn validate_spec(spec: &ProcessSpec, require_priority: bool) -> SchedulerResult<Process> {
    if spec.pid == 0 {
        return Err(SchedulerError::Validation(
            "pid must be a positive integer".to_string(),
        ));
    }

    let arrival = Ticks::try_from(spec.arrival).map_err(|_| {
        SchedulerError::Validation(format!(
            "Invalid values for Process P{}: arrival {} is negative",
            spec.pid, spec.arrival
        ))
    })?;

    if spec.burst <= 0 {
        return Err(SchedulerError::Validation(format!(
            "Invalid values for Process P{}: burst {} must be positive",
            spec.pid, spec.burst
        )));
    }

    if require_priority && spec.priority.is_none() {
        return Err(SchedulerError::Validation(format!(
            "Process P{} has no priority but a priority policy was selected",
            spec.pid
        )));
    }

    Ok(Process::new(
        spec.pid,
        arrival,
        spec.burst as Ticks,
        spec.priority,
    ))
}

/// Validate a whole descriptor set, preserving input order
///
/// Fails on the first bad descriptor; no processes are returned in that case.
pub fn validate_processes(
    specs: &[ProcessSpec],
    require_priority: bool,
) -> SchedulerResult<Vec<Process>> {
    let mut seen = HashSet::with_capacity(specs.len());
    let mut processes = Vec::with_capacity(specs.len());

    for spec in specs {
        if !seen.insert(spec.pid) {
            return Err(SchedulerError::Validation(format!(
                "duplicate pid {}",
                spec.pid
            )));
        }
        processes.push(validate_spec(spec, require_priority)?);
    }

    check_horizon(&processes)?;
    Ok(processes)
}

/// The clock never passes the latest arrival plus every burst; that bound
/// must fit in `Ticks`
fn check_horizon(processes: &[Process]) -> SchedulerResult<Ticks> {
    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |horizon, p| horizon.checked_add(p.burst))
        .ok_or_else(|| {
            SchedulerError::Validation(
                "total simulated time overflows the tick counter".to_string(),
            )
        })
}

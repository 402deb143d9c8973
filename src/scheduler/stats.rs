/*!
 * Scheduler Statistics
 * Aggregate metrics derived from completed results
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{SchedulerResult, Ticks};
use crate::process::ScheduleResult;
use serde::{Deserialize, Serialize};

/// Read-only summary over a completed result set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AggregateStatistics {
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    /// Completed processes per tick of elapsed time
    pub throughput: f64,
    pub total_processes: usize,
    /// Latest completion time
    pub total_time: Ticks,
}

impl AggregateStatistics {
    /// Compute statistics from a fully completed run
    pub fn from_results(results: &[ScheduleResult]) -> SchedulerResult<Self> {
        Self::from_partial(results.iter().map(Some))
    }

    /// Compute statistics, skipping entries for processes that never finished
    pub fn from_partial<'a, I>(results: I) -> SchedulerResult<Self>
    where
        I: IntoIterator<Item = Option<&'a ScheduleResult>>,
    {
        let mut count = 0usize;
        let mut turnaround_sum: u128 = 0;
        let mut waiting_sum: u128 = 0;
        let mut total_time: Ticks = 0;

        for result in results.into_iter().flatten() {
            count += 1;
            turnaround_sum += u128::from(result.turnaround);
            waiting_sum += u128::from(result.waiting);
            total_time = total_time.max(result.completion);
        }

        if count == 0 {
            return Err(SchedulerError::InsufficientData(
                "no completed processes to summarize".to_string(),
            ));
        }
        if total_time == 0 {
            return Err(SchedulerError::InsufficientData(
                "elapsed time is zero, throughput is undefined".to_string(),
            ));
        }

        let n = count as f64;
        Ok(Self {
            avg_turnaround: turnaround_sum as f64 / n,
            avg_waiting: waiting_sum as f64 / n,
            throughput: n / total_time as f64,
            total_processes: count,
            total_time,
        })
    }
}

/// Summarize a result set; fails with `InsufficientData` when it is empty
pub fn compute_statistics(results: &[ScheduleResult]) -> SchedulerResult<AggregateStatistics> {
    AggregateStatistics::from_results(results)
}

/*!
 * Shortest-Job-First (non-preemptive)
 */

use super::non_preemptive::run_to_completion;
use crate::process::Process;
use crate::scheduler::config::StartTimeMode;
use crate::scheduler::schedule::Schedule;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;

/// Picks the arrived process with the smallest burst and runs it to completion
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl SchedulingPolicy for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn simulate(&self, processes: &[Process], _start_time: StartTimeMode) -> Schedule {
        run_to_completion(processes, |p| p.burst, false)
    }
}

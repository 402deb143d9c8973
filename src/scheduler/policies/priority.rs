/*!
 * Priority Scheduling
 * Preemptive and non-preemptive variants; lower priority value wins
 */

use super::non_preemptive::run_to_completion;
use super::preemptive::run_unit_steps;
use super::priority_key;
use crate::process::Process;
use crate::scheduler::config::StartTimeMode;
use crate::scheduler::schedule::Schedule;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;

/// Re-evaluates priority every tick; a more important arrival preempts
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

impl SchedulingPolicy for PriorityPreemptive {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PriorityPreemptive
    }

    fn simulate(&self, processes: &[Process], start_time: StartTimeMode) -> Schedule {
        run_unit_steps(processes, priority_key, true, start_time)
    }
}

/// Picks by priority at each decision point and runs to completion
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityNonPreemptive;

impl SchedulingPolicy for PriorityNonPreemptive {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PriorityNonPreemptive
    }

    fn simulate(&self, processes: &[Process], _start_time: StartTimeMode) -> Schedule {
        run_to_completion(processes, priority_key, true)
    }
}

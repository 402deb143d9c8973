/*!
 * Scheduler Traits
 * Interface shared by every scheduling policy
 */

use super::config::StartTimeMode;
use super::schedule::Schedule;
use super::types::Algorithm;
use crate::process::Process;

/// A CPU scheduling policy
///
/// Implementations simulate over their own copy of `processes`; the caller's
/// slice is never mutated, so one process set can be fed to several policies
/// (or threads) in turn.
pub trait SchedulingPolicy: Send + Sync {
    /// Identifier this policy is dispatched under
    fn algorithm(&self) -> Algorithm;

    /// Run the simulation to completion
    fn simulate(&self, processes: &[Process], start_time: StartTimeMode) -> Schedule;
}

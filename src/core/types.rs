/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, in integer ticks since the start of a run
pub type Ticks = u64;

/// Priority level (lower value is more important)
pub type Priority = i32;

/// Common result type for simulator operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;

/*!
 * CPU Scheduling Simulator
 *
 * Simulates FCFS, SJF, SRTF, Round-Robin, and preemptive/non-preemptive
 * priority scheduling over an idealized integer time axis, producing
 * per-process timings, a Gantt timeline, and aggregate statistics.
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{SchedulerError, SerializableError};
pub use crate::core::types::{Pid, Priority, SchedulerResult, Ticks};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessSpec, ScheduleResult};
pub use scheduler::{
    compute_statistics, run_simulation, AggregateStatistics, Algorithm, AlgorithmRun, Dispatcher,
    GanttSegment, Schedule, SchedulingPolicy, SimulationConfig, StartTimeMode, TimeQuantum, Workload,
};

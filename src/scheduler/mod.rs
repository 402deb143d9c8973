/*!
 * Scheduler Module
 * Policy simulation, dispatch, timelines, and statistics
 */

pub mod config;
pub mod dispatcher;
pub mod gantt;
pub mod policies;
pub mod schedule;
pub mod stats;
pub mod traits;
pub mod types;
pub mod workload;

// Re-export public API
pub use config::{SimulationConfig, StartTimeMode};
pub use dispatcher::{run_simulation, AlgorithmRun, Dispatcher};
pub use gantt::{GanttSegment, TimelineBuilder};
pub use policies::{
    Fcfs, PriorityNonPreemptive, PriorityPreemptive, RoundRobin, ShortestJobFirst,
    ShortestRemainingTimeFirst,
};
pub use schedule::Schedule;
pub use stats::{compute_statistics, AggregateStatistics};
pub use traits::SchedulingPolicy;
pub use types::{Algorithm, TimeQuantum};
pub use workload::Workload;

/*!
 * Dispatcher
 * Maps an algorithm identifier onto its policy and runs it
 */

use super::config::SimulationConfig;
use super::policies::{
    Fcfs, PriorityNonPreemptive, PriorityPreemptive, RoundRobin, ShortestJobFirst,
    ShortestRemainingTimeFirst,
};
use super::schedule::Schedule;
use super::stats::AggregateStatistics;
use super::traits::SchedulingPolicy;
use super::types::{Algorithm, TimeQuantum};
use crate::core::errors::SchedulerError;
use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::SchedulerResult;
use crate::process::{validate_processes, ProcessSpec};
use serde::Serialize;
use std::{panic, thread};
use tracing::{debug, info, info_span};

/// Outcome of one algorithm in a side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub schedule: Schedule,
    /// Absent when the workload was empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<AggregateStatistics>,
}

/// Entry point for running simulations under an explicit configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    config: SimulationConfig,
}

impl Dispatcher {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Policy implementation for `algorithm`
    pub fn policy(&self, algorithm: Algorithm) -> Box<dyn SchedulingPolicy> {
        match algorithm {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(ShortestJobFirst),
            Algorithm::Srtf => Box::new(ShortestRemainingTimeFirst),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(self.config.quantum_or_default())),
            Algorithm::PriorityPreemptive => Box::new(PriorityPreemptive),
            Algorithm::PriorityNonPreemptive => Box::new(PriorityNonPreemptive),
        }
    }

    /// Validate `specs` and run `algorithm` over a fresh copy of them
    pub fn run(&self, algorithm: Algorithm, specs: &[ProcessSpec]) -> SchedulerResult<Schedule> {
        let span = info_span!("simulation", algorithm = %algorithm, processes = specs.len());
        let _enter = span.enter();

        let processes = validate_processes(specs, algorithm.uses_priority())?;
        let policy = self.policy(algorithm);
        debug!(start_time = ?self.config.start_time, "running {}", algorithm.label());

        let schedule = policy.simulate(&processes, self.config.start_time);
        info!(
            completed = schedule.results.len(),
            segments = schedule.gantt.len(),
            total_time = schedule.total_time(),
            "simulation finished"
        );
        Ok(schedule)
    }

    /// Like [`Dispatcher::run`], resolving the algorithm from its identifier
    pub fn run_named(&self, algorithm: &str, specs: &[ProcessSpec]) -> SchedulerResult<Schedule> {
        self.run(algorithm.parse()?, specs)
    }

    /// Run `algorithm` and summarize the result
    ///
    /// Statistics are omitted for an empty workload instead of failing.
    pub fn run_with_statistics(
        &self,
        algorithm: Algorithm,
        specs: &[ProcessSpec],
    ) -> SchedulerResult<AlgorithmRun> {
        let schedule = self.run(algorithm, specs)?;
        let statistics = if schedule.is_empty() {
            None
        } else {
            Some(AggregateStatistics::from_results(&schedule.results)?)
        };
        Ok(AlgorithmRun {
            algorithm,
            schedule,
            statistics,
        })
    }

    /// Run every algorithm on the same workload, one thread per algorithm
    ///
    /// Each run validates and copies the descriptors on its own; nothing
    /// mutable is shared. Descriptors without a priority get
    /// `DEFAULT_PRIORITY` here so the priority policies take part too. The
    /// first failing algorithm's error is returned.
    pub fn compare(&self, specs: &[ProcessSpec]) -> SchedulerResult<Vec<AlgorithmRun>> {
        let defaulted = specs.iter().filter(|s| s.priority.is_none()).count();
        if defaulted > 0 {
            debug!(defaulted, priority = DEFAULT_PRIORITY, "filling missing priorities");
        }
        let specs: Vec<ProcessSpec> = specs
            .iter()
            .map(|spec| ProcessSpec {
                priority: spec.priority.or(Some(DEFAULT_PRIORITY)),
                ..*spec
            })
            .collect();
        let specs = specs.as_slice();

        let outcomes: Vec<SchedulerResult<AlgorithmRun>> = thread::scope(|scope| {
            let handles: Vec<_> = Algorithm::ALL
                .iter()
                .map(|&algorithm| {
                    scope.spawn(move || self.run_with_statistics(algorithm, specs))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload))
                })
                .collect()
        });

        outcomes.into_iter().collect()
    }
}

/// Run one simulation
///
/// `quantum` is required for Round-Robin and ignored otherwise. A zero or
/// negative quantum fails before any simulation state is built.
pub fn run_simulation(
    algorithm: Algorithm,
    processes: &[ProcessSpec],
    quantum: Option<i64>,
) -> SchedulerResult<Schedule> {
    let mut config = SimulationConfig::default();
    if algorithm.requires_quantum() {
        let ticks = quantum.ok_or_else(|| {
            SchedulerError::Configuration(format!("{} requires a time quantum", algorithm.label()))
        })?;
        config.quantum = Some(TimeQuantum::new(ticks)?);
    }
    Dispatcher::new(config).run(algorithm, processes)
}

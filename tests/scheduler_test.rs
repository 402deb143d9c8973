/*!
 * Scheduler Tests
 * Reference scenarios for every policy plus dispatcher behavior
 */

use cpu_sched_sim::{
    compute_statistics, run_simulation, Algorithm, Dispatcher, GanttSegment, ProcessSpec,
    SchedulerError, SimulationConfig, StartTimeMode, TimeQuantum,
};
use pretty_assertions::assert_eq;

fn seg(pid: u32, start: u64, end: u64) -> GanttSegment {
    GanttSegment { pid, start, end }
}

/// P1(0,4), P2(1,3), P3(2,1)
fn three_processes() -> Vec<ProcessSpec> {
    ProcessSpec::sequential(&[(0, 4, None), (1, 3, None), (2, 1, None)])
}

#[test]
fn test_fcfs_reference_scenario() {
    let schedule = run_simulation(Algorithm::Fcfs, &three_processes(), None).unwrap();

    let completions: Vec<_> = schedule.results.iter().map(|r| (r.pid, r.completion)).collect();
    assert_eq!(completions, vec![(1, 4), (2, 7), (3, 8)]);

    let waiting: Vec<_> = schedule.results.iter().map(|r| r.waiting).collect();
    assert_eq!(waiting, vec![0, 3, 5]);

    assert_eq!(schedule.gantt, vec![seg(1, 0, 4), seg(2, 4, 7), seg(3, 7, 8)]);
}

#[test]
fn test_fcfs_orders_by_arrival_not_input() {
    let specs = ProcessSpec::sequential(&[(5, 2, None), (0, 3, None), (0, 1, None)]);
    let schedule = run_simulation(Algorithm::Fcfs, &specs, None).unwrap();

    let order: Vec<_> = schedule.gantt.iter().map(|s| s.pid).collect();
    assert_eq!(order, vec![2, 3, 1]);
    assert_eq!(schedule.result(1).unwrap().start, 5);
}

#[test]
fn test_sjf_reference_scenario() {
    let schedule = run_simulation(Algorithm::Sjf, &three_processes(), None).unwrap();

    assert_eq!(schedule.gantt, vec![seg(1, 0, 4), seg(3, 4, 5), seg(2, 5, 8)]);

    // Results are reported in pid order
    let waiting: Vec<_> = schedule.results.iter().map(|r| (r.pid, r.waiting)).collect();
    assert_eq!(waiting, vec![(1, 0), (2, 4), (3, 2)]);
}

#[test]
fn test_srtf_reference_scenario() {
    let specs = ProcessSpec::sequential(&[(0, 7, None), (2, 4, None), (4, 1, None), (5, 4, None)]);
    let schedule = run_simulation(Algorithm::Srtf, &specs, None).unwrap();

    assert_eq!(schedule.completion_order(), vec![3, 2, 4, 1]);

    let completions: Vec<_> = schedule.results.iter().map(|r| r.completion).collect();
    assert_eq!(completions, vec![16, 7, 5, 11]);

    assert_eq!(
        schedule.gantt,
        vec![
            seg(1, 0, 2),
            seg(2, 2, 4),
            seg(3, 4, 5),
            seg(2, 5, 7),
            seg(4, 7, 11),
            seg(1, 11, 16),
        ]
    );
    assert_eq!(schedule.busy_time(1), 7);
}

#[test]
fn test_round_robin_reference_scenario() {
    let specs = ProcessSpec::sequential(&[(0, 5, None), (1, 3, None), (2, 1, None)]);
    let schedule = run_simulation(Algorithm::RoundRobin, &specs, Some(2)).unwrap();

    assert_eq!(
        schedule.gantt,
        vec![
            seg(1, 0, 2),
            seg(2, 2, 4),
            seg(3, 4, 5),
            seg(1, 5, 7),
            seg(2, 7, 8),
            seg(1, 8, 9),
        ]
    );
    assert_eq!(schedule.busy_time(1), 5);

    let completions: Vec<_> = schedule.results.iter().map(|r| (r.pid, r.completion)).collect();
    assert_eq!(completions, vec![(1, 9), (2, 8), (3, 5)]);
}

#[test]
fn test_empty_input_for_every_algorithm() {
    let dispatcher = Dispatcher::default();
    for algorithm in Algorithm::ALL {
        let schedule = dispatcher.run(algorithm, &[]).unwrap();
        assert!(schedule.results.is_empty(), "{}", algorithm);
        assert!(schedule.gantt.is_empty(), "{}", algorithm);

        let err = compute_statistics(&schedule.results).unwrap_err();
        assert!(matches!(err, SchedulerError::InsufficientData(_)));
    }
}

#[test]
fn test_priority_policies_report_priority() {
    let specs = ProcessSpec::sequential(&[(0, 3, Some(2)), (1, 2, Some(1))]);

    let preemptive = run_simulation(Algorithm::PriorityPreemptive, &specs, None).unwrap();
    assert_eq!(preemptive.gantt, vec![seg(1, 0, 1), seg(2, 1, 3), seg(1, 3, 5)]);
    assert!(preemptive.results.iter().all(|r| r.priority.is_some()));

    let non_preemptive = run_simulation(Algorithm::PriorityNonPreemptive, &specs, None).unwrap();
    assert_eq!(non_preemptive.gantt, vec![seg(1, 0, 3), seg(2, 3, 5)]);

    let fcfs = run_simulation(Algorithm::Fcfs, &specs, None).unwrap();
    assert!(fcfs.results.iter().all(|r| r.priority.is_none()));
}

#[test]
fn test_priority_policy_requires_priorities() {
    let err = run_simulation(Algorithm::PriorityPreemptive, &three_processes(), None).unwrap_err();
    assert!(matches!(err, SchedulerError::Validation(_)));
}

#[test]
fn test_start_time_mode_applies_to_preemptive_only() {
    let specs = ProcessSpec::sequential(&[(0, 4, None), (1, 3, None), (2, 1, None)]);
    let legacy = Dispatcher::new(SimulationConfig::new().with_start_time(StartTimeMode::Arrival));

    let srtf = legacy.run(Algorithm::Srtf, &specs).unwrap();
    assert!(srtf.results.iter().all(|r| r.start == r.arrival));

    let sjf = legacy.run(Algorithm::Sjf, &specs).unwrap();
    assert_eq!(sjf.result(2).unwrap().start, 5);
}

#[test]
fn test_statistics_for_fcfs_reference() {
    let schedule = run_simulation(Algorithm::Fcfs, &three_processes(), None).unwrap();
    let stats = compute_statistics(&schedule.results).unwrap();

    assert_eq!(stats.total_processes, 3);
    assert_eq!(stats.total_time, 8);
    assert!((stats.avg_waiting - 8.0 / 3.0).abs() < 1e-9);
    assert!((stats.throughput - 0.375).abs() < 1e-9);
}

#[test]
fn test_dispatcher_uses_configured_quantum() {
    let specs = ProcessSpec::sequential(&[(0, 4, None), (0, 4, None)]);
    let dispatcher = Dispatcher::new(SimulationConfig::new().with_quantum(TimeQuantum::new(4).unwrap()));

    let schedule = dispatcher.run_named("round_robin", &specs).unwrap();
    assert_eq!(schedule.gantt, vec![seg(1, 0, 4), seg(2, 4, 8)]);
}

#[test]
fn test_repeated_runs_do_not_interfere() {
    let specs = three_processes();
    let dispatcher = Dispatcher::default();

    let first = dispatcher.run(Algorithm::Srtf, &specs).unwrap();
    let _ = dispatcher.run(Algorithm::Fcfs, &specs).unwrap();
    let second = dispatcher.run(Algorithm::Srtf, &specs).unwrap();

    assert_eq!(first, second);
    assert_eq!(specs, three_processes());
}

#[test]
fn test_oversized_workload_rejected_before_simulation() {
    let specs = ProcessSpec::sequential(&[(0, i64::MAX, None), (0, i64::MAX, None), (0, i64::MAX, None)]);
    for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::RoundRobin] {
        let err = run_simulation(algorithm, &specs, Some(2)).unwrap_err();
        assert!(matches!(err, SchedulerError::Validation(_)), "{}", algorithm);
    }
}

#[test]
fn test_compare_fills_missing_priorities() {
    let specs = ProcessSpec::sequential(&[(0, 4, None), (1, 3, None)]);
    let runs = Dispatcher::default().compare(&specs).unwrap();

    let algorithms: Vec<_> = runs.iter().map(|run| run.algorithm).collect();
    assert_eq!(algorithms, Algorithm::ALL.to_vec());
    assert!(runs.iter().all(|run| run.statistics.is_some()));
}

/*!
 * Shortest-Remaining-Time-First (preemptive)
 */

use super::preemptive::run_unit_steps;
use crate::process::Process;
use crate::scheduler::config::StartTimeMode;
use crate::scheduler::schedule::Schedule;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;

/// Runs the ready process with the least remaining time, re-evaluated every tick
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTimeFirst;

impl SchedulingPolicy for ShortestRemainingTimeFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn simulate(&self, processes: &[Process], start_time: StartTimeMode) -> Schedule {
        run_unit_steps(processes, |p| p.remaining, false, start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::gantt::GanttSegment;

    #[test]
    fn test_short_arrival_preempts() {
        let processes = vec![Process::new(1, 0, 5, None), Process::new(2, 1, 1, None)];
        let schedule = ShortestRemainingTimeFirst.simulate(&processes, StartTimeMode::default());

        assert_eq!(
            schedule.gantt,
            vec![
                GanttSegment { pid: 1, start: 0, end: 1 },
                GanttSegment { pid: 2, start: 1, end: 2 },
                GanttSegment { pid: 1, start: 2, end: 6 },
            ]
        );
        assert_eq!(schedule.result(2).unwrap().completion, 2);
        assert_eq!(schedule.result(1).unwrap().completion, 6);
    }

    #[test]
    fn test_no_segment_spans_idle_gap() {
        let processes = vec![Process::new(1, 0, 2, None), Process::new(2, 5, 1, None)];
        let schedule = ShortestRemainingTimeFirst.simulate(&processes, StartTimeMode::default());

        assert_eq!(
            schedule.gantt,
            vec![
                GanttSegment { pid: 1, start: 0, end: 2 },
                GanttSegment { pid: 2, start: 5, end: 6 },
            ]
        );
    }

    #[test]
    fn test_start_time_modes() {
        // P2 arrives at 1 but first runs at 4
        let processes = vec![Process::new(1, 0, 4, None), Process::new(2, 1, 5, None)];

        let schedule = ShortestRemainingTimeFirst.simulate(&processes, StartTimeMode::FirstDispatch);
        assert_eq!(schedule.result(2).unwrap().start, 4);

        let legacy = ShortestRemainingTimeFirst.simulate(&processes, StartTimeMode::Arrival);
        assert_eq!(legacy.result(2).unwrap().start, 1);
        assert_eq!(legacy.results[1].waiting, schedule.results[1].waiting);
    }
}

//! Non-preemptive policies: FCFS, SJF, Priority.
//!
//! All three share one engine: a simulated clock, a ready set of
//! arrived-but-unfinished processes, and a selection rule that picks
//! exactly one ready process to run to completion. When the ready set is
//! empty the clock jumps to the next arrival; idle gaps are implicit and
//! record no slice.
//!
//! # Selection
//!
//! A [`SelectionRule`] orders the ready set; the engine takes the first
//! minimum. The ready set is admitted in (arrival, input index) order, so
//! rules only need to break ties down to arrival time — a full tie there
//! resolves to original input order automatically.
//!
//! # Complexity
//! O(n^2) selection worst case, O(n log n) with the admission sort
//! dominating for workloads that keep the ready set small.

use std::cmp::Ordering;

use crate::models::{ExecutionSlice, ProcessInput, ProcessResult};

use super::{assemble_results, ArrivalFeed};

/// A rule picking which ready process runs next.
///
/// # Ordering Convention
/// `Ordering::Less` means "runs first". Rules must define a total order
/// down to arrival time; the engine's first-minimum scan supplies the
/// final input-order tie-break.
pub trait SelectionRule {
    /// Rule name (e.g. "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Compares two ready processes; `Less` schedules `a` before `b`.
    fn compare(&self, a: &ProcessInput, b: &ProcessInput) -> Ordering;
}

/// First-Come-First-Served: earliest arrival runs first.
#[derive(Debug, Clone, Copy)]
pub struct FirstComeFirstServed;

impl SelectionRule for FirstComeFirstServed {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn compare(&self, a: &ProcessInput, b: &ProcessInput) -> Ordering {
        a.arrival_time.cmp(&b.arrival_time)
    }
}

/// Shortest-Job-First: smallest burst, then earliest arrival.
///
/// Minimizes average waiting time among non-preemptive policies when all
/// processes are available (Smith 1956).
#[derive(Debug, Clone, Copy)]
pub struct ShortestJobFirst;

impl SelectionRule for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn compare(&self, a: &ProcessInput, b: &ProcessInput) -> Ordering {
        a.burst_time
            .partial_cmp(&b.burst_time)
            .unwrap_or(Ordering::Equal)
            .then(a.arrival_time.cmp(&b.arrival_time))
    }
}

/// Priority scheduling: lowest priority value (most urgent), then
/// earliest arrival.
#[derive(Debug, Clone, Copy)]
pub struct PriorityScheduling;

impl SelectionRule for PriorityScheduling {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn compare(&self, a: &ProcessInput, b: &ProcessInput) -> Ordering {
        a.priority
            .cmp(&b.priority)
            .then(a.arrival_time.cmp(&b.arrival_time))
    }
}

/// Runs a workload under a non-preemptive selection rule.
///
/// Each selected process receives exactly one slice `[t, t + burst)`.
/// Returns results in workload order.
pub fn run_to_completion(processes: &[ProcessInput], rule: &dyn SelectionRule) -> Vec<ProcessResult> {
    let mut feed = ArrivalFeed::new(processes);
    let mut ready: Vec<usize> = Vec::new();
    let mut slices: Vec<Vec<ExecutionSlice>> = vec![Vec::new(); processes.len()];
    let mut t = 0.0_f64;

    loop {
        feed.admit_until(t, &mut ready);

        if ready.is_empty() {
            match feed.next_arrival() {
                // Idle gap: jump to the next arrival, record nothing.
                Some(next) => {
                    t = t.max(next);
                    continue;
                }
                None => break,
            }
        }

        // First minimum wins, so equal candidates resolve to the earliest
        // ready-set position (arrival order, then input order).
        let pos = ready
            .iter()
            .enumerate()
            .min_by(|(_, &a), (_, &b)| rule.compare(&processes[a], &processes[b]))
            .map(|(pos, _)| pos)
            .expect("ready set is non-empty");
        let idx = ready.remove(pos);

        let burst = processes[idx].burst_time;
        slices[idx].push(ExecutionSlice::new(t, t + burst));
        t += burst;
    }

    assemble_results(processes, slices)
}

/// First-Come-First-Served over a workload.
pub fn fcfs(processes: &[ProcessInput]) -> Vec<ProcessResult> {
    run_to_completion(processes, &FirstComeFirstServed)
}

/// Shortest-Job-First over a workload.
pub fn sjf(processes: &[ProcessInput]) -> Vec<ProcessResult> {
    run_to_completion(processes, &ShortestJobFirst)
}

/// Priority scheduling over a workload.
pub fn priority(processes: &[ProcessInput]) -> Vec<ProcessResult> {
    run_to_completion(processes, &PriorityScheduling)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn by_id<'a>(results: &'a [ProcessResult], id: &str) -> &'a ProcessResult {
        results.iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn test_fcfs_single_process() {
        let workload = vec![ProcessInput::new("p1", 0, 5.0).with_priority(1)];
        let results = fcfs(&workload);

        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.start_time, 0.0);
        assert_eq!(r.finish_time, 5.0);
        assert!((r.waiting_time - 0.0).abs() < EPS);
        assert!((r.response_time - 0.0).abs() < EPS);
        assert_eq!(r.dispatch_count(), 1);
    }

    #[test]
    fn test_fcfs_ordering() {
        // p2 is shorter but arrives later: FCFS makes it wait.
        let workload = vec![
            ProcessInput::new("p1", 0, 4.0),
            ProcessInput::new("p2", 1, 2.0),
        ];
        let results = fcfs(&workload);

        assert!((by_id(&results, "p1").finish_time - 4.0).abs() < EPS);
        assert!((by_id(&results, "p2").finish_time - 6.0).abs() < EPS);
        assert!((by_id(&results, "p2").waiting_time - 3.0).abs() < EPS);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        // Nothing arrives until t=3; the gap records no slice.
        let workload = vec![ProcessInput::new("p1", 3, 2.0)];
        let results = fcfs(&workload);

        let r = &results[0];
        assert_eq!(r.start_time, 3.0);
        assert_eq!(r.finish_time, 5.0);
        assert!((r.waiting_time - 0.0).abs() < EPS);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let workload = vec![
            ProcessInput::new("first", 0, 1.0),
            ProcessInput::new("second", 0, 1.0),
        ];
        let results = fcfs(&workload);
        assert_eq!(by_id(&results, "first").start_time, 0.0);
        assert_eq!(by_id(&results, "second").start_time, 1.0);
    }

    #[test]
    fn test_sjf_reorders_by_burst() {
        // Both available at t=0: the short job runs first.
        let workload = vec![
            ProcessInput::new("p1", 0, 4.0),
            ProcessInput::new("p2", 0, 2.0),
        ];
        let results = sjf(&workload);

        assert!((by_id(&results, "p2").finish_time - 2.0).abs() < EPS);
        assert!((by_id(&results, "p1").finish_time - 6.0).abs() < EPS);
        assert!((by_id(&results, "p1").waiting_time - 2.0).abs() < EPS);
    }

    #[test]
    fn test_sjf_no_preemption_of_running_job() {
        // Long job starts at 0; a shorter one arriving at 1 must wait for
        // the running job to finish (non-preemptive).
        let workload = vec![
            ProcessInput::new("long", 0, 10.0),
            ProcessInput::new("short", 1, 1.0),
        ];
        let results = sjf(&workload);

        assert_eq!(by_id(&results, "long").start_time, 0.0);
        assert_eq!(by_id(&results, "short").start_time, 10.0);
    }

    #[test]
    fn test_sjf_burst_tie_breaks_by_arrival() {
        // Both 3-unit jobs are ready when the blocker finishes at t=5;
        // equal burst, so the earlier arrival (t=1) runs first.
        let workload = vec![
            ProcessInput::new("blocker", 0, 5.0),
            ProcessInput::new("later", 2, 3.0),
            ProcessInput::new("earlier", 1, 3.0),
        ];
        let results = sjf(&workload);
        assert_eq!(by_id(&results, "earlier").start_time, 5.0);
        assert_eq!(by_id(&results, "later").start_time, 8.0);
    }

    #[test]
    fn test_priority_selects_most_urgent() {
        // Lower value = more urgent.
        let workload = vec![
            ProcessInput::new("bg", 0, 2.0).with_priority(9),
            ProcessInput::new("fg", 0, 2.0).with_priority(1),
        ];
        let results = priority(&workload);

        assert_eq!(by_id(&results, "fg").start_time, 0.0);
        assert_eq!(by_id(&results, "bg").start_time, 2.0);
    }

    #[test]
    fn test_priority_considers_only_arrived() {
        // The urgent process arrives after the mild one started: it waits.
        let workload = vec![
            ProcessInput::new("mild", 0, 5.0).with_priority(8),
            ProcessInput::new("urgent", 2, 1.0).with_priority(1),
        ];
        let results = priority(&workload);

        assert_eq!(by_id(&results, "mild").start_time, 0.0);
        assert_eq!(by_id(&results, "urgent").start_time, 5.0);
    }

    #[test]
    fn test_work_conservation_and_single_slice() {
        let workload = vec![
            ProcessInput::new("a", 0, 3.5),
            ProcessInput::new("b", 2, 1.25).with_priority(1),
            ProcessInput::new("c", 9, 2.0),
        ];
        for results in [fcfs(&workload), sjf(&workload), priority(&workload)] {
            for r in &results {
                assert_eq!(r.dispatch_count(), 1);
                assert!((r.busy_time() - r.burst_time).abs() < EPS);
                assert!(r.waiting_time >= -EPS);
                assert!(r.turnaround_time >= r.burst_time - EPS);
                assert!(r.response_time >= -EPS);
            }
        }
    }

    #[test]
    fn test_results_in_workload_order() {
        let workload = vec![
            ProcessInput::new("z", 4, 1.0),
            ProcessInput::new("a", 0, 1.0),
        ];
        let results = fcfs(&workload);
        assert_eq!(results[0].id, "z");
        assert_eq!(results[1].id, "a");
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(FirstComeFirstServed.name(), "FCFS");
        assert_eq!(ShortestJobFirst.name(), "SJF");
        assert_eq!(PriorityScheduling.name(), "Priority");
    }
}

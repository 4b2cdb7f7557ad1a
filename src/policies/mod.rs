//! Scheduling policies.
//!
//! Five independent algorithms, each consuming a workload (and, for the
//! hybrid policy, predictions) and producing one timeline per process:
//!
//! | Policy | Kind | Selection |
//! |--------|------|-----------|
//! | FCFS | non-preemptive | earliest arrival |
//! | SJF | non-preemptive | shortest burst |
//! | Priority | non-preemptive | lowest priority value |
//! | Round-Robin | preemptive | FIFO, fixed base quantum |
//! | Hybrid-AI | preemptive | predicted priority, per-process quantum |
//!
//! All ties fall through to earlier arrival and finally original input
//! order — a documented total order, never the incidental ordering of an
//! underlying collection. Ready sets are owned, per-run, index-based
//! sequences, so concurrent independent runs cannot interfere.
//!
//! Policies assume a validated workload (see [`crate::validation`]); the
//! aggregator enforces this at the boundary.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod hybrid;
mod nonpreemptive;
mod round_robin;

pub use hybrid::hybrid_ai;
pub use nonpreemptive::{
    fcfs, priority, run_to_completion, sjf, FirstComeFirstServed, PriorityScheduling,
    SelectionRule, ShortestJobFirst,
};
pub use round_robin::round_robin;

use crate::models::{ExecutionSlice, ProcessInput, ProcessResult};

/// Remaining work at or below this threshold counts as completion, so
/// floating-point subtraction dust cannot spin a degenerate extra slice.
pub(crate) const TIME_EPSILON: f64 = 1e-9;

/// Admission cursor over a workload, ordered by (arrival, input index).
///
/// Every simulation admits processes the same way: all processes with
/// `arrival_time <= t` enter the ready set in arrival order, equal
/// arrivals in input order. The cursor owns a sorted index sequence and
/// hands out indices as the clock passes their arrival times.
pub(crate) struct ArrivalFeed {
    /// Workload indices sorted by (arrival_time, index).
    order: Vec<usize>,
    /// Next unadmitted position in `order`.
    cursor: usize,
    arrivals: Vec<i64>,
}

impl ArrivalFeed {
    pub(crate) fn new(processes: &[ProcessInput]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, i));
        let arrivals = processes.iter().map(|p| p.arrival_time).collect();
        Self {
            order,
            cursor: 0,
            arrivals,
        }
    }

    /// Pushes every not-yet-admitted index with `arrival <= t` into `ready`.
    pub(crate) fn admit_until(&mut self, t: f64, ready: &mut Vec<usize>) {
        while self.cursor < self.order.len() {
            let idx = self.order[self.cursor];
            if (self.arrivals[idx] as f64) <= t {
                ready.push(idx);
                self.cursor += 1;
            } else {
                break;
            }
        }
    }

    /// Arrival time of the next unadmitted process, if any.
    pub(crate) fn next_arrival(&self) -> Option<f64> {
        self.order
            .get(self.cursor)
            .map(|&idx| self.arrivals[idx] as f64)
    }
}

/// Assembles per-index slice logs into results in workload order.
pub(crate) fn assemble_results(
    processes: &[ProcessInput],
    mut slices: Vec<Vec<ExecutionSlice>>,
) -> Vec<ProcessResult> {
    processes
        .iter()
        .enumerate()
        .map(|(i, p)| ProcessResult::from_slices(p, std::mem::take(&mut slices[i])))
        .collect()
}

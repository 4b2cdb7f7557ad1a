//! Round-Robin: preemptive fair sharing with a fixed time slice.
//!
//! A FIFO ready queue and a caller-supplied base quantum. The head process
//! runs for `min(remaining, quantum)`; if unfinished it rejoins the tail,
//! but only after any processes that arrived during its slice have been
//! enqueued, so newcomers are served in strict arrival order.
//!
//! # Complexity
//! O(total_burst / quantum) dispatches; each dispatch is O(1).

use std::collections::VecDeque;

use crate::models::{ExecutionSlice, ProcessInput, ProcessResult};

use super::{assemble_results, ArrivalFeed, TIME_EPSILON};

/// Runs a workload under Round-Robin with the given base quantum.
///
/// `base_quantum` must be positive (the aggregator validates this); a
/// quantum at or above the longest burst degenerates to FCFS order.
/// Returns results in workload order.
pub fn round_robin(processes: &[ProcessInput], base_quantum: f64) -> Vec<ProcessResult> {
    let mut feed = ArrivalFeed::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut remaining: Vec<f64> = processes.iter().map(|p| p.burst_time).collect();
    let mut slices: Vec<Vec<ExecutionSlice>> = vec![Vec::new(); processes.len()];
    let mut t = 0.0_f64;

    loop {
        {
            // Admission goes through a Vec to share the feed's interface.
            let mut admitted = Vec::new();
            feed.admit_until(t, &mut admitted);
            queue.extend(admitted);
        }

        let idx = match queue.pop_front() {
            Some(idx) => idx,
            None => match feed.next_arrival() {
                // Idle gap: jump to the next arrival, record nothing.
                Some(next) => {
                    t = t.max(next);
                    continue;
                }
                None => break,
            },
        };

        let run = remaining[idx].min(base_quantum);
        slices[idx].push(ExecutionSlice::new(t, t + run));
        t += run;
        remaining[idx] -= run;

        // Arrivals during this slice enter ahead of the preempted process.
        let mut admitted = Vec::new();
        feed.admit_until(t, &mut admitted);
        queue.extend(admitted);

        if remaining[idx] > TIME_EPSILON {
            queue.push_back(idx);
        }
    }

    assemble_results(processes, slices)
}

//! Hybrid-AI: prediction-guided adaptive-quantum scheduling.
//!
//! Combines predicted priority ordering with a predicted per-process time
//! slice. Admission works exactly like Round-Robin, but selection is
//! re-evaluated at every dispatch: the ready process with the lowest
//! predicted priority wins (ties: earlier arrival, then input order), and
//! it runs for `min(remaining, its predicted_quantum)`. An unfinished
//! process returns to the ready set and competes again rather than
//! queueing at a FIFO tail — effective priority therefore shifts as new
//! processes arrive, which is what distinguishes this policy from static
//! Priority scheduling.
//!
//! Predictions shape *when* work runs, never how much: every process still
//! receives exactly its declared burst time.

use crate::models::{ExecutionSlice, PredictionMap, ProcessInput, ProcessResult};

use super::{assemble_results, ArrivalFeed, TIME_EPSILON};

/// Runs a workload under the hybrid policy with the given predictions.
///
/// Returns results in workload order.
///
/// # Panics
/// Panics if `predictions` lacks an entry for a workload id. The
/// aggregator enforces this precondition with
/// [`crate::validation::validate_predictions`] before dispatching; direct
/// callers must do the same.
pub fn hybrid_ai(processes: &[ProcessInput], predictions: &PredictionMap) -> Vec<ProcessResult> {
    // Per-index prediction view.
    let predicted: Vec<(i32, f64)> = processes
        .iter()
        .map(|p| {
            let attrs = predictions
                .get(&p.id)
                .unwrap_or_else(|| panic!("no prediction for process '{}'", p.id));
            (attrs.predicted_priority, attrs.predicted_quantum)
        })
        .collect();

    let mut feed = ArrivalFeed::new(processes);
    let mut ready: Vec<usize> = Vec::new();
    let mut remaining: Vec<f64> = processes.iter().map(|p| p.burst_time).collect();
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

        // Re-ranked on every dispatch: lowest predicted priority, then
        // earliest arrival, then input order. The index tie-break must be
        // explicit here: requeued processes re-enter at the back of the
        // ready set, so ready-set position no longer tracks input order.
        let pos = ready
            .iter()
            .enumerate()
            .min_by(|(_, &a), (_, &b)| {
                predicted[a]
                    .0
                    .cmp(&predicted[b].0)
                    .then(processes[a].arrival_time.cmp(&processes[b].arrival_time))
                    .then(a.cmp(&b))
            })
            .map(|(pos, _)| pos)
            .expect("ready set is non-empty");
        let idx = ready.remove(pos);

        let run = remaining[idx].min(predicted[idx].1);
        slices[idx].push(ExecutionSlice::new(t, t + run));
        t += run;
        remaining[idx] -= run;

        if remaining[idx] > TIME_EPSILON {
            ready.push(idx);
        }
    }

    assemble_results(processes, slices)
}

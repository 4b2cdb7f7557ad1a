//! Runs every policy against one workload.
//!
//! The aggregator is the crate's main entry point: it validates inputs at
//! the boundary, invokes the predictor once, runs the five policies in a
//! fixed, documented order (FCFS, SJF, Priority, Round-Robin, Hybrid-AI),
//! and returns one [`SchedulingResult`] per policy. Pure and idempotent:
//! identical workload and quantum yield identical ordered results.
//!
//! Each policy operates on a defensive copy of the workload, so policies
//! cannot observe each other's intermediate state and independent calls
//! are safe to issue concurrently over independent workloads.

use crate::models::{Algorithm, PredictionMap, ProcessInput, SchedulingResult};
use crate::policies::{fcfs, hybrid_ai, priority, round_robin, sjf};
use crate::predictor::predict;
use crate::validation::{
    validate_predictions, validate_quantum, validate_workload, ValidationError,
};

/// The fixed policy execution order.
pub const POLICY_ORDER: [Algorithm; 5] = [
    Algorithm::Fcfs,
    Algorithm::Sjf,
    Algorithm::Priority,
    Algorithm::RoundRobin,
    Algorithm::HybridAi,
];

/// Runs all five policies against a workload.
///
/// Validates the workload and quantum, predicts once, and hands the
/// predictions only to the policies that consume them. Fails atomically
/// with every detected input problem; no partial results.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::aggregator::run;
/// use cpu_sched_sim::models::{Algorithm, ProcessInput};
///
/// let workload = vec![
///     ProcessInput::new("p1", 0, 4.0).with_priority(2),
///     ProcessInput::new("p2", 1, 2.0).with_priority(7),
/// ];
/// let results = run(&workload, 2.0).unwrap();
///
/// assert_eq!(results.len(), 5);
/// assert_eq!(results[0].algorithm, Algorithm::Fcfs);
/// assert_eq!(results[4].algorithm, Algorithm::HybridAi);
/// ```
pub fn run(
    processes: &[ProcessInput],
    base_quantum: f64,
) -> Result<Vec<SchedulingResult>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_workload(processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_quantum(base_quantum) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    // Workload already validated, so the predictor cannot fail here.
    let predictions = predict(processes)?;
    Ok(run_policies(processes, base_quantum, &predictions))
}

/// Runs all five policies with caller-supplied predictions.
///
/// The presentation layer may precompute predictions (to display them) and
/// pass them back in; the map must then cover every workload id.
pub fn run_with_predictions(
    processes: &[ProcessInput],
    base_quantum: f64,
    predictions: &PredictionMap,
) -> Result<Vec<SchedulingResult>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_workload(processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_quantum(base_quantum) {
        errors.extend(e);
    }
    if let Err(e) = validate_predictions(processes, predictions) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(run_policies(processes, base_quantum, predictions))
}

/// Dispatches each validated policy over its own copy of the workload.
fn run_policies(
    processes: &[ProcessInput],
    base_quantum: f64,
    predictions: &PredictionMap,
) -> Vec<SchedulingResult> {
    POLICY_ORDER
        .iter()
        .map(|&algorithm| {
            let workload = processes.to_vec();
            let results = match algorithm {
                Algorithm::Fcfs => fcfs(&workload),
                Algorithm::Sjf => sjf(&workload),
                Algorithm::Priority => priority(&workload),
                Algorithm::RoundRobin => round_robin(&workload, base_quantum),
                Algorithm::HybridAi => hybrid_ai(&workload, predictions),
            };
            SchedulingResult::new(algorithm, results)
        })
        .collect()
}

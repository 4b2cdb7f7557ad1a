//! Closed-form burst/priority/quantum predictor.
//!
//! Maps a workload to per-process [`PredictedAttributes`] consumed by the
//! Hybrid-AI policy. Deliberately a documented, deterministic heuristic
//! rather than a trained model: given the same workload it always returns
//! the same predictions — no hidden state, no randomness, no I/O.
//!
//! # Formulas
//!
//! | Output | Definition |
//! |--------|-----------|
//! | `confidence` | `1 - |cpu_hint - io_prob|` |
//! | `predicted_burst_time` | `burst * (1 + cpu_hint - io_prob)`, min 0.1 |
//! | `predicted_priority` | `round(clamp(priority - 2*cpu_hint + 2*io_prob, 1, 10))` |
//! | `predicted_quantum` | `clamp(predicted_burst * (0.5 + 0.5*confidence), 0.5, 20)` |
//!
//! CPU-bound hints lengthen the effective demand signal used for planning
//! and nudge urgency up (lower numeric priority); I/O-bound hints do the
//! opposite. Confidence is highest when the two hints disagree least.

use crate::models::{PredictedAttributes, PredictionMap, ProcessInput};
use crate::validation::{validate_workload, ValidationError};

/// Floor for the predicted burst signal.
const MIN_PREDICTED_BURST: f64 = 0.1;
/// Predicted quantum bounds.
const MIN_QUANTUM: f64 = 0.5;
const MAX_QUANTUM: f64 = 20.0;

/// Predicts per-process scheduling attributes for a workload.
///
/// Pure and total: identical workloads yield identical maps. Fails
/// atomically with every detected input problem if the workload is
/// malformed (empty, duplicate ids, hints outside [0, 1], burst <= 0).
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessInput;
/// use cpu_sched_sim::predictor::predict;
///
/// let workload = vec![ProcessInput::new("p1", 0, 5.0)
///     .with_priority(1)
///     .with_cpu_hint(0.5)
///     .with_io_probability(0.5)];
///
/// let predictions = predict(&workload).unwrap();
/// let p1 = &predictions["p1"];
/// assert!((p1.confidence - 1.0).abs() < 1e-9);
/// assert!((p1.predicted_burst_time - 5.0).abs() < 1e-9);
/// ```
pub fn predict(processes: &[ProcessInput]) -> Result<PredictionMap, Vec<ValidationError>> {
    validate_workload(processes)?;

    Ok(processes
        .iter()
        .map(|p| (p.id.clone(), predict_one(p)))
        .collect())
}

/// Applies the closed-form heuristic to one (already validated) process.
fn predict_one(p: &ProcessInput) -> PredictedAttributes {
    let cpu = p.cpu_utilization_hint;
    let io = p.io_bound_probability;

    let confidence = 1.0 - (cpu - io).abs();

    let predicted_burst_time = (p.burst_time * (1.0 + cpu - io)).max(MIN_PREDICTED_BURST);

    let predicted_priority =
        (p.priority as f64 - 2.0 * cpu + 2.0 * io).clamp(1.0, 10.0).round() as i32;

    let predicted_quantum =
        (predicted_burst_time * (0.5 + 0.5 * confidence)).clamp(MIN_QUANTUM, MAX_QUANTUM);

    PredictedAttributes {
        predicted_burst_time,
        predicted_priority,
        predicted_quantum,
        confidence,
    }
}

//! Predicted per-process attributes.
//!
//! The predictor maps each process to an alternate burst/priority/quantum
//! signal plus a confidence score. Predictions influence *how* and *when*
//! the hybrid policy schedules work, never how much work is completed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Predictions keyed by process id.
///
/// A `BTreeMap` rather than a `HashMap` so iteration and serialization
/// order are deterministic: identical workloads must yield byte-identical
/// serialized results.
pub type PredictionMap = BTreeMap<String, PredictedAttributes>;

/// Predicted attributes for one process.
///
/// Produced fresh on every predictor invocation; never persisted or reused
/// across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedAttributes {
    /// Effective CPU demand signal used for planning (> 0).
    pub predicted_burst_time: f64,
    /// Adjusted urgency on the same [1, 10] scale as declared priority.
    pub predicted_priority: i32,
    /// Suggested time slice for this process, in [0.5, 20].
    pub predicted_quantum: f64,
    /// Stability of the hint signal (0.0..=1.0, higher = more stable).
    pub confidence: f64,
}

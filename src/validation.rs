//! Input validation for simulation runs.
//!
//! Checks workload and parameter integrity at the predictor/aggregator
//! boundary, before any simulation starts. Detects:
//! - Empty workloads
//! - Duplicate process IDs
//! - Non-positive burst times, negative arrival times
//! - Priorities outside [1, 10], hints outside [0, 1]
//! - Non-positive quanta, predictions missing a workload ID
//!
//! Validation is atomic: on failure no partial result is produced, and all
//! detected problems are reported, not just the first. Once inputs pass,
//! the simulation itself cannot fail — every policy provably terminates
//! because total remaining work strictly decreases each step.

use crate::models::{PredictionMap, ProcessInput};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload contains no processes.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process declares a burst time <= 0.
    NonPositiveBurstTime,
    /// A process declares an arrival time < 0.
    NegativeArrivalTime,
    /// A priority lies outside [1, 10].
    PriorityOutOfRange,
    /// A CPU or I/O hint lies outside [0, 1].
    HintOutOfRange,
    /// The base quantum is <= 0.
    NonPositiveQuantum,
    /// A prediction map lacks an entry for a workload process.
    MissingPrediction,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Whether `value` lies in `[lo, hi]`. NaN fails every comparison and is
/// therefore rejected by the same check.
#[inline]
fn in_range(value: f64, lo: f64, hi: f64) -> bool {
    value >= lo && value <= hi
}

/// Validates a workload.
///
/// Checks:
/// 1. Workload is non-empty
/// 2. No duplicate process IDs
/// 3. `burst_time > 0` (finite)
/// 4. `arrival_time >= 0`
/// 5. `priority` in [1, 10]
/// 6. `cpu_utilization_hint` and `io_bound_probability` in [0, 1]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[ProcessInput]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload contains no processes",
        ));
    }

    let mut seen_ids = HashSet::new();
    for p in processes {
        if !seen_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if !(p.burst_time > 0.0 && p.burst_time.is_finite()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurstTime,
                format!("Process '{}' has burst time {} (must be > 0)", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!(
                    "Process '{}' has arrival time {} (must be >= 0)",
                    p.id, p.arrival_time
                ),
            ));
        }

        if !(1..=10).contains(&p.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Process '{}' has priority {} (must be in [1, 10])",
                    p.id, p.priority
                ),
            ));
        }

        if !in_range(p.cpu_utilization_hint, 0.0, 1.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HintOutOfRange,
                format!(
                    "Process '{}' has CPU utilization hint {} (must be in [0, 1])",
                    p.id, p.cpu_utilization_hint
                ),
            ));
        }

        if !in_range(p.io_bound_probability, 0.0, 1.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HintOutOfRange,
                format!(
                    "Process '{}' has I/O-bound probability {} (must be in [0, 1])",
                    p.id, p.io_bound_probability
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a base quantum for the preemptive policies.
pub fn validate_quantum(base_quantum: f64) -> ValidationResult {
    if base_quantum > 0.0 && base_quantum.is_finite() {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Base quantum {base_quantum} (must be > 0)"),
        )])
    }
}

/// Validates that `predictions` covers every process in the workload.
pub fn validate_predictions(
    processes: &[ProcessInput],
    predictions: &PredictionMap,
) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|p| !predictions.contains_key(&p.id))
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::MissingPrediction,
                format!("No prediction supplied for process '{}'", p.id),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PredictedAttributes;

    fn sample_workload() -> Vec<ProcessInput> {
        vec![
            ProcessInput::new("p1", 0, 5.0)
                .with_priority(1)
                .with_cpu_hint(0.5)
                .with_io_probability(0.5),
            ProcessInput::new("p2", 2, 3.0).with_priority(10),
        ]
    }

    #[test]
    fn test_valid_workload() {
        assert!(validate_workload(&sample_workload()).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        let errors = validate_workload(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyWorkload));
    }

    #[test]
    fn test_duplicate_id() {
        let workload = vec![
            ProcessInput::new("p1", 0, 1.0),
            ProcessInput::new("p1", 1, 2.0),
        ];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_burst() {
        let workload = vec![ProcessInput::new("p1", 0, 0.0)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurstTime));
    }

    #[test]
    fn test_nan_burst_rejected() {
        let workload = vec![ProcessInput::new("p1", 0, f64::NAN)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurstTime));
    }

    #[test]
    fn test_negative_arrival() {
        let workload = vec![ProcessInput::new("p1", -1, 1.0)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrivalTime));
    }

    #[test]
    fn test_priority_out_of_range() {
        for bad in [0, 11] {
            let workload = vec![ProcessInput::new("p1", 0, 1.0).with_priority(bad)];
            let errors = validate_workload(&workload).unwrap_err();
            assert!(errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::PriorityOutOfRange));
        }
    }

    #[test]
    fn test_hint_out_of_range() {
        let workload = vec![ProcessInput::new("p1", 0, 1.0).with_cpu_hint(1.5)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HintOutOfRange));

        let workload = vec![ProcessInput::new("p1", 0, 1.0).with_io_probability(-0.1)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HintOutOfRange));
    }

    #[test]
    fn test_multiple_errors_collected() {
        // Duplicate ID + bad burst + bad priority in one pass.
        let workload = vec![
            ProcessInput::new("p1", 0, -1.0),
            ProcessInput::new("p1", 0, 1.0).with_priority(99),
        ];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(2.0).is_ok());
        assert!(validate_quantum(0.0).is_err());
        assert!(validate_quantum(-1.0).is_err());
        assert!(validate_quantum(f64::NAN).is_err());
    }

    #[test]
    fn test_missing_prediction() {
        let workload = sample_workload();
        let mut predictions = PredictionMap::new();
        predictions.insert(
            "p1".to_string(),
            PredictedAttributes {
                predicted_burst_time: 5.0,
                predicted_priority: 1,
                predicted_quantum: 2.5,
                confidence: 1.0,
            },
        );

        let errors = validate_predictions(&workload, &predictions).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingPrediction);
        assert!(errors[0].message.contains("p2"));
    }
}

//! Execution timeline models.
//!
//! An [`ExecutionSlice`] is one contiguous span during which a process
//! occupied the CPU; a [`ProcessResult`] is a process's complete outcome,
//! with waiting/turnaround/response derived from its slice history.
//!
//! # Invariants
//!
//! For every `ProcessResult` built through [`ProcessResult::from_slices`]:
//!
//! - `arrival_time <= start_time <= finish_time`
//! - `turnaround_time = finish_time - arrival_time`
//! - `waiting_time = turnaround_time - burst_time`
//! - `response_time = slice_history[0].start - arrival_time`
//! - slices are ordered, non-overlapping, and time-ascending

use serde::{Deserialize, Serialize};

use super::ProcessInput;

/// One contiguous span of CPU occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Slice start time (>= 0).
    pub start: f64,
    /// Slice end time (> start).
    pub end: f64,
}

impl ExecutionSlice {
    /// Creates a slice covering `[start, end)`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The complete scheduling outcome for one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Declared arrival time.
    pub arrival_time: i64,
    /// Declared CPU demand (carried for metrics and conservation checks).
    pub burst_time: f64,
    /// Start of the first slice.
    pub start_time: f64,
    /// End of the last slice.
    pub finish_time: f64,
    /// Time spent ready but not running.
    pub waiting_time: f64,
    /// Finish minus arrival.
    pub turnaround_time: f64,
    /// First slice start minus arrival.
    pub response_time: f64,
    /// Ordered, non-overlapping CPU spans.
    pub slice_history: Vec<ExecutionSlice>,
}

impl ProcessResult {
    /// Builds a result from a process and its recorded slices.
    ///
    /// Derives all timing metrics from the slice history so the timeline
    /// invariants hold by construction. `slices` must be non-empty and
    /// time-ascending, which every policy guarantees for completed work.
    pub fn from_slices(process: &ProcessInput, slices: Vec<ExecutionSlice>) -> Self {
        let start_time = slices.first().map_or(process.arrival(), |s| s.start);
        let finish_time = slices.last().map_or(process.arrival(), |s| s.end);
        let turnaround_time = finish_time - process.arrival();

        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            finish_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
            response_time: start_time - process.arrival(),
            slice_history: slices,
        }
    }

    /// Total CPU time consumed across all slices.
    pub fn busy_time(&self) -> f64 {
        self.slice_history.iter().map(ExecutionSlice::duration).sum()
    }

    /// Number of times the process was dispatched.
    pub fn dispatch_count(&self) -> usize {
        self.slice_history.len()
    }
}

//! Process (workload entry) model.
//!
//! A process declares its identity, when it arrives, how much CPU time it
//! needs, its urgency, and two behavioral hints the predictor consumes.
//!
//! # Time Representation
//! Arrival times are integral ticks from the simulation epoch (t=0); burst
//! times and everything derived from them are fractional time units on the
//! same axis. The consumer defines what one unit means (ms, s, ticks).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable once handed to a simulation run; policies never mutate their
/// input and build fresh results instead.
///
/// # Priority Convention
/// `priority` lies in `[1, 10]` with **lower = more urgent**, the usual
/// kernel-style numeric convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Unique process identifier.
    pub id: String,
    /// Arrival time (ticks from epoch, >= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: f64,
    /// Scheduling priority in [1, 10], lower = more urgent.
    pub priority: i32,
    /// How CPU-bound the process is expected to be (0.0..=1.0).
    pub cpu_utilization_hint: f64,
    /// Probability the process is I/O-bound (0.0..=1.0).
    pub io_bound_probability: f64,
}

impl ProcessInput {
    /// Creates a process with neutral priority and zero hints.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: f64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 5,
            cpu_utilization_hint: 0.0,
            io_bound_probability: 0.0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the CPU-bound hint.
    pub fn with_cpu_hint(mut self, hint: f64) -> Self {
        self.cpu_utilization_hint = hint;
        self
    }

    /// Sets the I/O-bound probability.
    pub fn with_io_probability(mut self, probability: f64) -> Self {
        self.io_bound_probability = probability;
        self
    }

    /// Arrival time as a point on the fractional time axis.
    #[inline]
    pub fn arrival(&self) -> f64 {
        self.arrival_time as f64
    }
}

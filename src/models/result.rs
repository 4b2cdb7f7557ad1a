//! Scheduling run results.
//!
//! A [`SchedulingResult`] bundles one policy's per-process timelines (in
//! workload order) with the aggregate summary computed from them.

use serde::{Deserialize, Serialize};

use crate::metrics::ScheduleSummary;

use super::ProcessResult;

/// Identifier of a scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive, by arrival).
    Fcfs,
    /// Shortest-Job-First (non-preemptive, by burst time).
    Sjf,
    /// Priority scheduling (non-preemptive, by declared priority).
    Priority,
    /// Round-Robin (preemptive, fixed base quantum).
    RoundRobin,
    /// Hybrid-AI (preemptive, predicted priority and per-process quantum).
    HybridAi,
}

impl Algorithm {
    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round-Robin",
            Algorithm::HybridAi => "Hybrid-AI",
        }
    }

    /// Whether this policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin | Algorithm::HybridAi)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One policy's complete output for one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// The policy that produced this result.
    pub algorithm: Algorithm,
    /// Per-process outcomes, in the same order as the input workload.
    pub processes: Vec<ProcessResult>,
    /// Aggregate performance metrics.
    pub summary: ScheduleSummary,
}

impl SchedulingResult {
    /// Builds a result, computing the summary from the process outcomes.
    pub fn new(algorithm: Algorithm, processes: Vec<ProcessResult>) -> Self {
        let summary = ScheduleSummary::calculate(&processes);
        Self {
            algorithm,
            processes,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Fcfs.name(), "FCFS");
        assert_eq!(Algorithm::Sjf.name(), "SJF");
        assert_eq!(Algorithm::Priority.name(), "Priority");
        assert_eq!(Algorithm::RoundRobin.name(), "Round-Robin");
        assert_eq!(Algorithm::HybridAi.name(), "Hybrid-AI");
        assert_eq!(Algorithm::HybridAi.to_string(), "Hybrid-AI");
    }

    #[test]
    fn test_preemptive_flag() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(!Algorithm::Priority.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(Algorithm::HybridAi.is_preemptive());
    }
}

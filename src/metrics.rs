//! Schedule performance metrics.
//!
//! Computes standard CPU-scheduling indicators from a completed set of
//! per-process results.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total execution time | max(finish) - min(arrival) (makespan) |
//! | CPU utilization | 100 * busy slice time / makespan |
//! | Throughput | completed processes / makespan |
//! | Avg waiting time | mean(turnaround - burst) |
//! | Avg turnaround time | mean(finish - arrival) |
//! | Avg response time | mean(first start - arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::ProcessResult;

/// Aggregate performance indicators for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Makespan: latest finish minus earliest arrival.
    pub total_execution_time: f64,
    /// Percent of the makespan the CPU was busy (0..=100).
    pub cpu_utilization: f64,
    /// Completed processes per unit of total execution time.
    pub throughput: f64,
    /// Mean time spent ready but not running.
    pub average_waiting_time: f64,
    /// Mean finish-minus-arrival.
    pub average_turnaround_time: f64,
    /// Mean arrival-to-first-dispatch latency.
    pub average_response_time: f64,
}

impl ScheduleSummary {
    /// Computes summary metrics from completed process results.
    ///
    /// A zero makespan (conceivable only for degenerate zero-length runs)
    /// reports 0 for utilization and throughput rather than dividing by
    /// zero; an empty input reports all zeros.
    pub fn calculate(processes: &[ProcessResult]) -> Self {
        if processes.is_empty() {
            return Self::zeroed();
        }

        let earliest_arrival = processes
            .iter()
            .map(|r| r.arrival_time as f64)
            .fold(f64::INFINITY, f64::min);
        let latest_finish = processes
            .iter()
            .map(|r| r.finish_time)
            .fold(f64::NEG_INFINITY, f64::max);
        let total_execution_time = latest_finish - earliest_arrival;

        let busy: f64 = processes.iter().map(ProcessResult::busy_time).sum();
        let count = processes.len() as f64;

        let (cpu_utilization, throughput) = if total_execution_time > 0.0 {
            (
                100.0 * busy / total_execution_time,
                count / total_execution_time,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            total_execution_time,
            cpu_utilization,
            throughput,
            average_waiting_time: processes.iter().map(|r| r.waiting_time).sum::<f64>() / count,
            average_turnaround_time: processes.iter().map(|r| r.turnaround_time).sum::<f64>()
                / count,
            average_response_time: processes.iter().map(|r| r.response_time).sum::<f64>() / count,
        }
    }

    fn zeroed() -> Self {
        Self {
            total_execution_time: 0.0,
            cpu_utilization: 0.0,
            throughput: 0.0,
            average_waiting_time: 0.0,
            average_turnaround_time: 0.0,
            average_response_time: 0.0,
        }
    }
}

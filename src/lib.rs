//! CPU process scheduling simulator.
//!
//! Given a workload of processes with arrival time, CPU demand, and
//! priority, computes the exact execution timeline of each process under
//! five scheduling policies and the resulting performance metrics. One
//! policy is a hybrid whose ordering and time slices are guided by a
//! deterministic closed-form predictor.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessInput`, `PredictedAttributes`,
//!   `ExecutionSlice`, `ProcessResult`, `SchedulingResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, ranges, quantum)
//! - **`predictor`**: Closed-form burst/priority/quantum heuristic
//! - **`policies`**: FCFS, SJF, Priority, Round-Robin, Hybrid-AI
//! - **`metrics`**: Utilization, throughput, waiting/turnaround/response
//! - **`aggregator`**: Runs every policy against one workload
//!
//! # Architecture
//!
//! Single-threaded, synchronous, and pure: every operation is a function
//! from values to values, with no shared state across invocations.
//! Independent runs are therefore safe to issue from multiple threads
//! without locks. Rendering the results (timelines, metric tables) is the
//! caller's concern.
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::{Algorithm, ProcessInput};
//!
//! let workload = vec![
//!     ProcessInput::new("editor", 0, 4.0).with_priority(2).with_io_probability(0.7),
//!     ProcessInput::new("build", 1, 9.0).with_priority(6).with_cpu_hint(0.9),
//! ];
//!
//! let results = cpu_sched_sim::run(&workload, 2.0).unwrap();
//! assert_eq!(results.len(), 5);
//! assert_eq!(results[3].algorithm, Algorithm::RoundRobin);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod aggregator;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod predictor;
pub mod validation;

pub use aggregator::{run, run_with_predictions};
pub use predictor::predict;

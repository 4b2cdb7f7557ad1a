//! Simulation domain models.
//!
//! Core data types for workloads, predictions, and scheduling outcomes.
//! All entities are plain values: created fresh per run, owned by the run,
//! never mutated after construction. Policies build new results rather
//! than editing inputs.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessInput` | Workload entry (arrival, burst, priority, hints) |
//! | `PredictedAttributes` | Per-process predictor output |
//! | `ExecutionSlice` | One contiguous span of CPU occupancy |
//! | `ProcessResult` | Per-process timeline and derived timing metrics |
//! | `SchedulingResult` | One policy's processes + summary |

mod prediction;
mod process;
mod result;
mod timeline;

pub use prediction::{PredictedAttributes, PredictionMap};
pub use process::ProcessInput;
pub use result::{Algorithm, SchedulingResult};
pub use timeline::{ExecutionSlice, ProcessResult};

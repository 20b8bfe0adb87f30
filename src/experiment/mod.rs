//! Experiment Tracking Schema
//!
//! The entities components are invoked on.
//!
//! ## Schema Overview
//!
//! ```text
//! Experiment (1) ──< Run (N)
//!                     │
//!                     ├── Metrics       [latest value per key]
//!                     ├── Params        [hyperparameters]
//!                     └── ModelArtifact [CAS reference]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use seal::experiment::{Experiment, ModelArtifact, Run, RunStatus};
//!
//! let experiment = Experiment::new("exp-001", "My Experiment");
//!
//! let mut run = Run::builder("run-001", experiment.experiment_id())
//!     .param("lr", 0.01)
//!     .build();
//! run.start();
//! run.record_metric("accuracy", 0.9);
//! run.set_model(ModelArtifact::new("model.pt", "sha256:abc123", 1024));
//! run.complete(RunStatus::Success);
//! ```

mod artifact_record;
mod experiment_record;
mod metric_record;
mod run_record;
mod store;

pub use artifact_record::ModelArtifact;
pub use experiment_record::{Experiment, ExperimentBuilder};
pub use metric_record::MetricRecord;
pub use run_record::{Metrics, Params, Run, RunBuilder, RunStatus};
pub use store::ExperimentStore;

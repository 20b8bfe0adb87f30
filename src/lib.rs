//! # Seal: Pluggable Observers for ML Experiments
//!
//! Seal defines the contracts experiment-tracking backends implement to
//! observe experiments and their runs, plus a handful of ready-made
//! backends.
//!
//! ## Design Principles
//!
//! - **Exhaustive dispatch**: components match on a [`component::Subject`]
//!   instead of probing runtime types
//! - **Typed configuration**: free-form logger options are validated into a
//!   config record at construction
//! - **Explicit skips**: values that are neither an experiment nor a run are
//!   skipped by components and can be rejected by a strict [`pipeline::Pipeline`]
//!
//! ## Example Usage
//!
//! ```rust
//! use seal::component::{Component, Subject};
//! use seal::experiment::{Experiment, Run};
//! use seal::logger::{Logger, Options, StoreLogger};
//!
//! let mut logger = StoreLogger::from_options(Options::new())?;
//!
//! let experiment = Experiment::new("exp-001", "baseline");
//! let run = Run::builder("run-001", experiment.experiment_id())
//!     .metric("accuracy", 0.9)
//!     .param("lr", 0.01)
//!     .build();
//!
//! logger.invoke(Subject::of(&experiment))?;
//! logger.invoke(Subject::of(&run))?;
//! logger.invoke(Subject::of(&42))?; // neither: skipped
//!
//! assert_eq!(logger.store().run_count(), 1);
//! # Ok::<(), seal::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod component;
pub mod error;
pub mod experiment;
pub mod logger;
pub mod pipeline;

pub use error::{Error, Result};

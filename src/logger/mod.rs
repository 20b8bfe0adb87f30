//! Logger Contract
//!
//! A [`Logger`] is a [`Component`] that persists experiments and runs.
//! Run logging is decomposed into metrics, parameters and model.
//!
//! Every logger is constructed from a strongly typed configuration record
//! ([`Logger::Config`]). The free-form option set callers usually carry
//! (paths, endpoints, credentials) is turned into that record by
//! [`Logger::from_options`], so an unknown or ill-typed option fails at
//! construction time rather than at first use.
//!
//! # Example
//!
//! ```rust
//! use seal::component::{Component, Subject};
//! use seal::experiment::{Experiment, Run};
//! use seal::logger::{LogEvent, Logger, Options, RecordingLogger};
//!
//! let mut logger = RecordingLogger::from_options(Options::new())?;
//!
//! let run = Run::builder("run-1", "exp-1").metric("accuracy", 0.9).build();
//! logger.invoke(Subject::of(&Experiment::new("exp-1", "baseline")))?;
//! logger.invoke(Subject::of(&run))?;
//!
//! assert!(matches!(logger.events()[0], LogEvent::Experiment { .. }));
//! # Ok::<(), seal::Error>(())
//! ```

mod json_lines;
mod null;
mod recording;
mod store;

pub use json_lines::{JsonLinesConfig, JsonLinesLogger};
pub use null::{NullLogger, NullLoggerConfig};
pub use recording::{LogEvent, RecordingConfig, RecordingLogger};
pub use store::{StoreLogger, StoreLoggerConfig};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::component::{Component, Subject};
use crate::experiment::{Experiment, Metrics, ModelArtifact, Params, Run};
use crate::{Error, Result};

/// Free-form named configuration, as read from a config file or CLI.
pub type Options = serde_json::Map<String, serde_json::Value>;

/// A component that records experiments and runs to some medium.
///
/// Every required method must be supplied; a logger missing one does not
/// build:
///
/// ```compile_fail
/// use seal::experiment::{Experiment, Metrics, Params, Run};
/// use seal::logger::{Logger, NullLoggerConfig};
///
/// struct Incomplete;
///
/// impl Logger for Incomplete {
///     type Config = NullLoggerConfig;
///
///     fn from_config(_config: NullLoggerConfig) -> seal::Result<Self> {
///         Ok(Self)
///     }
///
///     fn log_experiment(&mut self, _experiment: &Experiment) -> seal::Result<()> {
///         Ok(())
///     }
///
///     fn log_metrics(&mut self, _run: &Run, _metrics: &Metrics) -> seal::Result<()> {
///         Ok(())
///     }
///
///     fn log_params(&mut self, _run: &Run, _params: &Params) -> seal::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Logger {
    /// Typed configuration accepted at construction.
    type Config: DeserializeOwned;

    /// Construct the logger from its typed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the logger cannot acquire its resources
    /// (e.g. the destination file cannot be opened).
    fn from_config(config: Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Construct the logger from a free-form option set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the options do not describe a
    /// valid [`Logger::Config`], or whatever [`Logger::from_config`] returns.
    fn from_options(options: Options) -> Result<Self>
    where
        Self: Sized,
    {
        let config = serde_json::from_value(serde_json::Value::Object(options))
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Self::from_config(config)
    }

    /// Record the identity and configuration of an experiment.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn log_experiment(&mut self, experiment: &Experiment) -> Result<()>;

    /// Record everything a run produced.
    ///
    /// The default calls [`log_run_parts`]: metrics, then params, then the
    /// model if the run has one. Overrides are expected to do the same.
    ///
    /// # Errors
    ///
    /// Returns the first error from any of the parts.
    fn log_run(&mut self, run: &Run) -> Result<()> {
        log_run_parts(self, run)
    }

    /// Record the scalar metrics of a run.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn log_metrics(&mut self, run: &Run, metrics: &Metrics) -> Result<()>;

    /// Record the hyperparameters of a run's model.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn log_params(&mut self, run: &Run, params: &Params) -> Result<()>;

    /// Record the trained model of a run.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn log_model(&mut self, run: &Run, model: &ModelArtifact) -> Result<()>;
}

/// Log the metrics, params and (if present) model of a run, in that order.
///
/// # Errors
///
/// Stops at and returns the first error.
pub fn log_run_parts<L: Logger + ?Sized>(logger: &mut L, run: &Run) -> Result<()> {
    logger.log_metrics(run, run.metrics())?;
    logger.log_params(run, run.model_params())?;
    if let Some(model) = run.model() {
        logger.log_model(run, model)?;
    }
    Ok(())
}

impl<L: Logger> Component for L {
    fn invoke(&mut self, subject: Subject<'_>) -> Result<()> {
        match subject {
            Subject::Experiment(experiment) => {
                debug!(
                    logger = self.name(),
                    experiment = experiment.experiment_id(),
                    "Logging experiment"
                );
                self.log_experiment(experiment)
            }
            Subject::Run(run) => {
                debug!(logger = self.name(), run = run.run_id(), "Logging run");
                self.log_run(run)
            }
            Subject::Other { type_name } => {
                debug!(
                    logger = self.name(),
                    type_name,
                    "Not an experiment or run, skipping"
                );
                Ok(())
            }
        }
    }
}

//! Logger backed by an in-memory [`ExperimentStore`].

use serde::Deserialize;

use super::Logger;
use crate::experiment::{
    Experiment, ExperimentStore, MetricRecord, Metrics, ModelArtifact, Params, Run,
};
use crate::Result;

/// Configuration for [`StoreLogger`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreLoggerConfig {
    /// Step assigned to metrics until [`StoreLogger::set_step`] is called.
    #[serde(default)]
    pub step: u64,
}

/// A logger that writes into an [`ExperimentStore`].
///
/// Each logged run metric becomes a [`MetricRecord`] at the current step,
/// so invoking the logger once per epoch (after advancing the step) builds
/// the training curve. Logging a run again without advancing the step
/// overwrites that step's points with the run's current values, so a series
/// never holds two points at one step.
///
/// # Example
///
/// ```rust
/// use seal::component::{Component, Subject};
/// use seal::experiment::Run;
/// use seal::logger::{Logger, Options, StoreLogger};
///
/// let mut logger = StoreLogger::from_options(Options::new())?;
/// let mut run = Run::new("run-1", "exp-1");
///
/// for epoch in 0..3 {
///     logger.set_step(epoch);
///     run.record_metric("loss", 1.0 / (epoch as f64 + 1.0));
///     logger.invoke(Subject::of(&run))?;
/// }
///
/// assert_eq!(logger.store().get_metrics_for_run("run-1", "loss").len(), 3);
/// # Ok::<(), seal::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct StoreLogger {
    store: ExperimentStore,
    step: u64,
}

impl StoreLogger {
    /// Create a logger over an empty store, at step 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step for subsequently logged metrics.
    pub fn set_step(&mut self, step: u64) {
        self.step = step;
    }

    /// Get the current step.
    #[must_use]
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &ExperimentStore {
        &self.store
    }

    /// Consume the logger, returning the store.
    #[must_use]
    pub fn into_store(self) -> ExperimentStore {
        self.store
    }
}

impl Logger for StoreLogger {
    type Config = StoreLoggerConfig;

    fn from_config(config: StoreLoggerConfig) -> Result<Self> {
        Ok(Self {
            store: ExperimentStore::new(),
            step: config.step,
        })
    }

    fn log_experiment(&mut self, experiment: &Experiment) -> Result<()> {
        self.store.add_experiment(experiment.clone());
        Ok(())
    }

    fn log_run(&mut self, run: &Run) -> Result<()> {
        self.store.add_run(run.clone());
        super::log_run_parts(self, run)
    }

    fn log_metrics(&mut self, run: &Run, metrics: &Metrics) -> Result<()> {
        for point in MetricRecord::at_step(run.run_id(), metrics, self.step) {
            self.store.upsert_metric(point);
        }
        Ok(())
    }

    fn log_params(&mut self, run: &Run, params: &Params) -> Result<()> {
        self.store.add_params(run.run_id(), params);
        Ok(())
    }

    fn log_model(&mut self, run: &Run, model: &ModelArtifact) -> Result<()> {
        self.store.add_model(run.run_id(), model.clone());
        Ok(())
    }
}

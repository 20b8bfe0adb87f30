//! Run - execution instance of an experiment

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ModelArtifact;

/// Scalar metrics of a run, keyed by metric name (e.g. "accuracy").
pub type Metrics = BTreeMap<String, f64>;

/// Hyperparameters of a run's model, keyed by parameter name (e.g. "lr").
pub type Params = BTreeMap<String, serde_json::Value>;

/// Status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Run is created but not yet started.
    Pending,
    /// Run is currently executing.
    Running,
    /// Run completed successfully.
    Success,
    /// Run failed with an error.
    Failed,
    /// Run was cancelled by user or system.
    Cancelled,
}

impl RunStatus {
    /// Whether the run has reached a final status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Cancelled)
    }
}

/// A single execution of an experiment.
///
/// Besides its lifecycle, a run carries what loggers persist: scalar
/// metrics, the hyperparameters of its model, and the trained model itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Run {
    run_id: String,
    experiment_id: String,
    status: RunStatus,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    metrics: Metrics,
    model_params: Params,
    model: Option<ModelArtifact>,
}

impl Run {
    /// Create a new run in Pending status.
    ///
    /// # Arguments
    ///
    /// * `run_id` - Unique identifier for the run
    /// * `experiment_id` - ID of the parent experiment
    #[must_use]
    pub fn new(run_id: impl Into<String>, experiment_id: impl Into<String>) -> Self {
        Self::builder(run_id, experiment_id).build()
    }

    /// Create a builder for constructing a run with metrics, params and a model.
    #[must_use]
    pub fn builder(run_id: impl Into<String>, experiment_id: impl Into<String>) -> RunBuilder {
        RunBuilder::new(run_id, experiment_id)
    }

    /// Get the run ID.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Get the parent experiment ID.
    #[must_use]
    pub fn experiment_id(&self) -> &str {
        &self.experiment_id
    }

    /// Get the current run status.
    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Get the start timestamp, if the run has started.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Get the end timestamp, if the run has completed.
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Get the scalar metrics recorded so far.
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Get the model hyperparameters.
    #[must_use]
    pub const fn model_params(&self) -> &Params {
        &self.model_params
    }

    /// Get the trained model, if one was produced.
    #[must_use]
    pub const fn model(&self) -> Option<&ModelArtifact> {
        self.model.as_ref()
    }

    /// Start the run, transitioning from Pending to Running.
    ///
    /// Sets the `started_at` timestamp to now.
    pub fn start(&mut self) {
        self.status = RunStatus::Running;
        self.started_at = Some(Utc::now());
    }

    /// Complete the run with the given final status.
    ///
    /// Sets the `ended_at` timestamp to now.
    pub fn complete(&mut self, status: RunStatus) {
        self.status = status;
        self.ended_at = Some(Utc::now());
    }

    /// Record (or overwrite) a scalar metric.
    pub fn record_metric(&mut self, key: impl Into<String>, value: f64) {
        self.metrics.insert(key.into(), value);
    }

    /// Set (or overwrite) a hyperparameter.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.model_params.insert(key.into(), value.into());
    }

    /// Attach the trained model.
    pub fn set_model(&mut self, model: ModelArtifact) {
        self.model = Some(model);
    }
}

/// Builder for `Run`.
#[derive(Debug)]
pub struct RunBuilder {
    run_id: String,
    experiment_id: String,
    metrics: Metrics,
    model_params: Params,
    model: Option<ModelArtifact>,
}

impl RunBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(run_id: impl Into<String>, experiment_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            experiment_id: experiment_id.into(),
            metrics: Metrics::new(),
            model_params: Params::new(),
            model: None,
        }
    }

    /// Add a scalar metric.
    #[must_use]
    pub fn metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }

    /// Add a hyperparameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.model_params.insert(key.into(), value.into());
        self
    }

    /// Attach the trained model.
    #[must_use]
    pub fn model(mut self, model: ModelArtifact) -> Self {
        self.model = Some(model);
        self
    }

    /// Build the `Run` in Pending status.
    #[must_use]
    pub fn build(self) -> Run {
        Run {
            run_id: self.run_id,
            experiment_id: self.experiment_id,
            status: RunStatus::Pending,
            started_at: None,
            ended_at: None,
            metrics: self.metrics,
            model_params: self.model_params,
            model: self.model,
        }
    }
}

//! Experiment Store - in-memory storage for experiment tracking data
//!
//! Backs [`StoreLogger`](crate::logger::StoreLogger), and is usable on its
//! own for queries over what was logged.

use std::collections::HashMap;

use super::{Experiment, MetricRecord, ModelArtifact, Params, Run};

/// In-memory store for experiment tracking data.
///
/// ## Design
///
/// Hash maps give O(1) lookups by ID. Metrics live in a vector that is
/// filtered and sorted for time-series queries. Parameters and models are
/// keyed by run ID, so they can be logged independently of the run record.
#[derive(Debug, Default)]
pub struct ExperimentStore {
    experiments: HashMap<String, Experiment>,
    runs: HashMap<String, Run>,
    metrics: Vec<MetricRecord>,
    params: HashMap<String, Params>,
    models: HashMap<String, ModelArtifact>,
}

impl ExperimentStore {
    /// Create a new empty experiment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the store holds nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
            && self.runs.is_empty()
            && self.metrics.is_empty()
            && self.params.is_empty()
            && self.models.is_empty()
    }

    /// Get the number of experiments in the store.
    #[must_use]
    pub fn experiment_count(&self) -> usize {
        self.experiments.len()
    }

    /// Get the number of runs in the store.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Get the number of metric points in the store.
    #[must_use]
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// Get the number of stored models.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Add an experiment, replacing any experiment with the same ID.
    pub fn add_experiment(&mut self, experiment: Experiment) {
        self.experiments
            .insert(experiment.experiment_id().to_string(), experiment);
    }

    /// Get an experiment by ID.
    #[must_use]
    pub fn get_experiment(&self, experiment_id: &str) -> Option<&Experiment> {
        self.experiments.get(experiment_id)
    }

    /// Add a run, replacing any run with the same ID.
    pub fn add_run(&mut self, run: Run) {
        self.runs.insert(run.run_id().to_string(), run);
    }

    /// Get a run by ID.
    #[must_use]
    pub fn get_run(&self, run_id: &str) -> Option<&Run> {
        self.runs.get(run_id)
    }

    /// Get all runs for an experiment, ordered by run ID.
    #[must_use]
    pub fn get_runs_for_experiment(&self, experiment_id: &str) -> Vec<&Run> {
        let mut runs: Vec<&Run> = self
            .runs
            .values()
            .filter(|run| run.experiment_id() == experiment_id)
            .collect();
        runs.sort_by(|a, b| a.run_id().cmp(b.run_id()));
        runs
    }

    /// Add a metric point.
    ///
    /// Points are appended as given; two points at the same step of a series
    /// both stay in the store. Use [`upsert_metric`](Self::upsert_metric) to
    /// keep one point per step.
    pub fn add_metric(&mut self, metric: MetricRecord) {
        self.metrics.push(metric);
    }

    /// Add a metric point, replacing the point already stored for the same
    /// run, key and step.
    pub fn upsert_metric(&mut self, metric: MetricRecord) {
        match self.metrics.iter_mut().find(|m| m.is_same_point(&metric)) {
            Some(existing) => *existing = metric,
            None => self.metrics.push(metric),
        }
    }

    /// Get metrics for a specific run and key, ordered by step.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use seal::experiment::{ExperimentStore, MetricRecord};
    ///
    /// let mut store = ExperimentStore::new();
    ///
    /// for step in 0..100 {
    ///     let loss = 1.0 / (step as f64 + 1.0);
    ///     store.add_metric(MetricRecord::new("run-001", "loss", step, loss));
    /// }
    ///
    /// let loss_metrics = store.get_metrics_for_run("run-001", "loss");
    /// assert_eq!(loss_metrics.len(), 100);
    /// ```
    #[must_use]
    pub fn get_metrics_for_run(&self, run_id: &str, key: &str) -> Vec<MetricRecord> {
        let mut metrics: Vec<MetricRecord> = self
            .metrics
            .iter()
            .filter(|m| m.run_id() == run_id && m.key() == key)
            .cloned()
            .collect();

        // Stable sort keeps insertion order among equal steps
        metrics.sort_by_key(MetricRecord::step);

        metrics
    }

    /// Merge hyperparameters for a run; later values win per key.
    pub fn add_params(&mut self, run_id: impl Into<String>, params: &Params) {
        let entry = self.params.entry(run_id.into()).or_default();
        for (key, value) in params {
            entry.insert(key.clone(), value.clone());
        }
    }

    /// Get the hyperparameters logged for a run.
    #[must_use]
    pub fn get_params(&self, run_id: &str) -> Option<&Params> {
        self.params.get(run_id)
    }

    /// Store the model of a run, replacing any previous one.
    pub fn add_model(&mut self, run_id: impl Into<String>, model: ModelArtifact) {
        self.models.insert(run_id.into(), model);
    }

    /// Get the model logged for a run.
    #[must_use]
    pub fn get_model(&self, run_id: &str) -> Option<&ModelArtifact> {
        self.models.get(run_id)
    }
}

//! Logger that keeps every call in memory for inspection.

use serde::Deserialize;

use super::Logger;
use crate::experiment::{Experiment, Metrics, ModelArtifact, Params, Run};
use crate::Result;

/// One call received by a [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    /// `log_experiment` was called.
    Experiment {
        /// ID of the logged experiment.
        experiment_id: String,
        /// Configuration the experiment was created with, if any.
        config: Option<serde_json::Value>,
    },
    /// `log_run` was called. Emitted before the run's parts.
    Run {
        /// ID of the logged run.
        run_id: String,
    },
    /// `log_metrics` was called.
    Metrics {
        /// ID of the run the metrics belong to.
        run_id: String,
        /// The metrics received.
        metrics: Metrics,
    },
    /// `log_params` was called.
    Params {
        /// ID of the run the params belong to.
        run_id: String,
        /// The params received.
        params: Params,
    },
    /// `log_model` was called.
    Model {
        /// ID of the run the model belongs to.
        run_id: String,
        /// The model received.
        model: ModelArtifact,
    },
}

/// Configuration for [`RecordingLogger`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordingConfig {
    /// Pre-allocated event capacity.
    #[serde(default)]
    pub capacity: Option<usize>,
}

/// A logger that records what it was asked to log.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    events: Vec<LogEvent>,
}

impl RecordingLogger {
    /// Create an empty recording logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in call order.
    #[must_use]
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the logger empty.
    pub fn take_events(&mut self) -> Vec<LogEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Logger for RecordingLogger {
    type Config = RecordingConfig;

    fn from_config(config: RecordingConfig) -> Result<Self> {
        Ok(Self {
            events: Vec::with_capacity(config.capacity.unwrap_or_default()),
        })
    }

    fn log_experiment(&mut self, experiment: &Experiment) -> Result<()> {
        self.events.push(LogEvent::Experiment {
            experiment_id: experiment.experiment_id().to_string(),
            config: experiment.config().cloned(),
        });
        Ok(())
    }

    fn log_run(&mut self, run: &Run) -> Result<()> {
        self.events.push(LogEvent::Run {
            run_id: run.run_id().to_string(),
        });
        super::log_run_parts(self, run)
    }

    fn log_metrics(&mut self, run: &Run, metrics: &Metrics) -> Result<()> {
        self.events.push(LogEvent::Metrics {
            run_id: run.run_id().to_string(),
            metrics: metrics.clone(),
        });
        Ok(())
    }

    fn log_params(&mut self, run: &Run, params: &Params) -> Result<()> {
        self.events.push(LogEvent::Params {
            run_id: run.run_id().to_string(),
            params: params.clone(),
        });
        Ok(())
    }

    fn log_model(&mut self, run: &Run, model: &ModelArtifact) -> Result<()> {
        self.events.push(LogEvent::Model {
            run_id: run.run_id().to_string(),
            model: model.clone(),
        });
        Ok(())
    }
}

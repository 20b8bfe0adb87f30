//! Logger that discards everything.

use serde::Deserialize;

use super::Logger;
use crate::experiment::{Experiment, Metrics, ModelArtifact, Params, Run};
use crate::Result;

/// Configuration for [`NullLogger`]. Accepts no options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NullLoggerConfig {}

/// A logger whose every operation is a no-op.
///
/// Useful as a placeholder in pipelines and for disabling logging from
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct NullLogger {
    _private: (),
}

impl NullLogger {
    /// Create a null logger.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Logger for NullLogger {
    type Config = NullLoggerConfig;

    fn from_config(_config: NullLoggerConfig) -> Result<Self> {
        Ok(Self::new())
    }

    fn log_experiment(&mut self, _experiment: &Experiment) -> Result<()> {
        Ok(())
    }

    fn log_metrics(&mut self, _run: &Run, _metrics: &Metrics) -> Result<()> {
        Ok(())
    }

    fn log_params(&mut self, _run: &Run, _params: &Params) -> Result<()> {
        Ok(())
    }

    fn log_model(&mut self, _run: &Run, _model: &ModelArtifact) -> Result<()> {
        Ok(())
    }
}

//! Logger that appends one JSON object per operation to a file.
//!
//! Each line carries an `event` tag:
//!
//! ```text
//! {"event":"experiment","experiment":{...}}
//! {"event":"run","run_id":"run-1","experiment_id":"exp-1","status":"Success"}
//! {"event":"metrics","run_id":"run-1","metrics":{"accuracy":0.9}}
//! {"event":"params","run_id":"run-1","params":{"lr":0.01}}
//! {"event":"model","run_id":"run-1","model":{...}}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Logger;
use crate::experiment::{Experiment, Metrics, ModelArtifact, Params, Run, RunStatus};
use crate::{Error, Result};

const fn default_append() -> bool {
    true
}

/// Configuration for [`JsonLinesLogger`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonLinesConfig {
    /// Destination file. Created if missing.
    pub path: PathBuf,
    /// Append to an existing file instead of truncating it.
    #[serde(default = "default_append")]
    pub append: bool,
}

impl JsonLinesConfig {
    /// Appending configuration for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append: true,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Line<'a> {
    Experiment {
        experiment: &'a Experiment,
    },
    Run {
        run_id: &'a str,
        experiment_id: &'a str,
        status: RunStatus,
    },
    Metrics {
        run_id: &'a str,
        metrics: &'a Metrics,
    },
    Params {
        run_id: &'a str,
        params: &'a Params,
    },
    Model {
        run_id: &'a str,
        model: &'a ModelArtifact,
    },
}

/// A logger writing JSON lines to a file.
///
/// The file is opened at construction and owned by the logger; every line
/// is flushed as soon as it is written, and the handle is released when the
/// logger is dropped.
#[derive(Debug)]
pub struct JsonLinesLogger {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonLinesLogger {
    /// Get the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, line: &Line<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl Logger for JsonLinesLogger {
    type Config = JsonLinesConfig;

    fn from_config(config: JsonLinesConfig) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.append)
            .truncate(!config.append)
            .open(&config.path)?;
        info!(path = %config.path.display(), append = config.append, "Opened JSON lines log");
        Ok(Self {
            path: config.path,
            writer: BufWriter::new(file),
        })
    }

    fn log_experiment(&mut self, experiment: &Experiment) -> Result<()> {
        self.write_line(&Line::Experiment { experiment })
    }

    fn log_run(&mut self, run: &Run) -> Result<()> {
        self.write_line(&Line::Run {
            run_id: run.run_id(),
            experiment_id: run.experiment_id(),
            status: run.status(),
        })?;
        super::log_run_parts(self, run)
    }

    /// Fails with [`Error::NonFiniteMetric`] and writes nothing if any value
    /// is NaN or infinite, since JSON would silently turn it into `null`.
    fn log_metrics(&mut self, run: &Run, metrics: &Metrics) -> Result<()> {
        if let Some((key, value)) = metrics.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::NonFiniteMetric {
                run_id: run.run_id().to_string(),
                key: key.clone(),
                value: *value,
            });
        }
        self.write_line(&Line::Metrics {
            run_id: run.run_id(),
            metrics,
        })
    }

    fn log_params(&mut self, run: &Run, params: &Params) -> Result<()> {
        self.write_line(&Line::Params {
            run_id: run.run_id(),
            params,
        })
    }

    fn log_model(&mut self, run: &Run, model: &ModelArtifact) -> Result<()> {
        self.write_line(&Line::Model {
            run_id: run.run_id(),
            model,
        })
    }
}

//! Metric Record - one point on a run's training curve

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Metrics;

/// The value of one metric of one run at one step.
///
/// A [`Run`](super::Run) only carries the latest value of each metric. A
/// logger that is invoked once per epoch turns that snapshot into points with
/// [`MetricRecord::at_step`]; the points of a `run_id`/`key` pair ordered by
/// `step` form the curve. `timestamp` is wall-clock time of the snapshot and
/// plays no part in ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    run_id: String,
    key: String,
    step: u64,
    value: f64,
    timestamp: DateTime<Utc>,
}

impl MetricRecord {
    /// A single point, stamped now.
    #[must_use]
    pub fn new(run_id: impl Into<String>, key: impl Into<String>, step: u64, value: f64) -> Self {
        Self::stamped(run_id.into(), key.into(), step, value, Utc::now())
    }

    /// One point per entry of `metrics`, all at `step` and sharing one
    /// timestamp, in key order.
    ///
    /// ```rust
    /// use seal::experiment::{MetricRecord, Run};
    ///
    /// let run = Run::builder("run-1", "exp-1")
    ///     .metric("loss", 0.4)
    ///     .metric("accuracy", 0.8)
    ///     .build();
    ///
    /// let points = MetricRecord::at_step(run.run_id(), run.metrics(), 7);
    /// assert_eq!(points[0].key(), "accuracy");
    /// assert!(points.iter().all(|p| p.step() == 7));
    /// ```
    #[must_use]
    pub fn at_step(run_id: &str, metrics: &Metrics, step: u64) -> Vec<Self> {
        let now = Utc::now();
        metrics
            .iter()
            .map(|(key, value)| Self::stamped(run_id.to_string(), key.clone(), step, *value, now))
            .collect()
    }

    const fn stamped(
        run_id: String,
        key: String,
        step: u64,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            run_id,
            key,
            step,
            value,
            timestamp,
        }
    }

    /// Whether `other` sits at the same position of the same curve.
    #[must_use]
    pub fn is_same_point(&self, other: &Self) -> bool {
        self.step == other.step && self.key == other.key && self.run_id == other.run_id
    }

    /// Run the point belongs to.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Metric name, e.g. `loss`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Position on the curve.
    #[must_use]
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Metric value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// When the point was taken.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

//! Experiment - root entity observed by components
//!
//! An experiment is logged once, before any of its runs. What a logger can
//! persist about it is its identity and the configuration it was launched
//! with; everything measured lives on [`Run`](super::Run).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked experiment, as handed to
/// [`ExperimentComponent::on_experiment`](crate::component::ExperimentComponent::on_experiment)
/// and [`Logger::log_experiment`](crate::logger::Logger::log_experiment).
///
/// The configuration is free-form JSON (dataset, model family, fold count,
/// ...) and is carried verbatim so every logger records the same thing.
///
/// # Example
///
/// ```rust
/// use seal::experiment::Experiment;
///
/// let experiment = Experiment::builder("exp-1", "Iris baseline")
///     .config(serde_json::json!({"dataset": "iris", "folds": 5}))
///     .build();
///
/// assert_eq!(experiment.config_value("folds"), Some(&serde_json::json!(5)));
/// assert_eq!(experiment.config_value("seed"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experiment {
    experiment_id: String,
    name: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<serde_json::Value>,
}

impl Experiment {
    /// An experiment without configuration, created now.
    #[must_use]
    pub fn new(experiment_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::builder(experiment_id, name).build()
    }

    /// Start building an experiment that carries a configuration or a fixed
    /// creation time.
    #[must_use]
    pub fn builder(experiment_id: impl Into<String>, name: impl Into<String>) -> ExperimentBuilder {
        ExperimentBuilder {
            experiment_id: experiment_id.into(),
            name: name.into(),
            created_at: None,
            config: None,
        }
    }

    /// ID that runs refer back to through [`Run::experiment_id`](super::Run::experiment_id).
    #[must_use]
    pub fn experiment_id(&self) -> &str {
        &self.experiment_id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the experiment was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Launch configuration, if one was given.
    #[must_use]
    pub const fn config(&self) -> Option<&serde_json::Value> {
        self.config.as_ref()
    }

    /// Look up one top-level entry of an object configuration.
    ///
    /// `None` when there is no configuration, when it is not a JSON object,
    /// or when `key` is absent.
    #[must_use]
    pub fn config_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.config.as_ref()?.get(key)
    }
}

/// Builder for [`Experiment`].
#[derive(Debug)]
pub struct ExperimentBuilder {
    experiment_id: String,
    name: String,
    created_at: Option<DateTime<Utc>>,
    config: Option<serde_json::Value>,
}

impl ExperimentBuilder {
    /// Attach the launch configuration.
    #[must_use]
    pub fn config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Pin the creation time instead of stamping it at [`build`](Self::build).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the `Experiment`.
    #[must_use]
    pub fn build(self) -> Experiment {
        Experiment {
            experiment_id: self.experiment_id,
            name: self.name,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unconfigured_experiment_has_no_lookups() {
        let experiment = Experiment::new("exp-1", "baseline");
        assert!(experiment.config().is_none());
        assert!(experiment.config_value("dataset").is_none());
    }

    #[test]
    fn test_config_value_needs_an_object() {
        let listed = Experiment::builder("exp-1", "sweep")
            .config(serde_json::json!(["iris", "wine"]))
            .build();
        assert!(listed.config().is_some());
        assert!(listed.config_value("dataset").is_none());
    }

    #[test]
    fn test_logged_form_omits_missing_config() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let bare = Experiment::builder("exp-1", "baseline").created_at(ts).build();
        let tuned = Experiment::builder("exp-2", "tuned")
            .config(serde_json::json!({"dataset": "iris"}))
            .created_at(ts)
            .build();

        let bare_json = serde_json::to_value(&bare).unwrap();
        assert!(bare_json.get("config").is_none());
        assert_eq!(bare_json["created_at"], "2025-03-01T09:30:00Z");

        let tuned_json = serde_json::to_value(&tuned).unwrap();
        assert_eq!(tuned_json["config"]["dataset"], "iris");
        let back: Experiment = serde_json::from_value(tuned_json).unwrap();
        assert_eq!(back, tuned);
        let back: Experiment = serde_json::from_value(bare_json).unwrap();
        assert_eq!(back, bare);
    }
}

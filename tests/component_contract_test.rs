//! Component Contract Tests
//!
//! Dispatch guarantees every component and logger must uphold.

use seal::component::{
    Component, ExperimentComponent, ForExperiments, ForRuns, Hybrid, RunComponent, Subject,
};
use seal::experiment::{Experiment, ModelArtifact, Run};
use seal::logger::{log_run_parts, LogEvent, Logger, NullLogger, Options, RecordingLogger};
use seal::{Error, Result};

// =============================================================================
// Fixtures
// =============================================================================

/// Counts hook calls and keeps clones of what each hook received.
#[derive(Debug, Default)]
struct Counting {
    experiments: Vec<Experiment>,
    runs: Vec<Run>,
}

impl ExperimentComponent for Counting {
    fn on_experiment(&mut self, experiment: &Experiment) -> Result<()> {
        self.experiments.push(experiment.clone());
        Ok(())
    }
}

impl RunComponent for Counting {
    fn on_run(&mut self, run: &Run) -> Result<()> {
        self.runs.push(run.clone());
        Ok(())
    }
}

/// Counts top-level logger calls without decomposing runs.
#[derive(Debug, Default)]
struct CountingLogger {
    experiments: usize,
    runs: usize,
}

impl Logger for CountingLogger {
    type Config = seal::logger::NullLoggerConfig;

    fn from_config(_config: Self::Config) -> Result<Self> {
        Ok(Self::default())
    }

    fn log_experiment(&mut self, _experiment: &Experiment) -> Result<()> {
        self.experiments += 1;
        Ok(())
    }

    fn log_run(&mut self, _run: &Run) -> Result<()> {
        self.runs += 1;
        Ok(())
    }

    fn log_metrics(&mut self, _run: &Run, _metrics: &seal::experiment::Metrics) -> Result<()> {
        Ok(())
    }

    fn log_params(&mut self, _run: &Run, _params: &seal::experiment::Params) -> Result<()> {
        Ok(())
    }

    fn log_model(&mut self, _run: &Run, _model: &ModelArtifact) -> Result<()> {
        Ok(())
    }
}

fn experiment() -> Experiment {
    Experiment::builder("exp-001", "Iris baseline")
        .config(serde_json::json!({"dataset": "iris", "folds": 5}))
        .build()
}

fn run() -> Run {
    Run::builder("run-001", "exp-001")
        .metric("accuracy", 0.9)
        .param("lr", 0.01)
        .model(ModelArtifact::new("model.pt", "sha256:abc123", 2048))
        .build()
}

// =============================================================================
// ExperimentComponent / RunComponent
// =============================================================================

#[test]
fn test_experiment_component_called_once_with_same_experiment() {
    let experiment = experiment();
    let mut component = ForExperiments::new(Counting::default());

    component.invoke(Subject::of(&experiment)).unwrap();

    let calls = component.into_inner();
    assert_eq!(calls.experiments, vec![experiment]);
    assert!(calls.runs.is_empty());
}

#[test]
fn test_run_component_called_once_with_same_run() {
    let run = run();
    let mut component = ForRuns::new(Counting::default());

    component.invoke(Subject::of(&run)).unwrap();

    let calls = component.into_inner();
    assert_eq!(calls.runs, vec![run]);
    assert!(calls.experiments.is_empty());
}

// =============================================================================
// HybridComponent
// =============================================================================

#[test]
fn test_hybrid_experiment_only_reaches_on_experiment() {
    let mut component = Hybrid::new(Counting::default());
    component.invoke(Subject::of(&experiment())).unwrap();

    assert_eq!(component.get_ref().experiments.len(), 1);
    assert!(component.get_ref().runs.is_empty());
}

#[test]
fn test_hybrid_run_only_reaches_on_run() {
    let mut component = Hybrid::new(Counting::default());
    component.invoke(Subject::of(&run())).unwrap();

    assert!(component.get_ref().experiments.is_empty());
    assert_eq!(component.get_ref().runs.len(), 1);
}

#[test]
fn test_hybrid_other_reaches_nothing_and_succeeds() {
    let mut component = Hybrid::new(Counting::default());

    component.invoke(Subject::of(&42_i32)).unwrap();
    component.invoke(Subject::of(&String::from("run-001"))).unwrap();

    assert!(component.get_ref().experiments.is_empty());
    assert!(component.get_ref().runs.is_empty());
}

// =============================================================================
// Logger
// =============================================================================

#[test]
fn test_logger_dispatch() {
    let mut logger = CountingLogger::default();

    logger.invoke(Subject::of(&experiment())).unwrap();
    assert_eq!((logger.experiments, logger.runs), (1, 0));

    logger.invoke(Subject::of(&run())).unwrap();
    assert_eq!((logger.experiments, logger.runs), (1, 1));

    logger.invoke(Subject::of(&1.5_f64)).unwrap();
    assert_eq!((logger.experiments, logger.runs), (1, 1));
}

#[test]
fn test_null_logger_scenario() {
    let mut logger = NullLogger::from_options(Options::new()).unwrap();

    logger.invoke(Subject::of(&experiment())).unwrap();
    logger.invoke(Subject::of(&run())).unwrap();
    logger.invoke(Subject::of(&7_i32)).unwrap();
}

#[test]
fn test_recording_logger_scenario() {
    let mut logger = RecordingLogger::from_options(Options::new()).unwrap();
    let run = run();

    logger.invoke(Subject::of(&experiment())).unwrap();
    logger.invoke(Subject::of(&run)).unwrap();

    let events = logger.take_events();
    assert_eq!(
        events[0],
        LogEvent::Experiment {
            experiment_id: "exp-001".into(),
            config: Some(serde_json::json!({"dataset": "iris", "folds": 5})),
        }
    );
    let metrics = events
        .iter()
        .find_map(|e| match e {
            LogEvent::Metrics { metrics, .. } => Some(metrics.clone()),
            _ => None,
        })
        .expect("metrics logged");
    let params = events
        .iter()
        .find_map(|e| match e {
            LogEvent::Params { params, .. } => Some(params.clone()),
            _ => None,
        })
        .expect("params logged");
    let model = events
        .iter()
        .find_map(|e| match e {
            LogEvent::Model { model, .. } => Some(model.clone()),
            _ => None,
        })
        .expect("model logged");

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics["accuracy"], 0.9);
    assert_eq!(params.len(), 1);
    assert_eq!(params["lr"], serde_json::json!(0.01));
    assert_eq!(Some(&model), run.model());
}

#[test]
fn test_logger_with_default_log_run_decomposes() {
    #[derive(Default)]
    struct Parts(Vec<&'static str>);

    impl Logger for Parts {
        type Config = seal::logger::NullLoggerConfig;

        fn from_config(_config: Self::Config) -> Result<Self> {
            Ok(Self::default())
        }

        fn log_experiment(&mut self, _experiment: &Experiment) -> Result<()> {
            self.0.push("experiment");
            Ok(())
        }

        fn log_metrics(&mut self, _run: &Run, _m: &seal::experiment::Metrics) -> Result<()> {
            self.0.push("metrics");
            Ok(())
        }

        fn log_params(&mut self, _run: &Run, _p: &seal::experiment::Params) -> Result<()> {
            self.0.push("params");
            Ok(())
        }

        fn log_model(&mut self, _run: &Run, _model: &ModelArtifact) -> Result<()> {
            self.0.push("model");
            Ok(())
        }
    }

    let mut logger = Parts::default();
    logger.invoke(Subject::of(&run())).unwrap();
    assert_eq!(logger.0, vec!["metrics", "params", "model"]);

    let mut direct = Parts::default();
    log_run_parts(&mut direct, &Run::new("run-002", "exp-001")).unwrap();
    assert_eq!(direct.0, vec!["metrics", "params"]);
}

#[test]
fn test_logger_error_propagates_unchanged() {
    struct Failing;

    impl Logger for Failing {
        type Config = seal::logger::NullLoggerConfig;

        fn from_config(_config: Self::Config) -> Result<Self> {
            Ok(Self)
        }

        fn log_experiment(&mut self, _experiment: &Experiment) -> Result<()> {
            Ok(())
        }

        fn log_metrics(&mut self, _run: &Run, _m: &seal::experiment::Metrics) -> Result<()> {
            Err(Error::Other("disk full".into()))
        }

        fn log_params(&mut self, _run: &Run, _p: &seal::experiment::Params) -> Result<()> {
            panic!("params must not be logged after metrics failed");
        }

        fn log_model(&mut self, _run: &Run, _model: &ModelArtifact) -> Result<()> {
            panic!("model must not be logged after metrics failed");
        }
    }

    let err = Failing.invoke(Subject::of(&run())).unwrap_err();
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn test_heterogeneous_components() {
    let mut components: Vec<Box<dyn Component>> = vec![
        Box::new(NullLogger::new()),
        Box::new(RecordingLogger::new()),
        Box::new(Hybrid::new(Counting::default())),
        Box::new(ForRuns::new(Counting::default())),
    ];

    let experiment = experiment();
    let run = run();
    for component in &mut components {
        component.invoke(Subject::of(&experiment)).unwrap();
        component.invoke(Subject::of(&run)).unwrap();
        component.invoke(Subject::of(&())).unwrap();
    }
}

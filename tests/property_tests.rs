//! Property-based tests for seal
//!
//! - Dispatch invariants over arbitrary subject sequences
//! - Data integrity of what loggers persist
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use seal::component::{Component, ExperimentComponent, Hybrid, RunComponent, Subject};
use seal::experiment::{Experiment, Run};
use seal::logger::{LogEvent, RecordingLogger, StoreLogger};
use seal::Result;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

#[derive(Debug, Clone)]
enum Input {
    Experiment(Experiment),
    Run(Run),
    Number(i64),
}

fn arb_id() -> impl Strategy<Value = String> {
    "[a-z]{1,8}-[0-9]{1,4}"
}

fn arb_metrics() -> impl Strategy<Value = Vec<(String, f64)>> {
    proptest::collection::vec(("[a-z_]{1,12}", -1.0e6f64..1.0e6), 0..8)
}

fn arb_run() -> impl Strategy<Value = Run> {
    (arb_id(), arb_id(), arb_metrics()).prop_map(|(run_id, experiment_id, metrics)| {
        metrics
            .into_iter()
            .fold(Run::builder(run_id, experiment_id), |builder, (key, value)| {
                builder.metric(key, value)
            })
            .build()
    })
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        (arb_id(), "[A-Za-z ]{0,16}")
            .prop_map(|(id, name)| Input::Experiment(Experiment::new(id, name))),
        arb_run().prop_map(Input::Run),
        any::<i64>().prop_map(Input::Number),
    ]
}

fn subject(input: &Input) -> Subject<'_> {
    match input {
        Input::Experiment(experiment) => Subject::of(experiment),
        Input::Run(run) => Subject::of(run),
        Input::Number(n) => Subject::of(n),
    }
}

#[derive(Default)]
struct Trace(Vec<String>);

impl ExperimentComponent for Trace {
    fn on_experiment(&mut self, experiment: &Experiment) -> Result<()> {
        self.0.push(format!("e:{}", experiment.experiment_id()));
        Ok(())
    }
}

impl RunComponent for Trace {
    fn on_run(&mut self, run: &Run) -> Result<()> {
        self.0.push(format!("r:{}", run.run_id()));
        Ok(())
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a hybrid component sees exactly the experiments and runs, in order
    #[test]
    fn prop_hybrid_dispatch_matches_kinds(inputs in proptest::collection::vec(arb_input(), 0..32)) {
        let mut component = Hybrid::new(Trace::default());
        for input in &inputs {
            component.invoke(subject(input)).unwrap();
        }

        let expected: Vec<String> = inputs
            .iter()
            .filter_map(|input| match input {
                Input::Experiment(e) => Some(format!("e:{}", e.experiment_id())),
                Input::Run(r) => Some(format!("r:{}", r.run_id())),
                Input::Number(_) => None,
            })
            .collect();
        prop_assert_eq!(&component.get_ref().0, &expected);
    }

    /// Property: a recording logger receives each run's metrics unchanged
    #[test]
    fn prop_recorded_metrics_equal_run_metrics(run in arb_run()) {
        let mut logger = RecordingLogger::new();
        logger.invoke(Subject::of(&run)).unwrap();

        let recorded = logger.events().iter().find_map(|event| match event {
            LogEvent::Metrics { metrics, .. } => Some(metrics.clone()),
            _ => None,
        });
        prop_assert_eq!(recorded.as_ref(), Some(run.metrics()));
    }

    /// Property: every metric key logged at a step is queryable at that step
    #[test]
    fn prop_store_logger_metric_integrity(run in arb_run(), step in 0u64..1000) {
        let mut logger = StoreLogger::new();
        logger.set_step(step);
        logger.invoke(Subject::of(&run)).unwrap();

        let store = logger.into_store();
        prop_assert_eq!(store.metric_count(), run.metrics().len());
        for (key, value) in run.metrics() {
            let series = store.get_metrics_for_run(run.run_id(), key);
            prop_assert_eq!(series.len(), 1);
            prop_assert_eq!(series[0].step(), step);
            prop_assert_eq!(series[0].value(), *value);
        }
    }

    /// Property: re-logging a run without advancing the step adds no points
    #[test]
    fn prop_store_logger_one_point_per_step(run in arb_run(), repeats in 1usize..5) {
        let mut logger = StoreLogger::new();
        for _ in 0..repeats {
            logger.invoke(Subject::of(&run)).unwrap();
        }

        prop_assert_eq!(logger.store().metric_count(), run.metrics().len());
    }

    /// Property: invoking on a non-entity never changes a store
    #[test]
    fn prop_other_subjects_are_inert(values in proptest::collection::vec(any::<i64>(), 0..16)) {
        let mut logger = StoreLogger::new();
        for value in &values {
            logger.invoke(Subject::of(value)).unwrap();
        }
        prop_assert!(logger.store().is_empty());
    }
}

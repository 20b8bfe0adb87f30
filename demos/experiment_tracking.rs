//! Experiment Tracking Example
//!
//! Drives a pipeline of loggers through a small simulated training job.
//!
//! Run with: cargo run --example experiment_tracking
//! Set `RUST_LOG=seal=debug` to see dispatch decisions.

use anyhow::Context;
use seal::component::{Component, ForRuns, RunComponent, Subject};
use seal::experiment::{Experiment, ModelArtifact, Run, RunStatus};
use seal::logger::{JsonLinesLogger, Logger, NullLogger, Options, StoreLogger};
use seal::pipeline::{Pipeline, UnrecognizedPolicy};
use tracing_subscriber::EnvFilter;

/// Prints a one-line summary of every run it sees.
struct Summary;

impl RunComponent for Summary {
    fn on_run(&mut self, run: &Run) -> seal::Result<()> {
        println!(
            "   {} [{:?}] metrics={:?}",
            run.run_id(),
            run.status(),
            run.metrics()
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Seal Experiment Tracking ===\n");

    // -------------------------------------------------------------------------
    // 1. Build loggers from free-form options
    // -------------------------------------------------------------------------
    let log_path = std::env::temp_dir().join("seal-experiment-tracking.jsonl");
    let mut options = Options::new();
    options.insert("path".into(), serde_json::json!(log_path));
    options.insert("append".into(), serde_json::json!(false));

    let json_logger =
        JsonLinesLogger::from_options(options).context("opening JSON lines log")?;
    println!("1. Logging to {}", json_logger.path().display());

    let mut pipeline = Pipeline::new()
        .with_policy(UnrecognizedPolicy::Skip)
        .with(NullLogger::new())
        .with(json_logger)
        .with(ForRuns::new(Summary));

    // -------------------------------------------------------------------------
    // 2. Log the experiment
    // -------------------------------------------------------------------------
    let experiment = Experiment::builder("exp-resnet-001", "ResNet50 ImageNet Training")
        .config(serde_json::json!({
            "model": "resnet50",
            "batch_size": 32,
            "epochs": 5
        }))
        .build();
    pipeline.invoke(Subject::of(&experiment))?;
    println!(
        "2. Logged experiment {} (model: {})",
        experiment.name(),
        experiment
            .config_value("model")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown")
    );

    // -------------------------------------------------------------------------
    // 3. Simulate training, logging the run after every epoch
    // -------------------------------------------------------------------------
    println!("3. Training...");
    let mut store_logger = StoreLogger::new();
    let mut run = Run::builder("run-001", experiment.experiment_id())
        .param("learning_rate", 0.001)
        .param("optimizer", "adam")
        .build();
    run.start();

    for epoch in 0..5_u32 {
        run.record_metric("loss", 2.5 / (f64::from(epoch) + 1.0) + 0.1);
        run.record_metric("accuracy", 0.05f64.mul_add(f64::from(epoch), 0.5));
        store_logger.set_step(u64::from(epoch));
        store_logger.invoke(Subject::of(&run))?;
    }

    run.set_model(ModelArtifact::new(
        "final_model.pt",
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        97_800_000,
    ));
    run.complete(RunStatus::Success);
    pipeline.invoke(Subject::of(&run))?;

    // Not an experiment or run: skipped by every component.
    pipeline.invoke(Subject::of(&"checkpoint-42"))?;

    // -------------------------------------------------------------------------
    // 4. Query the training curve
    // -------------------------------------------------------------------------
    println!("\n4. Loss curve:");
    let store = store_logger.into_store();
    for point in store.get_metrics_for_run(run.run_id(), "loss") {
        println!("   step {:>2}: {:.4}", point.step(), point.value());
    }
    println!("   runs stored: {}", store.run_count());

    println!("\n=== Done ===");
    Ok(())
}

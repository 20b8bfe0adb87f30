//! Component Contracts
//!
//! A caller holds a collection of [`Component`]s and invokes each one
//! uniformly with a [`Subject`]. Every component routes the subject to the
//! handler for its kind.
//!
//! ```text
//! Component ── invoke(Subject)
//!   ├── ForExperiments<C: ExperimentComponent>  → on_experiment
//!   ├── ForRuns<C: RunComponent>                → on_run
//!   ├── Hybrid<C: HybridComponent>              → on_experiment | on_run
//!   └── L: Logger                               → log_experiment | log_run
//! ```
//!
//! Hooks (`on_experiment`, `on_run`) are extension points for implementers.
//! Callers go through [`Component::invoke`] on an adapter.
//!
//! # Example
//!
//! ```rust
//! use seal::component::{Component, ExperimentComponent, ForExperiments, Subject};
//! use seal::experiment::Experiment;
//!
//! #[derive(Default)]
//! struct Announce {
//!     seen: Vec<String>,
//! }
//!
//! impl ExperimentComponent for Announce {
//!     fn on_experiment(&mut self, experiment: &Experiment) -> seal::Result<()> {
//!         self.seen.push(experiment.name().to_string());
//!         Ok(())
//!     }
//! }
//!
//! let mut component = ForExperiments::new(Announce::default());
//! component.invoke(Subject::of(&Experiment::new("exp-1", "baseline")))?;
//! assert_eq!(component.get_ref().seen, vec!["baseline"]);
//! # Ok::<(), seal::Error>(())
//! ```

mod adapters;
mod subject;

pub use adapters::{ForExperiments, ForRuns, Hybrid};
pub use subject::{Subject, SubjectKind};

use crate::experiment::{Experiment, Run};
use crate::Result;

/// The uniform invocation capability.
///
/// Object safe: callers keep heterogeneous components as
/// `Box<dyn Component>`.
pub trait Component {
    /// Invoke the component on a subject.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler for the subject's kind returns.
    fn invoke(&mut self, subject: Subject<'_>) -> Result<()>;

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Capability of being invoked on an [`Experiment`].
pub trait ExperimentComponent {
    /// Handle an experiment.
    ///
    /// # Errors
    ///
    /// Implementation-defined; propagated unchanged to the caller of `invoke`.
    fn on_experiment(&mut self, experiment: &Experiment) -> Result<()>;
}

/// Capability of being invoked on a [`Run`].
pub trait RunComponent {
    /// Handle a run.
    ///
    /// # Errors
    ///
    /// Implementation-defined; propagated unchanged to the caller of `invoke`.
    fn on_run(&mut self, run: &Run) -> Result<()>;
}

/// Both capabilities at once.
///
/// Implemented for every type that implements [`ExperimentComponent`] and
/// [`RunComponent`].
pub trait HybridComponent: ExperimentComponent + RunComponent {}

impl<T: ExperimentComponent + RunComponent + ?Sized> HybridComponent for T {}

//! Adapters turning capability hooks into [`Component`]s.

use tracing::debug;

use super::{Component, ExperimentComponent, HybridComponent, RunComponent, Subject};
use crate::Result;

fn skip(component: &str, subject: &Subject<'_>) -> Result<()> {
    debug!(
        component,
        kind = ?subject.kind(),
        subject = subject.label(),
        "No handler for subject, skipping"
    );
    Ok(())
}

/// Exposes an [`ExperimentComponent`] as a [`Component`].
///
/// Experiments go to `on_experiment`; every other subject is skipped.
#[derive(Debug, Default, Clone)]
pub struct ForExperiments<C> {
    inner: C,
}

impl<C: ExperimentComponent> ForExperiments<C> {
    /// Wrap an experiment component.
    ///
    /// Only types with an `on_experiment` hook are accepted:
    ///
    /// ```rust
    /// use seal::component::{ExperimentComponent, ForExperiments};
    /// use seal::experiment::Experiment;
    ///
    /// struct Announce;
    ///
    /// impl ExperimentComponent for Announce {
    ///     fn on_experiment(&mut self, _experiment: &Experiment) -> seal::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let _ = ForExperiments::new(Announce);
    /// ```
    ///
    /// A run-only component is a type error:
    ///
    /// ```compile_fail
    /// use seal::component::{ForExperiments, RunComponent};
    /// use seal::experiment::Run;
    ///
    /// struct RunsOnly;
    ///
    /// impl RunComponent for RunsOnly {
    ///     fn on_run(&mut self, _run: &Run) -> seal::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let _ = ForExperiments::new(RunsOnly);
    /// ```
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped component.
    #[must_use]
    pub const fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwrap the component.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: ExperimentComponent> Component for ForExperiments<C> {
    fn invoke(&mut self, subject: Subject<'_>) -> Result<()> {
        match subject {
            Subject::Experiment(experiment) => self.inner.on_experiment(experiment),
            Subject::Run(_) | Subject::Other { .. } => skip(self.name(), &subject),
        }
    }

    fn name(&self) -> &str {
        std::any::type_name::<C>()
    }
}

/// Exposes a [`RunComponent`] as a [`Component`].
///
/// Runs go to `on_run`; every other subject is skipped.
#[derive(Debug, Default, Clone)]
pub struct ForRuns<C> {
    inner: C,
}

impl<C: RunComponent> ForRuns<C> {
    /// Wrap a run component.
    ///
    /// An experiment-only component does not qualify:
    ///
    /// ```compile_fail
    /// use seal::component::{ExperimentComponent, ForRuns};
    /// use seal::experiment::Experiment;
    ///
    /// struct ExperimentsOnly;
    ///
    /// impl ExperimentComponent for ExperimentsOnly {
    ///     fn on_experiment(&mut self, _experiment: &Experiment) -> seal::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let _ = ForRuns::new(ExperimentsOnly);
    /// ```
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped component.
    #[must_use]
    pub const fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwrap the component.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: RunComponent> Component for ForRuns<C> {
    fn invoke(&mut self, subject: Subject<'_>) -> Result<()> {
        match subject {
            Subject::Run(run) => self.inner.on_run(run),
            Subject::Experiment(_) | Subject::Other { .. } => skip(self.name(), &subject),
        }
    }

    fn name(&self) -> &str {
        std::any::type_name::<C>()
    }
}

/// Exposes a [`HybridComponent`] as a [`Component`].
///
/// Experiments go to `on_experiment`, runs to `on_run`. Subjects of any
/// other type reach neither hook and the invocation succeeds.
#[derive(Debug, Default, Clone)]
pub struct Hybrid<C> {
    inner: C,
}

impl<C: HybridComponent> Hybrid<C> {
    /// Wrap a hybrid component.
    ///
    /// Both hooks are required; one alone is rejected at compile time:
    ///
    /// ```compile_fail
    /// use seal::component::{Hybrid, RunComponent};
    /// use seal::experiment::Run;
    ///
    /// struct RunsOnly;
    ///
    /// impl RunComponent for RunsOnly {
    ///     fn on_run(&mut self, _run: &Run) -> seal::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let _ = Hybrid::new(RunsOnly);
    /// ```
    ///
    /// ```rust
    /// use seal::component::{ExperimentComponent, Hybrid, RunComponent};
    /// use seal::experiment::{Experiment, Run};
    ///
    /// struct Both;
    ///
    /// impl ExperimentComponent for Both {
    ///     fn on_experiment(&mut self, _experiment: &Experiment) -> seal::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// impl RunComponent for Both {
    ///     fn on_run(&mut self, _run: &Run) -> seal::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let _ = Hybrid::new(Both);
    /// ```
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped component.
    #[must_use]
    pub const fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwrap the component.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: HybridComponent> Component for Hybrid<C> {
    fn invoke(&mut self, subject: Subject<'_>) -> Result<()> {
        match subject {
            Subject::Experiment(experiment) => self.inner.on_experiment(experiment),
            Subject::Run(run) => self.inner.on_run(run),
            Subject::Other { .. } => skip(self.name(), &subject),
        }
    }

    fn name(&self) -> &str {
        std::any::type_name::<C>()
    }
}

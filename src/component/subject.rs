//! Subject - the things a component can be invoked on

use std::any::{type_name, Any};
use std::rc::Rc;
use std::sync::Arc;

use crate::experiment::{Experiment, Run};

/// Discriminant of a [`Subject`], without the borrowed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    /// An [`Experiment`].
    Experiment,
    /// A [`Run`].
    Run,
    /// Anything else.
    Other,
}

/// What a component is invoked on.
///
/// Components match on this exhaustively instead of inspecting the runtime
/// type of their argument. Values that are neither an [`Experiment`] nor a
/// [`Run`] are carried as [`Subject::Other`] so the decision of what to do
/// with them stays explicit at every dispatch site.
///
/// # Example
///
/// ```rust
/// use seal::component::{Subject, SubjectKind};
/// use seal::experiment::Run;
///
/// let run = Run::new("run-1", "exp-1");
/// assert_eq!(Subject::of(&run).kind(), SubjectKind::Run);
/// assert_eq!(Subject::of(&42_i32).kind(), SubjectKind::Other);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    /// An experiment.
    Experiment(&'a Experiment),
    /// A run.
    Run(&'a Run),
    /// A value of any other type.
    Other {
        /// Type name of the value, for diagnostics.
        type_name: &'static str,
    },
}

impl<'a> Subject<'a> {
    /// Classify an arbitrary value by its type identity.
    ///
    /// An [`Experiment`] or [`Run`] held directly or behind one `Box`, `Rc`
    /// or `Arc` is recognized. Deeper nesting and other wrappers are
    /// [`Subject::Other`]; dereference those before classifying.
    #[must_use]
    pub fn of<T: Any>(value: &'a T) -> Self {
        let any: &'a dyn Any = value;
        if let Some(experiment) = held::<Experiment>(any) {
            Self::Experiment(experiment)
        } else if let Some(run) = held::<Run>(any) {
            Self::Run(run)
        } else {
            Self::Other {
                type_name: type_name::<T>(),
            }
        }
    }

    /// Get the kind of this subject.
    #[must_use]
    pub const fn kind(&self) -> SubjectKind {
        match self {
            Self::Experiment(_) => SubjectKind::Experiment,
            Self::Run(_) => SubjectKind::Run,
            Self::Other { .. } => SubjectKind::Other,
        }
    }

    /// Name used for this subject in log output.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Experiment(experiment) => experiment.experiment_id(),
            Self::Run(run) => run.run_id(),
            Self::Other { type_name } => type_name,
        }
    }
}

/// `value` as an `E`, looking through one owning smart pointer.
fn held<E: Any>(value: &dyn Any) -> Option<&E> {
    value
        .downcast_ref::<E>()
        .or_else(|| value.downcast_ref::<Box<E>>().map(AsRef::as_ref))
        .or_else(|| value.downcast_ref::<Rc<E>>().map(AsRef::as_ref))
        .or_else(|| value.downcast_ref::<Arc<E>>().map(AsRef::as_ref))
}

impl<'a> From<&'a Experiment> for Subject<'a> {
    fn from(experiment: &'a Experiment) -> Self {
        Self::Experiment(experiment)
    }
}

impl<'a> From<&'a Run> for Subject<'a> {
    fn from(run: &'a Run) -> Self {
        Self::Run(run)
    }
}

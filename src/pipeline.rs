//! Pipeline - an ordered collection of components invoked uniformly
//!
//! ```rust
//! use seal::component::{Component, Subject};
//! use seal::experiment::{Experiment, Run};
//! use seal::logger::{NullLogger, StoreLogger};
//! use seal::pipeline::{Pipeline, UnrecognizedPolicy};
//!
//! let mut pipeline = Pipeline::new()
//!     .with(NullLogger::new())
//!     .with(StoreLogger::new());
//!
//! pipeline.invoke(Subject::of(&Experiment::new("exp-1", "baseline")))?;
//! pipeline.invoke(Subject::of(&Run::new("run-1", "exp-1")))?;
//!
//! let mut strict = Pipeline::new().with_policy(UnrecognizedPolicy::Reject);
//! assert!(strict.invoke(Subject::of(&42_i32)).is_err());
//! # Ok::<(), seal::Error>(())
//! ```

use std::fmt;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::component::{Component, Subject};
use crate::{Error, Result};

/// What a pipeline does with a subject that is neither an experiment nor a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Hand it to every component, each of which skips it.
    #[default]
    Skip,
    /// Fail with [`Error::UnrecognizedSubject`] before any component runs.
    Reject,
}

/// Components invoked in insertion order.
#[derive(Default)]
pub struct Pipeline {
    components: Vec<Box<dyn Component>>,
    policy: UnrecognizedPolicy,
}

impl Pipeline {
    /// Create an empty pipeline with the [`UnrecognizedPolicy::Skip`] policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for unrecognized subjects.
    #[must_use]
    pub const fn with_policy(mut self, policy: UnrecognizedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a component (builder style).
    #[must_use]
    pub fn with<C: Component + 'static>(mut self, component: C) -> Self {
        self.push(component);
        self
    }

    /// Append a component.
    pub fn push<C: Component + 'static>(&mut self, component: C) {
        self.components.push(Box::new(component));
    }

    /// Get the unrecognized-subject policy.
    #[must_use]
    pub const fn policy(&self) -> UnrecognizedPolicy {
        self.policy
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the pipeline has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Names of the components, in invocation order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name()).collect()
    }
}

impl Component for Pipeline {
    /// Invoke every component in order, stopping at the first error.
    fn invoke(&mut self, subject: Subject<'_>) -> Result<()> {
        if let Subject::Other { type_name } = subject {
            if self.policy == UnrecognizedPolicy::Reject {
                warn!(type_name, "Rejecting unrecognized subject");
                return Err(Error::UnrecognizedSubject { type_name });
            }
        }

        for component in &mut self.components {
            debug!(
                component = component.name(),
                kind = ?subject.kind(),
                subject = subject.label(),
                "Invoking component"
            );
            component.invoke(subject)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("components", &self.names())
            .field("policy", &self.policy)
            .finish()
    }
}

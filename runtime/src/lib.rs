//! # Todolist Runtime
//!
//! The Store that owns the current state snapshot and runs reducers.
//!
//! ## Core Components
//!
//! - **Store**: Holds the latest snapshot and serializes writers
//! - **Feedback loop**: `Effect::Send` actions are reduced after the
//!   snapshot that produced them has been published
//! - **Subscriptions**: Readers watch snapshots through a `tokio::sync::watch`
//!   channel and always see a complete snapshot, old or new
//!
//! ## Example
//!
//! ```ignore
//! use todolist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use todolist_core::{SmallVec, effect::Effect, reducer::Reducer};
use tokio::sync::watch;

/// Metric names emitted by the store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept producing actions past the configured limit
        ///
        /// Every snapshot published before the limit was hit stays published.
        #[error("Feedback limit of {limit} actions exceeded in a single send")]
        FeedbackLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use todolist_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(4);
/// assert_eq!(config.max_feedback_actions, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of feedback actions a single `send` may dispatch
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback action limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 16,
        }
    }
}

/// Store implementation
pub mod store {
    use super::{Arc, Effect, Reducer, SmallVec, StoreConfig, StoreError, VecDeque, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. The current snapshot (`Arc<S>` behind a watch channel)
    /// 2. Reducer (state transitions)
    /// 3. Environment (injected dependencies)
    /// 4. Effect feedback
    ///
    /// Snapshots are never mutated once published. Each action is reduced
    /// into a fresh copy which then replaces the previous snapshot.
    ///
    /// Cloning a Store yields another handle to the same snapshot.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<watch::Sender<Arc<S>>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: self.config,
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (state, _) = watch::channel(Arc::new(initial_state));

            Self {
                state: Arc::new(state),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// 1. Copies the current snapshot and reduces the action into the copy
        /// 2. Publishes the copy as the new snapshot
        /// 3. Reduces any `Effect::Send` actions the same way, in order
        ///
        /// Returns once every feedback action has been reduced.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects dispatch
        /// more than [`StoreConfig::max_feedback_actions`] actions.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&self, action: A) -> Result<(), StoreError> {
            let limit = self.config.max_feedback_actions;
            let mut queue = VecDeque::from([action]);
            let mut feedback = 0_usize;

            while let Some(action) = queue.pop_front() {
                tracing::trace!(?action, "reducing action");
                let effects = self.reduce_and_publish(action);
                metrics::counter!(crate::metrics::ACTIONS_PROCESSED).increment(1);

                for next in effects.into_iter().flat_map(Effect::into_actions) {
                    feedback += 1;
                    if feedback > limit {
                        tracing::error!(limit, "feedback limit exceeded, dropping remaining actions");
                        metrics::counter!(crate::metrics::FEEDBACK_LIMIT_EXCEEDED).increment(1);
                        return Err(StoreError::FeedbackLimitExceeded { limit });
                    }
                    metrics::counter!(crate::metrics::FEEDBACK_ACTIONS).increment(1);
                    queue.push_back(next);
                }
            }

            Ok(())
        }

        /// Read from the current snapshot
        ///
        /// The closure sees one complete snapshot; later sends do not affect it.
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let snapshot = self.snapshot();
            f(&snapshot)
        }

        /// The current snapshot
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&self.state.borrow())
        }

        /// Subscribe to snapshot replacements
        ///
        /// The receiver starts out with the current snapshot marked as seen.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
            self.state.subscribe()
        }

        fn reduce_and_publish(&self, action: A) -> SmallVec<[Effect<A>; 4]> {
            let mut effects = SmallVec::new();
            self.state.send_modify(|snapshot| {
                let mut next = S::clone(&**snapshot);
                effects = self.reducer.reduce(&mut next, action, &self.environment);
                *snapshot = Arc::new(next);
            });
            effects
        }
    }
}

pub use store::Store;

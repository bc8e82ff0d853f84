//! # Todolist Testing
//!
//! Testing utilities for todolist reducers and stores.
//!
//! This crate provides:
//! - `FixedClock` for deterministic timestamps
//! - `ReducerTest`, a Given-When-Then builder for reducers
//! - Effect assertion helpers
//! - Property-test helpers on top of proptest
//!
//! ## Example
//!
//! ```ignore
//! use todolist_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(ItemsReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(test_clock())))
//!     .given_state(ItemsState::new())
//!     .when_action(TodoAction::AddItem { text: "Buy milk".into() })
//!     .then_state(|items| assert_eq!(items.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use todolist_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// # Example
    ///
    /// ```
    /// use todolist_testing::mocks::FixedClock;
    /// use todolist_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }
}

/// Property-based testing helpers
pub mod properties {
    use proptest::test_runner::Config;

    /// Proptest configuration used by the todolist property suites
    #[must_use]
    pub fn config(cases: u32) -> Config {
        Config::with_cases(cases)
    }

    /// Returns true if `sub` appears in `full` in the same relative order
    ///
    /// ```
    /// use todolist_testing::properties::is_subsequence;
    ///
    /// assert!(is_subsequence(&[1, 3], &[1, 2, 3]));
    /// assert!(!is_subsequence(&[3, 1], &[1, 2, 3]));
    /// ```
    pub fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
        let mut remaining = full.iter();
        sub.iter().all(|wanted| remaining.any(|candidate| candidate == wanted))
    }
}

/// Install a test-writer tracing subscriber, once per process
///
/// Honors `RUST_LOG`; quiet by default.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_subsequence_edges() {
        assert!(properties::is_subsequence::<u8>(&[], &[]));
        assert!(properties::is_subsequence(&[], &[1]));
        assert!(!properties::is_subsequence(&[1], &[]));
        assert!(!properties::is_subsequence(&[1, 1], &[1]));
    }
}

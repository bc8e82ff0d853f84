//! Metric names and descriptions for the store.
//!
//! Counters are emitted through the `metrics` facade; nothing is recorded
//! unless the binary installs a recorder.

use metrics::describe_counter;

/// Actions reduced by a store, including feedback actions
pub const ACTIONS_PROCESSED: &str = "store.actions.processed";

/// Actions dispatched from `Effect::Send`
pub const FEEDBACK_ACTIONS: &str = "store.effects.feedback";

/// `send` calls aborted by the feedback limit
pub const FEEDBACK_LIMIT_EXCEEDED: &str = "store.effects.feedback_limit_exceeded";

/// Register descriptions for all store metrics.
///
/// Safe to call more than once.
pub fn register_metrics() {
    describe_counter!(
        ACTIONS_PROCESSED,
        "Total number of actions reduced by the store"
    );
    describe_counter!(
        FEEDBACK_ACTIONS,
        "Total number of actions dispatched by effects"
    );
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED,
        "Total number of dispatches aborted by the feedback limit"
    );
}

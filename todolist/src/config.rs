//! Configuration management for the todolist binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::types::VisibilityFilter;
use serde::{Deserialize, Serialize};
use std::env;
use todolist_runtime::StoreConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Header title (`TODOLIST_TITLE`, default `TodoList`)
    pub title: String,
    /// Filter at startup (`TODOLIST_FILTER`, default `SHOW_ALL`)
    pub initial_filter: VisibilityFilter,
    /// Feedback actions allowed per dispatch (`TODOLIST_MAX_FEEDBACK`, default 16)
    pub max_feedback_actions: usize,
    /// Log filter directive (`RUST_LOG`, then `TODOLIST_LOG`, default `info`)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            title: lookup("TODOLIST_TITLE")
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| "TodoList".to_string()),
            initial_filter: lookup("TODOLIST_FILTER")
                .map(VisibilityFilter::from)
                .unwrap_or_default(),
            max_feedback_actions: lookup("TODOLIST_MAX_FEEDBACK")
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(|| StoreConfig::default().max_feedback_actions),
            log_filter: lookup("RUST_LOG")
                .or_else(|| lookup("TODOLIST_LOG"))
                .unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.max_feedback_actions)
    }
}

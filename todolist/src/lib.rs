//! A todo list on a unidirectional store.
//!
//! Items live in a single [`TodoState`] snapshot owned by a
//! [`todolist_runtime::Store`]. The front end never touches state directly: it
//! sends [`TodoAction`]s, the reducers produce the next snapshot, and the
//! view is recomputed from it.
//!
//! - [`types`]: items, the visibility filter, the snapshot and actions
//! - [`reducer`]: item and filter reducers, combined by [`app_reducer`]
//! - [`selectors`]: filtering, counting and display-state selection
//! - [`view`]: plain-text rendering
//! - [`command`]: line commands for the terminal front end
//! - [`config`]: environment configuration
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use todolist::{TodoAction, TodoEnvironment, TodoState, VisibilityFilter, new_store};
//! use todolist::selectors::{ItemCounts, filter_items};
//! use todolist_core::environment::SystemClock;
//! use todolist_runtime::StoreConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(SystemClock));
//! let store = new_store(TodoState::new(), env, StoreConfig::default());
//!
//! store.send(TodoAction::AddItem { text: "Buy milk".to_string() })?;
//! store.send(TodoAction::AddItem { text: "Write docs".to_string() })?;
//!
//! let state = store.snapshot();
//! let first = state.items.data[0].id;
//! store.send(TodoAction::ToggleItem { id: first })?;
//!
//! let state = store.snapshot();
//! assert_eq!(ItemCounts::of(&state.items.data).completed, 1);
//! assert_eq!(filter_items(&state.items.data, VisibilityFilter::ShowActive).len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod reducer;
pub mod selectors;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer, app_reducer};
pub use types::{Item, ItemId, ItemsState, TodoAction, TodoState, VisibilityFilter};

use todolist_runtime::{Store, StoreConfig};

/// The store type the application runs on
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Creates a store running [`app_reducer`] from `state`
#[must_use]
pub fn new_store(state: TodoState, env: TodoEnvironment, config: StoreConfig) -> TodoStore {
    Store::with_config(state, app_reducer(), env, config)
}

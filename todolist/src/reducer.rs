//! Reducers for the todo list.
//!
//! The item collection and the visibility filter each get their own reducer.
//! [`app_reducer`] scopes both to their field of [`TodoState`] and combines
//! them, so every action passes through both.

use crate::types::{Item, ItemId, ItemsState, TodoAction, TodoState, VisibilityFilter};
use std::sync::Arc;
use todolist_core::{
    SmallVec,
    composition::{CombinedReducer, combine_reducers, scope_reducer},
    effect::Effect,
    environment::Clock,
    reducer::Reducer,
    smallvec,
};

/// Environment dependencies for the todo reducers
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for item timestamps
    pub clock: Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// The reducer over the whole [`TodoState`]
pub type TodoReducer = CombinedReducer<TodoState, TodoAction, TodoEnvironment>;

/// Builds the application reducer from the item and filter reducers
#[must_use]
pub fn app_reducer() -> TodoReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            ItemsReducer::new(),
            |state: &TodoState| &state.items,
            |state: &mut TodoState, items| state.items = items,
        )),
        Box::new(scope_reducer(
            VisibilityFilterReducer,
            |state: &TodoState| &state.filter_state,
            |state: &mut TodoState, filter| state.filter_state = filter,
        )),
    ])
}

/// Reducer for the item collection
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemsReducer;

impl ItemsReducer {
    /// Creates a new `ItemsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn reject(state: &mut ItemsState, error: String) {
        tracing::warn!(%error, "todo request rejected");
        state.last_error = Some(error);
    }

    /// Runs `f` on the item with `id`, or records that it does not exist
    fn with_item(state: &mut ItemsState, id: ItemId, f: impl FnOnce(&mut Item)) {
        if let Some(item) = state.get_mut(id) {
            f(item);
            state.last_error = None;
        } else {
            Self::reject(state, format!("Item {id} not found"));
        }
    }
}

impl Reducer for ItemsReducer {
    type State = ItemsState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddItem { text } => {
                if text.trim().is_empty() {
                    Self::reject(state, "Item text cannot be empty".to_string());
                    return smallvec![];
                }

                let id = state.allocate_id();
                tracing::debug!(%id, "adding item");
                state.data.push(Item::new(id, text, env.clock.now()));
                state.last_error = None;
            },

            TodoAction::ToggleItem { id } => {
                tracing::debug!(%id, "toggling item");
                Self::with_item(state, id, Item::toggle);
            },

            TodoAction::ToggleEditItem { id } => {
                tracing::debug!(%id, "toggling edit mode");
                Self::with_item(state, id, Item::toggle_editing);
            },

            TodoAction::UpdateItem { id, text } => {
                tracing::debug!(%id, "updating item text");
                Self::with_item(state, id, |item| item.set_text(text));
            },

            TodoAction::RemoveItem { id } => {
                if state.remove(id).is_some() {
                    tracing::debug!(%id, "removed item");
                    state.last_error = None;
                } else {
                    Self::reject(state, format!("Item {id} not found"));
                }
            },

            // A filter change always succeeds
            TodoAction::SetVisibilityFilter { .. } => state.last_error = None,
        }

        smallvec![]
    }
}

/// Reducer for the visibility filter
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if let TodoAction::SetVisibilityFilter { filter } = action {
            tracing::debug!(%filter, "visibility filter changed");
            *state = filter;
        }
        smallvec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_testing::{ReducerTest, assertions, test_clock};

    fn create_test_env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(test_clock()))
    }

    fn add(text: &str) -> TodoAction {
        TodoAction::AddItem {
            text: text.to_string(),
        }
    }

    fn items_with(texts: &[&str]) -> ItemsState {
        let env = create_test_env();
        let mut state = ItemsState::new();
        for text in texts {
            let _ = ItemsReducer.reduce(&mut state, add(text), &env);
        }
        state
    }

    #[test]
    fn test_add_item_on_empty_list() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(ItemsState::new())
            .when_action(add("x"))
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                let item = &state.data[0];
                assert_eq!(item.id, ItemId::new(1));
                assert_eq!(item.text, "x");
                assert!(!item.complete);
                assert_eq!(item.created_at, test_clock().now());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_item_appends_in_order() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["a", "b"]))
            .when_action(add("c"))
            .then_state(|state| {
                let texts: Vec<_> = state.data.iter().map(|i| i.text.as_str()).collect();
                assert_eq!(texts, vec!["a", "b", "c"]);
                assert_eq!(state.data[2].id, ItemId::new(3));
            })
            .run();
    }

    #[test]
    fn test_add_item_keeps_text_as_sent() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(ItemsState::new())
            .when_action(add("  padded  "))
            .then_state(|state| assert_eq!(state.data[0].text, "  padded  "))
            .run();
    }

    #[test]
    fn test_add_blank_item_rejected() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(ItemsState::new())
            .when_action(add("   "))
            .then_state(|state| {
                assert!(state.is_empty());
                assert_eq!(state.next_id, 1);
                assert!(state.last_error.as_ref().unwrap().contains("cannot be empty"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_item_flips_completion() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["a", "b"]))
            .when_action(TodoAction::ToggleItem { id: ItemId::new(2) })
            .then_state(|state| {
                assert!(!state.data[0].complete);
                assert!(state.data[1].complete);
            })
            .run();

        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["a"]))
            .when_action(TodoAction::ToggleItem { id: ItemId::new(1) })
            .when_action(TodoAction::ToggleItem { id: ItemId::new(1) })
            .then_state(|state| assert!(!state.data[0].complete))
            .run();
    }

    #[test]
    fn test_toggle_unknown_item_rejected() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["a"]))
            .when_action(TodoAction::ToggleItem { id: ItemId::new(9) })
            .then_state(|state| {
                assert!(!state.data[0].complete);
                assert!(state.last_error.as_ref().unwrap().contains("not found"));
            })
            .run();
    }

    #[test]
    fn test_edit_then_update_item() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["draft"]))
            .when_action(TodoAction::ToggleEditItem { id: ItemId::new(1) })
            .then_state(|state| assert!(state.data[0].editing))
            .run();

        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["draft"]))
            .when_action(TodoAction::ToggleEditItem { id: ItemId::new(1) })
            .when_action(TodoAction::UpdateItem {
                id: ItemId::new(1),
                text: "final".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.data[0].text, "final");
                assert!(!state.data[0].editing);
                assert!(state.last_error.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_blank_update_replaces_text() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["  padded  "]))
            .when_action(TodoAction::UpdateItem {
                id: ItemId::new(1),
                text: String::new(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert_eq!(state.data[0].text, "");
                assert!(state.last_error.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_update_unknown_item_rejected() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["a"]))
            .when_action(TodoAction::UpdateItem {
                id: ItemId::new(7),
                text: "b".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.data[0].text, "a");
                assert!(state.last_error.as_ref().unwrap().contains("not found"));
            })
            .run();
    }

    #[test]
    fn test_remove_item_removes_only_that_item() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["a", "b", "c"]))
            .when_action(TodoAction::RemoveItem { id: ItemId::new(2) })
            .then_state(|state| {
                let ids: Vec<_> = state.data.iter().map(|i| i.id.get()).collect();
                assert_eq!(ids, vec![1, 3]);
                assert_eq!(state.next_id, 4);
            })
            .run();
    }

    #[test]
    fn test_remove_unknown_item_rejected() {
        ReducerTest::new(ItemsReducer::new())
            .with_env(create_test_env())
            .given_state(items_with(&["a"]))
            .when_action(TodoAction::RemoveItem { id: ItemId::new(5) })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert!(state.last_error.is_some());
            })
            .run();
    }

    #[test]
    fn test_filter_reducer_sets_filter() {
        ReducerTest::new(VisibilityFilterReducer)
            .with_env(create_test_env())
            .given_state(VisibilityFilter::ShowAll)
            .when_action(TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted,
            })
            .then_state(|filter| assert_eq!(*filter, VisibilityFilter::ShowCompleted))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_app_reducer_routes_to_both_fields() {
        ReducerTest::new(app_reducer())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(add("a"))
            .when_action(TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowActive,
            })
            .then_state(|state| {
                assert_eq!(state.items.len(), 1);
                assert_eq!(state.filter_state, VisibilityFilter::ShowActive);
            })
            .run();
    }

    #[test]
    fn test_filter_change_leaves_items_untouched() {
        let before = TodoState {
            items: items_with(&["a", "b"]),
            filter_state: VisibilityFilter::ShowAll,
        };
        let expected_items = before.items.clone();

        ReducerTest::new(app_reducer())
            .with_env(create_test_env())
            .given_state(before)
            .when_action(TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted,
            })
            .then_state(move |state| assert_eq!(state.items, expected_items))
            .run();
    }

    #[test]
    fn test_filter_change_clears_last_error() {
        ReducerTest::new(app_reducer())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::RemoveItem { id: ItemId::new(3) })
            .then_state(|state| assert!(state.items.last_error.is_some()))
            .run();

        ReducerTest::new(app_reducer())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::RemoveItem { id: ItemId::new(3) })
            .when_action(TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowActive,
            })
            .then_state(|state| {
                assert!(state.items.last_error.is_none());
                assert_eq!(state.filter_state, VisibilityFilter::ShowActive);
            })
            .run();
    }
}

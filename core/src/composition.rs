//! Reducer composition utilities
//!
//! - **`combine_reducers`**: Run several reducers over the same state and action
//! - **`scope_reducer`**: Focus a reducer on one field of a larger state
//!
//! The todolist application state is built from both: the item collection and
//! the visibility filter each have their own reducer, scoped to their field and
//! then combined.
//!
//! # Example
//!
//! ```
//! use todolist_core::composition::{combine_reducers, scope_reducer};
//! use todolist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug)]
//! enum Action {
//!     Push(String),
//!     Select(usize),
//! }
//!
//! #[derive(Clone, Default)]
//! struct Screen {
//!     lines: Vec<String>,
//!     selected: usize,
//! }
//!
//! struct LinesReducer;
//! struct SelectionReducer;
//!
//! impl Reducer for LinesReducer {
//!     type State = Vec<String>;
//!     type Action = Action;
//!     type Environment = ();
//!
//!     fn reduce(&self, lines: &mut Vec<String>, action: Action, _env: &()) -> SmallVec<[Effect<Action>; 4]> {
//!         if let Action::Push(line) = action {
//!             lines.push(line);
//!         }
//!         smallvec![]
//!     }
//! }
//!
//! impl Reducer for SelectionReducer {
//!     type State = usize;
//!     type Action = Action;
//!     type Environment = ();
//!
//!     fn reduce(&self, selected: &mut usize, action: Action, _env: &()) -> SmallVec<[Effect<Action>; 4]> {
//!         if let Action::Select(index) = action {
//!             *selected = index;
//!         }
//!         smallvec![]
//!     }
//! }
//!
//! let screen = combine_reducers(vec![
//!     Box::new(scope_reducer(LinesReducer, |s: &Screen| &s.lines, |s: &mut Screen, v| s.lines = v)),
//!     Box::new(scope_reducer(SelectionReducer, |s: &Screen| &s.selected, |s: &mut Screen, v| s.selected = v)),
//! ]);
//!
//! let mut state = Screen::default();
//! let _ = screen.reduce(&mut state, Action::Push("hello".to_string()), &());
//! let _ = screen.reduce(&mut state, Action::Select(0), &());
//! assert_eq!(state.lines, vec!["hello".to_string()]);
//! ```

use crate::SmallVec;
use crate::effect::Effect;
use crate::reducer::Reducer;

/// A boxed reducer over state `S`, action `A` and environment `E`.
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer sees every action, in the order given. Effects from all
/// reducers are concatenated in that same order.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers in this combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects.into_iter().filter(|effect| !effect.is_none()));
        }

        all_effects
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// `get_state` borrows the field, `set_state` writes the reduced copy back.
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn() -> (A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut sub_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut sub_state, action, env);
        (self.set_state)(state, sub_state);
        effects
    }
}

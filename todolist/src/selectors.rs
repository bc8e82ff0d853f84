//! Item filtering, counting and display-state selection.
//!
//! Everything here is a pure function of a snapshot, recomputed on every
//! render. Counts always cover the full collection, never the filtered view.

use crate::types::{Item, TodoState, VisibilityFilter};

/// Message shown when the completed view has nothing in it
pub const NO_COMPLETED_MESSAGE: &str = "There are no tasks completed yet!";

/// Message shown when there is nothing to list
pub const ADD_FIRST_MESSAGE: &str = "Add your first To Do!";

/// Items visible under `filter`, in their original order
///
/// ```
/// use todolist::selectors::filter_items;
/// use todolist::types::VisibilityFilter;
///
/// assert!(filter_items(&[], VisibilityFilter::ShowActive).is_empty());
/// ```
#[must_use]
pub fn filter_items(items: &[Item], filter: VisibilityFilter) -> Vec<&Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Number of items not yet complete
#[must_use]
pub fn active_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.complete).count()
}

/// Number of completed items
#[must_use]
pub fn completed_count(items: &[Item]) -> usize {
    items.iter().filter(|item| item.complete).count()
}

/// Active and completed counts, taken in one pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemCounts {
    /// Items not yet complete
    pub active: usize,
    /// Completed items
    pub completed: usize,
}

impl ItemCounts {
    /// Counts `items`
    #[must_use]
    pub fn of(items: &[Item]) -> Self {
        items.iter().fold(Self::default(), |mut counts, item| {
            if item.complete {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            counts
        })
    }

    /// Total number of items
    #[must_use]
    pub const fn total(self) -> usize {
        self.active + self.completed
    }
}

/// The count line under the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Summary {
    /// "N tasks left"
    TasksLeft(usize),
    /// "N completed tasks"
    Completed(usize),
}

impl Summary {
    /// Completed count when showing completed items, active count otherwise
    #[must_use]
    pub const fn for_filter(counts: ItemCounts, filter: VisibilityFilter) -> Self {
        match filter {
            VisibilityFilter::ShowCompleted => Self::Completed(counts.completed),
            VisibilityFilter::ShowAll | VisibilityFilter::ShowActive => {
                Self::TasksLeft(counts.active)
            },
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TasksLeft(n) => write!(f, "{n} tasks left"),
            Self::Completed(n) => write!(f, "{n} completed tasks"),
        }
    }
}

/// What the list shows for a snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayState<'a> {
    /// Completed view with nothing in it; the filter footer stays visible
    NoCompletedTasks {
        /// Count line
        summary: Summary,
    },
    /// Nothing to list
    AddFirstItem,
    /// The visible items and the footer
    Items {
        /// Items under the current filter
        visible: Vec<&'a Item>,
        /// Count line
        summary: Summary,
    },
}

impl DisplayState<'_> {
    /// Empty-state message, if any
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoCompletedTasks { .. } => Some(NO_COMPLETED_MESSAGE),
            Self::AddFirstItem => Some(ADD_FIRST_MESSAGE),
            Self::Items { .. } => None,
        }
    }

    /// Count line, when the footer is shown
    #[must_use]
    pub const fn summary(&self) -> Option<Summary> {
        match self {
            Self::NoCompletedTasks { summary } | Self::Items { summary, .. } => Some(*summary),
            Self::AddFirstItem => None,
        }
    }
}

/// Chooses the display state for a snapshot
///
/// Emptiness is judged on the filtered view, so a completed view with only
/// active items reads "no tasks completed yet".
#[must_use]
pub fn display_state(state: &TodoState) -> DisplayState<'_> {
    let filter = state.filter_state;
    let visible = filter_items(&state.items.data, filter);
    let summary = Summary::for_filter(ItemCounts::of(&state.items.data), filter);

    if !visible.is_empty() {
        return DisplayState::Items { visible, summary };
    }

    match filter {
        VisibilityFilter::ShowCompleted => DisplayState::NoCompletedTasks { summary },
        VisibilityFilter::ShowAll | VisibilityFilter::ShowActive => DisplayState::AddFirstItem,
    }
}

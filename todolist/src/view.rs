//! Plain-text rendering of a snapshot.

use crate::selectors::{DisplayState, Summary, display_state};
use crate::types::{Item, TodoState, VisibilityFilter};
use std::fmt;

/// A rendered todo list: header, input hint, items or empty state, footer
///
/// ```
/// use todolist::types::TodoState;
/// use todolist::view::TodoListView;
///
/// let state = TodoState::new();
/// let text = TodoListView::new(&state, "TodoList").to_string();
/// assert!(text.contains("Add your first To Do!"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TodoListView<'a> {
    state: &'a TodoState,
    title: &'a str,
}

impl<'a> TodoListView<'a> {
    /// Creates a view of `state` under the given header title
    #[must_use]
    pub const fn new(state: &'a TodoState, title: &'a str) -> Self {
        Self { state, title }
    }
}

impl fmt::Display for TodoListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;

        // Empty means nothing visible under the current filter
        let display = display_state(self.state);
        if display.message().is_some() {
            writeln!(f, "What needs to be done? (add <text>)")?;
        } else {
            writeln!(f, "New item: add <text>")?;
        }

        match &display {
            DisplayState::Items { visible, .. } => {
                for item in visible {
                    write_item(f, item)?;
                }
            },
            DisplayState::NoCompletedTasks { .. } | DisplayState::AddFirstItem => {
                if let Some(message) = display.message() {
                    writeln!(f, "  {message}")?;
                }
            },
        }

        if let Some(summary) = display.summary() {
            write_footer(f, summary, self.state.filter_state)?;
        }

        if let Some(error) = &self.state.items.last_error {
            writeln!(f, "! {error}")?;
        }

        Ok(())
    }
}

fn write_item(f: &mut fmt::Formatter<'_>, item: &Item) -> fmt::Result {
    let check = if item.complete { 'x' } else { ' ' };
    if item.editing {
        writeln!(f, "  [{check}] #{} > {} (editing)", item.id, item.text)
    } else {
        writeln!(f, "  [{check}] #{} {}", item.id, item.text)
    }
}

fn write_footer(f: &mut fmt::Formatter<'_>, summary: Summary, current: VisibilityFilter) -> fmt::Result {
    write!(f, "{summary} |")?;
    for filter in VisibilityFilter::ALL {
        if filter == current {
            write!(f, " [{}]", filter.label())?;
        } else {
            write!(f, " {}", filter.label())?;
        }
    }
    writeln!(f)
}

//! Domain types for the todo list.
//!
//! The list is an ordered collection of items plus a visibility filter. Items
//! keep insertion order; identifiers are handed out by the collection and are
//! never reused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an `ItemId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What needs doing
    pub text: String,
    /// Whether the item is done
    pub complete: bool,
    /// Whether the item is being edited
    pub editing: bool,
    /// When the item was added
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new, incomplete item
    #[must_use]
    pub const fn new(id: ItemId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            complete: false,
            editing: false,
            created_at,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.complete = !self.complete;
    }

    /// Flips edit mode
    pub const fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    /// Replaces the text and leaves edit mode
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.editing = false;
    }

    /// True while the item is not complete
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.complete
    }
}

/// Which items the list shows
///
/// Parsing never fails: unknown names fall back to [`VisibilityFilter::ShowAll`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum VisibilityFilter {
    /// Every item
    #[default]
    ShowAll,
    /// Items not yet complete
    ShowActive,
    /// Completed items
    ShowCompleted,
}

impl VisibilityFilter {
    /// All filters in display order
    pub const ALL: [Self; 3] = [Self::ShowAll, Self::ShowActive, Self::ShowCompleted];

    /// Wire name (`SHOW_ALL`, `SHOW_ACTIVE`, `SHOW_COMPLETED`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowActive => "SHOW_ACTIVE",
            Self::ShowCompleted => "SHOW_COMPLETED",
        }
    }

    /// Link label shown to the user
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShowAll => "All",
            Self::ShowActive => "Active",
            Self::ShowCompleted => "Completed",
        }
    }

    /// Whether `item` is visible under this filter
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowActive => !item.complete,
            Self::ShowCompleted => item.complete,
        }
    }

    /// Parses a wire name or a label, case-insensitively
    ///
    /// Returns `None` for anything else; see the `From<&str>` impl for the
    /// fail-open conversion.
    #[must_use]
    pub fn parse_known(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|filter| {
            name.eq_ignore_ascii_case(filter.as_str()) || name.eq_ignore_ascii_case(filter.label())
        })
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for VisibilityFilter {
    fn from(name: &str) -> Self {
        Self::parse_known(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown visibility filter, showing all items");
            Self::ShowAll
        })
    }
}

impl From<String> for VisibilityFilter {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<VisibilityFilter> for &'static str {
    fn from(filter: VisibilityFilter) -> Self {
        filter.as_str()
    }
}

/// The ordered item collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsState {
    /// Items in insertion order
    pub data: Vec<Item>,
    /// Identifier the next added item receives
    pub next_id: u64,
    /// Last rejected request (if any)
    pub last_error: Option<String>,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemsState {
    /// Creates an empty collection; the first item gets id 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            next_id: 1,
            last_error: None,
        }
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an item by ID
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.data.iter().find(|item| item.id == id)
    }

    /// Returns a mutable item by ID
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.data.iter_mut().find(|item| item.id == id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Hands out the next identifier
    pub const fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes an item, returning it if it existed
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.data.iter().position(|item| item.id == id)?;
        Some(self.data.remove(index))
    }
}

/// The whole application state: one snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// The item collection
    pub items: ItemsState,
    /// Current visibility filter
    pub filter_state: VisibilityFilter,
}

impl TodoState {
    /// Creates an empty list showing all items
    #[must_use]
    pub const fn new() -> Self {
        Self::with_filter(VisibilityFilter::ShowAll)
    }

    /// Creates an empty list with the given filter
    #[must_use]
    pub const fn with_filter(filter_state: VisibilityFilter) -> Self {
        Self {
            items: ItemsState::new(),
            filter_state,
        }
    }
}

/// Requests that change the todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Add an item with the given text
    AddItem {
        /// Text of the new item
        text: String,
    },

    /// Flip an item's completion flag
    ToggleItem {
        /// Item to toggle
        id: ItemId,
    },

    /// Enter or leave edit mode for an item
    ToggleEditItem {
        /// Item to edit
        id: ItemId,
    },

    /// Replace an item's text
    UpdateItem {
        /// Item to update
        id: ItemId,
        /// New text
        text: String,
    },

    /// Delete an item
    RemoveItem {
        /// Item to delete
        id: ItemId,
    },

    /// Change which items are shown
    SetVisibilityFilter {
        /// New filter
        filter: VisibilityFilter,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_testing::test_clock;
    use todolist_core::environment::Clock;

    #[test]
    fn item_id_parse_and_display() {
        let id: ItemId = "#42".parse().unwrap();
        assert_eq!(id, ItemId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("forty-two".parse::<ItemId>().is_err());
    }

    #[test]
    fn item_new_is_active() {
        let now = test_clock().now();
        let item = Item::new(ItemId::new(1), "Buy milk".to_string(), now);

        assert!(item.is_active());
        assert!(!item.editing);
        assert_eq!(item.created_at, now);
    }

    #[test]
    fn item_set_text_leaves_edit_mode() {
        let mut item = Item::new(ItemId::new(1), "draft".to_string(), test_clock().now());
        item.toggle_editing();
        assert!(item.editing);

        item.set_text("final".to_string());
        assert_eq!(item.text, "final");
        assert!(!item.editing);
    }

    #[test]
    fn filter_parses_wire_names_and_labels() {
        assert_eq!(VisibilityFilter::from("SHOW_ACTIVE"), VisibilityFilter::ShowActive);
        assert_eq!(VisibilityFilter::from("completed"), VisibilityFilter::ShowCompleted);
        assert_eq!(VisibilityFilter::from(" All "), VisibilityFilter::ShowAll);
    }

    #[test]
    fn unknown_filter_falls_back_to_show_all() {
        assert_eq!(VisibilityFilter::parse_known("SHOW_DONE"), None);
        assert_eq!(VisibilityFilter::from("SHOW_DONE"), VisibilityFilter::ShowAll);
        assert_eq!(VisibilityFilter::from(""), VisibilityFilter::ShowAll);
    }

    #[test]
    fn filter_serde_uses_wire_names() {
        let json = serde_json::to_string(&VisibilityFilter::ShowCompleted).unwrap();
        assert_eq!(json, "\"SHOW_COMPLETED\"");

        let parsed: VisibilityFilter = serde_json::from_str("\"SHOW_ACTIVE\"").unwrap();
        assert_eq!(parsed, VisibilityFilter::ShowActive);

        let unknown: VisibilityFilter = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(unknown, VisibilityFilter::ShowAll);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let now = test_clock().now();
        let mut items = ItemsState::new();

        let first = items.allocate_id();
        items.data.push(Item::new(first, "a".to_string(), now));
        assert!(items.remove(first).is_some());
        assert!(items.is_empty());

        let second = items.allocate_id();
        assert_ne!(first, second);
        assert_eq!(second, ItemId::new(2));
    }
}

//! Sections and the items they own.

use std::borrow::Borrow;
use std::fmt;

/// Identifies a section within an [`AccordionModel`](super::AccordionModel).
///
/// Identifiers are unique per model. They also act as the section's default
/// sort key, compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Creates a section id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An entry inside a section: an opaque payload plus an orderable key.
///
/// The key is what the default item sort compares; the payload is never
/// inspected by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T, K = String> {
    key: K,
    value: T,
}

impl<T, K> Item<T, K> {
    /// Creates an item from a sort key and a payload.
    pub fn new(key: K, value: T) -> Self {
        Self { key, value }
    }

    /// Returns the sort key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the payload mutably.
    ///
    /// Payload edits are not structural and do not bump the model version.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the item, returning `(key, value)`.
    pub fn into_parts(self) -> (K, T) {
        (self.key, self.value)
    }
}

/// Plain string entries use their text as both key and payload.
impl From<&str> for Item<String, String> {
    fn from(text: &str) -> Self {
        Self::new(text.to_owned(), text.to_owned())
    }
}

/// Visibility state of a section's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionState {
    /// Only the header row is visible.
    #[default]
    Collapsed,
    /// The header and all items are visible.
    Expanded,
}

impl ExpansionState {
    /// Returns the state for a boolean `expanded` flag.
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    /// Returns `true` for [`ExpansionState::Expanded`].
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// A collapsible group of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T, K = String> {
    pub(crate) id: SectionId,
    pub(crate) items: Vec<Item<T, K>>,
    pub(crate) state: ExpansionState,
}

impl<T, K> Section<T, K> {
    pub(crate) fn new(id: SectionId, items: Vec<Item<T, K>>, state: ExpansionState) -> Self {
        Self { id, items, state }
    }

    /// Returns the section's identifier.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Returns the items in their current order.
    pub fn items(&self) -> &[Item<T, K>] {
        &self.items
    }

    /// Returns the item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&Item<T, K>> {
        self.items.get(index)
    }

    /// Returns the number of items, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the section holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the expansion state.
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    /// Returns `true` if the section's items are visible.
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Number of rows this section contributes to the flat list.
    pub fn visible_row_count(&self) -> usize {
        if self.is_expanded() {
            1 + self.items.len()
        } else {
            1
        }
    }

    /// Consumes the section, returning its items.
    pub fn into_items(self) -> Vec<Item<T, K>> {
        self.items
    }
}

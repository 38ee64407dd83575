//! Sorting support for sections and items.
//!
//! All sorts in this crate are stable: elements that compare equal keep their
//! prior relative order. Sorting is done on a permutation of positions first,
//! so callers can tell whether the order actually changed before committing
//! anything.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::section::{Item, Section};

/// Type alias for a section comparator.
pub type SectionCompareFn<T, K> = Arc<dyn Fn(&Section<T, K>, &Section<T, K>) -> Ordering + Send + Sync>;

/// Type alias for an item comparator.
pub type ItemCompareFn<T, K> = Arc<dyn Fn(&Item<T, K>, &Item<T, K>) -> Ordering + Send + Sync>;

/// Direction of a key-based sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortOrder {
    /// Applies this order to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// What a user-requested sort reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortScope {
    /// Reorder the sections only.
    #[default]
    Sections,
    /// Reorder the items inside every section, leaving section order alone.
    Items,
    /// Reorder sections, then the items inside every section.
    Both,
}

impl SortScope {
    /// Whether this scope reorders sections.
    pub fn sorts_sections(self) -> bool {
        matches!(self, Self::Sections | Self::Both)
    }

    /// Whether this scope reorders items.
    pub fn sorts_items(self) -> bool {
        matches!(self, Self::Items | Self::Both)
    }
}

/// Computes the stable sorted order of `elements` as a permutation.
///
/// Returns `None` when the elements are already in order, i.e. the
/// permutation is the identity.
pub(crate) fn stable_order<E, F>(elements: &[E], mut compare: F) -> Option<Vec<usize>>
where
    F: FnMut(&E, &E) -> Ordering,
{
    let mut order: Vec<usize> = (0..elements.len()).collect();
    // `sort_by` is a stable merge sort.
    order.sort_by(|&a, &b| compare(&elements[a], &elements[b]));

    if order.iter().enumerate().all(|(pos, &src)| pos == src) {
        None
    } else {
        Some(order)
    }
}

/// Rearranges `elements` so that position `i` holds the old `order[i]`.
pub(crate) fn apply_order<E>(elements: &mut Vec<E>, order: &[usize]) {
    debug_assert_eq!(elements.len(), order.len());
    let mut slots: Vec<Option<E>> = elements.drain(..).map(Some).collect();
    elements.extend(order.iter().filter_map(|&src| slots[src].take()));
}

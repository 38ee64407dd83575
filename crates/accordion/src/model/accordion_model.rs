//! The section/item data model behind an accordion.
//!
//! `AccordionModel` owns an ordered list of sections, each holding an ordered
//! list of items and an expansion flag. All mutation goes through the model so
//! it can keep a monotonically increasing version: every call that changes
//! observable state bumps the version exactly once, and calls that fail or
//! change nothing leave it untouched.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use accordion_core::logging::targets;

use super::section::{ExpansionState, Item, Section, SectionId};
use super::signals::AccordionSignals;
use super::sort::{SortOrder, apply_order, stable_order};
use crate::error::{AccordionError, IndexKind, Result};

/// Counter for generating unique model IDs.
static MODEL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`AccordionModel`] instance.
///
/// Together with the version it keys projection caches, so a projector
/// handed a different model never serves rows built for the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(u64);

impl ModelId {
    fn next() -> Self {
        Self(MODEL_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Returns the raw id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered collection of collapsible sections.
///
/// # Example
///
/// ```
/// use accordion::model::{AccordionModel, Item};
///
/// let mut model: AccordionModel<String> = AccordionModel::new();
/// let fruit = model.add_section("fruit", ["pear", "apple"].map(Item::from)).unwrap();
/// model.set_expanded(fruit, true).unwrap();
///
/// model.sort_items_by_key(fruit, Default::default()).unwrap();
/// assert_eq!(model.item(fruit, 0).unwrap().value(), "apple");
/// ```
pub struct AccordionModel<T, K = String> {
    id: ModelId,
    sections: Vec<Section<T, K>>,
    ids: HashSet<SectionId>,
    version: u64,
    default_state: ExpansionState,
    signals: AccordionSignals,
}

impl<T, K> Default for AccordionModel<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> fmt::Debug for AccordionModel<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionModel")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("sections", &self.sections.len())
            .field("default_state", &self.default_state)
            .finish()
    }
}

impl<T, K> AccordionModel<T, K> {
    /// Creates an empty model whose new sections start collapsed.
    pub fn new() -> Self {
        Self::with_default_state(ExpansionState::Collapsed)
    }

    /// Creates an empty model whose new sections start in `state`.
    pub fn with_default_state(state: ExpansionState) -> Self {
        Self {
            id: ModelId::next(),
            sections: Vec::new(),
            ids: HashSet::new(),
            version: 0,
            default_state: state,
            signals: AccordionSignals::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns this model's identity.
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Returns the current version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the signals for this model.
    pub fn signals(&self) -> &AccordionSignals {
        &self.signals
    }

    /// Returns the expansion state given to sections added without one.
    pub fn default_state(&self) -> ExpansionState {
        self.default_state
    }

    /// Sets the expansion state for sections added later.
    ///
    /// Existing sections are not affected, so the version does not change.
    pub fn set_default_state(&mut self, state: ExpansionState) {
        self.default_state = state;
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the model has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns all sections in display order.
    pub fn sections(&self) -> &[Section<T, K>] {
        &self.sections
    }

    /// Returns the section at `index`, if any.
    pub fn section(&self, index: usize) -> Option<&Section<T, K>> {
        self.sections.get(index)
    }

    /// Returns the section with the given id, if any.
    pub fn section_by_id(&self, id: &str) -> Option<&Section<T, K>> {
        self.position_of(id).map(|index| &self.sections[index])
    }

    /// Returns the current position of the section with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        if !self.ids.contains(id) {
            return None;
        }
        self.sections.iter().position(|s| s.id.as_str() == id)
    }

    /// Returns `true` if a section with this id exists.
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns the item at `(section, item)`, if any.
    pub fn item(&self, section: usize, item: usize) -> Option<&Item<T, K>> {
        self.sections.get(section).and_then(|s| s.item(item))
    }

    /// Returns the item at `(section, item)` for payload edits.
    ///
    /// Payloads are opaque to the model, so editing one is not a structural
    /// change and does not bump the version.
    pub fn item_mut(&mut self, section: usize, item: usize) -> Option<&mut Item<T, K>> {
        self.sections.get_mut(section).and_then(|s| s.items.get_mut(item))
    }

    /// Returns `true` if the section at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> Result<bool> {
        Ok(self.section_checked(index)?.is_expanded())
    }

    // =========================================================================
    // Section mutation
    // =========================================================================

    /// Appends a section in the model's default expansion state.
    ///
    /// Returns the new section's position, or [`AccordionError::DuplicateId`]
    /// if the id is already taken.
    pub fn add_section<I>(&mut self, id: impl Into<SectionId>, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = Item<T, K>>,
    {
        self.add_section_with_state(id, items, self.default_state)
    }

    /// Appends a section with an explicit initial expansion state.
    pub fn add_section_with_state<I>(
        &mut self,
        id: impl Into<SectionId>,
        items: I,
        state: ExpansionState,
    ) -> Result<usize>
    where
        I: IntoIterator<Item = Item<T, K>>,
    {
        let index = self.sections.len();
        self.insert_section_with_state(index, id, items, state)?;
        Ok(index)
    }

    /// Inserts a section at `index` in the model's default expansion state.
    ///
    /// `index` may equal the section count, which appends.
    pub fn insert_section<I>(&mut self, index: usize, id: impl Into<SectionId>, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Item<T, K>>,
    {
        self.insert_section_with_state(index, id, items, self.default_state)
    }

    fn insert_section_with_state<I>(
        &mut self,
        index: usize,
        id: impl Into<SectionId>,
        items: I,
        state: ExpansionState,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Item<T, K>>,
    {
        let id = id.into();
        if index > self.sections.len() {
            return Err(self.reject(AccordionError::out_of_range(
                IndexKind::Insertion,
                index,
                self.sections.len(),
            )));
        }
        if self.ids.contains(&id) {
            return Err(self.reject(AccordionError::duplicate_id(id.as_str())));
        }

        self.ids.insert(id.clone());
        let section = Section::new(id, items.into_iter().collect(), state);
        tracing::debug!(
            target: targets::MODEL,
            model = %self.id,
            section = index,
            id = %section.id,
            items = section.len(),
            "section inserted"
        );
        self.sections.insert(index, section);
        self.bump();
        self.signals.section_inserted.emit(index);
        Ok(())
    }

    /// Removes the section at `index` together with all of its items.
    pub fn remove_section(&mut self, index: usize) -> Result<Section<T, K>> {
        self.section_checked(index)?;

        let section = self.sections.remove(index);
        self.ids.remove(&section.id);
        tracing::debug!(
            target: targets::MODEL,
            model = %self.id,
            section = index,
            id = %section.id,
            "section removed"
        );
        self.bump();
        self.signals.section_removed.emit(index);
        Ok(section)
    }

    /// Moves the section at `from` so that it ends up at position `to`.
    ///
    /// Returns `true` if the order changed.
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<bool> {
        self.section_checked(from)?;
        self.section_checked(to)?;
        if from == to {
            return Ok(false);
        }

        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        tracing::debug!(target: targets::MODEL, model = %self.id, from, to, "section moved");
        self.bump();
        self.signals.layout_changed.emit(self.version);
        Ok(true)
    }

    /// Removes every section.
    ///
    /// Returns `true` if the model was not already empty.
    pub fn clear(&mut self) -> bool {
        if self.sections.is_empty() {
            return false;
        }
        self.sections.clear();
        self.ids.clear();
        tracing::debug!(target: targets::MODEL, model = %self.id, "model cleared");
        self.bump();
        self.signals.layout_changed.emit(self.version);
        true
    }

    // =========================================================================
    // Item mutation
    // =========================================================================

    /// Appends an item to a section, returning its position.
    pub fn push_item(&mut self, section: usize, item: Item<T, K>) -> Result<usize> {
        let position = self.section_checked(section)?.len();
        self.insert_item(section, position, item)?;
        Ok(position)
    }

    /// Inserts an item into a section at `index` (which may equal its length).
    pub fn insert_item(&mut self, section: usize, index: usize, item: Item<T, K>) -> Result<()> {
        let len = self.section_checked(section)?.len();
        if index > len {
            return Err(self.reject(AccordionError::out_of_range(IndexKind::Insertion, index, len)));
        }

        self.sections[section].items.insert(index, item);
        tracing::debug!(target: targets::MODEL, model = %self.id, section, item = index, "item inserted");
        self.bump();
        self.signals.item_inserted.emit((section, index));
        Ok(())
    }

    /// Removes and returns the item at `(section, index)`.
    pub fn remove_item(&mut self, section: usize, index: usize) -> Result<Item<T, K>> {
        let len = self.section_checked(section)?.len();
        if index >= len {
            return Err(self.reject(AccordionError::out_of_range(IndexKind::Item, index, len)));
        }

        let item = self.sections[section].items.remove(index);
        tracing::debug!(target: targets::MODEL, model = %self.id, section, item = index, "item removed");
        self.bump();
        self.signals.item_removed.emit((section, index));
        Ok(item)
    }

    // =========================================================================
    // Expand/Collapse
    // =========================================================================

    /// Expands or collapses the section at `index`.
    ///
    /// Idempotent: returns `false` and leaves the version alone when the
    /// section is already in the requested state.
    pub fn set_expanded(&mut self, index: usize, expanded: bool) -> Result<bool> {
        let target = ExpansionState::from_expanded(expanded);
        if self.section_checked(index)?.state == target {
            return Ok(false);
        }

        self.sections[index].state = target;
        tracing::debug!(target: targets::MODEL, model = %self.id, section = index, expanded, "expansion changed");
        self.bump();
        self.signals.expansion_changed.emit((index, expanded));
        Ok(true)
    }

    /// Flips the expansion state of the section at `index`.
    ///
    /// Returns the new state.
    pub fn toggle_expanded(&mut self, index: usize) -> Result<bool> {
        let expanded = !self.section_checked(index)?.is_expanded();
        self.set_expanded(index, expanded)?;
        Ok(expanded)
    }

    /// Expands every section. Returns how many sections changed.
    pub fn expand_all(&mut self) -> usize {
        self.set_all(ExpansionState::Expanded)
    }

    /// Collapses every section. Returns how many sections changed.
    pub fn collapse_all(&mut self) -> usize {
        self.set_all(ExpansionState::Collapsed)
    }

    fn set_all(&mut self, state: ExpansionState) -> usize {
        let mut changed = 0;
        for section in self.sections.iter_mut().filter(|s| s.state != state) {
            section.state = state;
            changed += 1;
        }
        if changed > 0 {
            tracing::debug!(target: targets::MODEL, model = %self.id, ?state, changed, "bulk expansion change");
            self.bump();
            self.signals.layout_changed.emit(self.version);
        }
        changed
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Stably reorders the sections with `compare`.
    ///
    /// Sections that compare equal keep their prior relative order, so
    /// repeating a sort with the same comparator is a no-op. Returns `true`
    /// (and bumps the version) only if the order changed.
    pub fn sort_sections<F>(&mut self, compare: F) -> bool
    where
        F: FnMut(&Section<T, K>, &Section<T, K>) -> Ordering,
    {
        if !self.reorder_sections(compare) {
            tracing::trace!(target: targets::MODEL, model = %self.id, "sections already sorted");
            return false;
        }
        tracing::debug!(target: targets::MODEL, model = %self.id, sections = self.sections.len(), "sections sorted");
        self.bump();
        self.signals.layout_changed.emit(self.version);
        true
    }

    /// Stably sorts the sections by id in the given order.
    pub fn sort_sections_by_key(&mut self, order: SortOrder) -> bool {
        self.sort_sections(|a, b| order.apply(a.id.cmp(&b.id)))
    }

    /// Stably reorders the items of one section with `compare`.
    ///
    /// Returns `true` (and bumps the version) only if the order changed.
    pub fn sort_items_within<F>(&mut self, section: usize, compare: F) -> Result<bool>
    where
        F: FnMut(&Item<T, K>, &Item<T, K>) -> Ordering,
    {
        let items = &self.section_checked(section)?.items;
        let Some(order) = stable_order(items, compare) else {
            tracing::trace!(target: targets::MODEL, model = %self.id, section, "items already sorted");
            return Ok(false);
        };

        apply_order(&mut self.sections[section].items, &order);
        tracing::debug!(target: targets::MODEL, model = %self.id, section, items = order.len(), "items sorted");
        self.bump();
        self.signals.layout_changed.emit(self.version);
        Ok(true)
    }

    /// Stably reorders the items of every section with `compare`.
    ///
    /// The whole pass counts as one mutation: the version is bumped once if
    /// any section changed. Returns the number of sections reordered.
    pub fn sort_all_items<F>(&mut self, compare: F) -> usize
    where
        F: FnMut(&Item<T, K>, &Item<T, K>) -> Ordering,
    {
        let changed = self.reorder_all_items(compare);
        if changed > 0 {
            tracing::debug!(target: targets::MODEL, model = %self.id, sections = changed, "items sorted in all sections");
            self.bump();
            self.signals.layout_changed.emit(self.version);
        }
        changed
    }

    /// Stably reorders the sections and then the items of every section.
    ///
    /// Both passes count as one mutation: the version is bumped at most once.
    /// Returns `true` if anything was reordered.
    pub fn sort_sections_and_items<S, I>(&mut self, section_compare: S, item_compare: I) -> bool
    where
        S: FnMut(&Section<T, K>, &Section<T, K>) -> Ordering,
        I: FnMut(&Item<T, K>, &Item<T, K>) -> Ordering,
    {
        let sections_moved = self.reorder_sections(section_compare);
        let items_moved = self.reorder_all_items(item_compare);
        if !sections_moved && items_moved == 0 {
            tracing::trace!(target: targets::MODEL, model = %self.id, "sections and items already sorted");
            return false;
        }

        tracing::debug!(target: targets::MODEL, model = %self.id, sections_moved, items_moved, "sections and items sorted");
        self.bump();
        self.signals.layout_changed.emit(self.version);
        true
    }

    fn reorder_sections<F>(&mut self, compare: F) -> bool
    where
        F: FnMut(&Section<T, K>, &Section<T, K>) -> Ordering,
    {
        match stable_order(&self.sections, compare) {
            Some(order) => {
                apply_order(&mut self.sections, &order);
                true
            }
            None => false,
        }
    }

    /// Returns the number of sections whose items moved.
    fn reorder_all_items<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&Item<T, K>, &Item<T, K>) -> Ordering,
    {
        let mut changed = 0;
        for section in &mut self.sections {
            if let Some(order) = stable_order(&section.items, &mut compare) {
                apply_order(&mut section.items, &order);
                changed += 1;
            }
        }
        changed
    }

    /// Bumps the version and notifies listeners.
    fn bump(&mut self) {
        self.version += 1;
        self.signals.version_changed.emit(self.version);
    }

    fn section_checked(&self, index: usize) -> Result<&Section<T, K>> {
        self.sections.get(index).ok_or_else(|| {
            self.reject(AccordionError::out_of_range(
                IndexKind::Section,
                index,
                self.sections.len(),
            ))
        })
    }

    fn reject(&self, err: AccordionError) -> AccordionError {
        tracing::debug!(target: targets::MODEL, model = %self.id, error = %err, "operation rejected");
        err
    }
}

impl<T, K: Ord> AccordionModel<T, K> {
    /// Stably sorts one section's items by key in the given order.
    pub fn sort_items_by_key(&mut self, section: usize, order: SortOrder) -> Result<bool> {
        self.sort_items_within(section, |a, b| order.apply(a.key().cmp(b.key())))
    }

    /// Stably sorts the items of every section by key in the given order.
    pub fn sort_all_items_by_key(&mut self, order: SortOrder) -> usize {
        self.sort_all_items(|a, b| order.apply(a.key().cmp(b.key())))
    }

    /// Stably sorts sections by id and items by key as one mutation.
    pub fn sort_sections_and_items_by_key(&mut self, order: SortOrder) -> bool {
        self.sort_sections_and_items(
            |a, b| order.apply(a.id.cmp(&b.id)),
            |a, b| order.apply(a.key().cmp(b.key())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    fn items(values: &[&str]) -> Vec<Item<String>> {
        values.iter().map(|&v| Item::from(v)).collect()
    }

    fn ids<T, K>(model: &AccordionModel<T, K>) -> Vec<&str> {
        model.sections().iter().map(|s| s.id().as_str()).collect()
    }

    #[test]
    fn test_add_section_and_duplicate_id() {
        let mut model = AccordionModel::<String>::new();
        assert_eq!(model.add_section("fruit", items(&["pear"])), Ok(0));
        assert_eq!(model.add_section("veg", items(&[])), Ok(1));
        assert_eq!(model.version(), 2);

        let err = model.add_section("fruit", items(&["plum"])).unwrap_err();
        assert_eq!(err, AccordionError::duplicate_id("fruit"));
        assert_eq!(model.version(), 2);
        assert_eq!(model.section_count(), 2);
    }

    #[test]
    fn test_default_state_is_collapsed() {
        let mut model = AccordionModel::<String>::new();
        let index = model.add_section("a", items(&["x"])).unwrap();
        assert_eq!(model.is_expanded(index), Ok(false));

        model.set_default_state(ExpansionState::Expanded);
        let index = model.add_section("b", items(&["y"])).unwrap();
        assert_eq!(model.is_expanded(index), Ok(true));
    }

    #[test]
    fn test_remove_section_out_of_range_keeps_version() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("a", items(&[])).unwrap();
        model.add_section("b", items(&[])).unwrap();
        let version = model.version();

        let err = model.remove_section(5).unwrap_err();
        assert_eq!(err, AccordionError::out_of_range(IndexKind::Section, 5, 2));
        assert_eq!(model.version(), version);
    }

    #[test]
    fn test_removed_id_can_be_reused() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("a", items(&["x"])).unwrap();
        let removed = model.remove_section(0).unwrap();
        assert_eq!(removed.into_items(), items(&["x"]));
        assert!(!model.contains_id("a"));
        assert_eq!(model.add_section("a", items(&[])), Ok(0));
    }

    #[test]
    fn test_set_expanded_is_idempotent() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("a", items(&["x"])).unwrap();
        let before = model.version();

        assert_eq!(model.set_expanded(0, true), Ok(true));
        let after_first = model.version();
        assert_eq!(after_first, before + 1);

        assert_eq!(model.set_expanded(0, true), Ok(false));
        assert_eq!(model.version(), after_first);
    }

    #[test]
    fn test_toggle_and_bulk_expansion() {
        let mut model = AccordionModel::<String>::new();
        for id in ["a", "b", "c"] {
            model.add_section(id, items(&["x"])).unwrap();
        }

        assert_eq!(model.toggle_expanded(1), Ok(true));
        let version = model.version();
        assert_eq!(model.expand_all(), 2);
        assert_eq!(model.version(), version + 1);
        assert_eq!(model.expand_all(), 0);
        assert_eq!(model.version(), version + 1);
        assert_eq!(model.collapse_all(), 3);
    }

    #[test]
    fn test_sort_sections_is_stable() {
        let mut model = AccordionModel::<u32, u32>::new();
        // Two sections share key "b"; their relative order must survive.
        model.add_section("b", [Item::new(0, 1)]).unwrap();
        model.add_section("a", [Item::new(0, 2)]).unwrap();
        model.add_section("b2", [Item::new(0, 3)]).unwrap();

        let key = |s: &Section<u32, u32>| s.id().as_str().chars().next();
        assert!(model.sort_sections(|x, y| key(x).cmp(&key(y))));
        assert_eq!(ids(&model), vec!["a", "b", "b2"]);

        let version = model.version();
        assert!(!model.sort_sections(|x, y| key(x).cmp(&key(y))));
        assert_eq!(model.version(), version);
    }

    #[test]
    fn test_sort_respects_prior_manual_order() {
        let mut model = AccordionModel::<String>::new();
        for id in ["x1", "y", "x2"] {
            model.add_section(id, items(&[])).unwrap();
        }
        // Manually put x2 ahead of x1, then sort with a comparator that only
        // separates x* from y.
        assert_eq!(model.move_section(2, 0), Ok(true));
        assert_eq!(ids(&model), vec!["x2", "x1", "y"]);

        let family = |s: &Section<String>| s.id().as_str().starts_with('y');
        model.sort_sections(|a, b| family(b).cmp(&family(a)));
        assert_eq!(ids(&model), vec!["y", "x2", "x1"]);
    }

    #[test]
    fn test_sort_sections_by_key_descending() {
        let mut model = AccordionModel::<String>::new();
        for id in ["b", "c", "a"] {
            model.add_section(id, items(&[])).unwrap();
        }
        assert!(model.sort_sections_by_key(SortOrder::Descending));
        assert_eq!(ids(&model), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_item_mutation() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("fruit", items(&["pear"])).unwrap();

        assert_eq!(model.push_item(0, Item::from("fig")), Ok(1));
        model.insert_item(0, 0, Item::from("apple")).unwrap();
        assert_eq!(model.item(0, 0).map(|i| i.value().as_str()), Some("apple"));

        let err = model.insert_item(0, 9, Item::from("kiwi")).unwrap_err();
        assert!(err.is_out_of_range());
        let err = model.remove_item(0, 3).unwrap_err();
        assert_eq!(err, AccordionError::out_of_range(IndexKind::Item, 3, 3));

        let removed = model.remove_item(0, 1).unwrap();
        assert_eq!(removed.value(), "pear");
        assert_eq!(model.section(0).map(Section::len), Some(2));
    }

    #[test]
    fn test_sort_items_within() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("fruit", items(&["pear", "apple"])).unwrap();
        assert_eq!(model.sort_items_by_key(0, SortOrder::Ascending), Ok(true));
        assert_eq!(model.sort_items_by_key(0, SortOrder::Ascending), Ok(false));
        assert!(model.sort_items_by_key(3, SortOrder::Ascending).is_err());
    }

    #[test]
    fn test_sort_all_items_bumps_once() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("a", items(&["z", "y"])).unwrap();
        model.add_section("b", items(&["m"])).unwrap();
        model.add_section("c", items(&["q", "p"])).unwrap();
        let version = model.version();

        assert_eq!(model.sort_all_items_by_key(SortOrder::Ascending), 2);
        assert_eq!(model.version(), version + 1);
        assert_eq!(model.item(2, 0).map(|i| i.key().as_str()), Some("p"));

        assert_eq!(model.sort_all_items_by_key(SortOrder::Ascending), 0);
        assert_eq!(model.version(), version + 1);
    }

    #[test]
    fn test_sort_items_within_keeps_ties_in_order() {
        let mut model = AccordionModel::<&'static str, char>::new();
        model
            .add_section(
                "letters",
                [
                    Item::new('b', "b1"),
                    Item::new('a', "a1"),
                    Item::new('b', "b2"),
                    Item::new('a', "a2"),
                ],
            )
            .unwrap();

        assert_eq!(model.sort_items_within(0, |x, y| x.key().cmp(y.key())), Ok(true));
        let values: Vec<_> = model.section(0).unwrap().items().iter().map(|i| *i.value()).collect();
        assert_eq!(values, ["a1", "a2", "b1", "b2"]);
    }

    #[test]
    fn test_sort_sections_and_items_is_one_mutation() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("veg", items(&["leek", "carrot"])).unwrap();
        model.add_section("fruit", items(&["pear", "apple"])).unwrap();
        let version = model.version();

        let layouts = Arc::new(Mutex::new(0));
        let layouts_clone = layouts.clone();
        model.signals().layout_changed.connect(move |_: &u64| {
            *layouts_clone.lock() += 1;
        });

        assert!(model.sort_sections_and_items_by_key(SortOrder::Ascending));
        assert_eq!(model.version(), version + 1);
        assert_eq!(*layouts.lock(), 1);
        assert_eq!(ids(&model), ["fruit", "veg"]);
        assert_eq!(model.item(0, 0).map(|i| i.key().as_str()), Some("apple"));
        assert_eq!(model.item(1, 0).map(|i| i.key().as_str()), Some("carrot"));

        assert!(!model.sort_sections_and_items_by_key(SortOrder::Ascending));
        assert_eq!(model.version(), version + 1);
        assert_eq!(*layouts.lock(), 1);
    }

    #[test]
    fn test_payload_edit_is_not_structural() {
        let mut model = AccordionModel::<String>::new();
        model.add_section("fruit", items(&["pear"])).unwrap();
        let version = model.version();

        if let Some(item) = model.item_mut(0, 0) {
            item.value_mut().push_str(" (ripe)");
        }
        assert_eq!(model.version(), version);
        assert_eq!(model.item(0, 0).map(|i| i.value().as_str()), Some("pear (ripe)"));
    }

    #[test]
    fn test_signals_fire_after_mutation() {
        let mut model = AccordionModel::<String>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_clone = log.clone();
        model.signals().version_changed.connect(move |&v| {
            log_clone.lock().push(format!("v{v}"));
        });
        let log_clone = log.clone();
        model.signals().expansion_changed.connect(move |&(s, e)| {
            log_clone.lock().push(format!("exp {s} {e}"));
        });

        model.add_section("a", items(&["x"])).unwrap();
        model.set_expanded(0, true).unwrap();
        model.set_expanded(0, true).unwrap();

        assert_eq!(*log.lock(), vec!["v1", "v2", "exp 0 true"]);
    }

    #[test]
    fn test_model_ids_are_unique() {
        let a = AccordionModel::<String>::new();
        let b = AccordionModel::<String>::new();
        assert_ne!(a.id(), b.id());
    }
}

//! The controller a host list view binds to.
//!
//! [`AccordionController`] exclusively owns one [`AccordionModel`] and one
//! [`RowIndexProjector`], and exposes the small action surface a hosting UI
//! needs:
//!
//! - `row_count()` / `locate(row)` for the list-rendering loop
//! - `set_expanded(section, bool)` and `activate_row(row)` when a header is
//!   clicked
//! - `on_sort_requested()` when the user triggers the sort control
//!
//! # Example
//!
//! ```
//! use accordion::{AccordionConfig, AccordionController};
//! use accordion::model::{Item, RowDescriptor};
//!
//! let mut controller: AccordionController<String> = AccordionController::new(AccordionConfig::default());
//! controller.add_section("veg", ["carrot"].map(Item::from)).unwrap();
//! controller.add_section("fruit", ["pear", "apple"].map(Item::from)).unwrap();
//!
//! // User taps the sort button.
//! let rows = controller.on_sort_requested();
//! assert_eq!(controller.model().section(0).unwrap().id().as_str(), "fruit");
//!
//! // User taps the "fruit" header.
//! controller.activate_row(0).unwrap();
//! assert_eq!(controller.row_count(), rows.len() + 2);
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use accordion_core::Signal;
use accordion_core::logging::{span_names, targets};

use crate::config::AccordionConfig;
use crate::error::Result;
use crate::model::{
    AccordionModel, Item, ItemCompareFn, Projection, RowDescriptor, RowIndexProjector, Section,
    SectionCompareFn, SectionId, SortScope,
};

/// Owns an accordion model and answers a host view's queries about it.
pub struct AccordionController<T, K = String> {
    model: AccordionModel<T, K>,
    projector: RowIndexProjector,
    config: AccordionConfig,
    section_compare: Option<SectionCompareFn<T, K>>,
    item_compare: Option<ItemCompareFn<T, K>>,

    /// Emitted after a sort request has been applied.
    /// Args: the re-projected rows
    pub sort_applied: Signal<Projection>,
}

impl<T, K> std::fmt::Debug for AccordionController<T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccordionController")
            .field("model", &self.model)
            .field("config", &self.config)
            .field("custom_section_compare", &self.section_compare.is_some())
            .field("custom_item_compare", &self.item_compare.is_some())
            .finish()
    }
}

impl<T, K> AccordionController<T, K> {
    /// Creates a controller with an empty model.
    pub fn new(config: AccordionConfig) -> Self {
        Self::with_model(AccordionModel::with_default_state(config.default_state()), config)
    }

    /// Creates a controller that takes ownership of an existing model.
    ///
    /// The model keeps its own default expansion state.
    pub fn with_model(model: AccordionModel<T, K>, config: AccordionConfig) -> Self {
        let projector = if config.cache_projections {
            RowIndexProjector::new()
        } else {
            RowIndexProjector::uncached()
        };
        Self {
            model,
            projector,
            config,
            section_compare: None,
            item_compare: None,
            sort_applied: Signal::new(),
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// Returns the model.
    pub fn model(&self) -> &AccordionModel<T, K> {
        &self.model
    }

    /// Returns the model for direct mutation.
    ///
    /// The projector keys its cache on the model version, so edits made here
    /// are picked up on the next query.
    pub fn model_mut(&mut self) -> &mut AccordionModel<T, K> {
        &mut self.model
    }

    /// Returns the projector.
    pub fn projector(&self) -> &RowIndexProjector {
        &self.projector
    }

    /// Gives the model back, consuming the controller.
    pub fn into_model(self) -> AccordionModel<T, K> {
        self.model
    }

    // =========================================================================
    // Comparators
    // =========================================================================

    /// Replaces the key-based section comparator used by sort requests.
    ///
    /// The comparator defines ascending order; the configured
    /// [`SortOrder`](crate::model::SortOrder) is still applied on top.
    pub fn set_section_comparator<F>(&mut self, compare: F)
    where
        F: Fn(&Section<T, K>, &Section<T, K>) -> Ordering + Send + Sync + 'static,
    {
        self.section_compare = Some(Arc::new(compare));
    }

    /// Restores the default by-id section comparator.
    pub fn clear_section_comparator(&mut self) {
        self.section_compare = None;
    }

    /// Replaces the key-based item comparator used by sort requests.
    pub fn set_item_comparator<F>(&mut self, compare: F)
    where
        F: Fn(&Item<T, K>, &Item<T, K>) -> Ordering + Send + Sync + 'static,
    {
        self.item_compare = Some(Arc::new(compare));
    }

    /// Restores the default by-key item comparator.
    pub fn clear_item_comparator(&mut self) {
        self.item_compare = None;
    }

    // =========================================================================
    // Host queries
    // =========================================================================

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.projector.row_count(&self.model)
    }

    /// Descriptor of the visible row at `row`.
    pub fn locate(&self, row: usize) -> Result<RowDescriptor> {
        self.projector.locate(&self.model, row)
    }

    /// Snapshot of all visible rows at the current version.
    pub fn projection(&self) -> Projection {
        self.projector.project(&self.model)
    }

    /// Flat row of a descriptor, if it is currently visible.
    pub fn flat_index_of(&self, row: RowDescriptor) -> Option<usize> {
        self.projector.flat_index_of(&self.model, row)
    }

    /// Returns the item shown at a visible row, or `None` for header rows.
    pub fn item_at(&self, row: usize) -> Result<Option<&Item<T, K>>> {
        let descriptor = self.locate(row)?;
        Ok(descriptor
            .item_index()
            .and_then(|item| self.model.item(descriptor.section(), item)))
    }

    // =========================================================================
    // Host actions
    // =========================================================================

    /// Appends a section. See [`AccordionModel::add_section`].
    pub fn add_section<I>(&mut self, id: impl Into<SectionId>, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = Item<T, K>>,
    {
        self.model.add_section(id, items)
    }

    /// Removes a section. See [`AccordionModel::remove_section`].
    pub fn remove_section(&mut self, index: usize) -> Result<Section<T, K>> {
        self.model.remove_section(index)
    }

    /// Expands or collapses a section. Returns whether anything changed.
    pub fn set_expanded(&mut self, section: usize, expanded: bool) -> Result<bool> {
        self.model.set_expanded(section, expanded)
    }

    /// Handles activation (click/tap) of a visible row.
    ///
    /// Activating a header toggles its section; activating an item does
    /// nothing to the model. Returns the activated row as it was before any
    /// toggle.
    pub fn activate_row(&mut self, row: usize) -> Result<RowDescriptor> {
        let descriptor = self.locate(row)?;
        if let RowDescriptor::SectionHeader { section } = descriptor {
            let expanded = self.model.toggle_expanded(section)?;
            tracing::debug!(target: targets::CONTROLLER, row, section, expanded, "header activated");
        }
        Ok(descriptor)
    }
}

impl<T, K: Ord> AccordionController<T, K> {
    /// Applies the configured sort and re-projects the rows.
    ///
    /// Sorting is stable and deterministic, so repeating a request without
    /// changing the data or the comparators leaves the model (and its
    /// version) untouched and returns the same rows.
    pub fn on_sort_requested(&mut self) -> Projection {
        let _span = tracing::debug_span!(
            target: targets::CONTROLLER,
            span_names::SORT_REQUEST,
            model = %self.model.id()
        )
        .entered();

        let sort = self.config.sort;
        let before = self.model.version();
        let order = sort.order;

        let section_compare = self.section_compare.clone();
        let by_section = move |a: &Section<T, K>, b: &Section<T, K>| match &section_compare {
            Some(compare) => order.apply(compare(a, b)),
            None => order.apply(a.id().cmp(b.id())),
        };
        let item_compare = self.item_compare.clone();
        let by_item = move |a: &Item<T, K>, b: &Item<T, K>| match &item_compare {
            Some(compare) => order.apply(compare(a, b)),
            None => order.apply(a.key().cmp(b.key())),
        };

        match sort.scope {
            SortScope::Sections => {
                self.model.sort_sections(by_section);
            }
            SortScope::Items => {
                self.model.sort_all_items(by_item);
            }
            SortScope::Both => {
                self.model.sort_sections_and_items(by_section, by_item);
            }
        }

        tracing::debug!(
            target: targets::CONTROLLER,
            scope = ?sort.scope,
            order = ?sort.order,
            changed = self.model.version() != before,
            "sort request applied"
        );

        let projection = self.projection();
        self.sort_applied.emit(projection.clone());
        projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortOrder;

    fn controller(config: AccordionConfig) -> AccordionController<String> {
        let mut controller = AccordionController::new(config);
        controller.add_section("veg", ["leek", "carrot"].map(Item::from)).unwrap();
        controller.add_section("fruit", ["pear", "apple"].map(Item::from)).unwrap();
        controller.add_section("dairy", ["milk"].map(Item::from)).unwrap();
        controller
    }

    fn section_ids(controller: &AccordionController<String>) -> Vec<String> {
        controller
            .model()
            .sections()
            .iter()
            .map(|s| s.id().to_string())
            .collect()
    }

    #[test]
    fn test_sort_request_is_idempotent() {
        let mut controller = controller(AccordionConfig::default());

        let first = controller.on_sort_requested();
        let version = controller.model().version();
        assert_eq!(section_ids(&controller), ["dairy", "fruit", "veg"]);

        let second = controller.on_sort_requested();
        assert_eq!(controller.model().version(), version);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_scope_items_descending() {
        let config = AccordionConfig::default()
            .with_sort_scope(SortScope::Items)
            .with_sort_order(SortOrder::Descending);
        let mut controller = AccordionController::<String>::new(config);
        controller.add_section("veg", ["carrot", "leek"].map(Item::from)).unwrap();
        controller.add_section("fruit", ["apple", "pear"].map(Item::from)).unwrap();
        let version = controller.model().version();

        controller.on_sort_requested();
        assert_eq!(controller.model().version(), version + 1);
        assert_eq!(section_ids(&controller), ["veg", "fruit"]);
        let keys = |section: usize| -> Vec<String> {
            controller.model().section(section).unwrap().items().iter().map(|i| i.key().clone()).collect()
        };
        assert_eq!(keys(0), ["leek", "carrot"]);
        assert_eq!(keys(1), ["pear", "apple"]);
    }

    #[test]
    fn test_sort_scope_both_bumps_once() {
        let mut controller = controller(AccordionConfig::default().with_sort_scope(SortScope::Both));
        let version = controller.model().version();
        let layouts = Arc::new(parking_lot::Mutex::new(0));
        let layouts_clone = layouts.clone();
        controller.model().signals().layout_changed.connect(move |_: &u64| {
            *layouts_clone.lock() += 1;
        });

        controller.on_sort_requested();
        assert_eq!(controller.model().version(), version + 1);
        assert_eq!(*layouts.lock(), 1);
        assert_eq!(section_ids(&controller), ["dairy", "fruit", "veg"]);
        assert_eq!(controller.model().item(1, 0).map(|i| i.key().as_str()), Some("apple"));
        assert_eq!(controller.model().item(2, 0).map(|i| i.key().as_str()), Some("carrot"));

        controller.on_sort_requested();
        assert_eq!(controller.model().version(), version + 1);
    }

    #[test]
    fn test_custom_section_comparator() {
        let mut controller = controller(AccordionConfig::default());
        // Largest sections first.
        controller.set_section_comparator(|a, b| b.len().cmp(&a.len()));
        controller.on_sort_requested();
        assert_eq!(section_ids(&controller), ["veg", "fruit", "dairy"]);

        controller.clear_section_comparator();
        controller.on_sort_requested();
        assert_eq!(section_ids(&controller), ["dairy", "fruit", "veg"]);
    }

    #[test]
    fn test_activate_row_toggles_headers_only() {
        let mut controller = controller(AccordionConfig::default());
        assert_eq!(controller.row_count(), 3);

        assert_eq!(controller.activate_row(1), Ok(RowDescriptor::header(1)));
        assert_eq!(controller.row_count(), 5);

        let version = controller.model().version();
        assert_eq!(controller.activate_row(2), Ok(RowDescriptor::item(1, 0)));
        assert_eq!(controller.model().version(), version);
        assert_eq!(controller.item_at(2).unwrap().map(|i| i.value().as_str()), Some("pear"));
        assert_eq!(controller.item_at(1).unwrap(), None);

        assert!(controller.activate_row(9).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_default_expanded_config() {
        let controller = controller(AccordionConfig::default().with_default_expanded(true));
        assert_eq!(controller.row_count(), 3 + 5);
    }

    #[test]
    fn test_sort_applied_signal() {
        let mut controller = controller(AccordionConfig::default());
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        controller.sort_applied.connect(move |projection: &Projection| {
            seen_clone.lock().push(projection.version());
        });

        controller.on_sort_requested();
        controller.on_sort_requested();
        let versions = seen.lock().clone();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0], versions[1]);
    }
}

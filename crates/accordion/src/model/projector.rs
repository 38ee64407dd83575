//! Flattening an accordion into visible rows.
//!
//! [`RowIndexProjector`] walks an [`AccordionModel`] and produces the list a
//! host renders: one header row per section, followed by the section's items
//! when it is expanded. It also maps flat row positions back to
//! `(section, item)` coordinates.
//!
//! The projector may cache the last [`Projection`], keyed by the model's id
//! and version. A cached projection is only handed out while both still
//! match, so a stale row list is never observable.

use std::sync::Arc;

use accordion_core::PerfSpan;
use accordion_core::logging::{span_names, targets};
use parking_lot::RwLock;

use super::accordion_model::{AccordionModel, ModelId};
use super::row::RowDescriptor;
use super::section::Section;
use crate::error::{AccordionError, IndexKind, Result};

/// An immutable snapshot of the visible rows at one model version.
///
/// Cloning is cheap; readers on other threads can hold a projection while the
/// model moves on. Check [`Projection::is_current`] before trusting it
/// against a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    model: ModelId,
    version: u64,
    rows: Arc<[RowDescriptor]>,
}

impl Projection {
    /// The model version these rows were derived from.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The id of the model these rows were derived from.
    pub fn model_id(&self) -> ModelId {
        self.model
    }

    /// Returns `true` if this projection still describes `model`.
    pub fn is_current<T, K>(&self, model: &AccordionModel<T, K>) -> bool {
        self.model == model.id() && self.version == model.version()
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`, if any.
    pub fn get(&self, index: usize) -> Option<RowDescriptor> {
        self.rows.get(index).copied()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[RowDescriptor] {
        &self.rows
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> impl Iterator<Item = RowDescriptor> + '_ {
        self.rows.iter().copied()
    }
}

/// Lazy walk over the visible rows of a model.
///
/// Created by [`RowIndexProjector::rows`]. Each call starts a fresh walk from
/// the model's current state.
pub struct VisibleRows<'a, T, K> {
    sections: &'a [Section<T, K>],
    section: usize,
    /// Next item to emit in the current section; `None` means the header.
    item: Option<usize>,
}

impl<T, K> Iterator for VisibleRows<'_, T, K> {
    type Item = RowDescriptor;

    fn next(&mut self) -> Option<RowDescriptor> {
        loop {
            let current = self.sections.get(self.section)?;
            match self.item {
                None => {
                    self.item = Some(0);
                    return Some(RowDescriptor::header(self.section));
                }
                Some(item) if current.is_expanded() && item < current.len() => {
                    self.item = Some(item + 1);
                    return Some(RowDescriptor::item(self.section, item));
                }
                Some(_) => {
                    self.section += 1;
                    self.item = None;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_sections = self.sections.len().saturating_sub(self.section);
        (remaining_sections.saturating_sub(1), None)
    }
}

/// Derives the flat row list from an [`AccordionModel`].
///
/// # Example
///
/// ```
/// use accordion::model::{AccordionModel, Item, RowDescriptor, RowIndexProjector};
///
/// let mut model: AccordionModel<String> = AccordionModel::new();
/// model.add_section("fruit", ["pear", "apple"].map(Item::from)).unwrap();
/// model.add_section("veg", ["carrot"].map(Item::from)).unwrap();
/// model.set_expanded(0, true).unwrap();
///
/// let projector = RowIndexProjector::new();
/// assert_eq!(projector.row_count(&model), 4);
/// assert_eq!(projector.locate(&model, 3).unwrap(), RowDescriptor::header(1));
/// ```
#[derive(Debug)]
pub struct RowIndexProjector {
    cache: RwLock<Option<Projection>>,
    caching: bool,
}

impl Default for RowIndexProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl RowIndexProjector {
    /// Creates a projector that caches the last projection.
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(None),
            caching: true,
        }
    }

    /// Creates a projector that recomputes on every query.
    pub fn uncached() -> Self {
        Self {
            cache: RwLock::new(None),
            caching: false,
        }
    }

    /// Returns `true` if projections are cached.
    pub fn is_caching(&self) -> bool {
        self.caching
    }

    /// Enables or disables caching. Disabling drops the cached projection.
    pub fn set_caching(&mut self, caching: bool) {
        self.caching = caching;
        if !caching {
            self.invalidate();
        }
    }

    /// Drops any cached projection.
    pub fn invalidate(&self) {
        self.cache.write().take();
    }

    /// Walks the visible rows of `model` lazily, in display order.
    pub fn rows<'a, T, K>(&self, model: &'a AccordionModel<T, K>) -> VisibleRows<'a, T, K> {
        VisibleRows {
            sections: model.sections(),
            section: 0,
            item: None,
        }
    }

    /// Returns the visible rows of `model` as a snapshot.
    ///
    /// Served from the cache when it was built for this model at its current
    /// version, recomputed otherwise.
    pub fn project<T, K>(&self, model: &AccordionModel<T, K>) -> Projection {
        if self.caching {
            if let Some(cached) = self.cache.read().as_ref().filter(|p| p.is_current(model)) {
                tracing::trace!(target: targets::PROJECTOR, model = %model.id(), version = model.version(), "projection cache hit");
                return cached.clone();
            }
        }

        let projection = {
            let _span = PerfSpan::new(span_names::PROJECT);
            Projection {
                model: model.id(),
                version: model.version(),
                rows: self.rows(model).collect(),
            }
        };
        tracing::trace!(
            target: targets::PROJECTOR,
            model = %model.id(),
            version = model.version(),
            rows = projection.len(),
            "projection rebuilt"
        );

        if self.caching {
            *self.cache.write() = Some(projection.clone());
        }
        projection
    }

    /// Total visible rows: one per section plus the items of expanded ones.
    pub fn row_count<T, K>(&self, model: &AccordionModel<T, K>) -> usize {
        if self.caching {
            if let Some(cached) = self.cache.read().as_ref().filter(|p| p.is_current(model)) {
                return cached.len();
            }
        }
        model.sections().iter().map(Section::visible_row_count).sum()
    }

    /// Maps a flat row position to its descriptor.
    ///
    /// Fails with [`AccordionError::IndexOutOfRange`] outside
    /// `0..row_count(model)`.
    pub fn locate<T, K>(&self, model: &AccordionModel<T, K>, row: usize) -> Result<RowDescriptor> {
        let located = if self.caching {
            let projection = self.project(model);
            projection.get(row).ok_or(projection.len())
        } else {
            locate_by_walk(model.sections(), row)
        };

        located.map_err(|len| {
            tracing::debug!(target: targets::PROJECTOR, row, len, "locate out of range");
            AccordionError::out_of_range(IndexKind::Row, row, len)
        })
    }

    /// Maps a descriptor back to its flat row position.
    ///
    /// Returns `None` if the descriptor does not name a visible row of
    /// `model` (unknown section, item of a collapsed section, ...).
    pub fn flat_index_of<T, K>(&self, model: &AccordionModel<T, K>, row: RowDescriptor) -> Option<usize> {
        let sections = model.sections();
        let section = sections.get(row.section())?;
        let base: usize = sections[..row.section()]
            .iter()
            .map(Section::visible_row_count)
            .sum();

        match row.item_index() {
            None => Some(base),
            Some(item) if section.is_expanded() && item < section.len() => Some(base + 1 + item),
            Some(_) => None,
        }
    }
}

/// Finds a row by skipping whole sections, without building the row list.
///
/// On failure returns the total row count.
fn locate_by_walk<T, K>(sections: &[Section<T, K>], row: usize) -> std::result::Result<RowDescriptor, usize> {
    let mut base = 0;
    for (index, section) in sections.iter().enumerate() {
        let rows = section.visible_row_count();
        if row < base + rows {
            return Ok(match row - base {
                0 => RowDescriptor::header(index),
                offset => RowDescriptor::item(index, offset - 1),
            });
        }
        base += rows;
    }
    Err(base)
}

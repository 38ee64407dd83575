//! Data model for accordion views.
//!
//! This module separates the accordion's data from how it is displayed:
//!
//! - [`AccordionModel`] owns the sections and items and is the only place
//!   they are mutated. Every observable change bumps its version.
//! - [`RowIndexProjector`] turns a model into the flat list of visible rows
//!   a list view renders, and maps row positions back to sections and items.
//!
//! # Core Types
//!
//! - `Section` / `Item`: the owned data, with an expansion flag per section
//! - `RowDescriptor`: a visible row, either a section header or an item
//! - `Projection`: an immutable snapshot of the rows at one version
//! - `AccordionSignals`: change notifications
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────────┐  version  ┌───────────────────┐  rows  ┌──────────┐
//! │ AccordionModel │──────────>│ RowIndexProjector │───────>│   Host   │
//! │   (sections)   │           │  (cached by ver.) │        │ (render) │
//! └────────────────┘           └───────────────────┘        └──────────┘
//!         ^                                                       │
//!         └──────────── set_expanded / sort requests ─────────────┘
//! ```

mod accordion_model;
mod projector;
mod row;
mod section;
mod signals;
mod sort;

pub use accordion_model::{AccordionModel, ModelId};
pub use projector::{Projection, RowIndexProjector, VisibleRows};
pub use row::RowDescriptor;
pub use section::{ExpansionState, Item, Section, SectionId};
pub use signals::AccordionSignals;
pub use sort::{ItemCompareFn, SectionCompareFn, SortOrder, SortScope};

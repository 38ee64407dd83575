//! Accordion - a collapsible-section list controller.
//!
//! An accordion shows a list of items grouped into sections whose contents
//! can be expanded or collapsed, and lets the user re-sort what is shown.
//! This crate implements the data side of such a control; drawing, layout
//! and event dispatch belong to the host UI toolkit.
//!
//! - [`model::AccordionModel`]: owns sections and items, versioned
//! - [`model::RowIndexProjector`]: flattens the model into visible rows
//! - [`AccordionController`]: the action surface a host list view binds to
//! - [`SharedAccordion`]: single-writer handle for multi-threaded hosts
//! - [`AccordionConfig`]: TOML-loadable configuration
//!
//! # Example
//!
//! ```
//! use accordion::{AccordionConfig, AccordionController};
//! use accordion::model::{Item, RowDescriptor};
//!
//! let config = AccordionConfig::from_toml_str("[sort]\nscope = \"both\"\n").unwrap();
//! let mut controller: AccordionController<String> = AccordionController::new(config);
//!
//! controller.add_section("fruit", ["pear", "apple"].map(Item::from)).unwrap();
//! controller.add_section("veg", ["carrot"].map(Item::from)).unwrap();
//! controller.set_expanded(0, true).unwrap();
//! controller.on_sort_requested();
//!
//! // The host's list-rendering loop.
//! for row in 0..controller.row_count() {
//!     match controller.locate(row).unwrap() {
//!         RowDescriptor::SectionHeader { section } => {
//!             let header = controller.model().section(section).unwrap();
//!             println!("[{}]", header.id());
//!         }
//!         RowDescriptor::Item { section, item } => {
//!             let item = controller.model().item(section, item).unwrap();
//!             println!("  {}", item.value());
//!         }
//!     }
//! }
//! ```

pub mod config;
mod controller;
pub mod error;
pub mod model;
mod shared;

pub use config::{AccordionConfig, SortConfig};
pub use controller::AccordionController;
pub use error::{AccordionError, ConfigError, IndexKind, Result};
pub use shared::SharedAccordion;

pub use accordion_core::{ConnectionId, Signal};

//! Hierarchical filter state for the topology views.
//!
//! - [`FilterStore`] owns the active selections and the current view
//! - [`navigation::reconcile`] drops descendant filters when the user goes up
//! - [`OptionCatalog`] holds the values offered by filter pickers
//! - [`FilterEventBus`] tells scoped views that the scope changed
//!
//! Nothing in here performs I/O or can fail.

pub mod catalog;
pub mod events;
pub mod filter_set;
pub mod navigation;
pub mod store;

pub use catalog::{dedup_options, OptionCatalog, UNDEFINED_OPTION};
pub use events::{FilterChange, FilterEvent, FilterEventBus};
pub use filter_set::FilterSet;
pub use store::FilterStore;

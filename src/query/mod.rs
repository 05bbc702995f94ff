//! Filtering, sorting and selection over record stores.
//!
//! Every view derives its visible rows the same way: apply the filter
//! configuration as a single predicate, then a stable sort under the
//! active sort configuration. Selection is tracked separately and is
//! independent of what is currently visible.

pub mod filter;
pub mod selection;
pub mod sort;

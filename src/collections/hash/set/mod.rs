//! A module containing [`HashSet`] and associated types.
//!
//! Alongside the set itself are borrowed and owned iterators over its elements and [`Visit`], the
//! signal returned by a visitor passed to [`HashSet::range`].
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod visit;

pub use hash_set::*;
pub use iter::*;
pub use visit::*;

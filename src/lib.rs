//! A small collections crate providing an unordered [`HashSet`](collections::hash::HashSet),
//! backed by a map from each element to a presence marker.
//!
//! # Purpose
//! Most code that needs deduplicated membership tracking only wants a handful of operations:
//! insert, remove, contains, count, clear and some way to walk the elements. This crate provides
//! exactly that, with a visitor-based [`range`](collections::hash::HashSet::range) that can stop
//! part way through and a [`to_vec`](collections::hash::HashSet::to_vec) snapshot that is a copy
//! rather than a view.
//!
//! # Method
//! The set wraps [`std::collections::HashMap<T, ()>`](std::collections::HashMap). The unit value
//! carries no information, it just marks that the key is present. All hashing, collision handling
//! and resizing is left to the map.
//!
//! Set algebra (union, intersection, difference) is intentionally absent.
//!
//! # Error Handling
//! Nothing here can fail. Operations that may or may not change the set report what happened with
//! a [`bool`] (or an [`Option`] for [`take`](collections::hash::HashSet::take)) instead of an error.
//!
//! # Example
//! ```
//! use presence_set::collections::hash::HashSet;
//!
//! let set: HashSet<&str> = ["Apple", "Banana", "Apple", "Strawberry"].into();
//! assert_eq!(set.len(), 3);
//! assert!(set.contains("Apple"));
//! assert!(!set.contains("Mango"));
//!
//! let mut fruits = set.to_vec();
//! fruits.sort();
//! assert_eq!(fruits, ["Apple", "Banana", "Strawberry"]);
//! ```
//!
//! ```
//! use presence_set::collections::hash::HashSet;
//!
//! let set = HashSet::from([1, 2, 3, 4, 5]);
//! let mut total = 0;
//! set.range(|n| {
//!     total += n;
//!     false
//! });
//! assert_eq!(total, 15);
//! ```

#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

//! Collection types.
//!
//! Only hash-based collections live here for now, see [`hash`].

pub mod hash;

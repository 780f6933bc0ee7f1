//! An ordered map based on an AVL tree.
//!
//! The map stores one value per distinct key and yields its entries in
//! ascending key order: the natural order of the key type by default, or
//! the order imposed by a comparator supplied at construction.

pub use crate::map::Map;

pub mod map;

mod node;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

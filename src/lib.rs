#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Table tuning: initial slot count, load factor and duplicate handling.
pub mod config;

/// The error type shared by every table in this crate.
pub mod error;

/// A key-value map over a separate-chaining table.
///
/// This module provides [`ChainedHashMap`], which wraps the raw
/// [`HashTable`] with a configurable hasher and a map interface that
/// includes a canonical text rendering, rendering-based equality and a
/// removal-capable entry cursor.
pub mod hash_map;

/// A hash set over a separate-chaining table.
pub mod hash_set;

/// The raw separate-chaining table and its entry, iterator and cursor types.
pub mod hash_table;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hash builder used when none is supplied.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hash builder used when none is supplied.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Placeholder hash builder for builds without `foldhash` or `std`.
        ///
        /// It has no values, so maps and sets must be built with an explicit
        /// hasher through `with_hasher` and friends.
        pub enum DefaultHashBuilder {}
    }
}

pub use config::DuplicatePolicy;
pub use config::TableConfig;
pub use error::TableError;
pub use hash_map::ChainedHashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;

#![no_std]
#![warn(missing_docs)]

//! A growable associative array with equality-based linear lookup.
//!
//! [`AssocArray`] maps keys to values without hashing or ordering: keys only
//! need to implement [`Eq`], and every lookup is a linear scan over a
//! resizable slot array. This makes it a poor fit for large maps, but a
//! simple and predictable one for small key sets, and the only option when
//! a key type supports equality and nothing else.
//!
//! Values are nullable: a key may be bound to a null value and still count
//! as present, which [`AssocArray::get`] reports as `Ok(None)` rather than
//! an error.
//!
//! # Examples
//! ```
//! use assoc_array::AssocArray;
//!
//! let mut map = AssocArray::new();
//! map.set("x", 1);
//! map.set("y", 2);
//!
//! assert_eq!(map.get("x"), Ok(Some(&1)));
//!
//! map.remove("x");
//! assert_eq!(map.contains_key("x"), false);
//! assert!(map.get("x").is_err());
//! assert_eq!(map.len(), 1);
//! ```

extern crate alloc;

pub mod map;

pub use crate::map::{AssocArray, KeyNotFound, Pair, DEFAULT_CAPACITY};

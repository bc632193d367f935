//! Generic map and set over the standard hash map.
//!
//! [`Map`] is a thin wrapper of [`std::collections::HashMap`] with a few
//! convenience methods, and [`Set`] is a map whose values are units, equipped
//! with set algebra like union, intersection and difference.
//!
//! Neither type synchronizes access internally. To share one between threads,
//! put it behind a lock such as a mutex.
//!
//! ```
//! use mapset::Set;
//!
//! let set = Set::from([1, 2, 3]);
//! let other = Set::from([2, 3, 4]);
//!
//! assert_eq!(set.difference(&other), Set::from([1]));
//! assert_eq!(set.intersection(&other), Set::from([2, 3]));
//! assert_eq!(set.union(&other), Set::from([1, 2, 3, 4]));
//! ```

mod map;
mod set;

pub use map::{Map, MapIterator, OwnedMapIterator};
pub use set::{OwnedSetIterator, Set, SetIterator};

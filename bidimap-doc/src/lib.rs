//! A bidirectional tree map and its supporting crates.
//!
//! The core structure is [`TreeBimap`]: two mirrored binary search
//! trees, one ordered by key and one by value, each node linking to its
//! counterpart's entry, giving O(log n) average lookup in both
//! directions.

#[doc(inline)]
pub use ds::{self, *};
#[doc(inline)]
pub use fmt::{self, *};
#[doc(inline)]
pub use naive::{self, *};

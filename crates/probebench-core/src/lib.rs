//! probebench Core - instrumented algorithm primitives
//!
//! This crate provides the algorithms that the benchmark suites measure:
//! - Search primitives over sorted arrays that report their probe count
//! - Overflow-checked exponentiation that reports its multiplication count
//! - Integer to radix-string conversion

pub mod power;
pub mod radix;
pub mod search;

pub use power::{pow_left_to_right, pow_right_to_left, PowError, PowStats};
pub use radix::{digit_count, to_base, RadixError, MAX_BASE, MIN_BASE};
pub use search::{
    binary_search, interpolation_search, BinarySearch, InterpolationSearch, SearchOutcome,
    SearchStrategy, SortedArray, UnsortedError,
};

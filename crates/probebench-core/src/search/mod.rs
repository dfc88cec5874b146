//! Search primitives over sorted integer arrays.
//!
//! Both primitives share one signature: they take a non-decreasing slice and a
//! key and return a [`SearchOutcome`] holding the index of a matching element
//! (if any) together with the number of probes the search performed.
//!
//! Strategies are unit types implementing [`SearchStrategy`] so benchmark
//! runners can be monomorphized per strategy instead of going through a
//! function pointer or trait object.

mod binary;
mod interpolation;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::Deref;

use thiserror::Error;

pub use binary::binary_search;
pub use interpolation::interpolation_search;

/// Result of a single search call.
///
/// # Examples
///
/// ```
/// use probebench_core::SearchOutcome;
///
/// let hit = SearchOutcome::found(3, 2);
/// assert!(hit.is_found());
/// assert_eq!(hit.index, Some(3));
///
/// let miss = SearchOutcome::not_found(4);
/// assert!(!miss.is_found());
/// assert_eq!(miss.probes, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchOutcome {
    /// Index of an element equal to the key, or `None`.
    pub index: Option<usize>,
    /// Number of comparison-driving loop iterations performed.
    pub probes: u32,
}

impl SearchOutcome {
    /// Creates an outcome for a key located at `index`.
    #[inline]
    pub const fn found(index: usize, probes: u32) -> Self {
        Self {
            index: Some(index),
            probes,
        }
    }

    /// Creates an outcome for a key that is not in the array.
    #[inline]
    pub const fn not_found(probes: u32) -> Self {
        Self {
            index: None,
            probes,
        }
    }

    /// Returns true if the key was located.
    #[inline]
    pub const fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// A search primitive that can be benchmarked.
///
/// Implemented by zero-sized strategy types so that generic runners compile
/// to a direct call.
///
/// # Examples
///
/// ```
/// use probebench_core::{BinarySearch, SearchStrategy, SortedArray};
///
/// let array = SortedArray::from_unsorted(vec![9, 1, 5, 3, 7]);
/// let outcome = BinarySearch.search(&array, 5);
/// assert_eq!(outcome.index, Some(2));
/// assert_eq!(BinarySearch::NAME, "binary");
/// ```
pub trait SearchStrategy {
    /// Short identifier used in reports and log events.
    const NAME: &'static str;

    /// Searches `array` for `key`.
    fn search(&self, array: &SortedArray, key: i64) -> SearchOutcome;
}

/// Classic half-interval search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinarySearch;

impl SearchStrategy for BinarySearch {
    const NAME: &'static str = "binary";

    #[inline]
    fn search(&self, array: &SortedArray, key: i64) -> SearchOutcome {
        binary_search(array, key)
    }
}

/// Linear-interpolation position estimate search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpolationSearch;

impl SearchStrategy for InterpolationSearch {
    const NAME: &'static str = "interpolation";

    #[inline]
    fn search(&self, array: &SortedArray, key: i64) -> SearchOutcome {
        interpolation_search(array, key)
    }
}

/// Error returned when a vector handed to [`SortedArray::try_from_sorted`]
/// is not non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("array is not sorted: element {index} is smaller than its predecessor")]
pub struct UnsortedError {
    /// Index of the first element that breaks the order.
    pub index: usize,
}

/// A non-decreasing sequence of integers.
///
/// The only ways to build one either sort the input or verify that it is
/// already sorted, so every `SortedArray` satisfies the search precondition.
/// Dereferences to `[i64]`.
///
/// # Examples
///
/// ```
/// use probebench_core::SortedArray;
///
/// let array = SortedArray::from_unsorted(vec![5, 1, 3]);
/// assert_eq!(array.as_slice(), &[1, 3, 5]);
///
/// assert!(SortedArray::try_from_sorted(vec![1, 3, 2]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedArray {
    values: Vec<i64>,
}

impl SortedArray {
    /// Sorts `values` and wraps them.
    pub fn from_unsorted(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        Self { values }
    }

    /// Wraps `values` if they are already non-decreasing.
    pub fn try_from_sorted(values: Vec<i64>) -> Result<Self, UnsortedError> {
        match values.windows(2).position(|pair| pair[0] > pair[1]) {
            Some(position) => Err(UnsortedError {
                index: position + 1,
            }),
            None => Ok(Self { values }),
        }
    }

    /// Returns the values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Consumes the array and returns the underlying vector.
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl Deref for SortedArray {
    type Target = [i64];

    #[inline]
    fn deref(&self) -> &[i64] {
        &self.values
    }
}

impl AsRef<[i64]> for SortedArray {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}

impl TryFrom<Vec<i64>> for SortedArray {
    type Error = UnsortedError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::try_from_sorted(values)
    }
}

impl fmt::Display for SortedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) => {
                write!(f, "[{} values, {}..={}]", self.values.len(), first, last)
            }
            _ => write!(f, "[empty]"),
        }
    }
}

//! Half-interval search.

use std::cmp::Ordering;

use super::SearchOutcome;

/// Searches a non-decreasing slice by repeated halving.
///
/// The window is `[low, high)`; each probe compares the midpoint
/// `low + (high - low) / 2` and discards the half that cannot hold the key.
/// A slice of length `n` needs at most `⌈log2(n + 1)⌉` probes.
///
/// When several elements equal the key, any one of their indices may be
/// returned.
///
/// # Examples
///
/// ```
/// use probebench_core::binary_search;
///
/// let values = [1, 3, 5, 7, 9, 11];
/// let outcome = binary_search(&values, 7);
/// assert_eq!(outcome.index, Some(3));
/// assert!(outcome.probes <= 3);
///
/// assert_eq!(binary_search(&values, 4).index, None);
/// ```
pub fn binary_search(values: &[i64], key: i64) -> SearchOutcome {
    let mut low = 0;
    let mut high = values.len();
    let mut probes = 0;

    while low < high {
        probes += 1;
        let mid = low + (high - low) / 2;
        match values[mid].cmp(&key) {
            Ordering::Equal => return SearchOutcome::found(mid, probes),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    SearchOutcome::not_found(probes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice() {
        assert_eq!(binary_search(&[], 3), SearchOutcome::not_found(0));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(binary_search(&[3], 3), SearchOutcome::found(0, 1));
        assert_eq!(binary_search(&[3], 4), SearchOutcome::not_found(1));
    }

    #[test]
    fn test_first_and_last() {
        let values = [1, 3, 5, 7, 9, 11];
        assert_eq!(binary_search(&values, 1).index, Some(0));
        assert_eq!(binary_search(&values, 11).index, Some(5));
    }

    #[test]
    fn test_extreme_keys() {
        let values = [i64::MIN, -1, 0, i64::MAX];
        assert_eq!(binary_search(&values, i64::MIN).index, Some(0));
        assert_eq!(binary_search(&values, i64::MAX).index, Some(3));
        assert_eq!(binary_search(&values, 1).index, None);
    }
}

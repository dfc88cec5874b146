//! Interpolation search.

use std::cmp::Ordering;

use super::SearchOutcome;

/// Searches a non-decreasing slice by estimating the key's position.
///
/// Each probe looks at the inclusive window `[low, high]`:
///
/// - if `values[low] == values[high]` the window holds a single value and
///   membership is decided directly, without dividing by zero;
/// - if the key lies outside `[values[low], values[high]]` it cannot be in the
///   window and the search stops;
/// - otherwise the probe position is estimated by linear interpolation,
///   clamped to the window, and the window is narrowed around it.
///
/// Close to `O(log log n)` probes on uniformly spread values; degrades toward
/// `O(n)` when a few far outliers stretch the value range of a dense cluster.
///
/// # Examples
///
/// ```
/// use probebench_core::interpolation_search;
///
/// let values = [10, 20, 30, 40, 50];
/// assert_eq!(interpolation_search(&values, 40).index, Some(3));
/// assert_eq!(interpolation_search(&values, 41).index, None);
///
/// // All-equal window: decided in one probe.
/// let flat = [2, 2, 2, 2, 2];
/// let outcome = interpolation_search(&flat, 2);
/// assert_eq!((outcome.index, outcome.probes), (Some(0), 1));
/// ```
pub fn interpolation_search(values: &[i64], key: i64) -> SearchOutcome {
    let Some(mut high) = values.len().checked_sub(1) else {
        return SearchOutcome::not_found(0);
    };
    let mut low = 0;
    let mut probes = 0;

    while low <= high {
        probes += 1;
        let low_value = values[low];
        let high_value = values[high];

        if low_value == high_value {
            return if low_value == key {
                SearchOutcome::found(low, probes)
            } else {
                SearchOutcome::not_found(probes)
            };
        }
        if key < low_value || key > high_value {
            return SearchOutcome::not_found(probes);
        }

        let pos = estimate_position(low, high, low_value, high_value, key);
        // values[low] <= key <= values[high] keeps pos - 1 and pos + 1 in the window.
        match values[pos].cmp(&key) {
            Ordering::Equal => return SearchOutcome::found(pos, probes),
            Ordering::Less => low = pos + 1,
            Ordering::Greater => high = pos - 1,
        }
    }

    SearchOutcome::not_found(probes)
}

// Requires low_value < high_value and low_value <= key <= high_value.
fn estimate_position(low: usize, high: usize, low_value: i64, high_value: i64, key: i64) -> usize {
    let span = (high - low) as f64;
    let offset = (i128::from(key) - i128::from(low_value)) as f64;
    let range = (i128::from(high_value) - i128::from(low_value)) as f64;
    let estimate = low as f64 + (span * offset / range).floor();
    // Float rounding can land one past either end.
    (estimate as usize).clamp(low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice() {
        assert_eq!(interpolation_search(&[], 3), SearchOutcome::not_found(0));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(interpolation_search(&[3], 3), SearchOutcome::found(0, 1));
        assert_eq!(interpolation_search(&[3], 4), SearchOutcome::not_found(1));
    }

    #[test]
    fn test_out_of_range_key_costs_one_probe() {
        let values = [10, 20, 30];
        assert_eq!(interpolation_search(&values, 5), SearchOutcome::not_found(1));
        assert_eq!(interpolation_search(&values, 35), SearchOutcome::not_found(1));
    }

    #[test]
    fn test_exact_linear_data_hits_first_probe() {
        let values: Vec<i64> = (0..1000).map(|i| i * 3).collect();
        for (index, &key) in values.iter().enumerate() {
            assert_eq!(interpolation_search(&values, key), SearchOutcome::found(index, 1));
        }
    }

    #[test]
    fn test_extreme_value_range_does_not_overflow() {
        let values = [i64::MIN, -5, 0, 5, i64::MAX];
        for (index, &key) in values.iter().enumerate() {
            assert_eq!(interpolation_search(&values, key).index, Some(index));
        }
        assert_eq!(interpolation_search(&values, 1).index, None);
    }

    #[test]
    fn test_estimate_is_clamped() {
        assert_eq!(estimate_position(4, 9, 0, 10, 10), 9);
        assert_eq!(estimate_position(4, 9, 0, 10, 0), 4);
    }
}

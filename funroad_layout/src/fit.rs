// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width accumulator.
//!
//! ## Rule
//!
//! Scan widths left to right, keeping a running total. The first item whose inclusion would
//! push the total past the available width stops the scan; it and every later item are
//! excluded. There is no reordering and no best-fit packing, so a narrow item after a wide
//! one never "fills the gap".
//!
//! The count is therefore the largest `k` with `w[0] + .. + w[k-1] <= available`, and it is
//! monotonic in `available` for fixed widths.

/// Number of leading widths whose running sum stays within `available`.
///
/// ```
/// use funroad_layout::fit::visible_count;
///
/// assert_eq!(visible_count(100.0, [40.0, 40.0, 40.0]), 2);
/// assert_eq!(visible_count(120.0, [40.0, 40.0, 40.0]), 3);
/// // Greedy: the narrow third item is not pulled forward past the wide second one.
/// assert_eq!(visible_count(100.0, [40.0, 80.0, 10.0]), 1);
/// ```
pub fn visible_count(available: f64, widths: impl IntoIterator<Item = f64>) -> usize {
    let mut total = 0.0;
    let mut visible = 0;
    for width in widths {
        if total + width > available {
            break;
        }
        total += width;
        visible += 1;
    }
    visible
}

/// Visible count for a container that also holds a trailing control of `trailing` width.
///
/// Returns `None` when the container has not been laid out yet (zero, negative or
/// non-finite width); callers keep their previous count in that case.
pub fn fit(container: f64, trailing: f64, widths: impl IntoIterator<Item = f64>) -> Option<usize> {
    if !container.is_finite() || container <= 0.0 {
        return None;
    }
    Some(visible_count(container - trailing, widths))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [f64; 5] = [56.0, 72.0, 80.0, 192.0, 88.0];

    #[test]
    fn everything_fits() {
        let total: f64 = WIDTHS.iter().sum();
        assert_eq!(fit(total + 50.0, 50.0, WIDTHS), Some(WIDTHS.len()));
    }

    #[test]
    fn exact_budget_is_inclusive() {
        assert_eq!(fit(56.0 + 72.0 + 10.0, 10.0, WIDTHS), Some(2));
        assert_eq!(fit(56.0 + 72.0 + 10.0 - 0.5, 10.0, WIDTHS), Some(1));
    }

    #[test]
    fn nothing_fits() {
        assert_eq!(fit(100.0, 50.0, WIDTHS), Some(0));
        // Trailing control wider than the container.
        assert_eq!(fit(30.0, 50.0, WIDTHS), Some(0));
        assert_eq!(fit(30.0, 50.0, [0.0, 0.0]), Some(0));
    }

    #[test]
    fn unmeasured_container_is_skipped() {
        assert_eq!(fit(0.0, 50.0, WIDTHS), None);
        assert_eq!(fit(-1.0, 0.0, WIDTHS), None);
        assert_eq!(fit(f64::NAN, 0.0, WIDTHS), None);
        assert_eq!(fit(f64::INFINITY, 0.0, WIDTHS), None);
    }

    #[test]
    fn empty_candidates() {
        assert_eq!(fit(500.0, 96.0, [0.0_f64; 0]), Some(0));
    }

    #[test]
    fn monotonic_in_container_width() {
        let mut last = 0;
        let mut container = 1.0;
        while container < 700.0 {
            let count = fit(container, 96.0, WIDTHS).unwrap();
            assert!(count >= last, "count dropped from {last} to {count} at {container}");
            last = count;
            container += 7.5;
        }
        assert_eq!(last, WIDTHS.len());
    }

    #[test]
    fn count_is_maximal_prefix() {
        for available in [0.0, 55.9, 56.0, 127.0, 128.0, 208.0, 399.0, 400.0, 488.0] {
            let k = visible_count(available, WIDTHS);
            let prefix: f64 = WIDTHS[..k].iter().sum();
            assert!(prefix <= available);
            if k < WIDTHS.len() {
                assert!(prefix + WIDTHS[k] > available);
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let widths = WIDTHS;
        let first = fit(333.0, 96.0, widths);
        let second = fit(333.0, 96.0, widths);
        assert_eq!(first, second);
        assert_eq!(widths, WIDTHS);
    }
}

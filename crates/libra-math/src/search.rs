// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Search
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Binary search on sorted event timestamps.
//!
//! `lower_bound`/`upper_bound` reproduce `np.searchsorted` with
//! side="left"/"right"; the coincidence sweep is built on them.

/// First index `i` in the sorted slice with `a[i] >= x`.
///
/// Equivalent to `np.searchsorted(a, x, side="left")`.
pub fn lower_bound(a: &[f64], x: f64) -> usize {
    a.partition_point(|&v| v < x)
}

/// First index `i` in the sorted slice with `a[i] > x`.
///
/// Equivalent to `np.searchsorted(a, x, side="right")`.
pub fn upper_bound(a: &[f64], x: f64) -> usize {
    a.partition_point(|&v| v <= x)
}

/// True if the sorted slice contains a value in the closed interval `[lo, hi]`.
pub fn any_in_window(a: &[f64], lo: f64, hi: f64) -> bool {
    lower_bound(a, lo) < upper_bound(a, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_basic() {
        let a = [1.0, 2.0, 2.0, 3.0, 5.0];
        assert_eq!(lower_bound(&a, 0.0), 0);
        assert_eq!(lower_bound(&a, 2.0), 1);
        assert_eq!(lower_bound(&a, 2.5), 3);
        assert_eq!(lower_bound(&a, 5.0), 4);
        assert_eq!(lower_bound(&a, 6.0), 5);
    }

    #[test]
    fn test_upper_bound_basic() {
        let a = [1.0, 2.0, 2.0, 3.0, 5.0];
        assert_eq!(upper_bound(&a, 0.0), 0);
        assert_eq!(upper_bound(&a, 2.0), 3);
        assert_eq!(upper_bound(&a, 2.5), 3);
        assert_eq!(upper_bound(&a, 5.0), 5);
    }

    #[test]
    fn test_bounds_on_empty() {
        let a: [f64; 0] = [];
        assert_eq!(lower_bound(&a, 1.0), 0);
        assert_eq!(upper_bound(&a, 1.0), 0);
        assert!(!any_in_window(&a, 0.0, 10.0));
    }

    #[test]
    fn test_any_in_window() {
        let a = [1.0, 4.0, 9.0];
        assert!(any_in_window(&a, 3.5, 4.5));
        assert!(any_in_window(&a, 4.0, 4.0), "Closed interval includes endpoints");
        assert!(!any_in_window(&a, 5.0, 8.0));
        assert!(!any_in_window(&a, 10.0, 20.0));
    }
}

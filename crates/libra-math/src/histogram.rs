// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Histogram
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-edge histogramming with numpy bin conventions.
//!
//! Bins are right-open `[e_i, e_{i+1})`; the last bin is closed so a value
//! equal to the final edge is counted.

use crate::search::upper_bound;

/// Uniformly spaced bin edges with `np.arange(start, stop, width)` semantics:
/// `start, start + width, ...`, strictly below `stop`.
///
/// Panics if `width <= 0`.
pub fn uniform_edges(start: f64, stop: f64, width: f64) -> Vec<f64> {
    assert!(width > 0.0, "Bin width must be positive");
    let mut edges = Vec::new();
    let mut i = 0usize;
    loop {
        let e = start + i as f64 * width;
        if e >= stop {
            break;
        }
        edges.push(e);
        i += 1;
    }
    edges
}

/// Count values into the given bins.
///
/// Values outside `[edges[0], edges[n-1]]` are ignored.
/// Panics if fewer than 2 edges are supplied or edges are not increasing.
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<u64> {
    assert!(edges.len() >= 2, "Histogram needs at least 2 edges");
    for w in edges.windows(2) {
        assert!(w[1] > w[0], "Histogram edges must be strictly increasing");
    }

    let n_bins = edges.len() - 1;
    let mut counts = vec![0u64; n_bins];
    let last = edges[edges.len() - 1];

    for &v in values {
        if v < edges[0] || v > last {
            continue;
        }
        let mut bin = upper_bound(edges, v).saturating_sub(1);
        if bin == n_bins {
            // v == last edge belongs to the final (closed) bin
            bin = n_bins - 1;
        }
        counts[bin] += 1;
    }
    counts
}

/// A binned distribution: `counts.len() == edges.len() - 1`.
#[derive(Debug, Clone)]
pub struct Histogram1D {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram1D {
    /// Bin values into the given edges.
    pub fn new(values: &[f64], edges: Vec<f64>) -> Self {
        let counts = histogram(values, &edges);
        Histogram1D { edges, counts }
    }

    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Width of bin `i`.
    pub fn bin_width(&self, i: usize) -> f64 {
        self.edges[i + 1] - self.edges[i]
    }

    /// Total number of counted values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

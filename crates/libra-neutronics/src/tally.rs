// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Tally
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Energy-binned tally spectra with batch statistics.
//!
//! The transport code exports a tally as an npz archive with two entries:
//! `energy_edges_ev` (n_bins + 1 edges) and `batches`
//! (n_batches × n_bins, one row per statistically independent batch).
//! Per-source-particle scores become absolute rates via `normalized`.

use std::fs::File;
use std::path::Path;

use log::debug;
use ndarray::{Array1, Array2};
use ndarray_npy::NpzReader;

use libra_math::stats::{mean, sample_std};
use libra_types::error::{LibraError, LibraResult};

/// Relative tolerance when matching group edges against the fine grid.
const EDGE_MATCH_RTOL: f64 = 1e-9;

/// An energy spectrum with per-bin mean and standard error of the mean.
#[derive(Debug, Clone)]
pub struct TallySpectrum {
    /// Bin edges [eV], strictly increasing, `mean.len() + 1` entries.
    pub energy_edges_ev: Array1<f64>,
    /// Per-bin batch mean.
    pub mean: Array1<f64>,
    /// Per-bin standard error of the mean (zero for a single batch).
    pub std_err: Array1<f64>,
}

impl TallySpectrum {
    /// Reduce a batched tally to per-bin statistics.
    pub fn from_batches(
        energy_edges_ev: Array1<f64>,
        batches: Array2<f64>,
    ) -> LibraResult<Self> {
        let format_err = |message: String| LibraError::DataFormat {
            name: "tally batches".to_string(),
            message,
        };

        if energy_edges_ev.len() < 2 {
            return Err(format_err(format!(
                "need at least 2 energy edges, got {}",
                energy_edges_ev.len()
            )));
        }
        for w in energy_edges_ev.windows(2) {
            if w[1] <= w[0] {
                return Err(format_err(
                    "energy edges must be strictly increasing".to_string(),
                ));
            }
        }

        let n_bins = energy_edges_ev.len() - 1;
        let (n_batches, n_cols) = batches.dim();
        if n_cols != n_bins {
            return Err(format_err(format!(
                "{n_cols} tally bins vs {n_bins} energy bins"
            )));
        }
        if n_batches == 0 {
            return Err(format_err("tally carries no batches".to_string()));
        }

        let mut bin_mean = Array1::zeros(n_bins);
        let mut bin_err = Array1::zeros(n_bins);
        for j in 0..n_bins {
            let column = batches.column(j).to_vec();
            bin_mean[j] = mean(&column);
            if n_batches >= 2 {
                bin_err[j] = sample_std(&column) / (n_batches as f64).sqrt();
            }
        }

        Ok(TallySpectrum {
            energy_edges_ev,
            mean: bin_mean,
            std_err: bin_err,
        })
    }

    /// Load a tally archive exported by the transport run.
    pub fn from_npz(path: &Path) -> LibraResult<Self> {
        let display = path.display().to_string();
        let npz_err = |message: String| LibraError::DataFormat {
            name: display.clone(),
            message,
        };

        let file = File::open(path)?;
        let mut npz =
            NpzReader::new(file).map_err(|e| npz_err(format!("failed to open npz: {e}")))?;

        let energy_edges_ev: Array1<f64> = npz
            .by_name("energy_edges_ev")
            .map_err(|e| npz_err(format!("bad entry 'energy_edges_ev': {e}")))?;
        let batches: Array2<f64> = npz
            .by_name("batches")
            .map_err(|e| npz_err(format!("bad entry 'batches': {e}")))?;

        debug!(
            "tally '{display}': {} batches × {} bins",
            batches.nrows(),
            batches.ncols()
        );
        TallySpectrum::from_batches(energy_edges_ev, batches)
    }

    pub fn n_bins(&self) -> usize {
        self.mean.len()
    }

    /// Total score summed over all bins.
    pub fn integral(&self) -> f64 {
        self.mean.sum()
    }

    /// Scale a per-source-particle tally to an absolute rate for a source
    /// emitting `source_per_s` particles per second.
    pub fn normalized(&self, source_per_s: f64) -> TallySpectrum {
        let s = source_per_s.max(0.0);
        TallySpectrum {
            energy_edges_ev: self.energy_edges_ev.clone(),
            mean: &self.mean * s,
            std_err: &self.std_err * s,
        }
    }

    /// Fold the spectrum with a per-bin cross section [cm²]:
    /// Σ mean·σ over bins. Used for foil reaction-rate predictions.
    pub fn reaction_rate(&self, xs_cm2: &[f64]) -> LibraResult<f64> {
        if xs_cm2.len() != self.n_bins() {
            return Err(LibraError::DataFormat {
                name: "cross section".to_string(),
                message: format!(
                    "{} cross-section bins vs {} spectrum bins",
                    xs_cm2.len(),
                    self.n_bins()
                ),
            });
        }
        Ok(self
            .mean
            .iter()
            .zip(xs_cm2.iter())
            .map(|(&phi, &sigma)| phi * sigma)
            .sum())
    }

    /// Collapse onto coarser group edges.
    ///
    /// Every group edge must coincide with a fine edge, and the group
    /// structure must span the full spectrum, so the integral is
    /// conserved. Standard errors combine in quadrature.
    pub fn collapse(&self, group_edges_ev: &[f64]) -> LibraResult<TallySpectrum> {
        let format_err = |message: String| LibraError::DataFormat {
            name: "group edges".to_string(),
            message,
        };

        if group_edges_ev.len() < 2 {
            return Err(format_err("need at least 2 group edges".to_string()));
        }

        let fine = &self.energy_edges_ev;
        let mut indices = Vec::with_capacity(group_edges_ev.len());
        for &edge in group_edges_ev {
            let tol = EDGE_MATCH_RTOL * edge.abs().max(1.0);
            let found = fine.iter().position(|&f| (f - edge).abs() <= tol);
            match found {
                Some(i) => indices.push(i),
                None => {
                    return Err(format_err(format!(
                        "group edge {edge} eV does not lie on the fine grid"
                    )))
                }
            }
        }
        if indices.windows(2).any(|w| w[1] <= w[0]) {
            return Err(format_err(
                "group edges must be strictly increasing".to_string(),
            ));
        }
        if indices[0] != 0 || indices[indices.len() - 1] != fine.len() - 1 {
            return Err(format_err(
                "group edges must span the full spectrum".to_string(),
            ));
        }

        let n_groups = indices.len() - 1;
        let mut mean = Array1::zeros(n_groups);
        let mut std_err = Array1::zeros(n_groups);
        for g in 0..n_groups {
            let (lo, hi) = (indices[g], indices[g + 1]);
            mean[g] = self.mean.slice(ndarray::s![lo..hi]).sum();
            std_err[g] = self
                .std_err
                .slice(ndarray::s![lo..hi])
                .iter()
                .map(|&e| e * e)
                .sum::<f64>()
                .sqrt();
        }

        Ok(TallySpectrum {
            energy_edges_ev: Array1::from_vec(group_edges_ev.to_vec()),
            mean,
            std_err,
        })
    }
}

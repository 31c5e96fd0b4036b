// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Coincidence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coincidence spectrum construction for the diamond telescope.
//!
//! An event on the reference channel (the first coincident channel) is
//! accepted when every other coincident channel fires within ±window and
//! no veto channel fires within ±window. The earliest partner inside the
//! window is taken as the matched event on each channel.

use libra_math::search::{any_in_window, lower_bound, upper_bound};
use libra_types::config::{AcquisitionConfig, Criterion};
use libra_types::error::{LibraError, LibraResult};

use crate::events::RunData;

/// Matched events of one coincident channel.
#[derive(Debug, Clone)]
pub struct ChannelHits {
    pub name: String,
    /// Event times [s], one per accepted coincidence.
    pub times_s: Vec<f64>,
    /// Pulse amplitudes [mV], one per accepted coincidence.
    pub amplitudes_mv: Vec<f64>,
}

/// Coincidence result table: one column set per coincident channel, in
/// filter order, plus the per-event amplitude sum when no vetoes are
/// configured (the telescope's energy observable).
#[derive(Debug, Clone)]
pub struct CoincidenceTable {
    pub channels: Vec<ChannelHits>,
    pub sum_amplitude_mv: Option<Vec<f64>>,
}

impl CoincidenceTable {
    /// Number of accepted coincidences.
    pub fn n_events(&self) -> usize {
        self.channels.first().map_or(0, |c| c.times_s.len())
    }
}

/// A validated coincidence/veto selection.
#[derive(Debug, Clone)]
pub struct CoincidenceFilter {
    coincident: Vec<String>,
    vetoed: Vec<String>,
    window_s: f64,
}

impl CoincidenceFilter {
    /// Build a filter from channel names and a window [s].
    ///
    /// Supported selections: 2-4 coincident channels without vetoes,
    /// 2-3 coincident channels with one veto, or 2 coincident channels
    /// with two vetoes.
    pub fn new(
        coincident: Vec<String>,
        vetoed: Vec<String>,
        window_s: f64,
    ) -> LibraResult<Self> {
        if window_s <= 0.0 {
            return Err(LibraError::Config(format!(
                "Coincidence window must be positive, got {window_s}"
            )));
        }
        let supported = matches!(
            (coincident.len(), vetoed.len()),
            (2..=4, 0) | (2..=3, 1) | (2, 2)
        );
        if !supported {
            return Err(LibraError::UnsupportedCoincidence {
                coincident: coincident.len(),
                vetoed: vetoed.len(),
            });
        }
        Ok(CoincidenceFilter {
            coincident,
            vetoed,
            window_s,
        })
    }

    /// Build from an acquisition config's channel criteria and window.
    pub fn from_config(config: &AcquisitionConfig) -> LibraResult<Self> {
        let coincident = config
            .channels_with(Criterion::Coincide)
            .into_iter()
            .map(str::to_string)
            .collect();
        let vetoed = config
            .channels_with(Criterion::Veto)
            .into_iter()
            .map(str::to_string)
            .collect();
        CoincidenceFilter::new(coincident, vetoed, config.window_s())
    }

    pub fn window_s(&self) -> f64 {
        self.window_s
    }

    /// Sweep the run and build the coincidence table.
    pub fn apply(&self, run: &RunData) -> LibraResult<CoincidenceTable> {
        let resolve = |name: &String| {
            run.channel(name).ok_or_else(|| LibraError::DataFormat {
                name: name.clone(),
                message: "channel not present in run data".to_string(),
            })
        };
        let coincident = self
            .coincident
            .iter()
            .map(resolve)
            .collect::<LibraResult<Vec<_>>>()?;
        let vetoed = self
            .vetoed
            .iter()
            .map(resolve)
            .collect::<LibraResult<Vec<_>>>()?;

        let w = self.window_s;
        let reference = coincident[0];

        // Per-channel accepted indices: hits[0] tracks the reference
        let mut hits: Vec<Vec<usize>> = vec![Vec::new(); coincident.len()];

        'events: for (i, &t) in reference.timestamps_s().iter().enumerate() {
            let mut partners = Vec::with_capacity(coincident.len() - 1);
            for other in &coincident[1..] {
                let times = other.timestamps_s();
                let lo = lower_bound(times, t - w);
                let hi = upper_bound(times, t + w);
                if lo >= hi {
                    continue 'events;
                }
                // Earliest partner in the window
                partners.push(lo);
            }
            for veto in &vetoed {
                if any_in_window(veto.timestamps_s(), t - w, t + w) {
                    continue 'events;
                }
            }
            hits[0].push(i);
            for (k, &p) in partners.iter().enumerate() {
                hits[k + 1].push(p);
            }
        }

        let channels: Vec<ChannelHits> = self
            .coincident
            .iter()
            .zip(coincident.iter().zip(hits.iter()))
            .map(|(name, (events, idx))| ChannelHits {
                name: name.clone(),
                times_s: idx.iter().map(|&j| events.timestamps_s()[j]).collect(),
                amplitudes_mv: idx.iter().map(|&j| events.amplitudes_mv()[j]).collect(),
            })
            .collect();

        let sum_amplitude_mv = if self.vetoed.is_empty() {
            let n = channels[0].times_s.len();
            let mut sums = vec![0.0; n];
            for ch in &channels {
                for (s, &a) in sums.iter_mut().zip(ch.amplitudes_mv.iter()) {
                    *s += a;
                }
            }
            Some(sums)
        } else {
            None
        };

        Ok(CoincidenceTable {
            channels,
            sum_amplitude_mv,
        })
    }
}

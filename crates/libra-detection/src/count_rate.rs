// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Count Rate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Count-rate history of a channel.

use libra_math::histogram::{histogram, uniform_edges};
use libra_types::error::{LibraError, LibraResult};

use crate::events::ChannelEvents;

/// Binned count rate: `rates_per_s.len() == edges_s.len() - 1`.
#[derive(Debug, Clone)]
pub struct CountRate {
    /// Counts per second in each bin.
    pub rates_per_s: Vec<f64>,
    /// Bin edges [s].
    pub edges_s: Vec<f64>,
}

/// Bin the channel's triggers into `bin_s`-wide time bins and convert to
/// rates [1/s]. Edges run from the first to the last trigger; an
/// incomplete trailing bin is dropped.
pub fn count_rate(events: &ChannelEvents, bin_s: f64) -> LibraResult<CountRate> {
    if bin_s <= 0.0 {
        return Err(LibraError::Config(format!(
            "Count-rate bin must be positive, got {bin_s}"
        )));
    }
    let t = events.timestamps_s();
    if t.len() < 2 {
        return Err(LibraError::EmptyData(
            "count rate needs at least 2 triggers".to_string(),
        ));
    }

    let edges_s = uniform_edges(t[0], t[t.len() - 1], bin_s);
    if edges_s.len() < 2 {
        return Err(LibraError::EmptyData(format!(
            "run span {:.3e} s is shorter than one {bin_s} s bin",
            t[t.len() - 1] - t[0]
        )));
    }

    let rates_per_s = histogram(t, &edges_s)
        .into_iter()
        .map(|c| c as f64 / bin_s)
        .collect();

    Ok(CountRate { rates_per_s, edges_s })
}

// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::NANO_TO_SECONDS;

/// Role of a digitizer channel in a coincidence measurement.
///
/// The acquisition software encodes these as 0 (ignore), 1 (coincidence),
/// 2 (anti-coincidence); config files use the names instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Channel is excluded from the analysis.
    #[default]
    Ignore,
    /// Channel must fire inside the coincidence window.
    Coincide,
    /// Channel must NOT fire inside the coincidence window.
    Veto,
}

/// One digitizer channel as recorded in the run file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel name as stored in the run archive (e.g. "Channel A").
    pub name: String,
    #[serde(default)]
    pub criterion: Criterion,
}

/// Top-level acquisition/analysis configuration.
/// Maps 1:1 to the run JSON schema shipped next to each data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    pub run_name: String,
    pub channels: Vec<ChannelConfig>,
    /// Coincidence window [ns].
    #[serde(default = "default_window_ns")]
    pub coincidence_window_ns: f64,
    /// Count-rate bin width [s].
    #[serde(default = "default_bin_s")]
    pub count_rate_bin_s: f64,
}

fn default_window_ns() -> f64 {
    20.0
}
fn default_bin_s() -> f64 {
    1.0
}

impl AcquisitionConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::LibraResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Coincidence window in seconds.
    pub fn window_s(&self) -> f64 {
        self.coincidence_window_ns * NANO_TO_SECONDS
    }

    /// Names of channels with the given criterion, in config order.
    pub fn channels_with(&self, criterion: Criterion) -> Vec<&str> {
        self.channels
            .iter()
            .filter(|c| c.criterion == criterion)
            .map(|c| c.name.as_str())
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Events
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-channel trigger records from the digitizer.
//!
//! A run archive is an npz file with one `"<channel>/time_ns"` and one
//! `"<channel>/amplitude_mv"` entry per active channel. Timestamps are
//! recorded in nanoseconds and converted to seconds on load. Entries
//! under `Coincidence/` are the digitizer's own hardware-coincidence
//! output and are skipped.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use log::debug;
use ndarray::Array1;
use ndarray_npy::NpzReader;

use libra_types::constants::NANO_TO_SECONDS;
use libra_types::error::{LibraError, LibraResult};

/// Trigger list of one channel: timestamps [s] and pulse amplitudes [mV].
///
/// Invariant: both lists have equal length and timestamps are
/// non-decreasing (the digitizer writes them in trigger order).
#[derive(Debug, Clone, Default)]
pub struct ChannelEvents {
    timestamps_s: Vec<f64>,
    amplitudes_mv: Vec<f64>,
}

impl ChannelEvents {
    /// Build a validated event list. `name` is used in error messages only.
    pub fn new(
        name: &str,
        timestamps_s: Vec<f64>,
        amplitudes_mv: Vec<f64>,
    ) -> LibraResult<Self> {
        if timestamps_s.len() != amplitudes_mv.len() {
            return Err(LibraError::DataFormat {
                name: name.to_string(),
                message: format!(
                    "{} timestamps vs {} amplitudes",
                    timestamps_s.len(),
                    amplitudes_mv.len()
                ),
            });
        }
        if timestamps_s.windows(2).any(|w| w[1] < w[0]) {
            return Err(LibraError::DataFormat {
                name: name.to_string(),
                message: "timestamps are not in trigger order".to_string(),
            });
        }
        Ok(ChannelEvents {
            timestamps_s,
            amplitudes_mv,
        })
    }

    /// An inactive channel: no triggers.
    pub fn empty() -> Self {
        ChannelEvents::default()
    }

    pub fn len(&self) -> usize {
        self.timestamps_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_s.is_empty()
    }

    pub fn timestamps_s(&self) -> &[f64] {
        &self.timestamps_s
    }

    pub fn amplitudes_mv(&self) -> &[f64] {
        &self.amplitudes_mv
    }
}

/// All channels of one acquisition run, keyed by channel name.
#[derive(Debug, Clone, Default)]
pub struct RunData {
    channels: Vec<(String, ChannelEvents)>,
}

impl RunData {
    pub fn new() -> Self {
        RunData::default()
    }

    /// Add a channel, replacing any previous channel of the same name.
    pub fn insert(&mut self, name: &str, events: ChannelEvents) {
        if let Some(slot) = self.channels.iter_mut().find(|(n, _)| n == name) {
            slot.1 = events;
        } else {
            self.channels.push((name.to_string(), events));
        }
    }

    pub fn channel(&self, name: &str) -> Option<&ChannelEvents> {
        self.channels
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| e)
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    /// Load a run archive.
    ///
    /// Channels appear in name order. A `time_ns` entry without its
    /// `amplitude_mv` partner (or the reverse) is a format error.
    pub fn from_npz(path: &Path) -> LibraResult<Self> {
        let display = path.display().to_string();
        let npz_err = |message: String| LibraError::DataFormat {
            name: display.clone(),
            message,
        };

        let file = File::open(path)?;
        let mut npz =
            NpzReader::new(file).map_err(|e| npz_err(format!("failed to open npz: {e}")))?;
        let names = npz
            .names()
            .map_err(|e| npz_err(format!("failed to list npz entries: {e}")))?;

        // Pair "<channel>/time_ns" with "<channel>/amplitude_mv"
        let mut time_entries: BTreeMap<String, String> = BTreeMap::new();
        let mut ampl_entries: BTreeMap<String, String> = BTreeMap::new();
        for raw in &names {
            let trimmed = raw.strip_suffix(".npy").unwrap_or(raw);
            let Some((channel, field)) = trimmed.rsplit_once('/') else {
                continue;
            };
            if channel == "Coincidence" {
                continue;
            }
            match field {
                "time_ns" => {
                    time_entries.insert(channel.to_string(), raw.clone());
                }
                "amplitude_mv" => {
                    ampl_entries.insert(channel.to_string(), raw.clone());
                }
                _ => {}
            }
        }

        let mut run = RunData::new();
        for (channel, time_entry) in &time_entries {
            let ampl_entry = ampl_entries.remove(channel).ok_or_else(|| {
                npz_err(format!("channel '{channel}' has timestamps but no amplitudes"))
            })?;

            let t_ns: Array1<f64> = npz
                .by_name(time_entry)
                .map_err(|e| npz_err(format!("bad entry '{time_entry}': {e}")))?;
            let a_mv: Array1<f64> = npz
                .by_name(&ampl_entry)
                .map_err(|e| npz_err(format!("bad entry '{ampl_entry}': {e}")))?;

            debug!("channel '{channel}': {} triggers", t_ns.len());

            let timestamps_s = t_ns.iter().map(|&t| t * NANO_TO_SECONDS).collect();
            run.insert(
                channel,
                ChannelEvents::new(channel, timestamps_s, a_mv.to_vec())?,
            );
        }

        if let Some(channel) = ampl_entries.keys().next() {
            return Err(npz_err(format!(
                "channel '{channel}' has amplitudes but no timestamps"
            )));
        }

        debug!("loaded {} channels from '{display}'", run.n_channels());
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray_npy::NpzWriter;

    #[test]
    fn test_channel_events_validation() {
        let ok = ChannelEvents::new("A", vec![0.0, 1.0, 2.0], vec![10.0, 20.0, 30.0]);
        assert!(ok.is_ok());

        let bad_len = ChannelEvents::new("A", vec![0.0, 1.0], vec![10.0]);
        assert!(bad_len.is_err());

        let bad_order = ChannelEvents::new("A", vec![1.0, 0.5], vec![10.0, 20.0]);
        assert!(bad_order.is_err());
    }

    #[test]
    fn test_equal_timestamps_allowed() {
        // Two triggers in the same clock tick are valid
        let e = ChannelEvents::new("A", vec![1.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]);
        assert!(e.is_ok());
    }

    #[test]
    fn test_run_data_lookup() {
        let mut run = RunData::new();
        run.insert(
            "Channel A",
            ChannelEvents::new("Channel A", vec![0.0], vec![5.0]).unwrap(),
        );
        assert_eq!(run.n_channels(), 1);
        assert!(run.channel("Channel A").is_some());
        assert!(run.channel("Channel B").is_none());

        // Re-insert replaces
        run.insert("Channel A", ChannelEvents::empty());
        assert_eq!(run.n_channels(), 1);
        assert!(run.channel("Channel A").unwrap().is_empty());
    }

    fn write_archive(path: &Path, entries: &[(&str, Vec<f64>)]) {
        let file = File::create(path).unwrap();
        let mut npz = NpzWriter::new(file);
        for (name, values) in entries {
            npz.add_array(*name, &Array1::from_vec(values.clone()))
                .unwrap();
        }
        npz.finish().unwrap();
    }

    #[test]
    fn test_from_npz_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.npz");
        write_archive(
            &path,
            &[
                ("Channel A/time_ns", vec![100.0, 250.0, 400.0]),
                ("Channel A/amplitude_mv", vec![55.0, 60.0, 52.0]),
                ("Channel B/time_ns", vec![120.0]),
                ("Channel B/amplitude_mv", vec![70.0]),
                ("Coincidence/time_ns", vec![1.0]),
                ("Coincidence/amplitude_mv", vec![1.0]),
            ],
        );

        let run = RunData::from_npz(&path).unwrap();
        assert_eq!(run.channel_names(), vec!["Channel A", "Channel B"]);

        let a = run.channel("Channel A").unwrap();
        assert_eq!(a.len(), 3);
        // ns → s conversion
        assert!((a.timestamps_s()[0] - 100e-9).abs() < 1e-18);
        assert!((a.amplitudes_mv()[1] - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_npz_missing_amplitudes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.npz");
        write_archive(&path, &[("Channel A/time_ns", vec![100.0])]);

        let err = RunData::from_npz(&path).unwrap_err();
        assert!(err.to_string().contains("no amplitudes"), "{err}");
    }

    #[test]
    fn test_from_npz_missing_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.npz");
        write_archive(&path, &[("Channel A/amplitude_mv", vec![5.0])]);

        let err = RunData::from_npz(&path).unwrap_err();
        assert!(err.to_string().contains("no timestamps"), "{err}");
    }
}

// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Libra Detection
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pulse-record analysis for fast neutron detectors.
//!
//! Loads per-channel timestamp/amplitude records from the digitizer,
//! computes count rates and applies coincidence/veto filters for the
//! diamond telescope.

pub mod coincidence;
pub mod count_rate;
pub mod events;

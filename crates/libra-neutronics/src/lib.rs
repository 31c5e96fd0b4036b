// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Libra Neutronics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Post-processing of Monte Carlo transport tallies.
//!
//! Batched tally spectra exported from the transport code: per-bin batch
//! statistics, source-rate normalization, group collapse and
//! cross-section folding.

pub mod tally;

// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Libra Activation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Activation-foil dosimetry for neutron field characterization.
//!
//! Nuclide decay data, gamma check sources for detector calibration, and
//! 0D activation models for irradiated foils.

pub mod calibration;
pub mod foil;
pub mod nuclide;

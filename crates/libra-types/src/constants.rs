// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Avogadro constant [1/mol].
pub const AVOGADRO: f64 = 6.022e23;

/// Nanoseconds to seconds. Digitizer timestamps are recorded in ns.
pub const NANO_TO_SECONDS: f64 = 1e-9;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per Julian year (365.25 d). Half-life tables quote years on this basis.
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// keV to joule.
pub const KEV_TO_JOULE: f64 = 1.602176634e-16;

/// Elementary charge (C).
pub const Q_ELECTRON: f64 = 1.602176634e-19;

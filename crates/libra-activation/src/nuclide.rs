// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Nuclide
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclide decay data.
//!
//! Gamma lines and half-lives for the check sources used on the HPGe
//! bench, plus the stable targets of the activation reactions.

use libra_types::error::{LibraError, LibraResult};

/// A single gamma line: energy [keV] and emission intensity per decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaLine {
    pub energy_kev: f64,
    pub intensity: f64,
}

/// Decay data for one nuclide.
///
/// Stable nuclides carry an atomic mass and no half-life; gamma emitters
/// carry their line list and half-life.
#[derive(Debug, Clone, PartialEq)]
pub struct Nuclide {
    pub name: String,
    pub gamma_lines: Vec<GammaLine>,
    /// Half-life [s]. `None` for stable nuclides.
    pub half_life_s: Option<f64>,
    /// Atomic mass [g/mol]. `None` when not needed (calibration sources).
    pub atomic_mass: Option<f64>,
}

impl Nuclide {
    /// Gamma emitter with the given lines and half-life [s].
    pub fn gamma_source(
        name: &str,
        lines: &[(f64, f64)],
        half_life_s: f64,
    ) -> Self {
        Nuclide {
            name: name.to_string(),
            gamma_lines: lines
                .iter()
                .map(|&(energy_kev, intensity)| GammaLine {
                    energy_kev,
                    intensity,
                })
                .collect(),
            half_life_s: Some(half_life_s),
            atomic_mass: None,
        }
    }

    /// Stable nuclide with atomic mass [g/mol].
    pub fn stable(name: &str, atomic_mass: f64) -> Self {
        Nuclide {
            name: name.to_string(),
            gamma_lines: Vec::new(),
            half_life_s: None,
            atomic_mass: Some(atomic_mass),
        }
    }

    /// Decay constant λ = ln 2 / T½ [1/s].
    pub fn decay_constant(&self) -> LibraResult<f64> {
        let half_life = self
            .half_life_s
            .ok_or_else(|| LibraError::MissingHalfLife(self.name.clone()))?;
        Ok(std::f64::consts::LN_2 / half_life)
    }

    /// Fraction of atoms remaining after `dt_s` seconds.
    pub fn decay_fraction(&self, dt_s: f64) -> LibraResult<f64> {
        Ok((-self.decay_constant()? * dt_s).exp())
    }
}

/// Standard calibration sources and activation nuclides.
///
/// Line energies [keV], intensities per decay and half-lives match the
/// bench's certified source data sheets.
pub mod sources {
    use super::Nuclide;
    use libra_types::constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR};

    pub fn ba133() -> Nuclide {
        Nuclide::gamma_source(
            "Ba133",
            &[
                (80.9979, 0.329),
                (276.3989, 0.0716),
                (302.8508, 0.1834),
                (356.0129, 0.6205),
                (383.8485, 0.0894),
            ],
            10.551 * SECONDS_PER_YEAR,
        )
    }

    pub fn co60() -> Nuclide {
        Nuclide::gamma_source(
            "Co60",
            &[(1173.228, 0.9985), (1332.492, 0.999826)],
            1925.28 * SECONDS_PER_DAY,
        )
    }

    /// The 511 keV line is annihilation radiation: 1.80 photons per decay.
    pub fn na22() -> Nuclide {
        Nuclide::gamma_source(
            "Na22",
            &[(511.0, 1.80), (1274.537, 0.9994)],
            2.6018 * SECONDS_PER_YEAR,
        )
    }

    pub fn cs137() -> Nuclide {
        Nuclide::gamma_source("Cs137", &[(661.657, 0.851)], 30.08 * SECONDS_PER_YEAR)
    }

    pub fn mn54() -> Nuclide {
        Nuclide::gamma_source("Mn54", &[(834.848, 0.99976)], 312.20 * SECONDS_PER_DAY)
    }

    pub fn nb92m() -> Nuclide {
        Nuclide::gamma_source("Nb92m", &[(934.44, 0.9915)], 10.25 * SECONDS_PER_DAY)
    }

    pub fn nb93() -> Nuclide {
        Nuclide::stable("Nb93", 92.90637)
    }
}

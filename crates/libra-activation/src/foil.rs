// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Activation Foil
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Activation foil dosimetry.
//!
//! 0D activation models: atom inventory, product buildup during
//! irradiation and expected gamma counts on the counting bench.

use crate::nuclide::Nuclide;
use libra_types::constants::AVOGADRO;
use libra_types::error::{LibraError, LibraResult};

/// An activation reaction on a foil target.
#[derive(Debug, Clone)]
pub struct Reaction {
    /// Target nuclide (stable, carries the atomic mass).
    pub reactant: Nuclide,
    /// Activation product (carries half-life and gamma lines).
    pub product: Nuclide,
    /// Spectrum-averaged cross section [cm²].
    pub cross_section_cm2: f64,
}

/// A foil mounted in the neutron field.
#[derive(Debug, Clone)]
pub struct ActivationFoil {
    pub reaction: Reaction,
    /// Foil mass [g].
    pub mass_g: f64,
    pub name: String,
    /// Foil thickness [cm].
    pub thickness_cm: Option<f64>,
}

impl ActivationFoil {
    pub fn new(reaction: Reaction, mass_g: f64, name: &str) -> Self {
        ActivationFoil {
            reaction,
            mass_g: mass_g.max(0.0),
            name: name.to_string(),
            thickness_cm: None,
        }
    }

    /// Number of target atoms in the foil (natural abundance 1).
    pub fn nb_atoms(&self) -> LibraResult<f64> {
        let atomic_mass = self
            .reaction
            .reactant
            .atomic_mass
            .ok_or_else(|| LibraError::MissingAtomicMass(self.reaction.reactant.name.clone()))?;
        Ok(self.mass_g / atomic_mass * AVOGADRO)
    }

    /// Reaction rate R = Φ·σ·N [1/s] in a flux Φ [n/(cm²·s)].
    pub fn reaction_rate(&self, flux_cm2_s: f64) -> LibraResult<f64> {
        let flux = flux_cm2_s.max(0.0);
        Ok(flux * self.reaction.cross_section_cm2.max(0.0) * self.nb_atoms()?)
    }

    /// Product atoms after an irradiation of `t_irr_s` seconds:
    /// N = R·(1 − e^{−λ·t}) / λ.
    pub fn product_atoms(&self, flux_cm2_s: f64, t_irr_s: f64) -> LibraResult<f64> {
        let rate = self.reaction_rate(flux_cm2_s)?;
        let lambda = self.reaction.product.decay_constant()?;
        let t = t_irr_s.max(0.0);
        Ok(rate * (1.0 - (-lambda * t).exp()) / lambda)
    }

    /// Saturation activity [Bq]: the activity the foil approaches under an
    /// infinitely long irradiation, equal to the reaction rate.
    pub fn saturation_activity(&self, flux_cm2_s: f64) -> LibraResult<f64> {
        self.reaction_rate(flux_cm2_s)
    }

    /// Product activity [Bq] at end of irradiation: λ·N.
    pub fn activity_at_eoi(&self, flux_cm2_s: f64, t_irr_s: f64) -> LibraResult<f64> {
        let lambda = self.reaction.product.decay_constant()?;
        Ok(lambda * self.product_atoms(flux_cm2_s, t_irr_s)?)
    }

    /// Expected counts of gamma line `line` in a counting window
    /// [`t1_s`, `t2_s`] after end of irradiation, for a detector with
    /// full-energy peak efficiency `efficiency`:
    /// N·(e^{−λ·t₁} − e^{−λ·t₂})·I·ε.
    pub fn expected_counts(
        &self,
        flux_cm2_s: f64,
        t_irr_s: f64,
        t1_s: f64,
        t2_s: f64,
        line: usize,
        efficiency: f64,
    ) -> LibraResult<f64> {
        if t2_s < t1_s {
            return Err(LibraError::Config(format!(
                "Counting window ends before it starts: [{t1_s}, {t2_s}]"
            )));
        }
        let atoms = self.product_atoms(flux_cm2_s, t_irr_s)?;
        let lambda = self.reaction.product.decay_constant()?;
        let intensity = self.reaction.product.gamma_lines[line].intensity;
        let decayed = (-lambda * t1_s.max(0.0)).exp() - (-lambda * t2_s.max(0.0)).exp();
        Ok(atoms * decayed * intensity * efficiency.clamp(0.0, 1.0))
    }
}

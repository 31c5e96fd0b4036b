// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Property-Based Tests (proptest) for libra-activation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for libra-activation using proptest.
//!
//! Covers: decay monotonicity, check-source decay correction,
//! activation buildup bounds and counting-window additivity.

use chrono::{Duration, TimeZone, Utc};
use libra_activation::calibration::CheckSource;
use libra_activation::foil::{ActivationFoil, Reaction};
use libra_activation::nuclide::sources;
use proptest::prelude::*;

fn nb_foil(mass_g: f64) -> ActivationFoil {
    let reaction = Reaction {
        reactant: sources::nb93(),
        product: sources::nb92m(),
        cross_section_cm2: 0.46e-24,
    };
    ActivationFoil::new(reaction, mass_g, "Nb")
}

// ── Decay Properties ─────────────────────────────────────────────────

proptest! {
    /// The remaining fraction lies in (0, 1] and decreases with time.
    #[test]
    fn decay_fraction_bounded_and_monotone(
        dt1 in 0.0f64..1e9,
        extra in 0.0f64..1e9,
    ) {
        let nuclide = sources::cs137();
        let f1 = nuclide.decay_fraction(dt1).unwrap();
        let f2 = nuclide.decay_fraction(dt1 + extra).unwrap();

        prop_assert!(f1 > 0.0 && f1 <= 1.0, "Fraction out of range: {}", f1);
        prop_assert!(f2 <= f1, "Decay must be monotone: {} then {}", f1, f2);
    }

    /// n half-lives leave 1/2^n of the activity.
    #[test]
    fn check_source_halves_per_half_life(n in 0u32..6) {
        let reference = Utc.with_ymd_and_hms(2018, 6, 1, 0, 0, 0).unwrap();
        let source = CheckSource::new(sources::mn54(), 10_000.0, reference);
        let t_half_s = source.nuclide.half_life_s.unwrap();

        let date = reference + Duration::seconds((t_half_s * n as f64) as i64);
        let activity = source.expected_activity(date).unwrap();
        let expected = 10_000.0 / 2f64.powi(n as i32);

        // Whole-second truncation of n·T½ costs < 1e-6 relative
        prop_assert!(
            ((activity - expected) / expected).abs() < 1e-6,
            "{} half-lives: {} vs {}", n, activity, expected
        );
    }
}

// ── Activation Buildup Properties ────────────────────────────────────

proptest! {
    /// Product inventory never exceeds saturation and grows with time.
    #[test]
    fn buildup_bounded_by_saturation(
        mass_g in 0.01f64..10.0,
        flux in 1e4f64..1e12,
        t_irr in 1.0f64..1e8,
    ) {
        let foil = nb_foil(mass_g);
        let lambda = foil.reaction.product.decay_constant().unwrap();
        let n_sat = foil.reaction_rate(flux).unwrap() / lambda;

        let n1 = foil.product_atoms(flux, t_irr).unwrap();
        let n2 = foil.product_atoms(flux, t_irr * 2.0).unwrap();

        prop_assert!(n1 >= 0.0);
        prop_assert!(n1 <= n_sat * (1.0 + 1e-12), "Buildup exceeds saturation");
        prop_assert!(n2 >= n1, "Buildup must be monotone in irradiation time");
    }

    /// EOI activity is the reaction rate scaled by the buildup factor.
    #[test]
    fn eoi_activity_below_rate(
        flux in 1e4f64..1e12,
        t_irr in 1.0f64..1e7,
    ) {
        let foil = nb_foil(1.0);
        let activity = foil.activity_at_eoi(flux, t_irr).unwrap();
        let rate = foil.reaction_rate(flux).unwrap();

        prop_assert!(activity >= 0.0);
        prop_assert!(activity <= rate * (1.0 + 1e-12),
            "EOI activity {} exceeds reaction rate {}", activity, rate);
    }

    /// Counts over adjacent windows sum to the counts over their union.
    #[test]
    fn counting_windows_additive(
        t1 in 0.0f64..1e5,
        d1 in 1.0f64..1e5,
        d2 in 1.0f64..1e5,
    ) {
        let foil = nb_foil(0.5);
        let flux = 1e9;
        let t_irr = 86_400.0;
        let (t2, t3) = (t1 + d1, t1 + d1 + d2);

        let first = foil.expected_counts(flux, t_irr, t1, t2, 0, 0.2).unwrap();
        let second = foil.expected_counts(flux, t_irr, t2, t3, 0, 0.2).unwrap();
        let combined = foil.expected_counts(flux, t_irr, t1, t3, 0, 0.2).unwrap();

        prop_assert!(
            (first + second - combined).abs() <= combined.abs() * 1e-9 + 1e-12,
            "Windows must be additive: {} + {} vs {}", first, second, combined
        );
    }
}

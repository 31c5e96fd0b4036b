// ─────────────────────────────────────────────────────────────────────
// LIBRA Toolbox — Calibration
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gamma check sources for detector efficiency calibration.

use chrono::{DateTime, Utc};

use crate::nuclide::Nuclide;
use libra_types::error::LibraResult;

/// A certified check source: nuclide, calibrated activity and the date the
/// activity certificate refers to.
#[derive(Debug, Clone)]
pub struct CheckSource {
    pub nuclide: Nuclide,
    /// Certified activity [Bq] on `reference_date`.
    pub activity_bq: f64,
    pub reference_date: DateTime<Utc>,
}

impl CheckSource {
    pub fn new(nuclide: Nuclide, activity_bq: f64, reference_date: DateTime<Utc>) -> Self {
        CheckSource {
            nuclide,
            activity_bq: activity_bq.max(0.0),
            reference_date,
        }
    }

    /// Expected activity [Bq] at `date`, decay-corrected from the
    /// certificate date. Dates before the certificate yield the
    /// back-decayed (larger) activity.
    pub fn expected_activity(&self, date: DateTime<Utc>) -> LibraResult<f64> {
        let lambda = self.nuclide.decay_constant()?;
        let dt_s = (date - self.reference_date).num_milliseconds() as f64 * 1e-3;
        Ok(self.activity_bq * (-lambda * dt_s).exp())
    }

    /// Expected emission rate [1/s] of the line at index `line`, at `date`.
    pub fn line_rate(&self, line: usize, date: DateTime<Utc>) -> LibraResult<f64> {
        let activity = self.expected_activity(date)?;
        Ok(activity * self.nuclide.gamma_lines[line].intensity)
    }
}

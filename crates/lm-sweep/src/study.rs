//! Length-match study.
//!
//! At one temperature and field, the velocity sweep fixes the length that
//! reproduces the target Ha²/Re (`L_Ha`) and the heat-flux sweep fixes the
//! length that reproduces the target Gr/Ha² (`L_Gr`). A test section matches
//! both targets where the two lengths agree.

use std::fmt;

use lm_core::{degc, m_to_mm, w_to_mw};
use lm_mhd::{Field, InverseSolver, length_mismatch, scalar, vector, zip_with};
use lm_props::PropertyModel;
use ndarray::{ArrayD, Axis};
use tracing::info;

use crate::config::{StudyConfig, Targets};
use crate::error::SweepResult;

#[derive(Debug, Clone, PartialEq)]
pub struct LengthMatchStudy {
    pub temperature_c: f64,
    pub magnetic_field: f64,
    pub targets: Targets,
    pub threshold: f64,
    /// Velocity axis [m/s], length `n_u`
    pub velocity: Vec<f64>,
    /// Heat flux axis [W/m²], length `n_q`
    pub heat_flux: Vec<f64>,
    /// `L_Ha(U)` [m], shape `[n_u]`
    pub l_ha: Field,
    /// Implied `L_Re(U)` [m], shape `[n_u]`
    pub l_re: Field,
    /// `L_Gr(q)` [m], shape `[n_q]`
    pub l_gr: Field,
    /// `(L_Ha + L_Gr) / 2` [m], shape `[n_q, n_u]`
    pub mean_length: Field,
    /// `L_Ha − L_Gr` [m], shape `[n_q, n_u]`
    pub mismatch: Field,
    /// `U(L_Ha, L_Re)` [m/s], shape `[n_u, n_u]`
    pub velocity_surface: Field,
    /// Heat flux whose Gr/Ha² length equals `L_Ha` [W/m²], shape `[n_u]`
    pub matched_heat_flux: Field,
    /// `|L_Ha − L_Gr| < threshold`, shape `[n_q, n_u]`
    pub match_mask: ArrayD<bool>,
}

impl LengthMatchStudy {
    pub fn run<M: PropertyModel + ?Sized>(
        model: &M,
        study: &StudyConfig,
        targets: Targets,
        g: f64,
    ) -> SweepResult<Self> {
        study.velocity.validate_positive("study.velocity")?;
        study.heat_flux.validate_positive("study.heat_flux")?;
        let velocity = study.velocity.values()?;
        let heat_flux = study.heat_flux.values()?;

        let props = model.material_set(degc(study.temperature_c))?;
        let solver = InverseSolver::new(&props, g);
        let b = scalar(study.magnetic_field);
        let u = vector(velocity.clone());
        let q = vector(heat_flux.clone());

        let l_ha = solver.length_from_ha2_over_re(&b, &u, targets.ha2_over_re)?;
        let l_re = solver.length_from_implied_reynolds(&b, &u, &l_ha, targets.ha2_over_re)?;
        let l_gr = solver.length_from_gr_over_ha2(&b, &q, targets.gr_over_ha2)?;

        // Heat flux down the rows, velocity across the columns.
        let l_gr_column = l_gr.clone().insert_axis(Axis(1));
        let mismatch = length_mismatch(&l_ha, &l_gr_column)?;
        let mean_length = zip_with(&l_ha, &l_gr_column, |a, b| 0.5 * (a + b))?;

        let velocity_surface =
            solver.velocity_from_lengths(&b, &l_ha.clone().insert_axis(Axis(1)), &l_re, targets.ha2_over_re)?;
        let matched_heat_flux = solver.heat_flux_from_length(&b, &l_ha, targets.gr_over_ha2)?;

        let threshold = study.match_threshold;
        let match_mask = mismatch.mapv(|d| d.abs() < threshold);

        info!(
            model = model.name(),
            t_c = study.temperature_c,
            matches = match_mask.iter().filter(|m| **m).count(),
            "Length-match study complete"
        );

        Ok(Self {
            temperature_c: study.temperature_c,
            magnetic_field: study.magnetic_field,
            targets,
            threshold,
            velocity,
            heat_flux,
            l_ha,
            l_re,
            l_gr,
            mean_length,
            mismatch,
            velocity_surface,
            matched_heat_flux,
            match_mask,
        })
    }

    /// `(q, U)` pairs whose lengths agree within the threshold.
    pub fn matches(&self) -> Vec<(f64, f64)> {
        self.match_mask
            .indexed_iter()
            .filter(|(_, m)| **m)
            .map(|(idx, _)| (self.heat_flux[idx[0]], self.velocity[idx[1]]))
            .collect()
    }

    pub fn l_ha_mm(&self) -> Vec<f64> {
        self.l_ha.iter().copied().map(m_to_mm).collect()
    }

    pub fn l_re_mm(&self) -> Vec<f64> {
        self.l_re.iter().copied().map(m_to_mm).collect()
    }

    pub fn l_gr_mm(&self) -> Vec<f64> {
        self.l_gr.iter().copied().map(m_to_mm).collect()
    }
}

impl fmt::Display for LengthMatchStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Length match at {} °C, B = {} T (Ha²/Re = {:.3e}, Gr/Ha² = {:.3e})",
            self.temperature_c, self.magnetic_field, self.targets.ha2_over_re, self.targets.gr_over_ha2
        )?;
        writeln!(f, "  {:>12} {:>10} {:>10}", "U [m/s]", "L_Ha [mm]", "L_Re [mm]")?;
        for ((u, l_ha), l_re) in self.velocity.iter().zip(self.l_ha_mm()).zip(self.l_re_mm()) {
            writeln!(f, "  {u:>12.4e} {l_ha:>10.3} {l_re:>10.3}")?;
        }
        writeln!(f, "  {:>12} {:>10}", "q [MW/m²]", "L_Gr [mm]")?;
        for (q, l_gr) in self.heat_flux.iter().zip(self.l_gr_mm()) {
            writeln!(f, "  {:>12.3} {l_gr:>10.3}", w_to_mw(*q))?;
        }
        let matches = self.matches();
        writeln!(
            f,
            "  {} of {} (q, U) pairs within {} mm",
            matches.len(),
            self.match_mask.len(),
            m_to_mm(self.threshold)
        )
    }
}

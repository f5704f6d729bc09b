//! Closed-form inversions of the interaction ratios.
//!
//! Given a target Ha²/Re or Gr/Ha², recover the length, velocity or heat flux
//! that reproduces it. Inputs are fields and broadcast like the forward
//! engine; every zero denominator is an error.

use lm_core::constants::G_DESIGN_MPS2;
use lm_props::MaterialPropertySet;

use crate::dimensionless::hartmann_field;
use crate::error::{MhdError, MhdResult};
use crate::field::{DivisionPolicy, Field, divide, sqrt_field, zip_with};

#[derive(Debug, Clone, Copy)]
pub struct InverseSolver<'a> {
    props: &'a MaterialPropertySet,
    g: f64,
}

impl<'a> InverseSolver<'a> {
    pub fn new(props: &'a MaterialPropertySet, g: f64) -> Self {
        Self { props, g }
    }

    /// Solver with the design gravity (9.81 m/s²).
    pub fn with_design_gravity(props: &'a MaterialPropertySet) -> Self {
        Self::new(props, G_DESIGN_MPS2)
    }

    /// `L = target·ρ·U / (B²·σ)`
    pub fn length_from_ha2_over_re(&self, b: &Field, u: &Field, target: f64) -> MhdResult<Field> {
        let (rho, sigma) = (self.props.rho, self.props.sigma);
        let num = u.mapv(|u| target * rho * u);
        let den = b.mapv(|b| b * b * sigma);
        divide(&num, &den, "L from Ha²/Re (B²·σ)", DivisionPolicy::Strict)
    }

    /// `L = sqrt(target·k·ν·B²·σ / (g·β·q·ρ))`
    pub fn length_from_gr_over_ha2(&self, b: &Field, q: &Field, target: f64) -> MhdResult<Field> {
        let p = self.props;
        let g = self.g;
        let num = b.mapv(|b| target * p.k * p.nu * b * b * p.sigma);
        let den = q.mapv(|q| g * p.beta * q * p.rho);
        let radicand = divide(&num, &den, "L from Gr/Ha² (g·β·q·ρ)", DivisionPolicy::Strict)?;
        sqrt_field(radicand, "L from Gr/Ha²")
    }

    /// Reynolds number implied by the target at `L_Ha`: `Re = Ha(L_Ha)² / target`.
    pub fn implied_reynolds(&self, b: &Field, l_ha: &Field, target: f64) -> MhdResult<Field> {
        if target == 0.0 {
            return Err(MhdError::DivisionByZero {
                what: "implied Re (Ha²/Re target)",
            });
        }
        let ha = hartmann_field(b, l_ha, self.props)?;
        Ok(ha.mapv_into(|ha| ha * ha / target))
    }

    /// `L_Re = Re·ν / U` with the implied Reynolds number.
    pub fn length_from_implied_reynolds(
        &self,
        b: &Field,
        u: &Field,
        l_ha: &Field,
        target: f64,
    ) -> MhdResult<Field> {
        let nu = self.props.nu;
        let re = self.implied_reynolds(b, l_ha, target)?;
        divide(&re.mapv_into(|re| re * nu), u, "L from implied Re (U)", DivisionPolicy::Strict)
    }

    /// `U = Re·ν / L_Re` with the implied Reynolds number.
    pub fn velocity_from_lengths(
        &self,
        b: &Field,
        l_ha: &Field,
        l_re: &Field,
        target: f64,
    ) -> MhdResult<Field> {
        let nu = self.props.nu;
        let re = self.implied_reynolds(b, l_ha, target)?;
        divide(&re.mapv_into(|re| re * nu), l_re, "U from lengths (L_Re)", DivisionPolicy::Strict)
    }

    /// `q = target·k·ν·B²·σ / (g·β·ρ·L_Gr²)`
    pub fn heat_flux_from_length(&self, b: &Field, l_gr: &Field, target: f64) -> MhdResult<Field> {
        let p = self.props;
        let g = self.g;
        let num = b.mapv(|b| target * p.k * p.nu * b * b * p.sigma);
        let den = l_gr.mapv(|l| g * p.beta * p.rho * l * l);
        divide(&num, &den, "q from L_Gr (g·β·ρ·L²)", DivisionPolicy::Strict)
    }
}

/// `L_a − L_b`, broadcast.
pub fn length_mismatch(l_a: &Field, l_b: &Field) -> MhdResult<Field> {
    zip_with(l_a, l_b, |a, b| a - b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lm_core::k;

    use crate::dimensionless::{DimensionlessTriple, GeometryFlowInputs};
    use crate::field::{column, scalar, vector};

    fn props() -> MaterialPropertySet {
        MaterialPropertySet::new(k(700.0), 9.7e3, 1.5e-3, 15.0, 7.5e5, 1.2e-4)
    }

    #[test]
    fn length_from_ha2_over_re_closed_form() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        let l = solver.length_from_ha2_over_re(&scalar(4.0), &scalar(1.0e-3), 8.22e5).unwrap();
        assert_relative_eq!(l[[]], 8.22e5 * 9.7e3 * 1.0e-3 / (16.0 * 7.5e5), max_relative = 1e-12);
    }

    #[test]
    fn gr_over_ha2_round_trip() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        let l = solver.length_from_gr_over_ha2(&scalar(4.0), &scalar(5.0e5), 0.624).unwrap()[[]];
        let triple = DimensionlessTriple::compute(&p, &GeometryFlowInputs::new(4.0, l, 1.0e-3, 5.0e5)).unwrap();
        assert_relative_eq!(triple.gr / (triple.ha * triple.ha), 0.624, max_relative = 1e-9);
    }

    #[test]
    fn heat_flux_inverts_gr_over_ha2_length() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        let q = vector(vec![1.0e5, 4.0e5, 1.0e6]);
        let l_gr = solver.length_from_gr_over_ha2(&scalar(4.0), &q, 0.624).unwrap();
        let back = solver.heat_flux_from_length(&scalar(4.0), &l_gr, 0.624).unwrap();
        for (a, b) in back.iter().zip(q.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-9);
        }
    }

    #[test]
    fn implied_length_equals_direct_length() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        let b = scalar(4.0);
        let u = vector(vec![1.0e-4, 1.0e-3, 5.0e-3]);
        let l_ha = solver.length_from_ha2_over_re(&b, &u, 8.22e5).unwrap();
        let l_re = solver.length_from_implied_reynolds(&b, &u, &l_ha, 8.22e5).unwrap();
        let mismatch = length_mismatch(&l_ha, &l_re).unwrap();
        for (d, l) in mismatch.iter().zip(l_ha.iter()) {
            assert!(d.abs() <= 1e-9 * l, "mismatch {d} at L = {l}");
        }
    }

    #[test]
    fn velocity_surface_recovers_velocity() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        let b = scalar(4.0);
        let u = vector(vec![1.0e-4, 2.0e-3]);
        let l_ha = solver.length_from_ha2_over_re(&b, &u, 8.22e5).unwrap();
        let u_back = solver.velocity_from_lengths(&b, &l_ha, &l_ha, 8.22e5).unwrap();
        for (a, e) in u_back.iter().zip(u.iter()) {
            assert_relative_eq!(*a, *e, max_relative = 1e-9);
        }
    }

    #[test]
    fn velocity_surface_over_length_grid() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        let l_ha = column(vec![0.01, 0.02, 0.03]);
        let l_re = vector(vec![0.01, 0.05]);
        let u = solver.velocity_from_lengths(&scalar(4.0), &l_ha, &l_re, 8.22e5).unwrap();
        assert_eq!(u.shape(), &[3, 2]);
        // U ∝ L_Ha² / L_Re
        assert_relative_eq!(u[[2, 0]] / u[[0, 0]], 9.0, max_relative = 1e-12);
        assert_relative_eq!(u[[0, 0]] / u[[0, 1]], 5.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_field_is_division_by_zero() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        assert!(matches!(
            solver.length_from_ha2_over_re(&vector(vec![0.0, 1.0]), &scalar(1.0e-3), 8.22e5),
            Err(MhdError::DivisionByZero { .. })
        ));
        assert!(matches!(
            solver.length_from_gr_over_ha2(&scalar(4.0), &scalar(0.0), 0.624),
            Err(MhdError::DivisionByZero { .. })
        ));
        assert!(matches!(
            solver.implied_reynolds(&scalar(4.0), &scalar(0.1), 0.0),
            Err(MhdError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn negative_target_is_domain_error() {
        let p = props();
        let solver = InverseSolver::with_design_gravity(&p);
        assert!(matches!(
            solver.length_from_gr_over_ha2(&scalar(4.0), &scalar(5.0e5), -0.624),
            Err(MhdError::Domain { .. })
        ));
    }
}

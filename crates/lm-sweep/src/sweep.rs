//! Cartesian sweep over temperature, field, length, velocity and heat flux.
//!
//! Each temperature is evaluated independently. A temperature whose property
//! set cannot be evaluated is skipped and recorded; the others are unaffected.
//! Temperatures run in parallel, rows come back in T-outer, B, L, U, q order.

use std::fmt::Write as _;

use lm_core::{Tolerances, degc, nearly_equal};
use lm_mhd::{DimensionlessTriple, DivisionPolicy, GeometryFlowInputs};
use lm_props::{MaterialPropertySet, Property, PropertyError, PropertyModel};
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::error::{SweepError, SweepResult};
use crate::range::SweepRanges;

/// Properties a model must provide for the dimensionless numbers.
pub const REQUIRED_PROPERTIES: [Property; 5] = [
    Property::Density,
    Property::KinematicViscosity,
    Property::ThermalExpansion,
    Property::ThermalConductivity,
    Property::ElectricalConductivity,
];

/// One operating point and its dimensionless numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResultRow {
    pub t_c: f64,
    pub b: f64,
    pub l: f64,
    pub u: f64,
    pub q: f64,
    pub ha: f64,
    pub re: f64,
    pub gr: f64,
    pub ha2_over_re: f64,
    pub gr_over_ha2: f64,
    pub gr_over_re2: f64,
}

impl SweepResultRow {
    pub const HEADER: [&'static str; 11] = [
        "temp_c",
        "b_t",
        "l_m",
        "u_mps",
        "q_wm2",
        "ha",
        "re",
        "gr",
        "ha2_over_re",
        "gr_over_ha2",
        "gr_over_re2",
    ];

    /// Values in `HEADER` order.
    pub fn values(&self) -> [f64; 11] {
        [
            self.t_c,
            self.b,
            self.l,
            self.u,
            self.q,
            self.ha,
            self.re,
            self.gr,
            self.ha2_over_re,
            self.gr_over_ha2,
            self.gr_over_re2,
        ]
    }
}

/// A temperature excluded from the sweep and the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTemperature {
    pub t_c: f64,
    pub error: PropertyError,
}

/// Materialised sweep axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    pub temperatures_c: Vec<f64>,
    pub b: Vec<f64>,
    pub l: Vec<f64>,
    pub u: Vec<f64>,
    pub q: Vec<f64>,
}

impl SweepGrid {
    pub fn from_ranges(ranges: &SweepRanges) -> SweepResult<Self> {
        ranges.validate()?;
        Ok(Self {
            temperatures_c: ranges.temperature_c.values()?,
            b: ranges.magnetic_field.values()?,
            l: ranges.length.values()?,
            u: ranges.velocity.values()?,
            q: ranges.heat_flux.values()?,
        })
    }

    /// Rows produced by one accepted temperature.
    pub fn points_per_temperature(&self) -> usize {
        self.b.len() * self.l.len() * self.u.len() * self.q.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub model: String,
    pub rows: Vec<SweepResultRow>,
    pub skipped: Vec<SkippedTemperature>,
}

impl SweepOutcome {
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// Accepted temperatures, in sweep order.
    pub fn valid_temperatures(&self) -> Vec<f64> {
        let mut temps: Vec<f64> = Vec::new();
        for row in &self.rows {
            if temps.last() != Some(&row.t_c) {
                temps.push(row.t_c);
            }
        }
        temps
    }

    pub fn first_valid_temperature(&self) -> Option<f64> {
        self.rows.first().map(|r| r.t_c)
    }

    /// Rows at a single accepted temperature.
    pub fn rows_at(&self, t_c: f64) -> Vec<&SweepResultRow> {
        let tol = Tolerances::default();
        self.rows
            .iter()
            .filter(|r| nearly_equal(r.t_c, t_c, tol))
            .collect()
    }

    pub fn column(&self, f: impl Fn(&SweepResultRow) -> f64) -> Vec<f64> {
        self.rows.iter().map(f).collect()
    }

    pub fn ha(&self) -> Vec<f64> {
        self.column(|r| r.ha)
    }

    pub fn re(&self) -> Vec<f64> {
        self.column(|r| r.re)
    }

    pub fn gr(&self) -> Vec<f64> {
        self.column(|r| r.gr)
    }

    pub fn ha2_over_re(&self) -> Vec<f64> {
        self.column(|r| r.ha2_over_re)
    }

    pub fn gr_over_ha2(&self) -> Vec<f64> {
        self.column(|r| r.gr_over_ha2)
    }

    pub fn gr_over_re2(&self) -> Vec<f64> {
        self.column(|r| r.gr_over_re2)
    }
}

enum TemperatureOutcome {
    Rows(Vec<SweepResultRow>),
    Skipped(SkippedTemperature),
}

/// Run the envelope sweep for `model` with gravity `g`.
pub fn run_sweep<M: PropertyModel + ?Sized>(
    model: &M,
    ranges: &SweepRanges,
    g: f64,
) -> SweepResult<SweepOutcome> {
    if let Some(&property) = REQUIRED_PROPERTIES.iter().find(|p| !model.supports(**p)) {
        return Err(SweepError::MissingCapability {
            model: model.name().to_string(),
            property,
        });
    }
    let grid = SweepGrid::from_ranges(ranges)?;

    info!(
        model = model.name(),
        temperatures = grid.temperatures_c.len(),
        points_per_temperature = grid.points_per_temperature(),
        "Running sweep"
    );

    let outcomes = grid
        .temperatures_c
        .par_iter()
        .map(|&t_c| sweep_temperature(model, &grid, t_c, g))
        .collect::<SweepResult<Vec<_>>>()?;

    let mut rows = Vec::with_capacity(grid.temperatures_c.len() * grid.points_per_temperature());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            TemperatureOutcome::Rows(r) => rows.extend(r),
            TemperatureOutcome::Skipped(s) => skipped.push(s),
        }
    }

    if rows.is_empty() {
        let mut reason = String::from("every temperature was skipped:");
        for s in &skipped {
            let _ = write!(reason, " {} °C ({});", s.t_c, s.error);
        }
        error!(model = model.name(), "{reason}");
        return Err(SweepError::InsufficientData { reason });
    }

    info!(rows = rows.len(), skipped = skipped.len(), "Sweep complete");
    Ok(SweepOutcome {
        model: model.name().to_string(),
        rows,
        skipped,
    })
}

fn sweep_temperature<M: PropertyModel + ?Sized>(
    model: &M,
    grid: &SweepGrid,
    t_c: f64,
    g: f64,
) -> SweepResult<TemperatureOutcome> {
    let props = match MaterialPropertySet::evaluate(model, degc(t_c)) {
        Ok(props) => props,
        Err(error) => {
            warn!(t_c, %error, "Skipping temperature");
            return Ok(TemperatureOutcome::Skipped(SkippedTemperature { t_c, error }));
        }
    };

    let mut rows = Vec::with_capacity(grid.points_per_temperature());
    for &b in &grid.b {
        for &l in &grid.l {
            for &u in &grid.u {
                for &q in &grid.q {
                    let inputs = GeometryFlowInputs::new(b, l, u, q).with_gravity(g);
                    let triple = DimensionlessTriple::compute(&props, &inputs)?;
                    let ratios = triple.ratios(DivisionPolicy::Strict)?;
                    rows.push(SweepResultRow {
                        t_c,
                        b,
                        l,
                        u,
                        q,
                        ha: triple.ha,
                        re: triple.re,
                        gr: triple.gr,
                        ha2_over_re: ratios.ha2_over_re,
                        gr_over_ha2: ratios.gr_over_ha2,
                        gr_over_re2: ratios.gr_over_re2,
                    });
                }
            }
        }
    }
    Ok(TemperatureOutcome::Rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeSpec;
    use lm_props::{Pb17Li, RangePolicy, StructuralAlloy, TabulatedPbLi};

    fn small_ranges(temperature_c: RangeSpec) -> SweepRanges {
        SweepRanges {
            temperature_c,
            magnetic_field: RangeSpec::linear(1.0, 4.0, 2),
            length: RangeSpec::linear(0.005, 0.1, 3),
            velocity: RangeSpec::linear(1.0e-4, 5.0e-3, 2),
            heat_flux: RangeSpec::linear(1.0e5, 1.0e6, 2),
        }
    }

    #[test]
    fn nesting_order_is_b_l_u_q() {
        let model = TabulatedPbLi::new(RangePolicy::Strict).unwrap();
        let outcome = run_sweep(&model, &small_ranges(RangeSpec::fixed(400.0)), 9.81).unwrap();
        assert_eq!(outcome.rows.len(), 2 * 3 * 2 * 2);
        let r = &outcome.rows;
        assert_eq!((r[0].b, r[0].l, r[0].u, r[0].q), (1.0, 0.005, 1.0e-4, 1.0e5));
        assert_eq!((r[1].b, r[1].l, r[1].u, r[1].q), (1.0, 0.005, 1.0e-4, 1.0e6));
        assert_eq!((r[2].b, r[2].l, r[2].u, r[2].q), (1.0, 0.005, 5.0e-3, 1.0e5));
        assert_eq!(r[12].b, 4.0);
    }

    #[test]
    fn temperature_order_is_preserved() {
        let model = TabulatedPbLi::new(RangePolicy::Strict).unwrap();
        let outcome = run_sweep(&model, &small_ranges(RangeSpec::linear(300.0, 550.0, 6)), 9.81).unwrap();
        assert_eq!(outcome.valid_temperatures(), vec![300.0, 350.0, 400.0, 450.0, 500.0, 550.0]);
        assert_eq!(outcome.rows_at(350.0).len(), 24);
        assert_eq!(outcome.first_valid_temperature(), Some(300.0));
    }

    #[test]
    fn every_temperature_skipped_is_insufficient_data() {
        // 100 and 150 °C sit below the Pb-17Li fits.
        let model = Pb17Li::new(RangePolicy::Strict);
        let err = run_sweep(&model, &small_ranges(RangeSpec::linear(100.0, 150.0, 2)), 9.81).unwrap_err();
        match err {
            SweepError::InsufficientData { reason } => {
                assert!(reason.contains("100 °C"), "{reason}");
                assert!(reason.contains("150 °C"), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn solid_alloy_lacks_fluid_properties() {
        let model = StructuralAlloy::new(RangePolicy::Permissive);
        let err = run_sweep(&model, &small_ranges(RangeSpec::fixed(400.0)), 9.81).unwrap_err();
        assert!(matches!(err, SweepError::MissingCapability { .. }));
    }

    #[test]
    fn invalid_ranges_are_rejected_before_evaluation() {
        let model = Pb17Li::new(RangePolicy::Strict);
        let mut ranges = small_ranges(RangeSpec::fixed(550.0));
        ranges.velocity = RangeSpec::linear(0.0, 1.0e-3, 3);
        assert!(matches!(
            run_sweep(&model, &ranges, 9.81),
            Err(SweepError::InvalidRange { .. })
        ));
    }

    #[test]
    fn header_matches_values() {
        let row = SweepResultRow {
            t_c: 1.0,
            b: 2.0,
            l: 3.0,
            u: 4.0,
            q: 5.0,
            ha: 6.0,
            re: 7.0,
            gr: 8.0,
            ha2_over_re: 9.0,
            gr_over_ha2: 10.0,
            gr_over_re2: 11.0,
        };
        assert_eq!(SweepResultRow::HEADER.len(), row.values().len());
        assert_eq!(row.values()[8], 9.0);
    }
}

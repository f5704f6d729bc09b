//! Tabulated PbLi properties.
//!
//! Control points at 300–550 °C, interpolated linearly and extrapolated
//! linearly past either end. The table span is reported as an advisory
//! interval; evaluation never fails on range.

use lm_core::units::{TempScale, Temperature};

use crate::correlation::{ControlPoints, Correlation, CorrelationSet};
use crate::error::PropertyResult;
use crate::model::PropertyModel;
use crate::property::{Property, RangePolicy};

const T_C: [f64; 4] = [300.0, 400.0, 500.0, 550.0];
const SIGMA: [f64; 4] = [1.0e6, 0.95e6, 0.90e6, 0.87e6];
const RHO: [f64; 4] = [9420.0, 9300.0, 9180.0, 9120.0];
const MU: [f64; 4] = [2.5e-3, 2.0e-3, 1.7e-3, 1.5e-3];
const K: [f64; 4] = [15.0, 16.0, 17.0, 17.5];
const BETA: [f64; 4] = [1.1e-4, 1.15e-4, 1.20e-4, 1.23e-4];

/// PbLi properties interpolated from a control-point table.
#[derive(Debug, Clone)]
pub struct TabulatedPbLi {
    set: CorrelationSet,
}

impl TabulatedPbLi {
    pub const NAME: &'static str = "tabulated-PbLi";

    pub fn new(policy: RangePolicy) -> PropertyResult<Self> {
        let columns: [(Property, &[f64; 4], &'static str); 5] = [
            (Property::ElectricalConductivity, &SIGMA, "S/m"),
            (Property::Density, &RHO, "kg/m³"),
            (Property::DynamicViscosity, &MU, "Pa·s"),
            (Property::ThermalConductivity, &K, "W/(m·K)"),
            (Property::ThermalExpansion, &BETA, "1/K"),
        ];

        let correlations = columns
            .into_iter()
            .map(|(property, values, unit)| {
                let points = ControlPoints::new(property, T_C.to_vec(), values.to_vec())?;
                Ok(Correlation::table(property, TempScale::Celsius, points, unit, 1.0))
            })
            .collect::<PropertyResult<Vec<_>>>()?;

        Ok(Self {
            set: CorrelationSet::new(Self::NAME, policy, correlations),
        })
    }

    pub fn correlations(&self) -> &[Correlation] {
        self.set.correlations()
    }
}

impl PropertyModel for TabulatedPbLi {
    fn name(&self) -> &str {
        self.set.name()
    }

    fn policy(&self) -> RangePolicy {
        self.set.policy()
    }

    fn correlation(&self, property: Property) -> Option<&Correlation> {
        self.set.get(property)
    }

    fn supports(&self, property: Property) -> bool {
        self.set.supports(property)
    }

    fn evaluate(&self, property: Property, t: Temperature) -> PropertyResult<f64> {
        self.set.evaluate(property, t)
    }
}

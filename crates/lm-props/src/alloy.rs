//! Structural alloy correlations.
//!
//! Piecewise fits split at the melting point, all in Kelvin. Electrical
//! conductivity is a fixed value that does not depend on temperature even
//! though the fitted resistivity does; both are kept as published.

use lm_core::units::{TempScale, Temperature};

use crate::correlation::{Correlation, CorrelationSet};
use crate::error::PropertyResult;
use crate::model::PropertyModel;
use crate::property::{Property, RangePolicy, ValidityRange};

/// Melting temperature [K].
pub const T_MELT_K: f64 = 3695.0;

/// Molar mass [g/mol].
pub const MOLAR_MASS_G_PER_MOL: f64 = 183.84;

/// Electrical conductivity returned at every temperature [S/m].
pub const ELECTRICAL_CONDUCTIVITY_S_PER_M: f64 = 0.97e6;

const T_REF_K: f64 = 293.15;
const T_CP_SPLIT_K: f64 = 3080.0;

/// Fitted property model for the structural alloy.
#[derive(Debug, Clone)]
pub struct StructuralAlloy {
    set: CorrelationSet,
}

impl StructuralAlloy {
    pub const NAME: &'static str = "structural-alloy";

    pub fn new(policy: RangePolicy) -> Self {
        use Property::*;
        use TempScale::Kelvin;

        let solid_and_liquid = ValidityRange::new(300.0, 6000.0);
        let correlations = vec![
            // The constant term is per kilogram, the temperature terms per mole;
            // the value is reported exactly as fitted.
            Correlation::fit(
                SpecificHeat,
                Kelvin,
                ValidityRange::at_least(300.0),
                "J/(mol·K)",
                1.0,
                specific_heat,
            ),
            Correlation::fit(ThermalConductivity, Kelvin, solid_and_liquid, "W/(m·K)", 1.0, thermal_conductivity),
            Correlation::fit(Density, Kelvin, solid_and_liquid, "kg/m³", 1.0, density),
            Correlation::fit(
                ElectricalResistivity,
                Kelvin,
                solid_and_liquid,
                "Ω·m",
                1.0,
                electrical_resistivity,
            )
            .advisory(),
            Correlation::fit(
                ElectricalConductivity,
                Kelvin,
                solid_and_liquid,
                "S/m",
                1.0,
                electrical_conductivity,
            )
            .advisory(),
        ];

        Self {
            set: CorrelationSet::new(Self::NAME, policy, correlations),
        }
    }

    pub fn correlations(&self) -> &[Correlation] {
        self.set.correlations()
    }
}

impl PropertyModel for StructuralAlloy {
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

fn specific_heat(t: f64) -> f64 {
    let per_kg = 1e3 / MOLAR_MASS_G_PER_MOL;
    if t <= T_CP_SPLIT_K {
        per_kg * 21.868372 + 8.068661e-3 * t - 3.756196e-6 * t.powi(2)
            + 1.075862e-9 * t.powi(3)
            + 1.406637e4 / t.powi(2)
    } else if t <= T_MELT_K {
        per_kg * 2.022 + 1.315e-2 * t
    } else {
        per_kg * 51.3
    }
}

fn thermal_conductivity(t: f64) -> f64 {
    if t <= T_MELT_K {
        149.441 - 45.466e-3 * t + 13.193e-6 * t.powi(2) - 1.484e-9 * t.powi(3) + 3.866e6 / t.powi(2)
    } else {
        let dt = t - T_MELT_K;
        66.6212 + 0.02086 * dt - 3.7585e-6 * dt.powi(2)
    }
}

fn density(t: f64) -> f64 {
    if t <= T_MELT_K {
        let dt = t - T_REF_K;
        1e3 * 19.25 - 2.66207e-4 * dt - 3.0595e-9 * dt.powi(2) - 9.5185e-12 * dt.powi(3)
    } else {
        let dt = t - T_MELT_K;
        1e3 * 16.267 - 7.679e-4 * dt - 8.091e-8 * dt.powi(2)
    }
}

fn electrical_resistivity(t: f64) -> f64 {
    1e-8 * (-0.9680 + 1.9274e-2 * t + 7.8260e-6 * t.powi(2) - 1.8517e-9 * t.powi(3)
        + 2.0790e-13 * t.powi(4))
}

fn electrical_conductivity(_t: f64) -> f64 {
    ELECTRICAL_CONDUCTIVITY_S_PER_M
}

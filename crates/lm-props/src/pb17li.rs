//! Pb-17at.%Li eutectic correlations.
//!
//! Fits from the ENEA literature review of PbLi properties (LM-D-R-262).
//! Most fits take Kelvin; thermal conductivity, vapour pressure and speed of
//! sound were published against Celsius and their intervals are kept on the
//! Celsius axis exactly as published. Density, dynamic viscosity and
//! electrical resistivity carry advisory intervals only.

use lm_core::units::constants::R_MOLAR;
use lm_core::units::{TempScale, Temperature};

use crate::correlation::{Correlation, CorrelationSet};
use crate::error::PropertyResult;
use crate::model::PropertyModel;
use crate::property::{Property, RangePolicy, ValidityRange};

/// Fitted property model for Pb-17Li.
#[derive(Debug, Clone)]
pub struct Pb17Li {
    set: CorrelationSet,
}

impl Pb17Li {
    pub const NAME: &'static str = "Pb-17Li";

    pub fn new(policy: RangePolicy) -> Self {
        use Property::*;
        use TempScale::{Celsius, Kelvin};

        let correlations = vec![
            Correlation::fit(Density, Kelvin, ValidityRange::new(508.0, 880.0), "kg/m³", 1.0, density)
                .advisory(),
            Correlation::fit(SpecificHeat, Kelvin, ValidityRange::new(508.0, 880.0), "J/(g·K)", 1e3, specific_heat),
            Correlation::fit(
                ThermalDiffusivity,
                Kelvin,
                ValidityRange::new(508.0, 773.0),
                "cm²/s",
                1e-4,
                thermal_diffusivity,
            ),
            Correlation::fit(
                ThermalConductivity,
                Celsius,
                ValidityRange::new(508.0, 873.0),
                "W/(cm·K)",
                1e2,
                thermal_conductivity,
            ),
            Correlation::fit(
                DynamicViscosity,
                Kelvin,
                ValidityRange::new(508.0, 625.0),
                "Pa·s",
                1.0,
                dynamic_viscosity,
            )
            .advisory(),
            Correlation::fit(
                ThermalExpansion,
                Kelvin,
                ValidityRange::new(508.0, 880.0),
                "1/K",
                1.0,
                thermal_expansion,
            ),
            Correlation::fit(SurfaceTension, Kelvin, ValidityRange::new(508.0, 700.0), "mN/m", 1e-3, surface_tension),
            Correlation::fit(
                ElectricalResistivity,
                Kelvin,
                ValidityRange::new(600.0, 800.0),
                "Ω·m",
                1.0,
                electrical_resistivity,
            )
            .advisory(),
            Correlation::fit(VaporPressure, Celsius, ValidityRange::new(508.0, 873.0), "mbar", 1e2, vapor_pressure),
            Correlation::fit(SpeedOfSound, Celsius, ValidityRange::new(513.0, 783.0), "m/s", 1.0, speed_of_sound),
        ];

        Self {
            set: CorrelationSet::new(Self::NAME, policy, correlations),
        }
    }

    pub fn correlations(&self) -> &[Correlation] {
        self.set.correlations()
    }
}

impl PropertyModel for Pb17Li {
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

// 0.3% error, 4.39% scatter.
fn density(t_k: f64) -> f64 {
    10520.35 - 1.19051 * t_k
}

fn specific_heat(t_k: f64) -> f64 {
    0.195 - 9.116e-6 * t_k
}

fn thermal_diffusivity(t_k: f64) -> f64 {
    3.46e-4 * t_k - 1.05e-1
}

fn thermal_conductivity(t_c: f64) -> f64 {
    0.1451 + 1.9631e-4 * t_c
}

/// Arrhenius form, activation energy 11640 J/mol.
fn dynamic_viscosity(t_k: f64) -> f64 {
    0.187e-3 * (11640.0 / (R_MOLAR * t_k)).exp()
}

fn thermal_expansion(t_k: f64) -> f64 {
    (11.221 + 1.531e-3 * t_k) * 1e-5
}

fn surface_tension(t_k: f64) -> f64 {
    459.4 - 0.04 * (t_k - 518.0)
}

fn electrical_resistivity(t_k: f64) -> f64 {
    103.33e-8 - 6.750e-11 * t_k + 4.180e-13 * t_k * t_k
}

fn vapor_pressure(t_c: f64) -> f64 {
    1.4508e-59 * t_c.powf(20.025)
}

// ±7 m/s.
fn speed_of_sound(t_c: f64) -> f64 {
    1876.0 - 0.306 * t_c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropertyError;
    use approx::assert_relative_eq;
    use lm_core::units::{degc, k};

    #[test]
    fn density_at_400_k() {
        let model = Pb17Li::new(RangePolicy::Strict);
        // Advisory interval: 400 K is below 508 K but still evaluated.
        let rho = model.density(k(400.0)).unwrap();
        assert_relative_eq!(rho, 10520.35 - 1.19051 * 400.0, max_relative = 1e-12);
        assert_relative_eq!(rho, 10044.146, max_relative = 1e-9);
    }

    #[test]
    fn thermal_conductivity_at_300_c() {
        let model = Pb17Li::new(RangePolicy::Permissive);
        let correlation = model.correlation(Property::ThermalConductivity).unwrap();
        assert_eq!(correlation.native_unit(), "W/(cm·K)");

        let native = correlation.native(degc(300.0)).unwrap();
        assert_relative_eq!(native, 0.1451 + 1.9631e-4 * 300.0, max_relative = 1e-12);
        assert!((native - 0.204).abs() < 1e-3);

        let si = model.thermal_conductivity(degc(300.0)).unwrap();
        assert_relative_eq!(si, native * 100.0, max_relative = 1e-12);
    }

    #[test]
    fn conductivity_interval_is_on_the_celsius_axis() {
        let model = Pb17Li::new(RangePolicy::Strict);
        // 270 °C = 543.15 K satisfies every Kelvin interval but not [508, 873] °C.
        assert!(model.thermal_expansion(degc(270.0)).is_ok());
        let err = model.thermal_conductivity(degc(270.0)).unwrap_err();
        match err {
            PropertyError::OutOfRange {
                property,
                scale,
                range,
                temperature,
            } => {
                assert_eq!(property, Property::ThermalConductivity);
                assert_eq!(scale, TempScale::Celsius);
                assert_eq!(range, ValidityRange::new(508.0, 873.0));
                assert!((temperature - 270.0).abs() < 1e-9);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(model.thermal_conductivity(degc(550.0)).is_ok());
    }

    #[test]
    fn kelvin_boundary_is_inclusive() {
        let model = Pb17Li::new(RangePolicy::Strict);
        assert!(model.thermal_expansion(k(508.0)).is_ok());
        assert!(model.thermal_expansion(k(880.0)).is_ok());
        assert!(matches!(
            model.thermal_expansion(k(507.99)),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert!(matches!(
            model.thermal_expansion(k(880.01)),
            Err(PropertyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn viscosity_is_arrhenius_and_kinematic_is_derived() {
        let model = Pb17Li::new(RangePolicy::Strict);
        let t = k(673.15);
        let mu = model.dynamic_viscosity(t).unwrap();
        let expected = 0.187 * (11640.0 / (R_MOLAR * 673.15)).exp() * 1e-3;
        assert_relative_eq!(mu, expected, max_relative = 1e-12);
        let nu = model.kinematic_viscosity(t).unwrap();
        assert_relative_eq!(nu, mu / model.density(t).unwrap(), max_relative = 1e-12);
        // Advisory: 673 K is above the 625 K fit limit.
        assert!(model.correlation(Property::DynamicViscosity).map(|c| !c.in_range(t)).unwrap());
    }

    #[test]
    fn conductivity_is_reciprocal_resistivity() {
        let model = Pb17Li::new(RangePolicy::Strict);
        let t = k(700.0);
        let resistivity = model.electrical_resistivity(t).unwrap();
        let sigma = model.electrical_conductivity(t).unwrap();
        assert_relative_eq!(sigma * resistivity, 1.0, max_relative = 1e-12);
        assert!(model.correlation(Property::ElectricalConductivity).is_none());
        assert!(model.supports(Property::ElectricalConductivity));
    }

    #[test]
    fn strict_and_permissive_disagree_only_on_failure() {
        let strict = Pb17Li::new(RangePolicy::Strict);
        let permissive = Pb17Li::new(RangePolicy::Permissive);
        let t = k(450.0);

        assert!(matches!(
            strict.specific_heat(t),
            Err(PropertyError::OutOfRange { .. })
        ));
        let cp = permissive.specific_heat(t).unwrap();
        assert_relative_eq!(cp, (0.195 - 9.116e-6 * 450.0) * 1e3, max_relative = 1e-12);
    }

    #[test]
    fn unit_conversions() {
        let model = Pb17Li::new(RangePolicy::Strict);
        let t = k(600.0);
        assert_relative_eq!(
            model.surface_tension(t).unwrap(),
            (459.4 - 0.04 * (600.0 - 518.0)) * 1e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            model.evaluate(Property::ThermalDiffusivity, t).unwrap(),
            (3.46e-4 * 600.0 - 0.105) * 1e-4,
            max_relative = 1e-12
        );
        let sound = model.speed_of_sound(degc(600.0)).unwrap();
        assert_relative_eq!(sound, 1876.0 - 0.306 * 600.0, max_relative = 1e-9);
        let p_v = model.vapor_pressure(degc(600.0)).unwrap();
        assert_relative_eq!(p_v, 1.4508e-59 * 600.0_f64.powf(20.025) * 100.0, max_relative = 1e-9);
    }

    #[test]
    fn material_set_at_550_c() {
        let model = Pb17Li::new(RangePolicy::Strict);
        let props = model.material_set(degc(550.0)).unwrap();
        assert!(props.rho > 0.0 && props.nu > 0.0 && props.k > 0.0);
        assert!(props.sigma > 0.0 && props.beta > 0.0);
        // 823.15 K: specific heat applies, surface tension (≤ 700 K) does not.
        assert!(props.get(Property::SpecificHeat).is_some());
        assert!(props.get(Property::SurfaceTension).is_none());
    }
}

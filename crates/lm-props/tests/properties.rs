//! Cross-model property invariants.

use lm_core::units::{Temperature, degc, to_kelvin};
use lm_props::{
    Pb17Li, Property, PropertyError, PropertyModel, RangePolicy, StructuralAlloy, TabulatedPbLi,
};
use proptest::prelude::*;

fn models(policy: RangePolicy) -> Vec<Box<dyn PropertyModel>> {
    vec![
        Box::new(Pb17Li::new(policy)),
        Box::new(StructuralAlloy::new(policy)),
        Box::new(TabulatedPbLi::new(policy).unwrap()),
    ]
}

/// Pick a temperature inside `correlation`'s interval from a unit fraction.
fn inside(model: &dyn PropertyModel, property: Property, fraction: f64) -> Option<Temperature> {
    let correlation = model.correlation(property)?;
    let range = correlation.range();
    let max = if range.max.is_finite() { range.max } else { range.min + 3000.0 };
    let native = range.min + fraction * (max - range.min);
    Some(correlation.scale().temperature(native))
}

#[test]
fn celsius_interval_end_points_are_inclusive() {
    let model = Pb17Li::new(RangePolicy::Strict);
    for t_c in [508.0, 873.0] {
        assert!(model.thermal_conductivity(degc(t_c)).is_ok(), "k at {t_c} °C");
        assert!(model.vapor_pressure(degc(t_c)).is_ok(), "p_vap at {t_c} °C");
    }
    for t_c in [513.0, 783.0] {
        assert!(model.speed_of_sound(degc(t_c)).is_ok(), "c at {t_c} °C");
    }
    let k = model.correlation(Property::ThermalConductivity).unwrap();
    assert!(k.in_range(degc(873.0)));
    assert!(!k.in_range(degc(873.5)));
    assert!(matches!(
        model.thermal_conductivity(degc(873.5)),
        Err(PropertyError::OutOfRange { .. })
    ));
}

#[test]
fn reported_units_follow_the_returned_values() {
    let alloy = StructuralAlloy::new(RangePolicy::Strict);
    assert_eq!(alloy.unit(Property::SpecificHeat), "J/(mol·K)");
    assert_eq!(alloy.unit(Property::Density), "kg/m³");

    let pbli = Pb17Li::new(RangePolicy::Strict);
    assert_eq!(pbli.unit(Property::ThermalConductivity), "W/(m·K)");
    assert_eq!(pbli.unit(Property::SpecificHeat), "J/(kg·K)");
    // Derived from μ/ρ, no correlation of its own.
    assert_eq!(pbli.unit(Property::KinematicViscosity), "m²/s");

    for model in models(RangePolicy::Strict) {
        for property in model.capabilities() {
            let unit = model.unit(property);
            if model.name() != StructuralAlloy::NAME || property != Property::SpecificHeat {
                assert_eq!(unit, property.si_unit(), "{} {}", model.name(), property.name());
            }
        }
    }
}

#[test]
fn every_model_names_itself() {
    let names: Vec<String> = models(RangePolicy::Strict)
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(names, vec!["Pb-17Li", "structural-alloy", "tabulated-PbLi"]);
}

#[test]
fn property_table_reports_failures_individually() {
    let model = Pb17Li::new(RangePolicy::Strict);
    let table = model.property_table(degc(550.0));
    assert_eq!(table.len(), model.capabilities().len());

    let surface_tension = table
        .iter()
        .find(|(p, _)| *p == Property::SurfaceTension)
        .map(|(_, r)| r.clone())
        .unwrap();
    assert!(matches!(surface_tension, Err(PropertyError::OutOfRange { .. })));

    let density = table.iter().find(|(p, _)| *p == Property::Density).unwrap();
    assert!(density.1.is_ok());
}

proptest! {
    #[test]
    fn in_range_values_are_finite_positive_and_repeatable(fraction in 0.0_f64..=1.0) {
        for model in models(RangePolicy::Strict) {
            for property in model.capabilities() {
                let Some(t) = inside(model.as_ref(), property, fraction) else { continue };
                let first = model.evaluate(property, t);
                let second = model.evaluate(property, t);
                prop_assert_eq!(&first, &second);
                let value = first.map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert!(value.is_finite() && value > 0.0,
                    "{} {} at {} K = {}", model.name(), property, to_kelvin(t), value);
            }
        }
    }

    #[test]
    fn permissive_returns_the_formula_outside_the_interval(excess in 1.0_f64..150.0) {
        let strict = Pb17Li::new(RangePolicy::Strict);
        let permissive = Pb17Li::new(RangePolicy::Permissive);
        for property in [Property::SpecificHeat, Property::ThermalExpansion, Property::ThermalConductivity] {
            let correlation = permissive.correlation(property).unwrap();
            let t = correlation.scale().temperature(correlation.range().max + excess);

            let is_out_of_range = matches!(strict.evaluate(property, t), Err(PropertyError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
            let value = permissive.evaluate(property, t).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!(value.is_finite());
            let native = correlation.native(t).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let expected = native * match property {
                Property::SpecificHeat => 1e3,
                Property::ThermalConductivity => 1e2,
                _ => 1.0,
            };
            prop_assert!((value - expected).abs() <= 1e-12 * expected.abs());
        }
    }
}

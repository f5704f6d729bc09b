//! Single-property correlations and the sets models are built from.
//!
//! A `Correlation` is either a closed-form fit of temperature or a
//! control-point table evaluated by linear interpolation. Both carry the
//! temperature scale they were published against, a validity interval on that
//! scale and a factor converting the published unit to SI.

use std::fmt;
use std::sync::Arc;

use lm_core::units::{TempScale, Temperature};
use ndarray::Array1;
use ninterp::interpolator::Extrapolate;
use ninterp::prelude::{Interp1DOwned, Interpolator};
use ninterp::strategy::Linear;

use crate::error::{PropertyError, PropertyResult};
use crate::property::{Enforcement, Property, RangePolicy, ValidityRange};

/// Control-point table with linear interpolation and linear extrapolation past both ends.
pub struct ControlPoints {
    temperatures: Vec<f64>,
    values: Vec<f64>,
    interp: Interp1DOwned<f64, Linear>,
}

impl ControlPoints {
    /// Build a table; temperatures must be strictly increasing.
    pub fn new(property: Property, temperatures: Vec<f64>, values: Vec<f64>) -> PropertyResult<Self> {
        if temperatures.len() < 2 || temperatures.len() != values.len() {
            return Err(PropertyError::Interpolation {
                property,
                message: format!(
                    "need at least two paired control points (got {} temperatures, {} values)",
                    temperatures.len(),
                    values.len()
                ),
            });
        }
        let interp = Interp1DOwned::new(
            Array1::from(temperatures.clone()),
            Array1::from(values.clone()),
            Linear,
            Extrapolate::Enable,
        )
        .map_err(|e| PropertyError::Interpolation {
            property,
            message: e.to_string(),
        })?;

        Ok(Self {
            temperatures,
            values,
            interp,
        })
    }

    /// Temperatures covered by the table.
    pub fn span(&self) -> ValidityRange {
        let first = self.temperatures.first().copied().unwrap_or(f64::NAN);
        let last = self.temperatures.last().copied().unwrap_or(f64::NAN);
        ValidityRange::new(first, last)
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn interpolate(&self, property: Property, t: f64) -> PropertyResult<f64> {
        self.interp
            .interpolate(&[t])
            .map_err(|e| PropertyError::Interpolation {
                property,
                message: e.to_string(),
            })
    }
}

impl fmt::Debug for ControlPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlPoints")
            .field("temperatures", &self.temperatures)
            .field("values", &self.values)
            .finish()
    }
}

#[derive(Clone)]
enum Formula {
    Fit(fn(f64) -> f64),
    Table(Arc<ControlPoints>),
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit(_) => f.write_str("Fit(..)"),
            Self::Table(points) => write!(f, "Table({} points)", points.temperatures.len()),
        }
    }
}

/// One property as a function of temperature.
#[derive(Debug, Clone)]
pub struct Correlation {
    property: Property,
    scale: TempScale,
    range: ValidityRange,
    enforcement: Enforcement,
    native_unit: &'static str,
    to_si: f64,
    formula: Formula,
}

impl Correlation {
    /// Closed-form fit in `native_unit`; `to_si` converts the result to the property's SI unit.
    pub fn fit(
        property: Property,
        scale: TempScale,
        range: ValidityRange,
        native_unit: &'static str,
        to_si: f64,
        formula: fn(f64) -> f64,
    ) -> Self {
        Self {
            property,
            scale,
            range,
            enforcement: Enforcement::Enforced,
            native_unit,
            to_si,
            formula: Formula::Fit(formula),
        }
    }

    /// Tabulated property; its interval is the table span and is never enforced.
    pub fn table(
        property: Property,
        scale: TempScale,
        points: ControlPoints,
        native_unit: &'static str,
        to_si: f64,
    ) -> Self {
        Self {
            property,
            scale,
            range: points.span(),
            enforcement: Enforcement::Advisory,
            native_unit,
            to_si,
            formula: Formula::Table(Arc::new(points)),
        }
    }

    /// Keep the published interval but never reject on it.
    pub fn advisory(mut self) -> Self {
        self.enforcement = Enforcement::Advisory;
        self
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn scale(&self) -> TempScale {
        self.scale
    }

    pub fn range(&self) -> ValidityRange {
        self.range
    }

    pub fn enforcement(&self) -> Enforcement {
        self.enforcement
    }

    pub fn native_unit(&self) -> &'static str {
        self.native_unit
    }

    /// Unit of the value `evaluate` returns: the SI unit, unless the fit is
    /// reported as published (`to_si == 1`) in a unit of its own.
    pub fn reported_unit(&self) -> &'static str {
        if self.to_si == 1.0 {
            self.native_unit
        } else {
            self.property.si_unit()
        }
    }

    /// Temperature as read on this correlation's scale.
    pub fn native_temperature(&self, t: Temperature) -> f64 {
        self.scale.value_of(t)
    }

    pub fn in_range(&self, t: Temperature) -> bool {
        self.range.contains(self.native_temperature(t))
    }

    /// Value in the published unit, ignoring the validity interval.
    pub fn native(&self, t: Temperature) -> PropertyResult<f64> {
        let x = self.native_temperature(t);
        self.apply(x)
    }

    /// Value in SI under `policy`.
    pub fn evaluate(&self, t: Temperature, policy: RangePolicy) -> PropertyResult<f64> {
        let x = self.native_temperature(t);
        if !x.is_finite() {
            return Err(PropertyError::InvalidTemperature {
                property: self.property,
                value: x,
            });
        }

        if policy == RangePolicy::Strict
            && self.enforcement == Enforcement::Enforced
            && !self.range.contains(x)
        {
            return Err(PropertyError::OutOfRange {
                property: self.property,
                temperature: x,
                scale: self.scale,
                range: self.range,
            });
        }

        let value = self.apply(x)? * self.to_si;
        if !value.is_finite() {
            return Err(PropertyError::NonPhysical {
                property: self.property,
                temperature: x,
                scale: self.scale,
                value,
            });
        }
        Ok(value)
    }

    fn apply(&self, x: f64) -> PropertyResult<f64> {
        match &self.formula {
            Formula::Fit(f) => Ok(f(x)),
            Formula::Table(points) => points.interpolate(self.property, x),
        }
    }
}

/// The correlations of one material plus the policy they are evaluated under.
///
/// Properties without a correlation of their own are derived where possible:
/// kinematic viscosity is always μ/ρ, and electrical conductivity and
/// resistivity are reciprocals of each other.
#[derive(Debug, Clone)]
pub struct CorrelationSet {
    name: String,
    policy: RangePolicy,
    correlations: Vec<Correlation>,
}

impl CorrelationSet {
    pub fn new(name: impl Into<String>, policy: RangePolicy, correlations: Vec<Correlation>) -> Self {
        Self {
            name: name.into(),
            policy,
            correlations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    pub fn correlations(&self) -> &[Correlation] {
        &self.correlations
    }

    pub fn get(&self, property: Property) -> Option<&Correlation> {
        self.correlations.iter().find(|c| c.property == property)
    }

    pub fn supports(&self, property: Property) -> bool {
        if self.get(property).is_some() {
            return true;
        }
        match property {
            Property::KinematicViscosity => {
                self.get(Property::DynamicViscosity).is_some() && self.get(Property::Density).is_some()
            }
            Property::ElectricalConductivity => self.get(Property::ElectricalResistivity).is_some(),
            Property::ElectricalResistivity => self.get(Property::ElectricalConductivity).is_some(),
            _ => false,
        }
    }

    /// Evaluate `property` in SI at `t`.
    pub fn evaluate(&self, property: Property, t: Temperature) -> PropertyResult<f64> {
        if let Some(correlation) = self.get(property) {
            return correlation.evaluate(t, self.policy);
        }
        match property {
            Property::KinematicViscosity => {
                let mu = self.direct(Property::DynamicViscosity, property, t)?;
                let rho = self.direct(Property::Density, property, t)?;
                self.finite(property, t, mu / rho)
            }
            Property::ElectricalConductivity => {
                let resistivity = self.direct(Property::ElectricalResistivity, property, t)?;
                self.finite(property, t, resistivity.recip())
            }
            Property::ElectricalResistivity => {
                let sigma = self.direct(Property::ElectricalConductivity, property, t)?;
                self.finite(property, t, sigma.recip())
            }
            _ => Err(self.not_supported(property)),
        }
    }

    fn direct(&self, base: Property, requested: Property, t: Temperature) -> PropertyResult<f64> {
        self.get(base)
            .ok_or_else(|| self.not_supported(requested))?
            .evaluate(t, self.policy)
    }

    fn finite(&self, property: Property, t: Temperature, value: f64) -> PropertyResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PropertyError::NonPhysical {
                property,
                temperature: lm_core::units::to_kelvin(t),
                scale: TempScale::Kelvin,
                value,
            })
        }
    }

    fn not_supported(&self, property: Property) -> PropertyError {
        PropertyError::NotSupported {
            property,
            model: self.name.clone(),
        }
    }
}

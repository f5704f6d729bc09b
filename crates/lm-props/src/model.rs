//! Material property model trait and the per-temperature property set.

use std::collections::BTreeMap;

use lm_core::units::{Temperature, to_celsius};
use tracing::debug;

use crate::correlation::Correlation;
use crate::error::PropertyResult;
use crate::property::{Property, RangePolicy};

/// Properties that `MaterialPropertySet` collects when a model provides them.
const OPTIONAL_PROPERTIES: [Property; 5] = [
    Property::SpecificHeat,
    Property::ThermalDiffusivity,
    Property::SurfaceTension,
    Property::VaporPressure,
    Property::SpeedOfSound,
];

/// Trait for material property models.
///
/// Implementations must be thread-safe (Send + Sync) so sweeps can evaluate
/// temperatures in parallel. All values are returned in SI (see
/// `Property::si_unit`); not every model supports every property.
pub trait PropertyModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Range policy the model was built with.
    fn policy(&self) -> RangePolicy;

    /// The correlation backing `property`, if it is fitted directly.
    fn correlation(&self, property: Property) -> Option<&Correlation>;

    /// Whether `property` can be evaluated, directly or by derivation.
    fn supports(&self, property: Property) -> bool;

    /// Evaluate `property` at `t`, in SI.
    fn evaluate(&self, property: Property, t: Temperature) -> PropertyResult<f64>;

    /// Density [kg/m³].
    fn density(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::Density, t)
    }

    /// Dynamic viscosity [Pa·s].
    fn dynamic_viscosity(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::DynamicViscosity, t)
    }

    /// Kinematic viscosity [m²/s].
    fn kinematic_viscosity(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::KinematicViscosity, t)
    }

    /// Thermal conductivity [W/(m·K)].
    fn thermal_conductivity(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::ThermalConductivity, t)
    }

    /// Electrical conductivity [S/m].
    fn electrical_conductivity(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::ElectricalConductivity, t)
    }

    /// Electrical resistivity [Ω·m].
    fn electrical_resistivity(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::ElectricalResistivity, t)
    }

    /// Volumetric thermal expansion coefficient [1/K].
    fn thermal_expansion(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::ThermalExpansion, t)
    }

    /// Specific heat capacity.
    fn specific_heat(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::SpecificHeat, t)
    }

    /// Thermal diffusivity [m²/s].
    fn thermal_diffusivity(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::ThermalDiffusivity, t)
    }

    /// Surface tension [N/m].
    fn surface_tension(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::SurfaceTension, t)
    }

    /// Vapour pressure [Pa].
    fn vapor_pressure(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::VaporPressure, t)
    }

    /// Speed of sound [m/s].
    fn speed_of_sound(&self, t: Temperature) -> PropertyResult<f64> {
        self.evaluate(Property::SpeedOfSound, t)
    }

    /// Unit of the values `evaluate` returns for `property`.
    fn unit(&self, property: Property) -> &'static str {
        self.correlation(property)
            .map_or(property.si_unit(), Correlation::reported_unit)
    }

    /// Every property this model supports.
    fn capabilities(&self) -> Vec<Property> {
        Property::ALL
            .into_iter()
            .filter(|p| self.supports(*p))
            .collect()
    }

    /// Evaluate every supported property, keeping individual failures.
    fn property_table(&self, t: Temperature) -> Vec<(Property, PropertyResult<f64>)> {
        self.capabilities()
            .into_iter()
            .map(|p| (p, self.evaluate(p, t)))
            .collect()
    }

    /// Evaluate the property set needed for MHD scaling at `t`.
    fn material_set(&self, t: Temperature) -> PropertyResult<MaterialPropertySet> {
        MaterialPropertySet::evaluate(self, t)
    }
}

/// Properties of one material at one temperature.
///
/// Immutable once computed. The required fields are the inputs of the
/// Hartmann, Reynolds and Grashof numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialPropertySet {
    /// Temperature the set was evaluated at
    pub temperature: Temperature,

    /// Density [kg/m³]
    pub rho: f64,

    /// Dynamic viscosity [Pa·s]
    pub mu: f64,

    /// Kinematic viscosity [m²/s]
    pub nu: f64,

    /// Thermal conductivity [W/(m·K)]
    pub k: f64,

    /// Electrical conductivity [S/m]
    pub sigma: f64,

    /// Volumetric thermal expansion coefficient [1/K]
    pub beta: f64,

    /// Optional properties the model provides and that evaluated under its policy.
    pub optional: BTreeMap<Property, f64>,
}

impl MaterialPropertySet {
    /// Create a property set from individual values (kinematic viscosity is derived).
    pub fn new(temperature: Temperature, rho: f64, mu: f64, k: f64, sigma: f64, beta: f64) -> Self {
        Self {
            temperature,
            rho,
            mu,
            nu: mu / rho,
            k,
            sigma,
            beta,
            optional: BTreeMap::new(),
        }
    }

    /// Evaluate the required properties with `model`; any failure is returned.
    ///
    /// Optional properties that fail (for example a surface tension fit whose
    /// interval is narrower than the others) are left out of `optional`.
    pub fn evaluate<M: PropertyModel + ?Sized>(model: &M, t: Temperature) -> PropertyResult<Self> {
        let rho = model.density(t)?;
        let nu = model.kinematic_viscosity(t)?;
        let beta = model.thermal_expansion(t)?;
        let k = model.thermal_conductivity(t)?;
        let sigma = model.electrical_conductivity(t)?;

        let mut optional = BTreeMap::new();
        for property in OPTIONAL_PROPERTIES {
            if !model.supports(property) {
                continue;
            }
            match model.evaluate(property, t) {
                Ok(value) => {
                    optional.insert(property, value);
                }
                Err(err) => debug!(model = model.name(), %err, "optional property omitted"),
            }
        }

        Ok(Self {
            temperature: t,
            rho,
            mu: nu * rho,
            nu,
            k,
            sigma,
            beta,
            optional,
        })
    }

    /// Electrical resistivity [Ω·m].
    pub fn resistivity(&self) -> f64 {
        self.sigma.recip()
    }

    /// Look up any property held by the set.
    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::Density => Some(self.rho),
            Property::DynamicViscosity => Some(self.mu),
            Property::KinematicViscosity => Some(self.nu),
            Property::ThermalConductivity => Some(self.k),
            Property::ElectricalConductivity => Some(self.sigma),
            Property::ElectricalResistivity => Some(self.resistivity()),
            Property::ThermalExpansion => Some(self.beta),
            other => self.optional.get(&other).copied(),
        }
    }

    /// Return a summary string of the required properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Props(T={:.1}°C,ρ={:.1}kg/m³,ν={:.3e}m²/s,k={:.2}W/m·K,σ={:.3e}S/m,β={:.3e}1/K)",
            to_celsius(self.temperature),
            self.rho,
            self.nu,
            self.k,
            self.sigma,
            self.beta
        )
    }
}

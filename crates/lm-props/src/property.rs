//! Property capability set, validity intervals and range policy.

use std::fmt;

use lm_core::{Tolerances, nearly_equal};

/// A material property a model may be able to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Property {
    Density,
    DynamicViscosity,
    KinematicViscosity,
    ThermalConductivity,
    ElectricalConductivity,
    ElectricalResistivity,
    ThermalExpansion,
    SpecificHeat,
    ThermalDiffusivity,
    SurfaceTension,
    VaporPressure,
    SpeedOfSound,
}

impl Property {
    pub const ALL: [Property; 12] = [
        Property::Density,
        Property::DynamicViscosity,
        Property::KinematicViscosity,
        Property::ThermalConductivity,
        Property::ElectricalConductivity,
        Property::ElectricalResistivity,
        Property::ThermalExpansion,
        Property::SpecificHeat,
        Property::ThermalDiffusivity,
        Property::SurfaceTension,
        Property::VaporPressure,
        Property::SpeedOfSound,
    ];

    /// Stable snake_case identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Density => "density",
            Self::DynamicViscosity => "dynamic_viscosity",
            Self::KinematicViscosity => "kinematic_viscosity",
            Self::ThermalConductivity => "thermal_conductivity",
            Self::ElectricalConductivity => "electrical_conductivity",
            Self::ElectricalResistivity => "electrical_resistivity",
            Self::ThermalExpansion => "thermal_expansion",
            Self::SpecificHeat => "specific_heat",
            Self::ThermalDiffusivity => "thermal_diffusivity",
            Self::SurfaceTension => "surface_tension",
            Self::VaporPressure => "vapor_pressure",
            Self::SpeedOfSound => "speed_of_sound",
        }
    }

    /// SI unit returned by `PropertyModel::evaluate`. A correlation reported in
    /// its published unit overrides it; see `PropertyModel::unit`.
    pub fn si_unit(self) -> &'static str {
        match self {
            Self::Density => "kg/m³",
            Self::DynamicViscosity => "Pa·s",
            Self::KinematicViscosity => "m²/s",
            Self::ThermalConductivity => "W/(m·K)",
            Self::ElectricalConductivity => "S/m",
            Self::ElectricalResistivity => "Ω·m",
            Self::ThermalExpansion => "1/K",
            Self::SpecificHeat => "J/(kg·K)",
            Self::ThermalDiffusivity => "m²/s",
            Self::SurfaceTension => "N/m",
            Self::VaporPressure => "Pa",
            Self::SpeedOfSound => "m/s",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do when a temperature falls outside a correlation's validity interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RangePolicy {
    /// Reject with `PropertyError::OutOfRange`.
    #[default]
    Strict,
    /// Evaluate the formula anyway.
    Permissive,
}

impl fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Permissive => f.write_str("permissive"),
        }
    }
}

/// Whether a correlation's validity interval is checked under `RangePolicy::Strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforcement {
    /// Checked under strict policy.
    Enforced,
    /// Published but never checked; membership is available via `Correlation::in_range`.
    Advisory,
}

/// Closed temperature interval `[min, max]` on a correlation's native scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityRange {
    pub min: f64,
    pub max: f64,
}

impl ValidityRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval bounded below only.
    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    /// Closed-interval membership. Values within `Tolerances::default()` of a
    /// finite bound count as on it, so a Celsius bound survives the Kelvin round trip.
    pub fn contains(&self, t: f64) -> bool {
        if t >= self.min && t <= self.max {
            return true;
        }
        let tol = Tolerances::default();
        (self.min.is_finite() && nearly_equal(t, self.min, tol))
            || (self.max.is_finite() && nearly_equal(t, self.max, tol))
    }
}

impl fmt::Display for ValidityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

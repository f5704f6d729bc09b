// lm-core/src/units.rs

use std::fmt;

use uom::si::f64::ThermodynamicTemperature as UomThermodynamicTemperature;
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

/// Canonical temperature type (SI, f64).
pub type Temperature = UomThermodynamicTemperature;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_OFFSET_K: f64 = 273.15;

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    t.get::<kelvin>()
}

#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    t.get::<degree_celsius>()
}

/// Temperature scale a correlation is fitted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TempScale {
    Kelvin,
    Celsius,
}

impl TempScale {
    /// Read `t` on this scale.
    pub fn value_of(self, t: Temperature) -> f64 {
        match self {
            Self::Kelvin => to_kelvin(t),
            Self::Celsius => to_celsius(t),
        }
    }

    /// Build a temperature from a value on this scale.
    pub fn temperature(self, v: f64) -> Temperature {
        match self {
            Self::Kelvin => k(v),
            Self::Celsius => degc(v),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
        }
    }
}

impl fmt::Display for TempScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[inline]
pub fn m_to_mm(v: f64) -> f64 {
    v * 1e3
}

#[inline]
pub fn w_to_mw(v: f64) -> f64 {
    v * 1e-6
}

pub mod constants {
    /// Standard gravity [m/s²].
    pub const G0_MPS2: f64 = 9.806_65;

    /// Gravity used by the duct-flow design studies [m/s²].
    pub const G_DESIGN_MPS2: f64 = 9.81;

    /// Molar gas constant [J/(mol·K)].
    pub const R_MOLAR: f64 = 8.314_462_618;
}

//! Property evaluation errors.

use crate::property::{Property, ValidityRange};
use lm_core::units::TempScale;
use thiserror::Error;

/// Result type for property evaluation.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors that can occur while evaluating a material property.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Temperature outside the correlation's validity interval under a strict policy.
    #[error(
        "Temperature {temperature} {scale} is out of range for {property} (valid {range} {scale})"
    )]
    OutOfRange {
        property: Property,
        temperature: f64,
        scale: TempScale,
        range: ValidityRange,
    },

    /// The model does not provide this property at all.
    #[error("Property {property} is not provided by model {model}")]
    NotSupported { property: Property, model: String },

    /// The formula produced a non-finite value (or a reciprocal of zero).
    #[error("Non-physical value for {property} at {temperature} {scale}: {value}")]
    NonPhysical {
        property: Property,
        temperature: f64,
        scale: TempScale,
        value: f64,
    },

    /// Temperature itself is not a finite number.
    #[error("Invalid temperature for {property}: {value}")]
    InvalidTemperature { property: Property, value: f64 },

    /// Control-point table could not be built or evaluated.
    #[error("Interpolation failed for {property}: {message}")]
    Interpolation { property: Property, message: String },
}

impl PropertyError {
    /// Property the error refers to.
    pub fn property(&self) -> Property {
        match self {
            Self::OutOfRange { property, .. }
            | Self::NotSupported { property, .. }
            | Self::NonPhysical { property, .. }
            | Self::InvalidTemperature { property, .. }
            | Self::Interpolation { property, .. } => *property,
        }
    }
}

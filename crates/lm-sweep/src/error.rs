use lm_mhd::MhdError;
use lm_props::{Property, PropertyError};
use thiserror::Error;

pub type SweepResult<T> = Result<T, SweepError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// Not enough usable data to produce a result (every temperature skipped,
    /// too few points for a hull, collinear point cloud).
    #[error("Insufficient data: {reason}")]
    InsufficientData { reason: String },

    #[error("Invalid range for {what}: {reason}")]
    InvalidRange { what: String, reason: String },

    #[error("Model '{model}' cannot provide {property}")]
    MissingCapability { model: String, property: Property },

    #[error("Property error: {0}")]
    Property(#[from] PropertyError),

    #[error("Scaling error: {0}")]
    Mhd(#[from] MhdError),
}

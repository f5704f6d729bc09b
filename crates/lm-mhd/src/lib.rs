//! lm-mhd: MHD dimensionless numbers for liquid-metal duct flow.
//!
//! Provides:
//! - Hartmann, Reynolds and Grashof numbers and their interaction ratios
//!   (Ha²/Re, Gr/Ha², Gr/Re²), for scalars and for broadcasting arrays
//! - `InverseSolver`: closed-form rearrangements recovering a length, velocity
//!   or heat flux from a target ratio
//!
//! All relations are algebraic; nothing iterates.
//!
//! ```text
//! Ha = B·L·sqrt(σ / (ρ·ν))
//! Re = U·L / ν
//! Gr = g·β·q·L⁴ / (k·ν²)
//! ```

pub mod dimensionless;
pub mod error;
pub mod field;
pub mod inverse;

// Re-exports for ergonomics
pub use dimensionless::{
    DimensionlessFields, DimensionlessTriple, GeometryFlowFields, GeometryFlowInputs,
    InteractionRatios, grashof, grashof_field, hartmann, hartmann_field, reynolds,
    reynolds_field,
};
pub use error::{MhdError, MhdResult};
pub use field::{DivisionPolicy, Field, broadcast_shape, column, divide, scalar, vector, zip_with};
pub use inverse::{InverseSolver, length_mismatch};

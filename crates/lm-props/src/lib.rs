//! lm-props: temperature-dependent thermophysical properties of liquid metals
//! and structural alloys.
//!
//! Provides:
//! - `Property` capability set and `RangePolicy` (strict vs. extrapolating)
//! - `Correlation`: one fitted or tabulated property with its validity interval
//! - `PropertyModel` trait shared by every material model
//! - `MaterialPropertySet`: the properties needed for MHD scaling at one temperature
//! - Models: `Pb17Li` (fitted eutectic), `StructuralAlloy` (fitted piecewise),
//!   `TabulatedPbLi` (linear interpolation over control points)
//!
//! # Example
//!
//! ```
//! use lm_core::units::degc;
//! use lm_props::{Pb17Li, PropertyModel, RangePolicy};
//!
//! let model = Pb17Li::new(RangePolicy::Strict);
//! let props = model.material_set(degc(550.0)).unwrap();
//! println!("ρ = {:.1} kg/m³, ν = {:.3e} m²/s", props.rho, props.nu);
//! ```

pub mod alloy;
pub mod correlation;
pub mod error;
pub mod model;
pub mod pb17li;
pub mod property;
pub mod tabulated;

// Re-exports for ergonomics
pub use alloy::StructuralAlloy;
pub use correlation::{ControlPoints, Correlation, CorrelationSet};
pub use error::{PropertyError, PropertyResult};
pub use model::{MaterialPropertySet, PropertyModel};
pub use pb17li::Pb17Li;
pub use property::{Enforcement, Property, RangePolicy, ValidityRange};
pub use tabulated::TabulatedPbLi;

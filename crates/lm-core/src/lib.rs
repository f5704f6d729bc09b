//! lm-core: shared foundation for the liquid-metal scaling crates.
//!
//! Contains:
//! - units (uom temperature + Kelvin/Celsius constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LmError, LmResult};
pub use numeric::*;
pub use units::*;

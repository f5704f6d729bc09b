//! lm-sweep: experimental capability envelopes for liquid-metal MHD facilities.
//!
//! Provides:
//! - `RangeSpec` / `SweepRanges`: linear or logarithmic parameter ranges
//! - `run_sweep`: Cartesian sweep over T × B × L × U × q producing dimensionless rows
//! - `EnvelopeBoundary`: convex hull of the rows in log₁₀(Gr)–log₁₀(Ha²/Re) space
//! - `RangeSummary`: min/max of every dimensionless column
//! - `LengthMatchStudy`: characteristic lengths that reproduce target ratios
//! - `ScalingConfig`: YAML configuration tying the above together

pub mod config;
pub mod envelope;
pub mod error;
pub mod range;
pub mod study;
pub mod summary;
pub mod sweep;

pub use config::{
    ConfigError, ConfigResult, ModelKind, ScalingConfig, StudyConfig, Targets, from_yaml_str,
    load_yaml,
};
pub use envelope::EnvelopeBoundary;
pub use error::{SweepError, SweepResult};
pub use range::{RangeSpec, Spacing, SweepRanges};
pub use study::LengthMatchStudy;
pub use summary::{MinMax, RangeSummary};
pub use sweep::{SkippedTemperature, SweepGrid, SweepOutcome, SweepResultRow, run_sweep};

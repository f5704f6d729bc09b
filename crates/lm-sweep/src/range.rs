//! Parameter ranges for sweeps and studies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SweepError, SweepResult};

/// Point spacing within a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Geometrically spaced points (uniform in log space)
    #[serde(alias = "log")]
    Logarithmic,
}

/// `count` points from `start` to `stop`, both included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub start: f64,
    pub stop: f64,
    pub count: usize,
    #[serde(default)]
    pub spacing: Spacing,
}

impl RangeSpec {
    pub fn linear(start: f64, stop: f64, count: usize) -> Self {
        Self {
            start,
            stop,
            count,
            spacing: Spacing::Linear,
        }
    }

    pub fn logarithmic(start: f64, stop: f64, count: usize) -> Self {
        Self {
            start,
            stop,
            count,
            spacing: Spacing::Logarithmic,
        }
    }

    /// Single-point range.
    pub fn fixed(value: f64) -> Self {
        Self::linear(value, value, 1)
    }

    pub fn validate(&self, what: &str) -> SweepResult<()> {
        let invalid = |reason: &str| SweepError::InvalidRange {
            what: what.to_string(),
            reason: reason.to_string(),
        };
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if self.count == 0 {
            return Err(invalid("count must be at least 1"));
        }
        if self.spacing == Spacing::Logarithmic && (self.start <= 0.0 || self.stop <= 0.0) {
            return Err(invalid("logarithmic spacing needs positive bounds"));
        }
        Ok(())
    }

    /// Like `validate`, additionally requiring strictly positive bounds.
    pub fn validate_positive(&self, what: &str) -> SweepResult<()> {
        self.validate(what)?;
        if self.start <= 0.0 || self.stop <= 0.0 {
            return Err(SweepError::InvalidRange {
                what: what.to_string(),
                reason: "bounds must be strictly positive".to_string(),
            });
        }
        Ok(())
    }

    /// All points of the range.
    pub fn values(&self) -> SweepResult<Vec<f64>> {
        self.validate("range")?;
        Ok(match self.spacing {
            Spacing::Linear => self.generate_linear(),
            Spacing::Logarithmic => self.generate_logarithmic(),
        })
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.count == 1 {
            return vec![self.start];
        }

        let delta = (self.stop - self.start) / (self.count - 1) as f64;
        let mut points: Vec<f64> = (0..self.count)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.count - 1] = self.stop;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.count == 1 {
            return vec![self.start];
        }

        let log_start = self.start.ln();
        let log_delta = (self.stop.ln() - log_start) / (self.count - 1) as f64;
        let mut points: Vec<f64> = (0..self.count)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.count - 1] = self.stop;
        points
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spacing {
            Spacing::Linear => write!(f, "{}..{} ({} points)", self.start, self.stop, self.count),
            Spacing::Logarithmic => {
                write!(f, "{}..{} ({} points, log)", self.start, self.stop, self.count)
            }
        }
    }
}

/// Ranges for the envelope sweep. Temperature is in Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRanges {
    pub temperature_c: RangeSpec,
    /// Magnetic field [T]
    pub magnetic_field: RangeSpec,
    /// Characteristic length [m]
    pub length: RangeSpec,
    /// Velocity [m/s]
    pub velocity: RangeSpec,
    /// Wall heat flux [W/m²]
    pub heat_flux: RangeSpec,
}

impl SweepRanges {
    pub fn validate(&self) -> SweepResult<()> {
        self.temperature_c.validate("temperature_c")?;
        self.magnetic_field.validate_positive("magnetic_field")?;
        self.length.validate_positive("length")?;
        self.velocity.validate_positive("velocity")?;
        self.heat_flux.validate_positive("heat_flux")?;
        Ok(())
    }
}

impl Default for SweepRanges {
    /// The reference facility envelope: 270–550 °C, 1–4 T, 5–100 mm,
    /// 0.1–5 mm/s, 0.1–1 MW/m².
    fn default() -> Self {
        Self {
            temperature_c: RangeSpec::linear(270.0, 550.0, 5),
            magnetic_field: RangeSpec::linear(1.0, 4.0, 4),
            length: RangeSpec::linear(0.005, 0.1, 10),
            velocity: RangeSpec::linear(1.0e-4, 5.0e-3, 10),
            heat_flux: RangeSpec::linear(1.0e5, 1.0e6, 10),
        }
    }
}

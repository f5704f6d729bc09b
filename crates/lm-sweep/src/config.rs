//! YAML configuration for sweeps and length-match studies.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lm_core::constants::G_DESIGN_MPS2;
use lm_core::{LmError, ensure_finite, ensure_positive};
use lm_props::{Pb17Li, PropertyModel, PropertyResult, RangePolicy, StructuralAlloy, TabulatedPbLi};
use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::range::{RangeSpec, SweepRanges};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value: {field} = {value} ({reason})")]
    Invalid {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid value: {0}")]
    Value(#[from] LmError),

    #[error("Invalid range: {0}")]
    Range(#[from] SweepError),
}

/// Property model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    #[default]
    Pb17li,
    StructuralAlloy,
    TabulatedPbli,
}

impl ModelKind {
    pub fn build(self, policy: RangePolicy) -> PropertyResult<Box<dyn PropertyModel>> {
        let model: Box<dyn PropertyModel> = match self {
            Self::Pb17li => Box::new(Pb17Li::new(policy)),
            Self::StructuralAlloy => Box::new(StructuralAlloy::new(policy)),
            Self::TabulatedPbli => Box::new(TabulatedPbLi::new(policy)?),
        };
        Ok(model)
    }
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [Self::Pb17li, Self::StructuralAlloy, Self::TabulatedPbli];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pb17li => "pb17li",
            Self::StructuralAlloy => "structural-alloy",
            Self::TabulatedPbli => "tabulated-pbli",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::Invalid {
                field: "model".to_string(),
                value: s.to_string(),
                reason: "expected pb17li, structural-alloy or tabulated-pbli".to_string(),
            })
    }
}

/// Target interaction ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub ha2_over_re: f64,
    pub gr_over_ha2: f64,
}

impl Default for Targets {
    /// Reactor blanket values: Ha²/Re = 8.22e5, Gr/Ha² = 0.624.
    fn default() -> Self {
        Self {
            ha2_over_re: 8.22e5,
            gr_over_ha2: 0.624,
        }
    }
}

/// Length-match study at one temperature and field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    #[serde(default = "default_study_temperature")]
    pub temperature_c: f64,
    #[serde(default = "default_study_field")]
    pub magnetic_field: f64,
    #[serde(default = "default_study_velocity")]
    pub velocity: RangeSpec,
    #[serde(default = "default_study_heat_flux")]
    pub heat_flux: RangeSpec,
    /// `|L_Ha − L_Gr|` below this counts as matched [m].
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
}

/// Inside every strict Pb-17Li interval, so the default model can run it.
fn default_study_temperature() -> f64 {
    550.0
}

fn default_study_field() -> f64 {
    4.0
}

fn default_study_velocity() -> RangeSpec {
    RangeSpec::logarithmic(1.0e-4, 5.0e-3, 20)
}

fn default_study_heat_flux() -> RangeSpec {
    RangeSpec::linear(1.0e5, 1.0e6, 10)
}

fn default_match_threshold() -> f64 {
    1.0e-3
}

fn default_gravity() -> f64 {
    G_DESIGN_MPS2
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            temperature_c: default_study_temperature(),
            magnetic_field: default_study_field(),
            velocity: default_study_velocity(),
            heat_flux: default_study_heat_flux(),
            match_threshold: default_match_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    #[serde(default)]
    pub model: ModelKind,
    #[serde(default)]
    pub range_policy: RangePolicy,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default)]
    pub sweep: SweepRanges,
    #[serde(default)]
    pub targets: Targets,
    #[serde(default)]
    pub study: Option<StudyConfig>,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            range_policy: RangePolicy::default(),
            gravity: default_gravity(),
            sweep: SweepRanges::default(),
            targets: Targets::default(),
            study: None,
        }
    }
}

impl ScalingConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        positive_finite("gravity", self.gravity)?;
        positive_finite("targets.ha2_over_re", self.targets.ha2_over_re)?;
        positive_finite("targets.gr_over_ha2", self.targets.gr_over_ha2)?;
        self.sweep.validate()?;

        if let Some(study) = &self.study {
            ensure_finite(study.temperature_c, "study.temperature_c")?;
            positive_finite("study.magnetic_field", study.magnetic_field)?;
            positive_finite("study.match_threshold", study.match_threshold)?;
            study.velocity.validate_positive("study.velocity")?;
            study.heat_flux.validate_positive("study.heat_flux")?;
        }
        Ok(())
    }

    /// Study block, or the default study when none is configured.
    pub fn study_or_default(&self) -> StudyConfig {
        self.study.clone().unwrap_or_default()
    }

    pub fn build_model(&self) -> PropertyResult<Box<dyn PropertyModel>> {
        self.model.build(self.range_policy)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn positive_finite(field: &'static str, value: f64) -> ConfigResult<()> {
    ensure_positive(value, field)?;
    Ok(())
}

pub fn from_yaml_str(content: &str) -> ConfigResult<ScalingConfig> {
    let config: ScalingConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_yaml(path: &Path) -> ConfigResult<ScalingConfig> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

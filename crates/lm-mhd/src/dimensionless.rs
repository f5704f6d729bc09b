//! Hartmann, Reynolds and Grashof numbers and their interaction ratios.

use lm_core::constants::G_DESIGN_MPS2;
use lm_props::MaterialPropertySet;

use crate::error::{MhdError, MhdResult};
use crate::field::{DivisionPolicy, Field, broadcast_shape, checked_div, divide, scalar, zip_with};

/// Geometry and flow inputs for one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryFlowInputs {
    /// Magnetic field [T]
    pub b: f64,
    /// Characteristic length [m]
    pub l: f64,
    /// Velocity [m/s]
    pub u: f64,
    /// Wall heat flux [W/m²]
    pub q: f64,
    /// Gravitational acceleration [m/s²]
    pub g: f64,
}

impl GeometryFlowInputs {
    pub fn new(b: f64, l: f64, u: f64, q: f64) -> Self {
        Self {
            b,
            l,
            u,
            q,
            g: G_DESIGN_MPS2,
        }
    }

    pub fn with_gravity(mut self, g: f64) -> Self {
        self.g = g;
        self
    }
}

/// `sqrt(σ / (ρ·ν))`, the per-tesla-metre Hartmann factor.
fn hartmann_factor(props: &MaterialPropertySet) -> MhdResult<f64> {
    let radicand = checked_div(props.sigma, props.rho * props.nu, "Ha (ρ·ν)")?;
    if !radicand.is_finite() || radicand < 0.0 {
        return Err(MhdError::Domain {
            what: "Ha (σ/(ρ·ν))",
            value: radicand,
        });
    }
    Ok(radicand.sqrt())
}

/// `Ha = B·L·sqrt(σ/(ρ·ν))`
pub fn hartmann(b: f64, l: f64, props: &MaterialPropertySet) -> MhdResult<f64> {
    let factor = hartmann_factor(props)?;
    Ok(b * l * factor)
}

/// `Re = U·L/ν`
pub fn reynolds(u: f64, l: f64, props: &MaterialPropertySet) -> MhdResult<f64> {
    checked_div(u * l, props.nu, "Re (ν)")
}

/// `Gr = g·β·q·L⁴/(k·ν²)`
pub fn grashof(g: f64, q: f64, l: f64, props: &MaterialPropertySet) -> MhdResult<f64> {
    let den = grashof_denominator(props)?;
    Ok(g * props.beta * q * l.powi(4) / den)
}

fn grashof_denominator(props: &MaterialPropertySet) -> MhdResult<f64> {
    let den = props.k * props.nu * props.nu;
    if den == 0.0 {
        Err(MhdError::DivisionByZero { what: "Gr (k·ν²)" })
    } else {
        Ok(den)
    }
}

/// Ha²/Re, Gr/Ha² and Gr/Re².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionRatios {
    pub ha2_over_re: f64,
    pub gr_over_ha2: f64,
    pub gr_over_re2: f64,
}

/// Ha, Re and Gr at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionlessTriple {
    pub ha: f64,
    pub re: f64,
    pub gr: f64,
}

impl DimensionlessTriple {
    pub fn compute(props: &MaterialPropertySet, inputs: &GeometryFlowInputs) -> MhdResult<Self> {
        Ok(Self {
            ha: hartmann(inputs.b, inputs.l, props)?,
            re: reynolds(inputs.u, inputs.l, props)?,
            gr: grashof(inputs.g, inputs.q, inputs.l, props)?,
        })
    }

    pub fn ratios(&self, policy: DivisionPolicy) -> MhdResult<InteractionRatios> {
        let ha2 = self.ha * self.ha;
        let div = |num: f64, den: f64, what| match policy {
            DivisionPolicy::Strict => checked_div(num, den, what),
            DivisionPolicy::Propagate => Ok(num / den),
        };
        Ok(InteractionRatios {
            ha2_over_re: div(ha2, self.re, "Ha²/Re")?,
            gr_over_ha2: div(self.gr, ha2, "Gr/Ha²")?,
            gr_over_re2: div(self.gr, self.re * self.re, "Gr/Re²")?,
        })
    }
}

/// Array inputs; any subset may be non-scalar as long as the shapes broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFlowFields {
    pub b: Field,
    pub l: Field,
    pub u: Field,
    pub q: Field,
    pub g: f64,
}

impl GeometryFlowFields {
    pub fn new(b: Field, l: Field, u: Field, q: Field) -> Self {
        Self {
            b,
            l,
            u,
            q,
            g: G_DESIGN_MPS2,
        }
    }

    pub fn with_gravity(mut self, g: f64) -> Self {
        self.g = g;
        self
    }
}

impl From<&GeometryFlowInputs> for GeometryFlowFields {
    fn from(inputs: &GeometryFlowInputs) -> Self {
        Self::new(scalar(inputs.b), scalar(inputs.l), scalar(inputs.u), scalar(inputs.q))
            .with_gravity(inputs.g)
    }
}

pub fn hartmann_field(b: &Field, l: &Field, props: &MaterialPropertySet) -> MhdResult<Field> {
    let factor = hartmann_factor(props)?;
    zip_with(b, l, |b, l| b * l * factor)
}

pub fn reynolds_field(u: &Field, l: &Field, props: &MaterialPropertySet) -> MhdResult<Field> {
    if props.nu == 0.0 {
        return Err(MhdError::DivisionByZero { what: "Re (ν)" });
    }
    let nu = props.nu;
    zip_with(u, l, |u, l| u * l / nu)
}

pub fn grashof_field(g: f64, q: &Field, l: &Field, props: &MaterialPropertySet) -> MhdResult<Field> {
    let den = grashof_denominator(props)?;
    let beta = props.beta;
    zip_with(q, l, |q, l| g * beta * q * l.powi(4) / den)
}

/// Ha, Re and Gr fields. Each keeps the shape of its own operands; the
/// ratios broadcast them against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionlessFields {
    pub ha: Field,
    pub re: Field,
    pub gr: Field,
}

impl DimensionlessFields {
    pub fn compute(props: &MaterialPropertySet, inputs: &GeometryFlowFields) -> MhdResult<Self> {
        Ok(Self {
            ha: hartmann_field(&inputs.b, &inputs.l, props)?,
            re: reynolds_field(&inputs.u, &inputs.l, props)?,
            gr: grashof_field(inputs.g, &inputs.q, &inputs.l, props)?,
        })
    }

    /// Shape every ratio broadcasts to.
    pub fn shape(&self) -> MhdResult<Vec<usize>> {
        let shape = broadcast_shape(self.ha.shape(), self.re.shape())?;
        broadcast_shape(&shape, self.gr.shape())
    }

    pub fn ha2_over_re(&self, policy: DivisionPolicy) -> MhdResult<Field> {
        divide(&self.ha.mapv(|h| h * h), &self.re, "Ha²/Re", policy)
    }

    pub fn gr_over_ha2(&self, policy: DivisionPolicy) -> MhdResult<Field> {
        divide(&self.gr, &self.ha.mapv(|h| h * h), "Gr/Ha²", policy)
    }

    pub fn gr_over_re2(&self, policy: DivisionPolicy) -> MhdResult<Field> {
        divide(&self.gr, &self.re.mapv(|r| r * r), "Gr/Re²", policy)
    }
}

//! Capability envelope: convex hull of the sweep in log₁₀(Gr)–log₁₀(Ha²/Re) space.

use tracing::debug;

use crate::error::{SweepError, SweepResult};
use crate::sweep::SweepResultRow;

/// Counter-clockwise hull vertices in log space, `[log₁₀ Gr, log₁₀ Ha²/Re]`.
///
/// The first vertex is the one with the lowest x (then lowest y), so the
/// boundary does not depend on the order of the input rows.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeBoundary {
    vertices: Vec<[f64; 2]>,
}

/// `(a - o) × (b - o)`; positive for a left turn.
fn cross(o: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

impl EnvelopeBoundary {
    /// Hull of every row with finite, positive Gr and Ha²/Re.
    pub fn from_rows(rows: &[SweepResultRow]) -> SweepResult<Self> {
        let points: Vec<[f64; 2]> = rows
            .iter()
            .filter(|r| r.gr.is_finite() && r.gr > 0.0 && r.ha2_over_re.is_finite() && r.ha2_over_re > 0.0)
            .map(|r| [r.gr.log10(), r.ha2_over_re.log10()])
            .collect();
        debug!(rows = rows.len(), usable = points.len(), "Building envelope");
        Self::from_log_points(points)
    }

    /// Andrew's monotone chain over points already in log space.
    pub fn from_log_points(mut points: Vec<[f64; 2]>) -> SweepResult<Self> {
        points.retain(|p| p[0].is_finite() && p[1].is_finite());
        points.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
        points.dedup();

        if points.len() < 3 {
            return Err(SweepError::InsufficientData {
                reason: format!("envelope needs at least 3 distinct points, got {}", points.len()),
            });
        }

        let mut lower: Vec<[f64; 2]> = Vec::with_capacity(points.len());
        for &p in &points {
            while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
                lower.pop();
            }
            lower.push(p);
        }

        let mut upper: Vec<[f64; 2]> = Vec::with_capacity(points.len());
        for &p in points.iter().rev() {
            while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
                upper.pop();
            }
            upper.push(p);
        }

        // Each chain ends where the other starts.
        lower.pop();
        upper.pop();
        lower.extend(upper);

        if lower.len() < 3 {
            return Err(SweepError::InsufficientData {
                reason: "envelope points are collinear".to_string(),
            });
        }

        debug!(vertices = lower.len(), "Envelope hull");
        Ok(Self { vertices: lower })
    }

    pub fn vertices_log(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// Vertices as `[Gr, Ha²/Re]`, for plotting on log axes.
    pub fn vertices_linear(&self) -> Vec<[f64; 2]> {
        self.vertices
            .iter()
            .map(|v| [10f64.powf(v[0]), 10f64.powf(v[1])])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Enclosed area in decades².
    pub fn area_log(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a[0] * b[1] - b[0] * a[1]
            })
            .sum();
        0.5 * twice
    }

    /// Whether a log-space point lies inside or within `tol` (decades) of the boundary.
    pub fn contains(&self, point: [f64; 2], tol: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let edge = ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt();
            cross(a, b, point) >= -tol * edge
        })
    }

    pub fn contains_row(&self, row: &SweepResultRow, tol: f64) -> bool {
        self.contains([row.gr.log10(), row.ha2_over_re.log10()], tol)
    }
}

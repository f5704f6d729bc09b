//! Min/max of every dimensionless column over a sweep.

use std::fmt;

use crate::error::{SweepError, SweepResult};
use crate::sweep::SweepResultRow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(m) => Some(Self {
                min: m.min.min(v),
                max: m.max.max(v),
            }),
        })
    }
}

/// Capability ranges of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSummary {
    pub rows: usize,
    pub ha: MinMax,
    pub re: MinMax,
    pub gr: MinMax,
    pub ha2_over_re: MinMax,
    pub gr_over_ha2: MinMax,
    pub gr_over_re2: MinMax,
}

impl RangeSummary {
    pub fn from_rows(rows: &[SweepResultRow]) -> SweepResult<Self> {
        let col = |f: fn(&SweepResultRow) -> f64| {
            MinMax::of(rows.iter().map(f)).ok_or_else(|| SweepError::InsufficientData {
                reason: "range summary of an empty sweep".to_string(),
            })
        };
        Ok(Self {
            rows: rows.len(),
            ha: col(|r| r.ha)?,
            re: col(|r| r.re)?,
            gr: col(|r| r.gr)?,
            ha2_over_re: col(|r| r.ha2_over_re)?,
            gr_over_ha2: col(|r| r.gr_over_ha2)?,
            gr_over_re2: col(|r| r.gr_over_re2)?,
        })
    }

    pub fn entries(&self) -> [(&'static str, MinMax); 6] {
        [
            ("Ha", self.ha),
            ("Re", self.re),
            ("Gr", self.gr),
            ("Ha^2 / Re", self.ha2_over_re),
            ("Gr / Ha^2", self.gr_over_ha2),
            ("Gr / Re^2", self.gr_over_re2),
        ]
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capability ranges ({} points):", self.rows)?;
        for (name, m) in self.entries() {
            writeln!(f, "  {name:<12}: {:.3e} to {:.3e}", m.min, m.max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ha: f64, re: f64) -> SweepResultRow {
        SweepResultRow {
            t_c: 400.0,
            b: 1.0,
            l: 0.01,
            u: 1.0e-3,
            q: 1.0e5,
            ha,
            re,
            gr: 1.0e4,
            ha2_over_re: ha * ha / re,
            gr_over_ha2: 1.0e4 / (ha * ha),
            gr_over_re2: 1.0e4 / (re * re),
        }
    }

    #[test]
    fn min_and_max_per_column() {
        let summary = RangeSummary::from_rows(&[row(10.0, 5.0), row(30.0, 2.0), row(20.0, 8.0)]).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.ha, MinMax { min: 10.0, max: 30.0 });
        assert_eq!(summary.re, MinMax { min: 2.0, max: 8.0 });
        assert_eq!(summary.gr.min, summary.gr.max);
        assert_eq!(summary.ha2_over_re.max, 450.0);
    }

    #[test]
    fn empty_sweep() {
        assert!(matches!(
            RangeSummary::from_rows(&[]),
            Err(SweepError::InsufficientData { .. })
        ));
    }

    #[test]
    fn display_lists_every_column() {
        let text = RangeSummary::from_rows(&[row(10.0, 5.0)]).unwrap().to_string();
        assert!(text.contains("Ha^2 / Re"));
        assert!(text.contains("1.000e1 to 1.000e1"));
    }
}

//! Piecewise-linear interpolation over ordered breakpoint tables.
//!
//! Queries between two breakpoints are interpolated linearly. Queries outside
//! the table are handled according to an [`Extrapolation`] policy:
//!
//! ```text
//! Proportional:  x < x1  ->  y1 * x / x1      x > xn  ->  yn * x / xn
//! Clamp:         x < x1  ->  y1               x > xn  ->  yn
//! ```
//!
//! The proportional policy anchors the line at the origin rather than
//! continuing the slope of the outermost segment.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single `(x, y)` table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub x: f64,
    pub y: f64,
}

impl Breakpoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How to answer queries outside the tabulated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Scale the nearest breakpoint proportionally to the query.
    #[default]
    Proportional,
    /// Return the nearest breakpoint's value unchanged.
    Clamp,
}

/// Check that `points` is non-empty, finite and strictly ascending in `x`.
pub fn validate_breakpoints(points: &[Breakpoint]) -> Result<()> {
    if points.is_empty() {
        return Err(Error::InvalidTable {
            message: "table has no breakpoints".to_string(),
        });
    }

    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(Error::InvalidTable {
                message: format!("breakpoint ({}, {}) is not finite", point.x, point.y),
            });
        }
    }

    if let Some(pair) = points.windows(2).find(|pair| pair[0].x >= pair[1].x) {
        return Err(Error::InvalidTable {
            message: format!(
                "breakpoints must be strictly ascending, found {} before {}",
                pair[0].x, pair[1].x
            ),
        });
    }

    Ok(())
}

/// Evaluate the piecewise-linear function described by `points` at `x`.
///
/// # Errors
///
/// Returns [`Error::InvalidQuantity`] if `x` is negative or non-finite and
/// [`Error::InvalidTable`] if the table fails [`validate_breakpoints`].
pub fn interpolate(points: &[Breakpoint], x: f64, extrapolation: Extrapolation) -> Result<f64> {
    validate_breakpoints(points)?;
    evaluate_validated(points, x, extrapolation)
}

fn evaluate_validated(points: &[Breakpoint], x: f64, extrapolation: Extrapolation) -> Result<f64> {
    if !x.is_finite() || x < 0.0 {
        return Err(Error::quantity(
            "interpolation query",
            format!("must be finite and non-negative, got {x}"),
        ));
    }

    // index of the first breakpoint with bp.x >= x
    let idx = points.partition_point(|bp| bp.x < x);

    if let Some(hit) = points.get(idx).filter(|bp| bp.x == x) {
        return Ok(hit.y);
    }

    if idx == 0 {
        let first = points[0];
        return Ok(match extrapolation {
            Extrapolation::Proportional => first.y * x / first.x,
            Extrapolation::Clamp => first.y,
        });
    }

    if idx == points.len() {
        let last = points[points.len() - 1];
        return match extrapolation {
            Extrapolation::Proportional if last.x <= 0.0 => Err(Error::InvalidTable {
                message: "proportional extrapolation needs a breakpoint above zero".to_string(),
            }),
            Extrapolation::Proportional => Ok(last.y * x / last.x),
            Extrapolation::Clamp => Ok(last.y),
        };
    }

    let lower = points[idx - 1];
    let upper = points[idx];
    Ok(lower.y + (x - lower.x) / (upper.x - lower.x) * (upper.y - lower.y))
}

/// A validated breakpoint table with a fixed extrapolation policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseLinear {
    points: Vec<Breakpoint>,
    extrapolation: Extrapolation,
}

impl PiecewiseLinear {
    pub fn new(points: Vec<Breakpoint>, extrapolation: Extrapolation) -> Result<Self> {
        validate_breakpoints(&points)?;
        Ok(Self {
            points,
            extrapolation,
        })
    }

    pub fn evaluate(&self, x: f64) -> Result<f64> {
        evaluate_validated(&self.points, x, self.extrapolation)
    }

    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Smallest and largest tabulated `x`.
    pub fn domain(&self) -> (f64, f64) {
        (self.points[0].x, self.points[self.points.len() - 1].x)
    }
}

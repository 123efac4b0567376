/*
 * kampyli
 *
 * Copyright 2026 - kampyli contributors
 *
 * This file is part of kampyli.
 *
 * kampyli is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * kampyli is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with kampyli. If not, see <http://www.gnu.org/licenses/>.
 */

//! Blending-matrix spline evaluation.
//!
//! A [`Spline`] pairs a 4×4 [`BlendingMatrix`] with a window stride and
//! evaluates four point windows at a local parameter in `[0, 1]`. The matrix
//! form is a small fixed multiply per sample, cheap enough for hundreds of
//! samples per animation frame; the recursive form in [`crate::lerp`] is its
//! ground truth for the Bézier family.

use std::str::FromStr;

use crate::error::{CurveError, CurveResult};
use crate::points::Point;

pub mod matrix;
mod piecewise;

pub use matrix::BlendingMatrix;
pub use piecewise::{segment_count, Progress, SampledCurve};

/// A segment window is always exactly this many control points.
pub const WINDOW: usize = 4;

/// A curve family descriptor: blending matrix plus the number of control
/// points advanced between consecutive windows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spline {
    matrix: BlendingMatrix,
    stride: usize,
}

impl Spline {
    /// Cubic Bézier: windows are disjoint except for one shared boundary
    /// point.
    pub fn bezier() -> Self {
        Self {
            matrix: *matrix::BEZIER,
            stride: 3,
        }
    }

    /// Uniform cubic B-spline: windows slide by one point.
    pub fn uniform_b_spline() -> Self {
        Self {
            matrix: *matrix::UNIFORM_B_SPLINE,
            stride: 1,
        }
    }

    /// Any other cubic family expressible as a 4×4 blending matrix, e.g.
    /// Hermite or Catmull-Rom tables.
    pub fn with_matrix(matrix: BlendingMatrix, stride: usize) -> Self {
        assert!(stride > 0, "window stride must be at least 1");
        Self { matrix, stride }
    }

    pub fn matrix(&self) -> &BlendingMatrix {
        &self.matrix
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The blended curve point of a four point window at local parameter
    /// `t`. Values of `t` outside `[0, 1]` extrapolate the blending
    /// polynomial; well defined, though visually the result diverges from
    /// the curve between the window's ends.
    pub fn evaluate_point(&self, xs: &[f64], ys: &[f64], t: f64) -> CurveResult<Point> {
        self.check_window(xs, ys)?;
        Ok(self.blend(xs, ys, t))
    }

    /// Samples the window at `precision` evenly spaced parameters in
    /// `[0, t]`. `t == 0` forces a single sample, the window's start point,
    /// no matter the requested precision.
    pub fn evaluate_segment(
        &self,
        xs: &[f64],
        ys: &[f64],
        precision: usize,
        t: f64,
    ) -> CurveResult<Vec<Point>> {
        self.check_window(xs, ys)?;
        Ok(crate::linspace(t, precision)
            .map(|u| self.blend(xs, ys, u))
            .collect())
    }

    fn check_window(&self, xs: &[f64], ys: &[f64]) -> CurveResult<()> {
        crate::check_dimensions(xs, ys)?;
        if xs.len() != WINDOW {
            return Err(CurveError::InsufficientControlPoints {
                required: WINDOW,
                actual: xs.len(),
            });
        }
        Ok(())
    }

    fn blend(&self, xs: &[f64], ys: &[f64], t: f64) -> Point {
        let weights = self.matrix.weights(t);
        let mut x = 0.0;
        let mut y = 0.0;
        for i in 0..WINDOW {
            x += weights[i] * xs[i];
            y += weights[i] * ys[i];
        }
        (x, y).into()
    }
}

/// The closed set of built-in curve families. Mapping a family to its
/// [`Spline`] descriptor is total; only truly external input (a family
/// name string) can fail, at the [`FromStr`] boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveFamily {
    Bezier,
    UniformBSpline,
}

impl CurveFamily {
    pub fn spline(self) -> Spline {
        match self {
            Self::Bezier => Spline::bezier(),
            Self::UniformBSpline => Spline::uniform_b_spline(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bezier => "bezier",
            Self::UniformBSpline => "b-spline",
        }
    }
}

impl FromStr for CurveFamily {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bezier" => Ok(Self::Bezier),
            "b-spline" | "bspline" => Ok(Self::UniformBSpline),
            _ => Err(CurveError::UnknownFamily(s.to_string())),
        }
    }
}

impl std::fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn test_bezier_interpolates_endpoints() {
    let xs = [0.2, 0.4, 0.6, 0.8];
    let ys = [0.5, 0.1, 0.9, 0.5];
    let spline = Spline::bezier();
    assert_eq!(
        spline.evaluate_point(&xs, &ys, 0.0).unwrap(),
        Point::new(0.2, 0.5)
    );
    assert_eq!(
        spline.evaluate_point(&xs, &ys, 1.0).unwrap(),
        Point::new(0.8, 0.5)
    );
}

#[test]
fn test_zero_length_range_forces_single_sample() {
    let xs = [0.2, 0.4, 0.6, 0.8];
    let ys = [0.5, 0.1, 0.9, 0.5];
    let spline = Spline::bezier();
    for precision in [1, 7, 100] {
        let sampled = spline.evaluate_segment(&xs, &ys, precision, 0.0).unwrap();
        assert_eq!(
            sampled,
            vec![spline.evaluate_point(&xs, &ys, 0.0).unwrap()]
        );
    }
}

#[test]
fn test_window_validation() {
    let spline = Spline::bezier();
    assert_eq!(
        spline.evaluate_point(&[0.0, 1.0], &[0.0], 0.5),
        Err(CurveError::DimensionMismatch { xs: 2, ys: 1 })
    );
    assert_eq!(
        spline.evaluate_point(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], 0.5),
        Err(CurveError::InsufficientControlPoints {
            required: 4,
            actual: 3
        })
    );
    assert_eq!(
        spline.evaluate_segment(&[0.0; 5], &[0.0; 5], 10, 1.0),
        Err(CurveError::InsufficientControlPoints {
            required: 4,
            actual: 5
        })
    );
}

#[test]
fn test_family_selection() {
    assert_eq!("bezier".parse::<CurveFamily>(), Ok(CurveFamily::Bezier));
    assert_eq!(
        "B-Spline".parse::<CurveFamily>(),
        Ok(CurveFamily::UniformBSpline)
    );
    assert_eq!(
        "hermite".parse::<CurveFamily>(),
        Err(CurveError::UnknownFamily("hermite".to_string()))
    );
    assert_eq!(CurveFamily::Bezier.spline().stride(), 3);
    assert_eq!(CurveFamily::UniformBSpline.spline().stride(), 1);
    for family in [CurveFamily::Bezier, CurveFamily::UniformBSpline] {
        assert_eq!(family.name().parse::<CurveFamily>(), Ok(family));
    }
}

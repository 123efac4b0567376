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

//! Evaluation of smooth parametric 2-D curves from control point sequences,
//! either through fixed 4×4 blending matrices (cubic Bézier, uniform cubic
//! B-spline) or through recursive pairwise linear interpolation.

pub mod error;
pub mod lerp;
pub mod points;
pub mod splines;

/// Default number of samples per segment window.
pub const DEFAULT_PRECISION: usize = 100;

/// `steps` evenly spaced parameter values in `[0, stop]`, endpoints
/// included. A zero-length range collapses to a single sample at the start;
/// sampling it at more than one point is meaningless.
pub(crate) fn linspace(stop: f64, steps: usize) -> impl Iterator<Item = f64> {
    let steps = if stop == 0.0 { 1 } else { steps };
    (0..steps).map(move |i| {
        if steps < 2 {
            0.0
        } else {
            stop * (i as f64) / ((steps - 1) as f64)
        }
    })
}

pub(crate) fn check_dimensions(xs: &[f64], ys: &[f64]) -> error::CurveResult<()> {
    if xs.len() != ys.len() {
        return Err(error::CurveError::DimensionMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    Ok(())
}

pub mod prelude {
    pub use super::error::{CurveError, CurveResult};
    pub use super::lerp::{self, Pyramid};
    pub use super::points::Point;
    pub use super::splines::{
        segment_count, BlendingMatrix, CurveFamily, Progress, SampledCurve, Spline,
    };
    pub use super::DEFAULT_PRECISION;

    pub use std::str::FromStr;
}

#[test]
fn test_linspace() {
    let ts: Vec<f64> = linspace(1.0, 5).collect();
    assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    // A zero-length range yields its start exactly once.
    assert_eq!(linspace(0.0, 100).collect::<Vec<f64>>(), vec![0.0]);
    assert_eq!(linspace(0.5, 1).collect::<Vec<f64>>(), vec![0.0]);
    assert_eq!(linspace(0.5, 0).count(), 0);
}

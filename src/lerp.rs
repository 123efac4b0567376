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

//! Curve evaluation by recursive pairwise linear interpolation, de
//! Casteljau's construction.
//!
//! Quadratic in the control point count where the matrix form in
//! [`crate::splines`] is constant per sample, but works for any number of
//! control points with no precomputed table, which makes it the ground
//! truth the matrix form must agree with on cubic Bézier windows. The
//! [`pyramid`] evaluator keeps every intermediate row of the reduction so a
//! caller can draw the construction itself.

use smallvec::SmallVec;

use crate::error::{CurveError, CurveResult};
use crate::points::Point;

/// One reduction row per axis; rows of up to eight points stay inline.
type Row = SmallVec<[f64; 8]>;

/// `(1 − t)·a + t·b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// The curve point at parameter `t`: each reduction step replaces the
/// sequence with the pairwise interpolations of its neighbors, one point
/// shorter, until a single point remains.
pub fn evaluate_point(xs: &[f64], ys: &[f64], t: f64) -> CurveResult<Point> {
    crate::check_dimensions(xs, ys)?;
    match xs.len() {
        0 => Err(CurveError::EmptyInput),
        1 => Ok((xs[0], ys[0]).into()),
        n => {
            let mut next_xs = Row::with_capacity(n - 1);
            let mut next_ys = Row::with_capacity(n - 1);
            for i in 0..n - 1 {
                next_xs.push(lerp(xs[i], xs[i + 1], t));
                next_ys.push(lerp(ys[i], ys[i + 1], t));
            }
            evaluate_point(&next_xs, &next_ys, t)
        }
    }
}

/// Samples [`evaluate_point`] at `precision` evenly spaced parameters in
/// `[0, t]`. As with the matrix form, `t == 0` forces a single sample.
pub fn evaluate_segment(
    xs: &[f64],
    ys: &[f64],
    precision: usize,
    t: f64,
) -> CurveResult<Vec<Point>> {
    crate::check_dimensions(xs, ys)?;
    if xs.is_empty() {
        return Err(CurveError::EmptyInput);
    }
    crate::linspace(t, precision)
        .map(|u| evaluate_point(xs, ys, u))
        .collect()
}

/// The full intermediate construction of the reduction at one parameter:
/// row 0 is the input polygon, every following row one point shorter, down
/// to the single curve point. Exists so a caller can visualize the
/// construction; the classic shrinking-polyline animation draws each row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pyramid {
    rows: Vec<Vec<Point>>,
}

impl Pyramid {
    pub fn rows(&self) -> &[Vec<Point>] {
        &self.rows
    }

    /// The final single-point row: the curve point itself.
    pub fn tip(&self) -> Point {
        self.rows[self.rows.len() - 1][0]
    }
}

/// Performs the same reduction as [`evaluate_point`] but retains every
/// level.
pub fn pyramid(xs: &[f64], ys: &[f64], t: f64) -> CurveResult<Pyramid> {
    crate::check_dimensions(xs, ys)?;
    if xs.is_empty() {
        return Err(CurveError::EmptyInput);
    }

    let mut rows = Vec::with_capacity(xs.len());
    let mut row_xs = Row::from_slice(xs);
    let mut row_ys = Row::from_slice(ys);
    loop {
        rows.push(
            row_xs
                .iter()
                .zip(row_ys.iter())
                .map(|(&x, &y)| Point::new(x, y))
                .collect(),
        );
        let n = row_xs.len();
        if n < 2 {
            break;
        }
        // Reduce in place; element i becomes the interpolation of the old
        // pair (i, i + 1).
        for i in 0..n - 1 {
            row_xs[i] = lerp(row_xs[i], row_xs[i + 1], t);
            row_ys[i] = lerp(row_ys[i], row_ys[i + 1], t);
        }
        row_xs.truncate(n - 1);
        row_ys.truncate(n - 1);
    }
    Ok(Pyramid { rows })
}

#[test]
fn test_lerp() {
    assert_eq!(lerp(0.0, 1.0, 0.25), 0.25);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    // Extrapolates beyond [0, 1].
    assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
}

#[test]
fn test_evaluate_point_three_points() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 1.0, 0.0];
    assert_eq!(
        evaluate_point(&xs, &ys, 0.5).unwrap(),
        Point::new(1.0, 0.5)
    );
}

#[test]
fn test_pyramid_rows() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 1.0, 0.0];
    let pyramid = pyramid(&xs, &ys, 0.5).unwrap();
    assert_eq!(
        pyramid.rows(),
        &[
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)],
            vec![Point::new(0.5, 0.5), Point::new(1.5, 0.5)],
            vec![Point::new(1.0, 0.5)],
        ]
    );
    assert_eq!(pyramid.tip(), evaluate_point(&xs, &ys, 0.5).unwrap());
}

#[test]
fn test_pyramid_interior_rows_lie_between_parents() {
    // Dyadic coordinates keep every interpolation exact, so the
    // collinearity identity holds with no tolerance.
    let xs = [0.0, 1.0, 2.0, 4.0];
    let ys = [0.0, 2.0, -1.0, 1.0];
    let t = 0.25;
    let pyramid = pyramid(&xs, &ys, t).unwrap();
    assert_eq!(pyramid.rows().len(), xs.len());
    for (parents, children) in pyramid.rows().iter().zip(pyramid.rows().iter().skip(1)) {
        assert_eq!(children.len(), parents.len() - 1);
        for (i, child) in children.iter().enumerate() {
            assert!(parents[i].collinear(child, &parents[i + 1]));
        }
    }
}

#[test]
fn test_single_point_input() {
    let pyramid = pyramid(&[0.25], &[0.75], 0.9).unwrap();
    assert_eq!(pyramid.rows().len(), 1);
    assert_eq!(pyramid.tip(), Point::new(0.25, 0.75));
    assert_eq!(
        evaluate_point(&[0.25], &[0.75], 0.9).unwrap(),
        Point::new(0.25, 0.75)
    );
}

#[test]
fn test_input_validation() {
    let mismatch = CurveError::DimensionMismatch { xs: 2, ys: 1 };
    assert_eq!(
        evaluate_point(&[0.0, 1.0], &[0.0], 0.5),
        Err(mismatch.clone())
    );
    assert_eq!(
        evaluate_segment(&[0.0, 1.0], &[0.0], 10, 0.5),
        Err(mismatch.clone())
    );
    assert_eq!(pyramid(&[0.0, 1.0], &[0.0], 0.5), Err(mismatch));

    assert_eq!(evaluate_point(&[], &[], 0.5), Err(CurveError::EmptyInput));
    assert_eq!(
        evaluate_segment(&[], &[], 10, 0.5),
        Err(CurveError::EmptyInput)
    );
    assert_eq!(pyramid(&[], &[], 0.5), Err(CurveError::EmptyInput));
}

#[test]
fn test_segment_zero_t() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 1.0, 0.0];
    let sampled = evaluate_segment(&xs, &ys, 100, 0.0).unwrap();
    assert_eq!(sampled, vec![Point::new(0.0, 0.0)]);
}

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

use once_cell::sync::Lazy;

use crate::error::{CurveError, CurveResult};

/// Fixed 4×4 coefficient table defining one curve family: it maps the cubic
/// basis row `[t³, t², t, 1]` to blending weights over a four point window.
/// Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendingMatrix([[f64; 4]; 4]);

/// The cubic Bézier blending matrix. Interpolates the window's endpoints
/// exactly.
pub static BEZIER: Lazy<BlendingMatrix> = Lazy::new(|| {
    BlendingMatrix::new([
        [-1.0, 3.0, -3.0, 1.0],
        [3.0, -6.0, 3.0, 0.0],
        [-3.0, 3.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ])
});

/// The uniform cubic B-spline blending matrix. Approximates: the curve does
/// not pass through the control points.
pub static UNIFORM_B_SPLINE: Lazy<BlendingMatrix> = Lazy::new(|| {
    BlendingMatrix::new([
        [-1.0, 3.0, -3.0, 1.0],
        [3.0, -6.0, 3.0, 0.0],
        [-3.0, 0.0, 3.0, 0.0],
        [1.0, 4.0, 1.0, 0.0],
    ])
    .scaled(1.0 / 6.0)
});

impl BlendingMatrix {
    pub const fn new(rows: [[f64; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Builds a matrix from externally supplied rows, which must form an
    /// exact 4×4 table.
    pub fn from_rows(rows: &[Vec<f64>]) -> CurveResult<Self> {
        let cols = rows
            .iter()
            .map(Vec::len)
            .find(|&len| len != 4)
            .or_else(|| rows.first().map(Vec::len))
            .unwrap_or(0);
        if rows.len() != 4 || cols != 4 {
            return Err(CurveError::InvalidMatrix {
                rows: rows.len(),
                cols,
            });
        }
        let mut mat = [[0.0; 4]; 4];
        for (src, dst) in rows.iter().zip(mat.iter_mut()) {
            dst.copy_from_slice(src);
        }
        Ok(Self(mat))
    }

    /// Every coefficient multiplied by `factor`. Common tables are published
    /// as an integer matrix over a denominator, e.g. the uniform B-spline's
    /// over 6.
    pub fn scaled(mut self, factor: f64) -> Self {
        for row in self.0.iter_mut() {
            for coefficient in row.iter_mut() {
                *coefficient *= factor;
            }
        }
        self
    }

    /// Blending weights over the four window points at local parameter `t`:
    /// the basis row `[t³, t², t, 1]` right-multiplied by the matrix.
    pub fn weights(&self, t: f64) -> [f64; 4] {
        let basis = [t * t * t, t * t, t, 1.0];
        let mut weights = [0.0; 4];
        for (b, row) in basis.iter().zip(self.0.iter()) {
            for (weight, coefficient) in weights.iter_mut().zip(row.iter()) {
                *weight += b * coefficient;
            }
        }
        weights
    }
}

#[test]
fn test_from_rows_shape() {
    let square: Vec<Vec<f64>> = (0..4).map(|_| vec![0.0; 4]).collect();
    assert!(BlendingMatrix::from_rows(&square).is_ok());

    for (rows, cols) in [(3, 4), (4, 3), (4, 5), (5, 5), (0, 0)] {
        let bad: Vec<Vec<f64>> = (0..rows).map(|_| vec![0.0; cols]).collect();
        assert_eq!(
            BlendingMatrix::from_rows(&bad),
            Err(CurveError::InvalidMatrix { rows, cols })
        );
    }

    // A jagged table is not 4×4 either, even with four rows.
    let mut jagged: Vec<Vec<f64>> = (0..4).map(|_| vec![0.0; 4]).collect();
    jagged[2].push(1.0);
    assert_eq!(
        BlendingMatrix::from_rows(&jagged),
        Err(CurveError::InvalidMatrix { rows: 4, cols: 5 })
    );
}

#[test]
fn test_bezier_weights_at_endpoints() {
    // At t = 0 all weight sits on the first window point, at t = 1 on the
    // last.
    assert_eq!(BEZIER.weights(0.0), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(BEZIER.weights(1.0), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_weights_partition_of_unity() {
    for matrix in [&*BEZIER, &*UNIFORM_B_SPLINE] {
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let sum: f64 = matrix.weights(t).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "t = {t}: weights sum to {sum}");
        }
    }
}

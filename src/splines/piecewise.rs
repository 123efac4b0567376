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

//! Piecewise assembly: stitches an arbitrary-length control point sequence
//! into one continuous sampled curve under a single global progress value.

use super::{Spline, WINDOW};
use crate::error::CurveResult;
use crate::points::Point;

/// Global progress through the entire piecewise curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    /// `0.0` draws only the first point, `1.0` the whole curve. Typically
    /// driven from a slider or an animation clock.
    Normalized(f64),
    /// Raw progress in window units: window `k` is drawn over `[k, k + 1]`.
    Absolute(f64),
    /// Every window drawn completely.
    Full,
}

/// One assembled curve: the concatenated window samples, plus the boundary
/// sample of each included window for caller-side join highlighting.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampledCurve {
    pub points: Vec<Point>,
    pub joins: Vec<Point>,
}

/// Number of four point windows an `n` point sequence yields under the given
/// stride: `1 + (n − 4) / stride` for `n ≥ 4`, zero otherwise. `stride` must
/// be nonzero.
pub fn segment_count(n: usize, stride: usize) -> usize {
    if n < WINDOW {
        0
    } else {
        1 + (n - WINDOW) / stride
    }
}

impl Spline {
    pub fn segment_count(&self, n: usize) -> usize {
        segment_count(n, self.stride)
    }

    /// Assembles the full piecewise curve up to `progress`.
    ///
    /// Window `k` starts at control point offset `k · stride` and is
    /// evaluated at the local parameter `min(1, T − k)`, where `T` is the
    /// absolute form of `progress`; windows beyond the current progress are
    /// not drawn at all. A `T` landing exactly on a window boundary draws
    /// the boundary window fully and the next one as its single start
    /// point, so nothing is double counted.
    ///
    /// Fewer than four control points make an empty curve, not an error;
    /// callers suppress drawing.
    pub fn sample_curve(
        &self,
        xs: &[f64],
        ys: &[f64],
        precision: usize,
        progress: Progress,
    ) -> CurveResult<SampledCurve> {
        crate::check_dimensions(xs, ys)?;
        let segments = self.segment_count(xs.len());
        let mut curve = SampledCurve::default();
        if segments == 0 {
            return Ok(curve);
        }

        let total = match progress {
            Progress::Normalized(value) => value * segments as f64,
            Progress::Absolute(value) => value,
            Progress::Full => segments as f64,
        };

        for window in 0..segments {
            let local = (total - window as f64).min(1.0);
            if local < 0.0 {
                break;
            }
            let offset = window * self.stride;
            let sampled = self.evaluate_segment(
                &xs[offset..offset + WINDOW],
                &ys[offset..offset + WINDOW],
                precision,
                local,
            )?;
            if let (Some(&first), Some(&last)) = (sampled.first(), sampled.last()) {
                curve.joins.push(first);
                curve.joins.push(last);
            }
            curve.points.extend(sampled);
        }
        Ok(curve)
    }
}

#[test]
fn test_segment_count() {
    // Bézier stride.
    assert_eq!(segment_count(7, 3), 2);
    assert_eq!(segment_count(4, 3), 1);
    assert_eq!(segment_count(6, 3), 1);
    for n in 0..4 {
        assert_eq!(segment_count(n, 3), 0);
        assert_eq!(segment_count(n, 1), 0);
    }
    // B-spline stride.
    assert_eq!(segment_count(10, 1), 7);
    assert_eq!(segment_count(4, 1), 1);
}

#[test]
fn test_too_few_points_is_an_empty_curve() {
    let spline = Spline::bezier();
    let curve = spline
        .sample_curve(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 10, Progress::Full)
        .unwrap();
    assert_eq!(curve, SampledCurve::default());
}

#[test]
fn test_progress_modes_agree() {
    let xs = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    let ys = [0.3, 0.6, 0.7, 0.3, 0.1, 0.8, 0.2];
    let spline = Spline::bezier();
    let segments = spline.segment_count(xs.len()) as f64;

    let full = spline.sample_curve(&xs, &ys, 24, Progress::Full).unwrap();
    let normalized = spline
        .sample_curve(&xs, &ys, 24, Progress::Normalized(1.0))
        .unwrap();
    let absolute = spline
        .sample_curve(&xs, &ys, 24, Progress::Absolute(segments))
        .unwrap();
    assert_eq!(full, normalized);
    assert_eq!(full, absolute);
    assert_eq!(full.points.len(), 2 * 24);
    assert_eq!(full.joins.len(), 2 * 2);
}

#[test]
fn test_windows_beyond_progress_are_not_drawn() {
    let xs = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    let ys = [0.3, 0.6, 0.7, 0.3, 0.1, 0.8, 0.2];
    let spline = Spline::bezier();

    // Progress inside the first of two windows: the second contributes
    // nothing, not even a placeholder.
    let partial = spline
        .sample_curve(&xs, &ys, 10, Progress::Absolute(0.5))
        .unwrap();
    assert_eq!(partial.points.len(), 10);
    assert_eq!(partial.joins.len(), 2);

    // Negative progress draws nothing at all.
    let none = spline
        .sample_curve(&xs, &ys, 10, Progress::Absolute(-0.25))
        .unwrap();
    assert!(none.points.is_empty());
    assert!(none.joins.is_empty());
}

#[test]
fn test_boundary_tie_break() {
    let xs = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    let ys = [0.3, 0.6, 0.7, 0.3, 0.1, 0.8, 0.2];
    let spline = Spline::bezier();

    // T exactly on the boundary between windows: window 0 fully drawn,
    // window 1 contributes its start point once.
    let curve = spline
        .sample_curve(&xs, &ys, 10, Progress::Absolute(1.0))
        .unwrap();
    assert_eq!(curve.points.len(), 10 + 1);
    let boundary = Point::new(xs[3], ys[3]);
    assert_eq!(curve.points[9], boundary);
    assert_eq!(curve.points[10], boundary);
    // Both of window 1's joins collapse onto its single sample.
    assert_eq!(curve.joins.len(), 4);
    assert_eq!(curve.joins[2], curve.joins[3]);
}

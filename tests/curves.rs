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

use approx::assert_relative_eq;
use rand::Rng;

use kampyli::prelude::*;

fn random_window(rng: &mut impl Rng) -> ([f64; 4], [f64; 4]) {
    let mut xs = [0.0; 4];
    let mut ys = [0.0; 4];
    for i in 0..4 {
        xs[i] = rng.gen_range(-10.0..10.0);
        ys[i] = rng.gen_range(-10.0..10.0);
    }
    (xs, ys)
}

/// The blending-matrix form and the recursive reduction are two derivations
/// of the same cubic; on Bézier windows they must agree everywhere.
#[test]
fn test_matrix_and_lerp_derivations_agree() {
    let spline = Spline::bezier();
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let (xs, ys) = random_window(&mut rng);
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let by_matrix = spline.evaluate_point(&xs, &ys, t).unwrap();
            let by_lerp = lerp::evaluate_point(&xs, &ys, t).unwrap();
            assert_relative_eq!(by_matrix.x, by_lerp.x, max_relative = 1e-9, epsilon = 1e-12);
            assert_relative_eq!(by_matrix.y, by_lerp.y, max_relative = 1e-9, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_segment_sampling_agrees_across_engines() {
    let xs = [0.2, 0.4, 0.6, 0.8];
    let ys = [0.5, 0.1, 0.9, 0.5];
    let by_matrix = Spline::bezier().evaluate_segment(&xs, &ys, 33, 0.8).unwrap();
    let by_lerp = lerp::evaluate_segment(&xs, &ys, 33, 0.8).unwrap();
    assert_eq!(by_matrix.len(), by_lerp.len());
    for (m, l) in by_matrix.iter().zip(by_lerp.iter()) {
        assert_relative_eq!(m.x, l.x, max_relative = 1e-9, epsilon = 1e-12);
        assert_relative_eq!(m.y, l.y, max_relative = 1e-9, epsilon = 1e-12);
    }
}

/// Consecutive Bézier windows share a control point, so the assembled curve
/// is point-continuous at every join.
#[test]
fn test_bezier_joins_are_continuous() {
    let xs = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    let ys = [0.3, 0.6, 0.7, 0.3, 0.1, 0.8, 0.2];
    let spline = Spline::bezier();
    let precision = 25;
    let curve = spline
        .sample_curve(&xs, &ys, precision, Progress::Full)
        .unwrap();

    let segments = spline.segment_count(xs.len());
    assert_eq!(segments, 2);
    assert_eq!(curve.points.len(), segments * precision);
    for window in 1..segments {
        let last_of_previous = curve.points[window * precision - 1];
        let first_of_current = curve.points[window * precision];
        assert_eq!(last_of_previous, first_of_current);
        // And that shared sample is the shared control point.
        assert_eq!(
            first_of_current,
            Point::new(xs[window * 3], ys[window * 3])
        );
    }
}

#[test]
fn test_b_spline_full_draw() {
    let mut rng = rand::thread_rng();
    let n = 10;
    let xs: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let ys: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();

    let spline = CurveFamily::UniformBSpline.spline();
    assert_eq!(spline.segment_count(n), 7);

    let precision = 10;
    let curve = spline
        .sample_curve(&xs, &ys, precision, Progress::Full)
        .unwrap();
    assert_eq!(curve.points.len(), 7 * precision);
    assert_eq!(curve.joins.len(), 7 * 2);
}

/// End-to-end flow of the animation collaborator: family name string to a
/// growing curve as the clock advances.
#[test]
fn test_selection_to_animation_flow() {
    let family: CurveFamily = "bezier".parse().unwrap();
    let spline = family.spline();
    let xs = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    let ys = [0.3, 0.6, 0.7, 0.3, 0.1, 0.8, 0.2];

    let mut previous = 0;
    for frame in 0..=10 {
        let t = f64::from(frame) / 10.0;
        let curve = spline
            .sample_curve(&xs, &ys, 50, Progress::Normalized(t))
            .unwrap();
        assert!(curve.points.len() >= previous);
        previous = curve.points.len();
    }
    assert_eq!(previous, 2 * 50);
}

#[test]
fn test_mismatched_dimensions_rejected_everywhere() {
    let xs = [0.0, 1.0];
    let ys = [0.0];
    let expected = CurveError::DimensionMismatch { xs: 2, ys: 1 };

    let spline = Spline::bezier();
    assert_eq!(spline.evaluate_point(&xs, &ys, 0.5), Err(expected.clone()));
    assert_eq!(
        spline.evaluate_segment(&xs, &ys, 10, 0.5),
        Err(expected.clone())
    );
    assert_eq!(
        spline.sample_curve(&xs, &ys, 10, Progress::Full),
        Err(expected.clone())
    );
    assert_eq!(lerp::evaluate_point(&xs, &ys, 0.5), Err(expected.clone()));
    assert_eq!(lerp::pyramid(&xs, &ys, 0.5), Err(expected));
}

#[cfg(feature = "serde")]
#[test]
fn test_point_wire_shape() {
    let curve = Spline::bezier()
        .sample_curve(
            &[0.0, 1.0, 2.0, 3.0],
            &[0.0, 1.0, 1.0, 0.0],
            2,
            Progress::Full,
        )
        .unwrap();
    let json = serde_json::to_string(&curve).unwrap();
    let back: SampledCurve = serde_json::from_str(&json).unwrap();
    assert_eq!(curve, back);
    assert_eq!(
        serde_json::to_string(&Point::new(0.5, 1.0)).unwrap(),
        r#"{"x":0.5,"y":1.0}"#
    );
}

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

mod points {
    use std::ops::{Add, Div, Mul, Sub};

    /// A plain 2-D coordinate pair. Carries no identity beyond its value.
    #[derive(Clone, Debug, Default, Copy, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Point {
        pub x: f64,
        pub y: f64,
    }

    impl Point {
        pub const fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }

        pub fn collinear(&self, other_a: &Self, other_b: &Self) -> bool {
            //Putting all this together, the points (a,b), (m,n) and (x,y) are collinear if and only if
            //    (n−b)(x−m)=(y−n)(m−a)
            let (a, b) = (self.x, self.y);
            let (m, n) = (other_a.x, other_a.y);
            let (x, y) = (other_b.x, other_b.y);
            (n - b) * (x - m) == (y - n) * (m - a)
        }
    }

    impl From<Point> for (f64, f64) {
        fn from(p: Point) -> (f64, f64) {
            (p.x, p.y)
        }
    }

    impl From<(f64, f64)> for Point {
        fn from((x, y): (f64, f64)) -> Point {
            Point { x, y }
        }
    }

    impl Add<Self> for Point {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            (self.x + rhs.x, self.y + rhs.y).into()
        }
    }

    impl Sub<Self> for Point {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            (self.x - rhs.x, self.y - rhs.y).into()
        }
    }

    impl Mul<Point> for f64 {
        type Output = Point;

        fn mul(self, p: Point) -> Self::Output {
            (p.x * self, p.y * self).into()
        }
    }

    impl Mul<f64> for Point {
        type Output = Self;

        fn mul(self, f: f64) -> Self::Output {
            (self.x * f, self.y * f).into()
        }
    }

    impl Div<f64> for Point {
        type Output = Self;

        fn div(self, f: f64) -> Self::Output {
            (self.x / f, self.y / f).into()
        }
    }
}

pub use points::Point;

pub fn distance_between_two_points<K: Into<Point>, L: Into<Point>>(p_k: K, p_l: L) -> f64 {
    let p_k: Point = p_k.into();
    let p_l: Point = p_l.into();
    let xlk = p_l.x - p_k.x;
    let ylk = p_l.y - p_k.y;
    f64::sqrt(xlk * xlk + ylk * ylk)
}

#[test]
fn test_point_ops() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(3.0, -2.0);
    assert_eq!(a + b, (4.0, 0.0).into());
    assert_eq!(b - a, (2.0, -4.0).into());
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!((a + b) / 2.0, Point::new(2.0, 0.0));
    let (x, y): (f64, f64) = b.into();
    assert_eq!((x, y), (3.0, -2.0));
    assert_eq!(distance_between_two_points(a, a), 0.0);
    assert_eq!(distance_between_two_points((0.0, 0.0), (3.0, 4.0)), 5.0);
}

#[test]
fn test_point_collinear() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 1.0);
    let c = Point::new(2.0, 2.0);
    assert!(a.collinear(&b, &c));
    assert!(!a.collinear(&b, &Point::new(2.0, 0.0)));
}

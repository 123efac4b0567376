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

//! # Structural input-validation errors.
//!
//! Every failure the evaluators can report is a property of the call's
//! inputs, detected synchronously at the entry point. Nothing here is
//! transient or retryable, and no error is recovered from internally.

use std::fmt;

pub type CurveResult<T> = Result<T, CurveError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The x and y coordinate lists of a control point sequence differ in
    /// length.
    DimensionMismatch { xs: usize, ys: usize },
    /// A segment window needs exactly four control points.
    InsufficientControlPoints { required: usize, actual: usize },
    /// Zero control points were supplied to the lerp engine.
    EmptyInput,
    /// A blending matrix must be exactly 4×4.
    InvalidMatrix { rows: usize, cols: usize },
    /// A curve family name the selector does not recognize.
    UnknownFamily(String),
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { xs, ys } => {
                write!(
                    f,
                    "xs and ys must be the same length (got {xs} xs and {ys} ys)"
                )
            }
            Self::InsufficientControlPoints { required, actual } => {
                write!(
                    f,
                    "a segment window takes exactly {required} control points, got {actual}"
                )
            }
            Self::EmptyInput => write!(f, "no control points were supplied"),
            Self::InvalidMatrix { rows, cols } => {
                write!(f, "blending matrix must be exactly 4x4, got {rows}x{cols}")
            }
            Self::UnknownFamily(name) => write!(f, "unknown curve family {name:?}"),
        }
    }
}

impl std::error::Error for CurveError {}

#[test]
fn test_error_display() {
    assert_eq!(
        CurveError::DimensionMismatch { xs: 2, ys: 1 }.to_string(),
        "xs and ys must be the same length (got 2 xs and 1 ys)"
    );
    assert_eq!(
        CurveError::UnknownFamily("catmull-rom".into()).to_string(),
        "unknown curve family \"catmull-rom\""
    );
}

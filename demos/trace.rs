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

//! Samples a demo control polygon through the piecewise assembler and
//! prints the curve as an SVG document on stdout, join points marked:
//!
//! ```sh
//! cargo run --example trace -- b-spline > curve.svg
//! ```

use kampyli::prelude::*;

fn main() -> Result<(), CurveError> {
    let family = match std::env::args().nth(1) {
        Some(arg) => CurveFamily::from_str(&arg)?,
        None => CurveFamily::Bezier,
    };

    let xs = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    let ys = [0.3, 0.6, 0.7, 0.3, 0.1, 0.8, 0.2];
    let curve = family
        .spline()
        .sample_curve(&xs, &ys, DEFAULT_PRECISION, Progress::Full)?;

    // Unit square scaled up, y axis flipped to screen coordinates.
    let place = |p: &Point| (512.0 * p.x, 512.0 * (1.0 - p.y));

    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">"#);
    println!(r#"<desc>{family}, {} segments</desc>"#, family.spline().segment_count(xs.len()));
    print!(r#"<polyline fill="none" stroke="black" stroke-width="2" points=""#);
    for p in &curve.points {
        let (x, y) = place(p);
        print!("{x:.2},{y:.2} ");
    }
    println!(r#""/>"#);
    for join in &curve.joins {
        let (cx, cy) = place(join);
        println!(r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="4" fill="none" stroke="red"/>"#);
    }
    println!("</svg>");
    Ok(())
}

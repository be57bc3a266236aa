// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::geometry::Vector2;
use crate::numeric::Rational;

/// Intersections of two circles given by centers and squared radii.
///
/// Works entirely in rationals: with `d = c1 - c0` and `D = |d|^2`, every
/// solution is `c0 + t*d +/- s*perp(d)` where
/// `t = (r0 - r1 + D) / 2D` and `s^2 = r0/D - t^2`.
/// Returns `None` when the centers coincide, the circles miss each other, or
/// `s^2` is not a perfect square (the points would be irrational).
pub fn circle_intersections(
    c0: &Vector2,
    r0_squared: &Rational,
    c1: &Vector2,
    r1_squared: &Rational,
) -> Option<Vec<Vector2>> {
    let d = c1 - c0;
    let dist2 = d.squared_length();
    if dist2.is_zero() {
        return None;
    }

    let two_dist2 = &dist2 + &dist2;
    let t = &(&(r0_squared - r1_squared) + &dist2) / &two_dist2;
    let s2 = &(r0_squared / &dist2) - &t.square();
    if s2.is_negative() {
        return None;
    }
    let s = s2.sqrt()?;

    let foot = c0 + &d.scale(&t);
    if s.is_zero() {
        return Some(vec![foot]);
    }
    let offset = d.perp().scale(&s);
    Some(vec![&foot + &offset, &foot - &offset])
}

/// Candidate positions for a point at squared distance `a_squared` from `a`
/// and `b_squared` from `b`, restricted to the unit square.
///
/// Each candidate is re-checked by recomputing both squared distances.
pub fn triangulate_in_unit_square(
    a: &Vector2,
    a_squared: &Rational,
    b: &Vector2,
    b_squared: &Rational,
) -> Vec<Vector2> {
    let Some(candidates) = circle_intersections(a, a_squared, b, b_squared) else {
        return Vec::new();
    };
    candidates
        .into_iter()
        .filter(|v| v.in_unit_square())
        .filter(|v| v.squared_distance(a) == *a_squared && v.squared_distance(b) == *b_squared)
        .collect()
}

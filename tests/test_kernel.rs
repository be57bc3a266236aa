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

use squarefold::geometry::Vector2;
use squarefold::kernel::{circle_intersections, triangulate_in_unit_square};
use squarefold::numeric::Rational;

fn pt(s: &str) -> Vector2 {
    s.parse().unwrap()
}

fn q(s: &str) -> Rational {
    s.parse().unwrap()
}

#[test]
fn test_circle_intersections_two_points() {
    let hits = circle_intersections(&pt("0,0"), &q("1"), &pt("1,0"), &q("4/5")).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.contains(&pt("3/5,4/5")));
    assert!(hits.contains(&pt("3/5,-4/5")));
    for h in &hits {
        assert_eq!(h.squared_distance(&pt("0,0")), q("1"));
        assert_eq!(h.squared_distance(&pt("1,0")), q("4/5"));
    }
}

#[test]
fn test_circle_intersections_irrational_or_disjoint() {
    // s^2 = 3/4 has no rational root
    assert!(circle_intersections(&pt("0,0"), &q("1"), &pt("1,0"), &q("1")).is_none());
    // too far apart
    assert!(circle_intersections(&pt("0,0"), &q("1/9"), &pt("1,0"), &q("1/9")).is_none());
    // tangent
    let touch = circle_intersections(&pt("0,0"), &q("1/4"), &pt("1,0"), &q("1/4")).unwrap();
    assert_eq!(touch, vec![pt("1/2,0")]);
}

#[test]
fn test_triangulate_keeps_points_inside_square() {
    let inside = triangulate_in_unit_square(&pt("0,0"), &q("1"), &pt("1,0"), &q("4/5"));
    assert_eq!(inside, vec![pt("3/5,4/5")]);

    let both = triangulate_in_unit_square(&pt("0,0"), &q("5/8"), &pt("1,1"), &q("5/8"));
    assert_eq!(both.len(), 2);
    assert!(both.contains(&pt("1/4,3/4")));
    assert!(both.contains(&pt("3/4,1/4")));
}

#[test]
fn test_triangulate_off_axis_centers() {
    let a = pt("1/3,1/5");
    let b = pt("4/5,2/3");
    let target = pt("1/2,1/2");
    let ra = target.squared_distance(&a);
    let rb = target.squared_distance(&b);
    let points = circle_intersections(&a, &ra, &b, &rb).unwrap();
    assert!(points.contains(&target));
    for p in &points {
        assert_eq!(p.squared_distance(&a), ra);
        assert_eq!(p.squared_distance(&b), rb);
    }
}

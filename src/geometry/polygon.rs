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

use crate::geometry::{Segment2, Vector2};
use crate::numeric::Rational;

/// Closed polygon ring as given in a problem's silhouette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Vector2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2>) -> Self {
        Self { vertices }
    }

    /// Edges of the ring, closing back to the first vertex.
    pub fn segments(&self) -> Vec<Segment2> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment2::new(&self.vertices[i], &self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> Rational {
        let n = self.vertices.len();
        let mut twice = Rational::zero();
        for i in 0..n {
            let p = &self.vertices[i];
            let q = &self.vertices[(i + 1) % n];
            twice += &p.cross(q);
        }
        &twice / &Rational::from(2)
    }

    pub fn area(&self) -> Rational {
        let s = self.signed_area();
        if s.is_negative() { -s } else { s }
    }

    /// Strictly convex: every turn has the orientation of the whole ring.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let area = self.signed_area();
        if area.is_zero() {
            return false;
        }
        let segments = self.segments();
        (0..n).all(|i| {
            let turn = segments[i].to_vector().cross(&segments[(i + 1) % n].to_vector());
            if area.is_positive() {
                turn.is_positive()
            } else {
                turn.is_negative()
            }
        })
    }
}

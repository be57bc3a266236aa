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

use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::{Polygon, Segment2, Vector2};
use crate::numeric::Rational;

/// A silhouette and its skeleton, as read from problem text:
///
/// ```text
/// <polygon count>
/// <vertex count>     (per polygon)
/// x,y                (per vertex)
/// <segment count>
/// x1,y1 x2,y2        (per segment)
/// ```
///
/// Coordinates are rationals written as `a` or `a/b`. Blank lines are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub polygons: Vec<Polygon>,
    pub segments: Vec<Segment2>,
}

impl Problem {
    pub fn new(polygons: Vec<Polygon>, segments: Vec<Segment2>) -> Self {
        Self { polygons, segments }
    }

    /// Total silhouette area (reflected polygons count negatively).
    pub fn silhouette_area(&self) -> Rational {
        let mut total = Rational::zero();
        for p in &self.polygons {
            total += &p.signed_area();
        }
        if total.is_negative() { -total } else { total }
    }
}

impl FromStr for Problem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());

        let polygon_count = read_count(&mut lines, "polygon count")?;
        let mut polygons = Vec::with_capacity(polygon_count);
        for _ in 0..polygon_count {
            let vertex_count = read_count(&mut lines, "vertex count")?;
            let vertices = (0..vertex_count)
                .map(|_| {
                    lines
                        .next()
                        .ok_or(ParseError::UnexpectedEof("vertex"))?
                        .parse::<Vector2>()
                })
                .collect::<Result<Vec<_>, _>>()?;
            polygons.push(Polygon::new(vertices));
        }

        let segment_count = read_count(&mut lines, "segment count")?;
        let segments = (0..segment_count)
            .map(|_| {
                lines
                    .next()
                    .ok_or(ParseError::UnexpectedEof("segment"))?
                    .parse::<Segment2>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { polygons, segments })
    }
}

fn read_count<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<usize, ParseError> {
    let line = lines.next().ok_or(ParseError::UnexpectedEof(what))?;
    line.parse::<usize>()
        .map_err(|_| ParseError::Count(line.to_string()))
}

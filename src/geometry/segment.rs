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

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Vector2;
use crate::numeric::Rational;

/// Directed segment. `ab` and `ba` compare unequal but have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment2 {
    pub start: Vector2,
    pub end: Vector2,
}

impl Segment2 {
    pub fn new(start: &Vector2, end: &Vector2) -> Self {
        Self {
            start: start.clone(),
            end: end.clone(),
        }
    }

    pub fn reversed(&self) -> Self {
        Self::new(&self.end, &self.start)
    }

    pub fn to_vector(&self) -> Vector2 {
        &self.end - &self.start
    }

    /// The authoritative length measure: every comparison goes through this.
    pub fn squared_length(&self) -> Rational {
        self.to_vector().squared_length()
    }

    /// Euclidean length, defined only when it is rational.
    pub fn exact_length(&self) -> Option<Rational> {
        self.squared_length().sqrt()
    }

    /// Same endpoints, either orientation.
    pub fn same_points(&self, other: &Segment2) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    /// True when `p` lies on the infinite line through this segment.
    pub fn is_collinear_with(&self, p: &Vector2) -> bool {
        self.to_vector().cross(&(p - &self.start)).is_zero()
    }
}

impl FromStr for Segment2 {
    type Err = ParseError;

    /// Parses `"x1,y1 x2,y2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::Segment(s.to_string()));
        };
        Ok(Segment2 {
            start: a.parse()?,
            end: b.parse()?,
        })
    }
}

impl fmt::Display for Segment2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

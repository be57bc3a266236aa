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
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Segment2;
use crate::numeric::Rational;

/// Exact 2D vector. Doubles as a point of the plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector2 {
    pub x: Rational,
    pub y: Rational,
}

impl Vector2 {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<Rational>,
        Y: Into<Rational>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn dot(&self, other: &Vector2) -> Rational {
        &(&self.x * &other.x) + &(&self.y * &other.y)
    }

    pub fn cross(&self, other: &Vector2) -> Rational {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }

    pub fn scale(&self, s: &Rational) -> Vector2 {
        Vector2 {
            x: &self.x * s,
            y: &self.y * s,
        }
    }

    pub fn squared_length(&self) -> Rational {
        self.dot(self)
    }

    pub fn squared_distance(&self, other: &Vector2) -> Rational {
        (self - other).squared_length()
    }

    /// Rotates by +90 degrees.
    pub fn perp(&self) -> Vector2 {
        Vector2 {
            x: -&self.y,
            y: self.x.clone(),
        }
    }

    /// Mirror image across the line through `mirror`.
    ///
    /// A degenerate mirror (both ends equal) leaves the point unchanged.
    pub fn reflect(&self, mirror: &Segment2) -> Vector2 {
        let d = mirror.to_vector();
        let len2 = d.squared_length();
        if len2.is_zero() {
            return self.clone();
        }
        let t = &(self - &mirror.start).dot(&d) / &len2;
        let foot = &mirror.start + &d.scale(&t);
        &foot.scale(&Rational::from(2)) - self
    }

    /// True when the point lies in `[0,1] x [0,1]`.
    pub fn in_unit_square(&self) -> bool {
        self.x >= 0 && self.x <= 1 && self.y >= 0 && self.y <= 1
    }
}

impl<'a, 'b> Add<&'b Vector2> for &'a Vector2 {
    type Output = Vector2;
    fn add(self, rhs: &'b Vector2) -> Vector2 {
        Vector2 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
        }
    }
}

impl<'a, 'b> Sub<&'b Vector2> for &'a Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: &'b Vector2) -> Vector2 {
        Vector2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        &self + &rhs
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        &self - &rhs
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl FromStr for Vector2 {
    type Err = ParseError;

    /// Parses `"x,y"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| ParseError::Vector(s.to_string()))?;
        Ok(Vector2 {
            x: x.parse()?,
            y: y.parse()?,
        })
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
